//! Note identity and label derivation.
//!
//! # Responsibility
//! - Define the stable string key naming one note (its path in the vault).
//! - Derive user-facing breadcrumb labels from that key.
//!
//! # Invariants
//! - A `NoteId` is stable for the lifetime of one search; a rename yields a
//!   different id between searches.
//! - Label derivation never fails; degenerate paths fall back to the raw id.

/// Stable identifier for one note: its path within the collection, e.g.
/// `"Projects/Garden.md"`.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type NoteId = String;

/// Removes the file extension from the last path segment.
///
/// Only a dot inside the final segment counts; dotfiles (`.hidden`) and
/// extension-less paths are returned unchanged.
pub fn strip_extension(path: &str) -> &str {
    let segment_start = path.rfind('/').map_or(0, |idx| idx + 1);
    match path[segment_start..].rfind('.') {
        Some(0) | None => path,
        Some(dot) => &path[..segment_start + dot],
    }
}

/// Returns the breadcrumb label for a note.
///
/// The extension is always stripped; with `hide_path` only the last
/// `/`-separated segment remains.
pub fn display_label(note: &str, hide_path: bool) -> String {
    let stem = strip_extension(note);
    if hide_path {
        stem.rsplit('/').next().unwrap_or(stem).to_string()
    } else {
        stem.to_string()
    }
}
