//! CLI probe for the trail core.
//!
//! # Responsibility
//! - Load a directory of `.md` files into an in-memory vault.
//! - Run one refresh against a real view registry and print the trail.
//!
//! Usage: `notetrail <vault-dir> <note-path> [root-path]`

use notetrail_core::{
    ignored_tag_list, open_vault_in_memory, SqliteLinkIndex, TrailRegion, TrailSettings,
    TrailSync, ViewId, ViewMode, ViewRegistry, ViewState,
};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

/// Single-view registry backed by stdout-visible state.
struct ProbeRegistry {
    view: ViewState,
    mounted: Option<TrailRegion>,
}

impl ViewRegistry for ProbeRegistry {
    fn open_views(&self) -> Vec<ViewState> {
        vec![self.view.clone()]
    }

    fn insert_region(&mut self, _view: ViewId, region: &TrailRegion) {
        self.mounted = Some(region.clone());
    }

    fn remove_region(&mut self, _view: ViewId) {
        self.mounted = None;
    }
}

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (vault_dir, note_path, root_path) = match args.as_slice() {
        [vault, note] => (vault.clone(), note.clone(), None),
        [vault, note, root] => (vault.clone(), note.clone(), Some(root.clone())),
        _ => {
            eprintln!("usage: notetrail <vault-dir> <note-path> [root-path]");
            return ExitCode::FAILURE;
        }
    };

    match run(&vault_dir, &note_path, root_path.as_deref()) {
        Ok(text) => {
            println!("{text}");
            ExitCode::SUCCESS
        }
        Err(message) => {
            eprintln!("notetrail: {message}");
            ExitCode::FAILURE
        }
    }
}

fn run(vault_dir: &str, note_path: &str, root_path: Option<&str>) -> Result<String, String> {
    let base = Path::new(vault_dir);
    if !base.is_dir() {
        return Err(format!("`{vault_dir}` is not a directory"));
    }

    let conn = open_vault_in_memory().map_err(|err| err.to_string())?;
    for (path, content) in collect_notes(base)? {
        conn.execute(
            "INSERT INTO notes (path, content) VALUES (?1, ?2);",
            [path.as_str(), content.as_str()],
        )
        .map_err(|err| err.to_string())?;
    }

    let mut settings = TrailSettings::default();
    if let Some(root) = root_path {
        settings.root_note = root.to_string();
    }
    let ignored = ignored_tag_list(&settings.ignored_tags);
    let index = SqliteLinkIndex::try_new(&conn)
        .map_err(|err| err.to_string())?
        .with_ignored_tags(&ignored);

    let mut registry = ProbeRegistry {
        view: ViewState {
            id: ViewId::new_v4(),
            note: Some(note_path.to_string()),
            mode: ViewMode::Edit,
        },
        mounted: None,
    };

    let mut sync = TrailSync::new(settings);
    sync.refresh(&mut registry, &index);

    match registry.mounted {
        Some(region) => Ok(region.to_plain_text()),
        None => Ok(format!("no trail region for `{note_path}`")),
    }
}

/// Walks the vault directory and returns `(relative-path, content)` pairs
/// for every `.md` file, using `/` separators regardless of platform.
fn collect_notes(base: &Path) -> Result<Vec<(String, String)>, String> {
    let mut notes = Vec::new();
    let mut pending: Vec<PathBuf> = vec![base.to_path_buf()];

    while let Some(dir) = pending.pop() {
        let entries =
            std::fs::read_dir(&dir).map_err(|err| format!("cannot read `{}`: {err}", dir.display()))?;
        for entry in entries {
            let entry = entry.map_err(|err| err.to_string())?;
            let path = entry.path();
            if path.is_dir() {
                pending.push(path);
            } else if path.extension().is_some_and(|ext| ext == "md") {
                let relative = path
                    .strip_prefix(base)
                    .map_err(|err| err.to_string())?
                    .components()
                    .map(|part| part.as_os_str().to_string_lossy().into_owned())
                    .collect::<Vec<_>>()
                    .join("/");
                let content = std::fs::read_to_string(&path)
                    .map_err(|err| format!("cannot read `{}`: {err}", path.display()))?;
                notes.push((relative, content));
            }
        }
    }

    notes.sort();
    Ok(notes)
}
