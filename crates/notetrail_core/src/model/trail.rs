//! Trail display model: the region a view host mounts, segments ordered
//! root-first, with the no-path fallback kept user-visible.

use crate::model::note::{display_label, NoteId};

/// Separator glyph rendered between breadcrumb segments.
pub const SEGMENT_SEPARATOR: &str = " → ";

/// Notice text shown when no directed path to the open note exists.
pub const NO_PATH_NOTICE: &str = "No path found from ";

/// Stable marker a host attaches to the materialized region so stale
/// fragments can be located in its rendering tree.
pub const REGION_MARKER: &str = "notetrail-region";

/// One clickable breadcrumb segment.
///
/// Activation asks the host to open `note`; the core never builds
/// navigation URLs itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrailSegment {
    /// Navigation target handed back to the host.
    pub note: NoteId,
    /// Label rendered per the hide-path setting.
    pub label: String,
}

impl TrailSegment {
    fn new(note: &str, hide_path: bool) -> Self {
        Self {
            note: note.to_string(),
            label: display_label(note, hide_path),
        }
    }
}

/// Region body: either the rendered hop path or the no-path fallback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrailContent {
    /// Root-first clickable hop sequence joined by [`SEGMENT_SEPARATOR`].
    Path(Vec<TrailSegment>),
    /// No directed path exists; the region shows [`NO_PATH_NOTICE`] plus a
    /// single clickable link back to the configured root.
    NoPath { root: TrailSegment },
}

/// Display region owned by the sync service. At most one exists per view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrailRegion {
    pub content: TrailContent,
}

impl TrailRegion {
    /// Builds a path region from a non-empty root-first hop sequence.
    ///
    /// Callers must route empty trails through [`TrailRegion::no_path`];
    /// this constructor treats its input as the found path verbatim.
    pub fn from_trail(hops: &[NoteId], hide_path: bool) -> Self {
        let segments = hops
            .iter()
            .map(|hop| TrailSegment::new(hop, hide_path))
            .collect();
        Self {
            content: TrailContent::Path(segments),
        }
    }

    /// Builds the fallback region pointing back at the configured root.
    pub fn no_path(root: &str, hide_path: bool) -> Self {
        Self {
            content: TrailContent::NoPath {
                root: TrailSegment::new(root, hide_path),
            },
        }
    }

    /// Returns whether this region is the no-path fallback.
    pub fn is_fallback(&self) -> bool {
        matches!(self.content, TrailContent::NoPath { .. })
    }

    /// Plain-text projection of the region.
    ///
    /// Hosts materialize clickable elements themselves; this rendering is
    /// for logs, tests and text-only frontends.
    pub fn to_plain_text(&self) -> String {
        match &self.content {
            TrailContent::Path(segments) => segments
                .iter()
                .map(|segment| segment.label.as_str())
                .collect::<Vec<_>>()
                .join(SEGMENT_SEPARATOR),
            TrailContent::NoPath { root } => format!("{NO_PATH_NOTICE}{}", root.label),
        }
    }
}
