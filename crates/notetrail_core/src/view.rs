//! View-state contracts shared with the host editor.

use crate::model::note::NoteId;
use crate::model::trail::TrailRegion;
use uuid::Uuid;

/// Stable identifier the host assigns to one open view.
pub type ViewId = Uuid;

/// Editing mode of a view. Trails are shown in [`ViewMode::Edit`] only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    /// Raw source editing.
    Edit,
    /// Rendered/reading mode.
    Rendered,
}

/// Snapshot of one open view of the relevant document type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    pub id: ViewId,
    /// Bound note, if any. Views without a file get no region.
    pub note: Option<NoteId>,
    pub mode: ViewMode,
}

/// Host-side registry of open views and their mount points.
///
/// The registry both enumerates view state and owns the rendering surfaces;
/// the sync service drives it but keeps its own view→region association, so
/// no marker queries against the rendering tree are needed.
pub trait ViewRegistry {
    /// Current open views of the relevant document type.
    fn open_views(&self) -> Vec<ViewState>;

    /// Mounts a region at the view's anchor point (prepended to content).
    fn insert_region(&mut self, view: ViewId, region: &TrailRegion);

    /// Removes a previously mounted region; absent regions are a no-op.
    fn remove_region(&mut self, view: ViewId);
}
