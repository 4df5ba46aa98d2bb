//! Core library for Notetrail — breadcrumb trails over a note collection's
//! link graph.
//!
//! The search half ([`find_path`]) computes the shortest directed link path
//! from a configured root note to the open note; the view half
//! ([`TrailSync`]) keeps one display region per qualifying editor view in
//! step with view-change triggers. Hosts plug in through the [`LinkIndex`]
//! and [`ViewRegistry`] traits.

pub mod config;
pub mod db;
pub mod graph;
pub mod index;
pub mod logging;
pub mod model;
pub mod service;
pub mod view;

pub use config::{ignored_tag_list, load_settings, save_settings, ConfigError, TrailSettings};
pub use db::{open_vault, open_vault_in_memory, VaultError, VaultResult};
pub use graph::pathfinder::find_path;
pub use index::{IndexError, IndexResult, LinkIndex, SqliteLinkIndex};
pub use logging::{default_log_level, init_logging};
pub use model::note::{display_label, NoteId};
pub use model::trail::{
    TrailContent, TrailRegion, TrailSegment, NO_PATH_NOTICE, REGION_MARKER, SEGMENT_SEPARATOR,
};
pub use service::trail_sync::TrailSync;
pub use view::{ViewId, ViewMode, ViewRegistry, ViewState};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
