//! View synchronization service.
//!
//! # Responsibility
//! - React to view-change triggers by rebuilding trail regions per view.
//! - Own the view→region association and tear it down on shutdown.
//!
//! # Invariants
//! - After a refresh, exactly the edit-mode views bound to a non-root note
//!   carry one region each; every other view carries none.
//! - A region never survives a trigger without being torn down and rebuilt.
//! - No error escapes `refresh`; index failures degrade to the no-path
//!   fallback for the affected view.

use crate::config::TrailSettings;
use crate::graph::pathfinder::find_path;
use crate::index::LinkIndex;
use crate::model::trail::TrailRegion;
use crate::view::{ViewId, ViewMode, ViewRegistry};
use log::{debug, info, warn};
use std::collections::HashMap;

/// Keeps every open editor view's breadcrumb region consistent with the
/// current view state, settings and link graph.
///
/// The host wires its "active view changed" notification to [`refresh`] and
/// its shutdown hook to [`teardown`]; both are the whole event surface.
/// Triggers are serialized by the single-threaded host, and each refresh
/// rebuilds from a fresh registry snapshot, so the last trigger always wins.
///
/// [`refresh`]: TrailSync::refresh
/// [`teardown`]: TrailSync::teardown
pub struct TrailSync {
    settings: TrailSettings,
    regions: HashMap<ViewId, TrailRegion>,
}

impl TrailSync {
    /// Creates a sync service with the settings loaded at startup.
    pub fn new(settings: TrailSettings) -> Self {
        Self {
            settings,
            regions: HashMap::new(),
        }
    }

    /// Currently active settings.
    pub fn settings(&self) -> &TrailSettings {
        &self.settings
    }

    /// Replaces the settings wholesale.
    ///
    /// This is the configuration UI's update channel; the change takes
    /// effect on the next trigger, which re-renders every region without
    /// duplicating any.
    pub fn apply_settings(&mut self, settings: TrailSettings) {
        self.settings = settings;
    }

    /// Region currently associated with a view, if any.
    pub fn region_for(&self, view: ViewId) -> Option<&TrailRegion> {
        self.regions.get(&view)
    }

    /// Number of mounted regions across all views.
    pub fn region_count(&self) -> usize {
        self.regions.len()
    }

    /// Re-evaluates every open view after a view-change trigger.
    ///
    /// Per view: the old region is removed unconditionally, then a new one
    /// is computed and mounted if the view is in edit mode and bound to a
    /// note other than the configured root. Regions of views the registry no
    /// longer reports are swept as well.
    pub fn refresh(&mut self, registry: &mut dyn ViewRegistry, index: &dyn LinkIndex) {
        let views = registry.open_views();

        let stale: Vec<ViewId> = self
            .regions
            .keys()
            .filter(|id| !views.iter().any(|view| view.id == **id))
            .copied()
            .collect();
        for view in stale {
            registry.remove_region(view);
            self.regions.remove(&view);
        }

        for view in &views {
            registry.remove_region(view.id);
            self.regions.remove(&view.id);

            if view.mode != ViewMode::Edit {
                continue;
            }
            let Some(note) = view.note.as_deref() else {
                continue;
            };
            if note == self.settings.root_note {
                continue;
            }

            let region = self.build_region(note, index);
            registry.insert_region(view.id, &region);
            self.regions.insert(view.id, region);
        }

        info!(
            "event=trail_refresh module=service status=ok views={} regions={}",
            views.len(),
            self.regions.len()
        );
    }

    /// Removes every mounted region across all views.
    ///
    /// Called on component shutdown; no region survives deactivation.
    pub fn teardown(&mut self, registry: &mut dyn ViewRegistry) {
        for view in self.regions.keys() {
            registry.remove_region(*view);
        }
        let removed = self.regions.len();
        self.regions.clear();
        info!("event=trail_teardown module=service status=ok removed={removed}");
    }

    fn build_region(&self, note: &str, index: &dyn LinkIndex) -> TrailRegion {
        let root = self.settings.root_note.as_str();

        let trail = find_path(root, note, |current| {
            match index.outbound_links(current) {
                Ok(links) => links,
                // A failing lookup degrades to "no outbound links": the view
                // falls back to the no-path region instead of erroring out.
                Err(err) => {
                    warn!(
                        "event=link_lookup module=service status=error note={current} error={err}"
                    );
                    Vec::new()
                }
            }
        });

        debug!(
            "event=path_search module=service status=ok root={root} target={note} hops={}",
            trail.len()
        );

        if trail.is_empty() {
            TrailRegion::no_path(root, self.settings.hide_path)
        } else {
            TrailRegion::from_trail(&trail, self.settings.hide_path)
        }
    }
}
