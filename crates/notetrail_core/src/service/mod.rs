//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate search and index calls into the per-view trail policy.
//! - Keep host/view layers decoupled from graph and storage details.

pub mod trail_sync;
