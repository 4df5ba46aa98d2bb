//! Link-graph search entry points.

pub mod pathfinder;
