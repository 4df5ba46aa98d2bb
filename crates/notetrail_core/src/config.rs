//! Plugin settings model and JSON persistence.
//!
//! # Responsibility
//! - Define the user-facing settings consumed by the sync service.
//! - Load/save them as a JSON file at a caller-supplied path.
//!
//! # Invariants
//! - Loading never fails: a missing or corrupt file yields defaults.
//! - Settings reach the core only as whole values; field-level mutation is
//!   confined to the configuration UI.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::fs;
use std::path::Path;

/// User-facing settings for the breadcrumb trail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TrailSettings {
    /// The note all trails originate from.
    pub root_note: String,
    /// Show only the last path segment of each label instead of the full
    /// identifier.
    pub hide_path: bool,
    /// Free-text list of tags; notes carrying one are excluded from link
    /// traversal. Empty disables the filter.
    pub ignored_tags: String,
}

impl Default for TrailSettings {
    fn default() -> Self {
        Self {
            root_note: "Root.md".to_string(),
            hide_path: true,
            ignored_tags: String::new(),
        }
    }
}

/// Persistence error for the settings file.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Serialize(serde_json::Error),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "settings file error: {err}"),
            Self::Serialize(err) => write!(f, "settings serialization error: {err}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Serialize(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serialize(value)
    }
}

/// Loads settings from disk; returns defaults if the file is missing or
/// cannot be parsed.
pub fn load_settings(path: impl AsRef<Path>) -> TrailSettings {
    match fs::read_to_string(path) {
        Ok(content) => serde_json::from_str(&content).unwrap_or_default(),
        Err(_) => TrailSettings::default(),
    }
}

/// Saves settings to disk as pretty JSON, creating parent directories as
/// needed.
pub fn save_settings(path: impl AsRef<Path>, settings: &TrailSettings) -> Result<(), ConfigError> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(settings)?;
    fs::write(path, json)?;
    Ok(())
}

/// Normalizes the free-text ignored-tags field into a deduplicated list.
///
/// Entries split on commas and whitespace, leading `#` is dropped, matching
/// is case-insensitive (lowercased).
pub fn ignored_tag_list(raw: &str) -> Vec<String> {
    let unique: BTreeSet<String> = raw
        .split(|c: char| c == ',' || c.is_whitespace())
        .map(|entry| entry.trim().trim_start_matches('#').to_lowercase())
        .filter(|entry| !entry.is_empty())
        .collect();
    unique.into_iter().collect()
}
