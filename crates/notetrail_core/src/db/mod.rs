//! Vault store bootstrap and schema migration entry points.
//!
//! # Responsibility
//! - Open and configure SQLite connections holding the note collection.
//! - Apply schema migrations in deterministic order.
//!
//! # Invariants
//! - Migration version is tracked via `PRAGMA user_version`.
//! - Core code must not read vault data before migrations succeed.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod migrations;
mod open;

pub use open::{open_vault, open_vault_in_memory};

pub type VaultResult<T> = Result<T, VaultError>;

/// Storage-layer error for vault bootstrap and queries.
#[derive(Debug)]
pub enum VaultError {
    Sqlite(rusqlite::Error),
    UnsupportedSchemaVersion {
        vault_version: u32,
        latest_supported: u32,
    },
}

impl Display for VaultError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "{err}"),
            Self::UnsupportedSchemaVersion {
                vault_version,
                latest_supported,
            } => write!(
                f,
                "vault schema version {vault_version} is newer than supported {latest_supported}"
            ),
        }
    }
}

impl Error for VaultError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
            Self::UnsupportedSchemaVersion { .. } => None,
        }
    }
}

impl From<rusqlite::Error> for VaultError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}
