//! Link index contracts and implementations.
//!
//! # Responsibility
//! - Define the read-only adjacency lookup the trail search runs over.
//! - Isolate link extraction and name resolution from search and view code.
//!
//! # Invariants
//! - Implementations answer from current vault state on every call; results
//!   are never cached across view-change triggers.
//! - The lookup's ordering of outbound links is deterministic — it is the
//!   search's tie-break order.

use crate::db::VaultError;
use crate::model::note::NoteId;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod sqlite;
pub mod wikilink;

pub use sqlite::SqliteLinkIndex;

pub type IndexResult<T> = Result<T, IndexError>;

/// Index-layer error for adjacency lookups.
#[derive(Debug)]
pub enum IndexError {
    Vault(VaultError),
    MissingTable(&'static str),
}

impl Display for IndexError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Vault(err) => write!(f, "{err}"),
            Self::MissingTable(table) => write!(f, "vault table is missing: {table}"),
        }
    }
}

impl Error for IndexError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Vault(err) => Some(err),
            Self::MissingTable(_) => None,
        }
    }
}

impl From<VaultError> for IndexError {
    fn from(value: VaultError) -> Self {
        Self::Vault(value)
    }
}

impl From<rusqlite::Error> for IndexError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Vault(VaultError::Sqlite(value))
    }
}

/// Read-only adjacency lookup over the directed note link graph.
///
/// An edge A→B means "note A links to note B". The returned vector preserves
/// the index's deterministic link order (first occurrence in the source
/// note); an unknown note is a note without outbound links, not an error.
pub trait LinkIndex {
    fn outbound_links(&self, note: &str) -> IndexResult<Vec<NoteId>>;
}
