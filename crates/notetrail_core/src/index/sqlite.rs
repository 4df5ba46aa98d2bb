//! SQLite-backed link index over the vault store.
//!
//! # Responsibility
//! - Derive the directed link graph from stored note content on demand.
//! - Resolve wikilink names to stored note paths deterministically.
//!
//! # Invariants
//! - Every lookup reads the vault as it is now; nothing is cached between
//!   calls, so a refreshed trigger always sees the current graph.
//! - Outbound links are ordered by first occurrence in the source note and
//!   deduplicated after resolution.

use crate::db::VaultResult;
use crate::index::wikilink::{extract_hashtags, extract_wikilinks};
use crate::index::{IndexError, IndexResult, LinkIndex};
use crate::model::note::NoteId;
use rusqlite::{Connection, OptionalExtension};
use std::collections::BTreeSet;

/// Read-only adjacency view over a migrated vault connection.
///
/// Notes carrying one of the ignored tags are cut out of the graph entirely:
/// they contribute no outbound links and links pointing at them are dropped.
pub struct SqliteLinkIndex<'conn> {
    conn: &'conn Connection,
    ignored_tags: BTreeSet<String>,
}

impl<'conn> SqliteLinkIndex<'conn> {
    /// Constructs an index over a migrated/ready connection.
    pub fn try_new(conn: &'conn Connection) -> IndexResult<Self> {
        ensure_vault_ready(conn)?;
        Ok(Self {
            conn,
            ignored_tags: BTreeSet::new(),
        })
    }

    /// Replaces the set of tags whose notes are excluded from traversal.
    ///
    /// Tags are matched against lowercase hashtags extracted from note
    /// content; callers pass the normalized list from the settings layer.
    pub fn with_ignored_tags(mut self, tags: &[String]) -> Self {
        self.ignored_tags = tags.iter().map(|tag| tag.to_lowercase()).collect();
        self
    }

    fn content_of(&self, note: &str) -> VaultResult<Option<String>> {
        let content = self
            .conn
            .query_row(
                "SELECT content FROM notes WHERE path = ?1;",
                [note],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(content)
    }

    fn is_ignored(&self, content: &str) -> bool {
        if self.ignored_tags.is_empty() {
            return false;
        }
        extract_hashtags(content)
            .iter()
            .any(|tag| self.ignored_tags.contains(tag))
    }

    /// Resolves one wikilink name to a stored note path.
    ///
    /// Resolution order: exact path match (as written, then with `.md`
    /// appended), then basename match where the lexicographically smallest
    /// path wins. The last step keeps resolution deterministic when several
    /// notes share a name. Unresolvable names yield `None`.
    fn resolve_link(&self, name: &str) -> VaultResult<Option<NoteId>> {
        for candidate in [name.to_string(), format!("{name}.md")] {
            let hit = self
                .conn
                .query_row(
                    "SELECT path FROM notes WHERE path = ?1;",
                    [candidate.as_str()],
                    |row| row.get::<_, String>(0),
                )
                .optional()?;
            if hit.is_some() {
                return Ok(hit);
            }
        }

        let suffix = format!("%/{name}.md");
        let hit = self
            .conn
            .query_row(
                "SELECT path FROM notes WHERE path LIKE ?1 ORDER BY path ASC LIMIT 1;",
                [suffix.as_str()],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(hit)
    }
}

impl LinkIndex for SqliteLinkIndex<'_> {
    fn outbound_links(&self, note: &str) -> IndexResult<Vec<NoteId>> {
        let Some(content) = self.content_of(note)? else {
            return Ok(Vec::new());
        };
        if self.is_ignored(&content) {
            return Ok(Vec::new());
        }

        let mut seen: BTreeSet<NoteId> = BTreeSet::new();
        let mut links: Vec<NoteId> = Vec::new();
        for name in extract_wikilinks(&content) {
            let Some(target) = self.resolve_link(&name)? else {
                continue;
            };
            // First occurrence wins; self-loop edges stay in the graph and
            // are left to the search's visited set.
            if !seen.insert(target.clone()) {
                continue;
            }
            if let Some(target_content) = self.content_of(&target)? {
                if self.is_ignored(&target_content) {
                    continue;
                }
            }
            links.push(target);
        }

        Ok(links)
    }
}

fn ensure_vault_ready(conn: &Connection) -> IndexResult<()> {
    let exists: i64 = conn.query_row(
        "SELECT EXISTS(
            SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = 'notes'
        );",
        [],
        |row| row.get(0),
    )?;
    if exists == 1 {
        Ok(())
    } else {
        Err(IndexError::MissingTable("notes"))
    }
}
