//! Shortest link-path search.
//!
//! # Responsibility
//! - Compute the fewest-hops directed path between two notes over an
//!   injected outbound-link lookup.
//!
//! # Invariants
//! - The lookup is consulted at most once per discovered note and its
//!   result is never cached across calls.
//! - Neighbor expansion follows the lookup's own ordering, so ties between
//!   equally short paths resolve to the first-listed branch.

use crate::model::note::NoteId;
use std::collections::{HashMap, HashSet, VecDeque};

/// Finds the shortest directed link path from `root` to `target`.
///
/// Breadth-first search over forward link edges: a FIFO frontier guarantees
/// level order, a visited set guards against cycles and self-loops, and each
/// discovered note records its discovering predecessor. The search stops the
/// first time `target` is dequeued; the recorded predecessors are then
/// walked back to `root` and reversed, so the result reads root-first.
///
/// Returns the hop sequence starting at `root` and ending at `target`, or an
/// empty vector when no directed path exists — including when `root` itself
/// is unknown to the lookup. `find_path(n, n, _)` returns `[n]`.
///
/// Tie-break: among several equally short paths, the one found follows the
/// order in which the lookup lists each note's outbound links. Earlier
/// entries are discovered first and win.
pub fn find_path<F>(root: &str, target: &str, mut outbound_links_of: F) -> Vec<NoteId>
where
    F: FnMut(&str) -> Vec<NoteId>,
{
    let mut frontier: VecDeque<NoteId> = VecDeque::new();
    let mut visited: HashSet<NoteId> = HashSet::new();
    let mut parent: HashMap<NoteId, NoteId> = HashMap::new();

    frontier.push_back(root.to_string());
    visited.insert(root.to_string());

    while let Some(current) = frontier.pop_front() {
        if current == target {
            return walk_back(&parent, root, target);
        }

        for next in outbound_links_of(&current) {
            if visited.insert(next.clone()) {
                parent.insert(next.clone(), current.clone());
                frontier.push_back(next);
            }
        }
    }

    Vec::new()
}

/// Walks recorded predecessors from `target` back to `root`, then reverses
/// so the trail reads root-first.
fn walk_back(parent: &HashMap<NoteId, NoteId>, root: &str, target: &str) -> Vec<NoteId> {
    let mut hops = vec![target.to_string()];
    let mut current = target;
    while current != root {
        match parent.get(current) {
            Some(previous) => {
                hops.push(previous.clone());
                current = previous;
            }
            None => return Vec::new(),
        }
    }
    hops.reverse();
    hops
}
