use notetrail_core::{open_vault_in_memory, LinkIndex, SqliteLinkIndex};
use rusqlite::Connection;

fn insert_note(conn: &Connection, path: &str, content: &str) {
    conn.execute(
        "INSERT INTO notes (path, content) VALUES (?1, ?2);",
        [path, content],
    )
    .expect("note insert should succeed");
}

#[test]
fn links_follow_first_occurrence_order_and_deduplicate() {
    let conn = open_vault_in_memory().unwrap();
    insert_note(&conn, "Root.md", "go [[B]] then [[A]] and [[B]] again");
    insert_note(&conn, "A.md", "");
    insert_note(&conn, "B.md", "");

    let index = SqliteLinkIndex::try_new(&conn).unwrap();
    assert_eq!(
        index.outbound_links("Root.md").unwrap(),
        vec!["B.md".to_string(), "A.md".to_string()]
    );
}

#[test]
fn alias_and_anchor_links_resolve_to_the_page() {
    let conn = open_vault_in_memory().unwrap();
    insert_note(&conn, "Root.md", "[[Garden|the garden]] and [[Garden#Soil]]");
    insert_note(&conn, "Garden.md", "");

    let index = SqliteLinkIndex::try_new(&conn).unwrap();
    assert_eq!(
        index.outbound_links("Root.md").unwrap(),
        vec!["Garden.md".to_string()]
    );
}

#[test]
fn unresolvable_links_are_dropped() {
    let conn = open_vault_in_memory().unwrap();
    insert_note(&conn, "Root.md", "[[Nowhere]] but [[Here]]");
    insert_note(&conn, "Here.md", "");

    let index = SqliteLinkIndex::try_new(&conn).unwrap();
    assert_eq!(
        index.outbound_links("Root.md").unwrap(),
        vec!["Here.md".to_string()]
    );
}

#[test]
fn basename_resolution_prefers_exact_then_smallest_path() {
    let conn = open_vault_in_memory().unwrap();
    insert_note(&conn, "Root.md", "[[Note]]");
    insert_note(&conn, "B/Note.md", "");
    insert_note(&conn, "A/Note.md", "");

    let index = SqliteLinkIndex::try_new(&conn).unwrap();
    assert_eq!(
        index.outbound_links("Root.md").unwrap(),
        vec!["A/Note.md".to_string()]
    );

    insert_note(&conn, "Note.md", "");
    assert_eq!(
        index.outbound_links("Root.md").unwrap(),
        vec!["Note.md".to_string()],
        "an exact top-level match outranks basename matches"
    );
}

#[test]
fn path_qualified_links_resolve() {
    let conn = open_vault_in_memory().unwrap();
    insert_note(&conn, "Root.md", "[[Projects/Garden]]");
    insert_note(&conn, "Projects/Garden.md", "");

    let index = SqliteLinkIndex::try_new(&conn).unwrap();
    assert_eq!(
        index.outbound_links("Root.md").unwrap(),
        vec!["Projects/Garden.md".to_string()]
    );
}

#[test]
fn absent_note_has_no_outbound_links() {
    let conn = open_vault_in_memory().unwrap();
    insert_note(&conn, "A.md", "[[B]]");
    insert_note(&conn, "B.md", "");

    let index = SqliteLinkIndex::try_new(&conn).unwrap();
    assert!(index.outbound_links("Missing.md").unwrap().is_empty());
}

#[test]
fn self_loop_edges_are_kept() {
    let conn = open_vault_in_memory().unwrap();
    insert_note(&conn, "Loop.md", "[[Loop]] and [[Other]]");
    insert_note(&conn, "Other.md", "");

    let index = SqliteLinkIndex::try_new(&conn).unwrap();
    assert_eq!(
        index.outbound_links("Loop.md").unwrap(),
        vec!["Loop.md".to_string(), "Other.md".to_string()]
    );
}

#[test]
fn ignored_tag_cuts_a_note_out_of_the_graph() {
    let conn = open_vault_in_memory().unwrap();
    insert_note(&conn, "Root.md", "[[Old]] and [[Fresh]]");
    insert_note(&conn, "Old.md", "#archived\n[[Fresh]]");
    insert_note(&conn, "Fresh.md", "");

    let index = SqliteLinkIndex::try_new(&conn)
        .unwrap()
        .with_ignored_tags(&["archived".to_string()]);

    // Links into the ignored note disappear...
    assert_eq!(
        index.outbound_links("Root.md").unwrap(),
        vec!["Fresh.md".to_string()]
    );
    // ...and the ignored note contributes nothing of its own.
    assert!(index.outbound_links("Old.md").unwrap().is_empty());
}

#[test]
fn without_the_filter_tagged_notes_stay_linked() {
    let conn = open_vault_in_memory().unwrap();
    insert_note(&conn, "Root.md", "[[Old]]");
    insert_note(&conn, "Old.md", "#archived");

    let index = SqliteLinkIndex::try_new(&conn).unwrap();
    assert_eq!(
        index.outbound_links("Root.md").unwrap(),
        vec!["Old.md".to_string()]
    );
}

#[test]
fn every_lookup_reads_current_vault_state() {
    let conn = open_vault_in_memory().unwrap();
    insert_note(&conn, "Root.md", "[[A]]");
    insert_note(&conn, "A.md", "");
    insert_note(&conn, "B.md", "");

    let index = SqliteLinkIndex::try_new(&conn).unwrap();
    assert_eq!(
        index.outbound_links("Root.md").unwrap(),
        vec!["A.md".to_string()]
    );

    conn.execute(
        "UPDATE notes SET content = ?1 WHERE path = 'Root.md';",
        ["[[B]]"],
    )
    .unwrap();

    assert_eq!(
        index.outbound_links("Root.md").unwrap(),
        vec!["B.md".to_string()],
        "the index must not cache adjacency across calls"
    );
}
