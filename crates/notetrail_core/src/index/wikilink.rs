//! Wikilink and hashtag extraction from markdown.
//!
//! # Responsibility
//! - Extract `[[...]]` link targets in order of first appearance.
//! - Extract `#tag` markers used by the ignored-tags filter.
//!
//! # Invariants
//! - Text inside fenced blocks and inline code never produces links or tags.
//! - Aliases (`|`) and anchors (`#`) are stripped from link targets.

use once_cell::sync::Lazy;
use regex::Regex;

static WIKILINK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[\[([^\]]+)\]\]").expect("valid wikilink regex"));
static FENCED_CODE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)```[^\n]*\n.*?```|~~~[^\n]*\n.*?~~~").expect("valid fenced code regex")
});
static INLINE_CODE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"`[^`]*`").expect("valid inline code regex"));
static HASHTAG_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:^|\s)#([A-Za-z0-9_][A-Za-z0-9_/-]*)").expect("valid tag regex"));

/// Extracts wikilink targets from markdown in order of appearance.
///
/// Returns page names only: the alias part after `|` and the anchor part
/// after `#` are dropped, surrounding whitespace is trimmed, and empty
/// targets are skipped. Occurrences are not deduplicated here; callers that
/// build adjacency do so after resolution.
pub fn extract_wikilinks(markdown: &str) -> Vec<String> {
    let without_code = strip_code(markdown);
    let mut links = Vec::new();

    for capture in WIKILINK_RE.captures_iter(&without_code) {
        let mut target = &capture[1];
        if let Some(pipe) = target.find('|') {
            target = &target[..pipe];
        }
        if let Some(hash) = target.find('#') {
            target = &target[..hash];
        }

        let trimmed = target.trim();
        if !trimmed.is_empty() {
            links.push(trimmed.to_string());
        }
    }

    links
}

/// Extracts lowercase hashtags from markdown, code spans excluded.
pub fn extract_hashtags(markdown: &str) -> Vec<String> {
    let without_code = strip_code(markdown);
    HASHTAG_RE
        .captures_iter(&without_code)
        .map(|capture| capture[1].to_lowercase())
        .collect()
}

fn strip_code(markdown: &str) -> String {
    let without_fenced = FENCED_CODE_RE.replace_all(markdown, " ");
    INLINE_CODE_RE.replace_all(&without_fenced, " ").into_owned()
}

#[cfg(test)]
mod tests {
    use super::{extract_hashtags, extract_wikilinks};

    #[test]
    fn extracts_links_in_order_of_appearance() {
        let links = extract_wikilinks("see [[One]] then [[Two]] then [[One]]");
        assert_eq!(links, vec!["One", "Two", "One"]);
    }

    #[test]
    fn strips_alias_and_anchor() {
        assert_eq!(extract_wikilinks("[[Note|shown text]]"), vec!["Note"]);
        assert_eq!(extract_wikilinks("[[Note#Section]]"), vec!["Note"]);
        assert_eq!(extract_wikilinks("[[Note#Section|shown]]"), vec!["Note"]);
    }

    #[test]
    fn ignores_empty_targets_and_plain_text() {
        assert!(extract_wikilinks("[[]] and [[ ]] and nothing else").is_empty());
        assert!(extract_wikilinks("no links here").is_empty());
    }

    #[test]
    fn code_spans_produce_no_links() {
        let markdown = "```\n[[Fenced]]\n```\nuse `[[Inline]]` but [[Real]]";
        assert_eq!(extract_wikilinks(markdown), vec!["Real"]);
    }

    #[test]
    fn keeps_path_qualified_targets() {
        assert_eq!(
            extract_wikilinks("[[Projects/Garden]]"),
            vec!["Projects/Garden"]
        );
    }

    #[test]
    fn hashtags_are_lowercased_and_code_is_skipped() {
        let markdown = "intro #Archived text `#fake` and #work/projects";
        assert_eq!(extract_hashtags(markdown), vec!["archived", "work/projects"]);
    }

    #[test]
    fn heading_markers_are_not_tags() {
        assert!(extract_hashtags("# Title\n## Subtitle").is_empty());
    }
}
