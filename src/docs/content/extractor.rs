//! HTML to plain text flattening
//!
//! Parses permissively, drops `<script>`/`<style>` subtrees, then collapses
//! layout whitespace into single spaces.

use scraper::{Html, Node};

use super::config::DEFAULT_MAX_CHARS_PER_PAGE;

/// Elements whose text never reaches the output
const SKIPPED_ELEMENTS: [&str; 2] = ["script", "style"];

/// Extract readable text from HTML, capped at 10,000 characters
pub fn extract_text(html: &str) -> String {
    extract_text_with_limit(html, DEFAULT_MAX_CHARS_PER_PAGE)
}

/// Extract readable text from HTML
///
/// # Arguments
/// * `html` - Raw HTML string (malformed markup is fine)
/// * `max_chars` - Maximum characters to return; the rest is dropped silently
///
/// Entities are decoded, so `&lt;div&gt;` comes out as a literal `<div>`.
pub fn extract_text_with_limit(html: &str, max_chars: usize) -> String {
    let document = Html::parse_document(html);
    let raw = collect_text(&document);
    truncate_chars(&flatten_whitespace(&raw), max_chars)
}

/// Concatenate every text node in document order, skipping script/style
fn collect_text(document: &Html) -> String {
    let mut out = String::new();
    let mut stack = vec![document.tree.root()];

    while let Some(node) = stack.pop() {
        match node.value() {
            Node::Text(text) => out.push_str(text),
            Node::Element(element) if SKIPPED_ELEMENTS.contains(&element.name()) => continue,
            _ => {}
        }
        let children: Vec<_> = node.children().collect();
        stack.extend(children.into_iter().rev());
    }

    out
}

/// Line-trim, split on double spaces, drop empty fragments, join with one space
fn flatten_whitespace(text: &str) -> String {
    text.split(is_line_break)
        .map(str::trim)
        .flat_map(|line| line.split("  "))
        .map(str::trim)
        .filter(|chunk| !chunk.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r'
            | '\u{0b}'
            | '\u{0c}'
            | '\u{1c}'
            | '\u{1d}'
            | '\u{1e}'
            | '\u{85}'
            | '\u{2028}'
            | '\u{2029}'
    )
}

/// Keep the first `max_chars` characters, no marker
fn truncate_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => text[..byte_idx].to_string(),
        None => text.to_string(),
    }
}
