//! Structural exclusion zones
//!
//! Identifies the regions of a prose document that must never receive POS
//! decorations: fenced code blocks, inline code spans, a leading
//! frontmatter block, and markdown link syntax (label and target). Callers
//! only see the containment predicate, so the matching strategy underneath
//! (regex today) can change without touching the pipeline.

use std::ops::Range;
use std::sync::OnceLock;

use regex::Regex;

fn fenced_block_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // Non-greedy so back-to-back fences stay separate blocks
    RE.get_or_init(|| Regex::new(r"(?s)```.*?```").expect("fenced block pattern"))
}

fn inline_code_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // A backtick span never crosses a line break
    RE.get_or_init(|| Regex::new(r"`[^`\n]+`").expect("inline code pattern"))
}

fn frontmatter_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // Anchored: a ---...--- block anywhere else in the document is not frontmatter
    RE.get_or_init(|| Regex::new(r"\A---\r?\n(?s:.*?)\r?\n---").expect("frontmatter pattern"))
}

fn markdown_link_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\[[^\]]*\]\([^)]*\)").expect("markdown link pattern"))
}

/// All exclusion zones in the document, as byte ranges
fn zones(text: &str) -> Vec<Range<usize>> {
    let mut zones = Vec::new();

    for m in fenced_block_re().find_iter(text) {
        zones.push(m.range());
    }
    for m in inline_code_re().find_iter(text) {
        zones.push(m.range());
    }
    if let Some(m) = frontmatter_re().find(text) {
        zones.push(m.range());
    }
    for m in markdown_link_re().find_iter(text) {
        zones.push(m.range());
    }

    zones
}

/// Whether `[from, to)` falls entirely within an exclusion zone
///
/// Only full containment excludes a range; a match straddling a zone
/// boundary is deliberately left decoratable. Scans the whole document on
/// every call.
pub fn is_excluded_content(text: &str, from: usize, to: usize) -> bool {
    if from >= to || to > text.len() {
        return false;
    }

    zones(text)
        .iter()
        .any(|zone| zone.start <= from && to <= zone.end)
}
