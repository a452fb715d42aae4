//! Range resolution
//!
//! Turns tagger output for one category into concrete candidate ranges:
//! tagger-reported offsets are used directly, position-less matches fall
//! back to a word-boundary search over the whole document. Also builds the
//! per-category word exclusion set (e.g. pronouns while resolving nouns).

use std::collections::HashSet;

use regex::Regex;

use crate::config::PosTag;
use crate::orchestrator::MatchRange;
use crate::tagger::{MatchOffset, TaggedDocument};

/// Lower-cased literals of every match of every exclusion tag
///
/// Empty and whitespace-only matches are dropped. The set is scoped to a
/// single category's resolution step and rebuilt each pass.
pub fn build_exclusion_set(
    doc: &dyn TaggedDocument,
    exclusion_tags: &[PosTag],
) -> HashSet<String> {
    let mut set = HashSet::new();
    for &tag in exclusion_tags {
        for m in doc.matches(tag) {
            let word = m.text.trim();
            if !word.is_empty() {
                set.insert(word.to_lowercase());
            }
        }
    }
    set
}

/// Candidate ranges for one category, in tagger iteration order
///
/// Position-less matches purposefully emit one range per occurrence in the
/// document: without an offset the tagger's result is ambiguous, so every
/// occurrence of the word is the correct reading.
pub fn match_ranges(
    doc: &dyn TaggedDocument,
    tag: PosTag,
    text: &str,
    exclusions: &HashSet<String>,
) -> Vec<MatchRange> {
    let mut ranges = Vec::new();

    for m in doc.matches(tag) {
        let literal = m.text.trim();
        if literal.is_empty() || exclusions.contains(&literal.to_lowercase()) {
            continue;
        }

        match m.offset {
            MatchOffset::Known { start, length } if length > 0 => {
                let Some(to) = start.checked_add(length) else {
                    tracing::warn!(
                        "Dropping {:?} match with overflowing offset {} + {}",
                        m.text,
                        start,
                        length
                    );
                    continue;
                };
                if to <= text.len()
                    && (!text.is_char_boundary(start) || !text.is_char_boundary(to))
                {
                    tracing::warn!(
                        "Dropping {:?} match splitting a character at [{}, {})",
                        m.text,
                        start,
                        to
                    );
                    continue;
                }
                // The published text is the document's own slice; the
                // tagger's literal only stands in for ranges past the end,
                // which the orchestrator drops with a diagnostic
                let range_text = if to <= text.len() {
                    text[start..to].to_string()
                } else {
                    m.text.clone()
                };
                ranges.push(MatchRange {
                    from: start,
                    to,
                    text: range_text,
                });
            }
            _ => {
                find_occurrences(text, literal, &mut ranges);
            }
        }
    }

    ranges
}

/// Append one range per word-bounded occurrence of `literal` in `text`
fn find_occurrences(text: &str, literal: &str, ranges: &mut Vec<MatchRange>) {
    let pattern = format!(r"\b{}\b", regex::escape(literal));
    let re = match Regex::new(&pattern) {
        Ok(re) => re,
        Err(e) => {
            // Escaped literals should always compile; drop the match if not
            tracing::warn!("Failed to compile fallback pattern for {:?}: {}", literal, e);
            return;
        }
    };

    for m in re.find_iter(text) {
        ranges.push(MatchRange {
            from: m.start(),
            to: m.end(),
            text: m.as_str().to_string(),
        });
    }
}
