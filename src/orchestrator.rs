//! Category orchestration
//!
//! Runs the configured categories in declared order over one tagged
//! document snapshot, sharing a processed-key set so no two categories ever
//! claim the same span, and rejecting anything near the caret or inside a
//! structural exclusion zone.

use std::collections::HashSet;

use crate::config::{HighlightPrefs, PosConfig, POS_CONFIGS};
use crate::exclusion::is_excluded_content;
use crate::publisher::Decoration;
use crate::resolver::{build_exclusion_set, match_ranges};
use crate::tagger::TaggedDocument;

/// Bytes of slack kept clear around the caret while decorating
pub const CARET_BUFFER: usize = 2;

/// Sentinel caret value meaning "no caret constraint"
pub const NO_CARET: isize = -1;

/// Half-open interval `[from, to)` into the current document text
///
/// Ephemeral: recomputed on every analysis pass, never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchRange {
    pub from: usize,
    pub to: usize,
    pub text: String,
}

impl MatchRange {
    /// Key used for cross-category duplicate suppression
    pub fn key(&self) -> String {
        format!("{}-{}", self.from, self.to)
    }
}

/// Whether the caret sits close enough to `[from, to)` to block decoration
fn near_caret(from: usize, to: usize, caret: isize) -> bool {
    if caret == NO_CARET {
        return false;
    }
    caret >= from as isize - CARET_BUFFER as isize && caret <= to as isize + CARET_BUFFER as isize
}

/// Resolve and filter ranges for one category
///
/// `processed` is shared across every category of one analysis pass; the
/// first category in configuration order to claim a `"from-to"` key wins
/// it. Invalid candidates are dropped, never fatal.
pub fn process_category(
    doc: &dyn TaggedDocument,
    text: &str,
    config: &PosConfig,
    caret: isize,
    processed: &mut HashSet<String>,
) -> Vec<MatchRange> {
    let exclusions = build_exclusion_set(doc, config.exclusion_tags);
    let candidates = match_ranges(doc, config.tag, text, &exclusions);

    let mut accepted = Vec::new();
    for range in candidates {
        if range.from >= range.to || range.to > text.len() {
            #[cfg(debug_assertions)]
            tracing::warn!(
                "Dropping invalid {:?} range [{}, {}) for {:?} (document length {})",
                config.tag,
                range.from,
                range.to,
                range.text,
                text.len()
            );
            continue;
        }

        let key = range.key();
        if processed.contains(&key) {
            continue;
        }
        if is_excluded_content(text, range.from, range.to) {
            continue;
        }
        if near_caret(range.from, range.to, caret) {
            continue;
        }

        processed.insert(key);
        accepted.push(range);
    }

    accepted
}

/// One full analysis pass over a tagged document
///
/// Iterates `POS_CONFIGS` in declared order, skipping categories the user
/// disabled (absent preference key means enabled), and pairs each accepted
/// range with its category's style class.
pub fn analyze(
    doc: &dyn TaggedDocument,
    text: &str,
    caret: isize,
    prefs: &HighlightPrefs,
) -> Vec<Decoration> {
    let mut processed = HashSet::new();
    let mut decorations = Vec::new();

    for config in POS_CONFIGS {
        if !prefs.is_enabled(config.setting_key) {
            continue;
        }
        for range in process_category(doc, text, config, caret, &mut processed) {
            decorations.push(Decoration {
                range,
                class_name: config.class_name,
            });
        }
    }

    tracing::debug!(
        "Analysis pass produced {} decorations over {} bytes",
        decorations.len(),
        text.len()
    );

    decorations
}
