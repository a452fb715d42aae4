//! External tagger boundary
//!
//! The natural-language tagger is an opaque capability: given document
//! text, it reports spans per grammatical category. Matches may or may not
//! carry character offsets in the same pass, so the offset is an explicit
//! sum type rather than an optional field the pipeline has to re-check.

use std::collections::HashMap;

use anyhow::Result;

use crate::config::PosTag;

/// Where a tagger match sits in the document, if the tagger knows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOffset {
    /// Tagger reported a concrete position (`length` of zero is treated as unknown)
    Known { start: usize, length: usize },
    /// Tagger only reported the literal; the resolver searches for occurrences
    Unknown,
}

/// One span the tagger classified under some category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagMatch {
    pub text: String,
    pub offset: MatchOffset,
}

impl TagMatch {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            offset: MatchOffset::Unknown,
        }
    }

    pub fn with_offset(text: impl Into<String>, start: usize, length: usize) -> Self {
        Self {
            text: text.into(),
            offset: MatchOffset::Known { start, length },
        }
    }
}

/// A tagged snapshot of one document text
pub trait TaggedDocument {
    /// All matches the tagger reports for a category, in tagger order
    fn matches(&self, tag: PosTag) -> Vec<TagMatch>;
}

/// The tagging capability itself
pub trait Tagger {
    /// Analyze the full document text. Errors abort the current analysis
    /// pass; the previously published decorations stay in place.
    fn tag(&self, text: &str) -> Result<Box<dyn TaggedDocument>>;
}

/// Deterministic tagger built from registered matches
///
/// Hosts bridging a real NLP library implement [`Tagger`] directly; this
/// implementation backs tests and fixed-lexicon hosts. Registered entries
/// are returned verbatim for every document, in registration order.
#[derive(Debug, Clone, Default)]
pub struct StaticTagger {
    matches: HashMap<PosTag, Vec<TagMatch>>,
}

impl StaticTagger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a match without position information
    pub fn with_match(mut self, tag: PosTag, text: impl Into<String>) -> Self {
        self.matches.entry(tag).or_default().push(TagMatch::new(text));
        self
    }

    /// Register a match at a known offset
    pub fn with_offset_match(
        mut self,
        tag: PosTag,
        text: impl Into<String>,
        start: usize,
        length: usize,
    ) -> Self {
        self.matches
            .entry(tag)
            .or_default()
            .push(TagMatch::with_offset(text, start, length));
        self
    }
}

struct StaticTaggedDocument {
    matches: HashMap<PosTag, Vec<TagMatch>>,
}

impl TaggedDocument for StaticTaggedDocument {
    fn matches(&self, tag: PosTag) -> Vec<TagMatch> {
        self.matches.get(&tag).cloned().unwrap_or_default()
    }
}

impl Tagger for StaticTagger {
    fn tag(&self, _text: &str) -> Result<Box<dyn TaggedDocument>> {
        Ok(Box::new(StaticTaggedDocument {
            matches: self.matches.clone(),
        }))
    }
}
