//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use anyhow::bail;
use poslight::{
    DecorationSet, Engine, HighlightPrefs, HostEditor, StaticTagger, TaggedDocument, Tagger,
};

/// In-memory host editor recording everything the engine publishes
pub struct FakeHost {
    pub text: String,
    pub caret: isize,
    pub decorations: DecorationSet,
    pub publish_count: usize,
    pub render_count: usize,
}

impl FakeHost {
    pub fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
            caret: -1,
            decorations: DecorationSet::empty(),
            publish_count: 0,
            render_count: 0,
        }
    }

    pub fn with_caret(text: &str, caret: isize) -> Self {
        let mut host = Self::new(text);
        host.caret = caret;
        host
    }
}

impl HostEditor for FakeHost {
    fn document_text(&self) -> String {
        self.text.clone()
    }

    fn caret(&self) -> isize {
        self.caret
    }

    fn replace_decorations(&mut self, set: DecorationSet) {
        self.decorations = set;
        self.publish_count += 1;
    }

    fn request_render(&mut self) {
        self.render_count += 1;
    }
}

/// Tagger that always fails, for error-recovery tests
pub struct FailingTagger;

impl Tagger for FailingTagger {
    fn tag(&self, _text: &str) -> anyhow::Result<Box<dyn TaggedDocument>> {
        bail!("tagger exploded")
    }
}

/// Engine with default (all-enabled) preferences, highlighting on
pub fn engine_with(tagger: StaticTagger) -> Engine {
    Engine::new(Box::new(tagger), HighlightPrefs::default(), true)
}

/// Assert that no two decorations in the set overlap
pub fn assert_no_overlap(set: &DecorationSet) {
    let ranges: Vec<(usize, usize)> = set.iter().map(|d| (d.range.from, d.range.to)).collect();
    for (i, a) in ranges.iter().enumerate() {
        for b in ranges.iter().skip(i + 1) {
            assert!(
                a.1 <= b.0 || b.1 <= a.0,
                "Overlapping decorations [{}, {}) and [{}, {})",
                a.0,
                a.1,
                b.0,
                b.1
            );
        }
    }
}
