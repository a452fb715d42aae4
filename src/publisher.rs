//! Decoration publishing
//!
//! Each analysis pass replaces the host editor's entire highlight set in
//! one atomic update; there is no incremental merge. Between passes the
//! host remaps the existing ranges across small edits on its own.

use crate::orchestrator::MatchRange;

/// One styled, non-text-mutating annotation over a character range
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoration {
    pub range: MatchRange,
    pub class_name: &'static str,
}

/// The ordered decoration collection handed to the host editor
///
/// Sorted by `from` ascending; equal starts keep insertion order, so a
/// later category's range sorts after an earlier one's.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DecorationSet {
    decorations: Vec<Decoration>,
}

impl DecorationSet {
    pub fn new(mut decorations: Vec<Decoration>) -> Self {
        // Stable sort keeps category insertion order for ties
        decorations.sort_by_key(|d| d.range.from);
        Self { decorations }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.decorations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.decorations.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Decoration> {
        self.decorations.iter()
    }
}

/// The editing surface this engine decorates
///
/// `replace_decorations` must swap the full active set in one atomic
/// update that preserves the current caret/selection and does not force a
/// scroll. `caret` returns a byte position, or -1 for "no caret".
pub trait HostEditor {
    fn document_text(&self) -> String;
    fn caret(&self) -> isize;
    fn replace_decorations(&mut self, set: DecorationSet);
    fn request_render(&mut self);
}
