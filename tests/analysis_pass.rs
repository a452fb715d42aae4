//! End-to-end analysis pass tests: tagging, exclusion, caret avoidance,
//! and publishing through the engine.

mod common;

use common::{assert_no_overlap, engine_with, FailingTagger, FakeHost};
use poslight::{Engine, HighlightPrefs, Msg, PosTag, StaticTagger};

#[test]
fn test_pronoun_never_highlighted_as_noun() {
    let text = "He saw a cat.";
    let tagger = StaticTagger::new()
        .with_offset_match(PosTag::Noun, "cat", 9, 3)
        .with_offset_match(PosTag::Noun, "he", 0, 2)
        .with_match(PosTag::Pronoun, "he");

    let mut engine = engine_with(tagger);
    let mut host = FakeHost::new(text);

    // Preference toggle runs one immediate synchronous pass
    assert_eq!(engine.handle(&mut host, Msg::PreferenceToggled), None);

    assert_eq!(host.publish_count, 1);
    assert_eq!(host.decorations.len(), 1);
    let deco = host.decorations.iter().next().unwrap();
    assert_eq!(deco.range.from, 9);
    assert_eq!(deco.range.to, 12);
    assert_eq!(deco.range.text, "cat");
    assert_eq!(deco.class_name, "pos-noun");
}

#[test]
fn test_caret_adjacent_range_excluded_for_this_pass() {
    let text = "He saw a cat.";
    let tagger = StaticTagger::new().with_offset_match(PosTag::Noun, "cat", 9, 3);

    // Caret inside the word: nothing published this pass
    let mut engine = engine_with(tagger.clone());
    let mut host = FakeHost::with_caret(text, 10);
    engine.handle(&mut host, Msg::PreferenceToggled);
    assert!(host.decorations.is_empty());

    // Same document, caret far away: the range comes back
    let mut engine = engine_with(tagger);
    let mut host = FakeHost::with_caret(text, 0);
    engine.handle(&mut host, Msg::PreferenceToggled);
    assert_eq!(host.decorations.len(), 1);
}

#[test]
fn test_fenced_code_never_decorated() {
    let text = "Hello\n```\ncode here\n```\nWorld";
    let tagger = StaticTagger::new()
        .with_match(PosTag::Noun, "code")
        .with_match(PosTag::Noun, "World");

    let mut engine = engine_with(tagger);
    let mut host = FakeHost::new(text);
    engine.handle(&mut host, Msg::PreferenceToggled);

    assert_eq!(host.decorations.len(), 1);
    assert_eq!(host.decorations.iter().next().unwrap().range.text, "World");
}

#[test]
fn test_published_set_is_sorted_and_non_overlapping() {
    let text = "cats and dogs and birds run quickly";
    let tagger = StaticTagger::new()
        .with_match(PosTag::Noun, "cats")
        .with_match(PosTag::Noun, "dogs")
        .with_match(PosTag::Noun, "birds")
        .with_match(PosTag::Verb, "run")
        .with_match(PosTag::Adverb, "quickly")
        .with_match(PosTag::Conjunction, "and");

    let mut engine = engine_with(tagger);
    let mut host = FakeHost::new(text);
    engine.handle(&mut host, Msg::PreferenceToggled);

    assert_no_overlap(&host.decorations);

    let starts: Vec<usize> = host.decorations.iter().map(|d| d.range.from).collect();
    let mut sorted = starts.clone();
    sorted.sort_unstable();
    assert_eq!(starts, sorted, "Decorations must be ordered by start");
    assert_eq!(host.decorations.len(), 7, "3 nouns + 1 verb + 1 adverb + 2 ands");
}

#[test]
fn test_repeated_pass_republishes_same_set() {
    // Each pass starts a fresh processed-key set; re-analysis of an
    // unchanged document yields the same decorations, not an empty set
    let text = "a cat sat";
    let tagger = StaticTagger::new().with_offset_match(PosTag::Noun, "cat", 2, 3);

    let mut engine = engine_with(tagger);
    let mut host = FakeHost::new(text);
    engine.handle(&mut host, Msg::PreferenceToggled);
    let first = host.decorations.clone();

    engine.handle(&mut host, Msg::PreferenceToggled);
    assert_eq!(host.publish_count, 2);
    assert_eq!(host.decorations, first);
}

#[test]
fn test_disabled_category_is_skipped() {
    let text = "He runs fast.";
    let tagger = StaticTagger::new()
        .with_offset_match(PosTag::Verb, "runs", 3, 4)
        .with_offset_match(PosTag::Adverb, "fast", 8, 4);

    let mut prefs = HighlightPrefs::default();
    prefs.categories.insert("verbs".to_string(), false);

    let mut engine = Engine::new(Box::new(tagger), prefs, true);
    let mut host = FakeHost::new(text);
    engine.handle(&mut host, Msg::PreferenceToggled);

    assert_eq!(host.decorations.len(), 1);
    assert_eq!(
        host.decorations.iter().next().unwrap().class_name,
        "pos-adverb"
    );
}

#[test]
fn test_tagger_failure_keeps_previous_decorations() {
    let text = "a cat sat";

    // First engine publishes a real set
    let tagger = StaticTagger::new().with_offset_match(PosTag::Noun, "cat", 2, 3);
    let mut engine = engine_with(tagger);
    let mut host = FakeHost::new(text);
    engine.handle(&mut host, Msg::PreferenceToggled);
    assert_eq!(host.decorations.len(), 1);

    // Swap in a failing tagger against the same host: nothing is
    // published, the prior set stays visible
    let mut broken = Engine::new(Box::new(FailingTagger), HighlightPrefs::default(), true);
    broken.handle(&mut host, Msg::PreferenceToggled);

    assert_eq!(host.publish_count, 1, "Failed pass must not publish");
    assert_eq!(host.decorations.len(), 1);
}

#[test]
fn test_adversarial_offsets_never_abort_the_pass() {
    // Malformed tagger output is dropped, not fatal: the rest of the
    // pass still publishes
    let text = "a cat sat";
    let tagger = StaticTagger::new()
        .with_offset_match(PosTag::Noun, "ghost", usize::MAX, 2)
        .with_offset_match(PosTag::Noun, "beyond", 50, 10)
        .with_offset_match(PosTag::Noun, "cat", 2, 3);

    let mut engine = engine_with(tagger);
    let mut host = FakeHost::new(text);
    engine.handle(&mut host, Msg::PreferenceToggled);

    assert_eq!(host.publish_count, 1);
    assert_eq!(host.decorations.len(), 1);
    assert_eq!(host.decorations.iter().next().unwrap().range.text, "cat");
}

#[test]
fn test_positionless_matches_decorate_every_occurrence() {
    let text = "the cat saw the cat";
    let tagger = StaticTagger::new().with_match(PosTag::Noun, "cat");

    let mut engine = engine_with(tagger);
    let mut host = FakeHost::new(text);
    engine.handle(&mut host, Msg::PreferenceToggled);

    let ranges: Vec<(usize, usize)> = host
        .decorations
        .iter()
        .map(|d| (d.range.from, d.range.to))
        .collect();
    assert_eq!(ranges, vec![(4, 7), (16, 19)]);
}
