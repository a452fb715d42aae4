//! Preference persistence tests (YAML round trip, fail-open defaults)

use poslight::HighlightPrefs;

#[test]
fn test_save_and_load_round_trip() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("highlighting.yaml");

    let mut prefs = HighlightPrefs::default();
    prefs.toggle("verbs");
    prefs.categories.insert("adverbs".to_string(), false);
    prefs.save_to(&path).expect("save should succeed");

    let loaded = HighlightPrefs::load_from(&path);
    assert!(!loaded.is_enabled("verbs"));
    assert!(!loaded.is_enabled("adverbs"));
    assert!(loaded.is_enabled("nouns"), "Untouched keys stay enabled");
}

#[test]
fn test_missing_file_falls_back_to_defaults() {
    let dir = tempfile::tempdir().expect("temp dir");
    let prefs = HighlightPrefs::load_from(&dir.path().join("nope.yaml"));
    assert!(prefs.categories.is_empty());
    assert!(prefs.is_enabled("nouns"));
}

#[test]
fn test_corrupt_file_falls_back_to_defaults() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("highlighting.yaml");
    std::fs::write(&path, "categories: [not, a, map").expect("write");

    let prefs = HighlightPrefs::load_from(&path);
    assert!(prefs.categories.is_empty());
    assert!(prefs.is_enabled("verbs"));
}

#[test]
fn test_save_creates_parent_directory() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("nested").join("dir").join("highlighting.yaml");

    HighlightPrefs::default().save_to(&path).expect("save");
    assert!(path.exists());
}
