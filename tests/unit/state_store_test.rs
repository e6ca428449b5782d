//! Unit tests for the BrowsingStateStore public API.
//!
//! Exercises visit recording, URL normalization, deduplication, the
//! history cap, bookmark toggling, and persistence round-trips through
//! the `BrowsingStateStoreTrait` interface, against a temporary data
//! directory.

use std::fs;

use redbrowser::managers::state_store::{
    BrowsingStateStore, BrowsingStateStoreTrait, DEFAULT_HISTORY_LIMIT,
};
use redbrowser::types::bookmark::BookmarkState;
use rstest::rstest;
use tempfile::TempDir;

/// Helper: create a store backed by a fresh temporary data directory.
fn setup() -> (TempDir, BrowsingStateStore) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let store = BrowsingStateStore::open(dir.path(), DEFAULT_HISTORY_LIMIT);
    (dir, store)
}

#[test]
fn test_missing_files_yield_empty_store_and_create_nothing() {
    let (dir, mut store) = setup();

    assert_eq!(store.history_len(), 0);
    assert!(store.all_bookmarks().is_empty());
    assert!(
        !dir.path().join("history.json").exists(),
        "no file may be created before the first write"
    );
    assert!(!dir.path().join("bookmarks.json").exists());

    store.record_visit("https://example.com", "Example").unwrap();
    assert!(dir.path().join("history.json").exists());
}

#[rstest]
#[case("example.com", "https://example.com")]
#[case("https://example.com", "https://example.com")]
#[case("http://example.org/path?q=1", "http://example.org/path?q=1")]
#[case("about:blank", "about:blank")]
fn test_url_normalization(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(BrowsingStateStore::normalize_url(input), expected);
}

#[test]
fn test_record_visit_creates_entry_with_normalized_url() {
    let (_dir, mut store) = setup();

    store.record_visit("example.com", "Example").unwrap();

    let recent = store.recent_history(10);
    assert_eq!(recent.len(), 1);
    assert_eq!(recent[0].url, "https://example.com");
    assert_eq!(recent[0].title, "Example");
    assert_eq!(recent[0].visit_count, 1);
    assert!(recent[0].timestamp > 0);
}

#[test]
fn test_empty_title_falls_back_to_url() {
    let (_dir, mut store) = setup();

    store.record_visit("https://example.com", "").unwrap();

    let recent = store.recent_history(10);
    assert_eq!(recent[0].title, "https://example.com");
}

#[test]
fn test_repeat_visit_increments_count_instead_of_duplicating() {
    let (_dir, mut store) = setup();

    store.record_visit("https://example.com", "Example").unwrap();
    let first_timestamp = store.recent_history(1)[0].timestamp;

    store.record_visit("https://example.com", "Example").unwrap();

    let recent = store.recent_history(10);
    assert_eq!(recent.len(), 1, "repeat visit must not add a second entry");
    assert_eq!(recent[0].visit_count, 2);
    assert!(recent[0].timestamp >= first_timestamp);

    // The scheme-less spelling resolves to the same entry.
    store.record_visit("example.com", "Example").unwrap();
    assert_eq!(store.history_len(), 1);
    assert_eq!(store.recent_history(1)[0].visit_count, 3);
}

#[test]
fn test_repeat_visit_adopts_new_nonempty_title() {
    let (_dir, mut store) = setup();

    store.record_visit("https://example.com", "Old Title").unwrap();
    store.record_visit("https://example.com", "New Title").unwrap();
    assert_eq!(store.recent_history(1)[0].title, "New Title");

    // An empty title on a repeat visit keeps the previous one.
    store.record_visit("https://example.com", "").unwrap();
    assert_eq!(store.recent_history(1)[0].title, "New Title");
}

#[test]
fn test_cap_evicts_oldest_after_1001_distinct_urls() {
    let dir = TempDir::new().unwrap();
    let mut store = BrowsingStateStore::open(dir.path(), 1000);

    for i in 0..1001 {
        store
            .record_visit(&format!("https://site{}.example", i), "Site")
            .unwrap();
    }

    assert_eq!(store.history_len(), 1000);

    let recent = store.recent_history(1000);
    assert_eq!(
        recent[0].url, "https://site1000.example",
        "the most recent visit stays first"
    );
    assert!(
        !recent.iter().any(|e| e.url == "https://site0.example"),
        "the oldest entry must have been evicted"
    );
}

#[test]
fn test_recent_history_is_bounded_and_sorted() {
    let (_dir, mut store) = setup();

    for i in 0..60 {
        store
            .record_visit(&format!("https://site{}.example", i), "Site")
            .unwrap();
    }

    let recent = store.recent_history(50);
    assert_eq!(recent.len(), 50);
    assert!(
        recent.windows(2).all(|w| w[0].timestamp >= w[1].timestamp),
        "entries must be sorted descending by timestamp"
    );
    assert_eq!(recent[0].url, "https://site59.example");

    // Asking for more than exists returns everything, once.
    assert_eq!(store.recent_history(10_000).len(), 60);
}

#[test]
fn test_toggle_bookmark_adds_then_removes() {
    let (_dir, mut store) = setup();

    let state = store.toggle_bookmark("https://docs.rs", "Docs.rs").unwrap();
    assert_eq!(state, BookmarkState::Added);
    assert!(store.is_bookmarked("https://docs.rs"));
    assert_eq!(store.all_bookmarks().len(), 1);

    let state = store.toggle_bookmark("https://docs.rs", "Docs.rs").unwrap();
    assert_eq!(state, BookmarkState::Removed);
    assert!(!store.is_bookmarked("https://docs.rs"));
    assert!(store.all_bookmarks().is_empty());
}

#[test]
fn test_bookmarks_keep_insertion_order() {
    let (_dir, mut store) = setup();

    store.toggle_bookmark("https://a.com", "A").unwrap();
    store.toggle_bookmark("https://b.com", "B").unwrap();
    store.toggle_bookmark("https://c.com", "C").unwrap();
    store.toggle_bookmark("https://b.com", "B").unwrap(); // remove the middle one

    let urls: Vec<_> = store.all_bookmarks().iter().map(|b| b.url.as_str()).collect();
    assert_eq!(urls, vec!["https://a.com", "https://c.com"]);
}

#[test]
fn test_bookmark_title_is_captured_at_bookmark_time() {
    let (_dir, mut store) = setup();

    store.toggle_bookmark("https://a.com", "Original").unwrap();
    store.record_visit("https://a.com", "Renamed Page").unwrap();

    assert_eq!(store.all_bookmarks()[0].title, "Original");
}

#[test]
fn test_clear_history_and_bookmarks() {
    let (dir, mut store) = setup();

    store.record_visit("https://a.com", "A").unwrap();
    store.toggle_bookmark("https://a.com", "A").unwrap();

    store.clear_history().unwrap();
    store.clear_bookmarks().unwrap();
    assert_eq!(store.history_len(), 0);
    assert!(store.all_bookmarks().is_empty());

    // The cleared state is what a reopened store sees.
    let reopened = BrowsingStateStore::open(dir.path(), DEFAULT_HISTORY_LIMIT);
    assert_eq!(reopened.history_len(), 0);
    assert!(reopened.all_bookmarks().is_empty());
}

#[test]
fn test_save_then_reload_roundtrip() {
    let dir = TempDir::new().unwrap();

    {
        let mut store = BrowsingStateStore::open(dir.path(), DEFAULT_HISTORY_LIMIT);
        store.record_visit("https://a.com", "A").unwrap();
        store.record_visit("https://b.com", "B").unwrap();
        store.record_visit("https://a.com", "A again").unwrap();
        store.toggle_bookmark("https://b.com", "B").unwrap();
    }

    let reloaded = BrowsingStateStore::open(dir.path(), DEFAULT_HISTORY_LIMIT);
    assert_eq!(reloaded.history_len(), 2);

    let mut urls: Vec<_> = reloaded
        .recent_history(10)
        .iter()
        .map(|e| (e.url.clone(), e.title.clone(), e.visit_count))
        .collect();
    urls.sort();
    assert_eq!(
        urls,
        vec![
            ("https://a.com".to_string(), "A again".to_string(), 2),
            ("https://b.com".to_string(), "B".to_string(), 1),
        ]
    );

    assert_eq!(reloaded.all_bookmarks().len(), 1);
    assert_eq!(reloaded.all_bookmarks()[0].url, "https://b.com");
}

#[test]
fn test_malformed_history_file_is_backed_up_and_store_starts_empty() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("history.json"), "not json at all").unwrap();

    let store = BrowsingStateStore::open(dir.path(), DEFAULT_HISTORY_LIMIT);
    assert_eq!(store.history_len(), 0);

    let backups = fs::read_dir(dir.path())
        .unwrap()
        .filter_map(|e| e.ok())
        .filter(|e| {
            e.file_name()
                .to_string_lossy()
                .starts_with("history.json.backup-")
        })
        .count();
    assert_eq!(backups, 1);
}

#[test]
fn test_legacy_history_file_is_migrated_on_open() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("history.json"),
        r#"["https://old1.example", "https://old2.example"]"#,
    )
    .unwrap();
    fs::write(
        dir.path().join("bookmarks.json"),
        r#"{"https://old1.example": "Old One"}"#,
    )
    .unwrap();

    let mut store = BrowsingStateStore::open(dir.path(), DEFAULT_HISTORY_LIMIT);
    assert_eq!(store.history_len(), 2);
    assert_eq!(store.all_bookmarks().len(), 1);
    assert_eq!(store.all_bookmarks()[0].title, "Old One");

    // A fresh visit outranks migrated entries, whose visit time is unknown.
    store.record_visit("https://new.example", "New").unwrap();
    assert_eq!(store.recent_history(1)[0].url, "https://new.example");

    // The next save rewrites history canonically.
    let content = fs::read_to_string(dir.path().join("history.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert!(value.as_array().unwrap().iter().all(|v| v.is_object()));
}

#[test]
fn test_write_failure_is_reported_and_memory_state_kept() {
    let dir = TempDir::new().unwrap();
    let mut store = BrowsingStateStore::open(dir.path(), DEFAULT_HISTORY_LIMIT);

    // A directory squatting on the target path makes the final rename fail.
    fs::create_dir(dir.path().join("history.json")).unwrap();

    let result = store.record_visit("https://example.com", "Example");
    assert!(result.is_err(), "the write failure must surface to the caller");

    assert_eq!(
        store.history_len(),
        1,
        "the in-memory state is kept so the caller may retry"
    );
}
