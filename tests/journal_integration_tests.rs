//! Integration tests for the diary store and the saved-verse lifecycle.

use chrono::NaiveDate;
use std::fs;
use tempfile::tempdir;

use solace::journal::EntryStore;
use solace::ops::{apply_update, render_recommendation, EntryUpdate};
use solace::recommend::{Recommendation, Verse};

fn date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 7).unwrap()
}

/// The full already-saved scenario: save 시편 23:1 with one wording, reload,
/// and get the same passage recommended with different wording. It must
/// still read as saved.
#[test]
fn test_saved_verse_survives_reload_and_rewording() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("diary.json");

    let saved = Verse {
        book: "시편".to_string(),
        chapter: 23,
        verse: "1".to_string(),
        text: "A".to_string(),
    };

    let mut store = EntryStore::load(&path).unwrap();
    apply_update(
        &mut store,
        date(),
        EntryUpdate {
            text: Some("오늘의 일기".to_string()),
            ..Default::default()
        },
    )
    .unwrap();
    store.save_verse(date(), saved).unwrap();
    drop(store);

    let reloaded = EntryStore::load(&path).unwrap();
    let entry = reloaded.entry(date()).unwrap();

    let reworded = Verse {
        book: "시편".to_string(),
        chapter: 23,
        verse: "1".to_string(),
        text: "B".to_string(),
    };
    assert!(entry.has_saved(&reworded));

    // And the rendering marks it
    let recommendation = Recommendation {
        verses: vec![reworded],
        traditional_hymns: vec![],
        ccms: vec![],
    };
    let rendered = render_recommendation(&recommendation, entry.saved_verse.as_ref());
    assert!(rendered.contains("시편 23:1 (saved)"));
}

/// A diary document with a mix of full and minimal entries loads unchanged.
#[test]
fn test_existing_diary_document_loads() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("diary.json");

    fs::write(
        &path,
        r#"{
            "2024-03-07": {
                "text": "감사한 하루",
                "savedVerse": {
                    "book": "빌립보서",
                    "chapter": 4,
                    "verse": "6-7",
                    "text": "아무 것도 염려하지 말고"
                },
                "emotions": ["gratitude"],
                "gratitude": "가족"
            },
            "2024-03-08": {
                "text": "",
                "savedVerse": null
            }
        }"#,
    )
    .unwrap();

    let store = EntryStore::load(&path).unwrap();
    assert_eq!(store.len(), 2);

    let entry = store.entry(date()).unwrap();
    assert_eq!(entry.text, "감사한 하루");
    assert_eq!(entry.saved_verse.as_ref().unwrap().verse, "6-7");
    assert_eq!(entry.emotions, vec!["gratitude"]);

    let other = store
        .entry(NaiveDate::from_ymd_opt(2024, 3, 8).unwrap())
        .unwrap();
    assert!(other.saved_verse.is_none());
    assert!(other.emotions.is_empty());
}

/// Edits on different dates stay independent through a reload cycle.
#[test]
fn test_multiple_dates_round_trip() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("diary.json");

    let second = NaiveDate::from_ymd_opt(2024, 3, 8).unwrap();

    let mut store = EntryStore::load(&path).unwrap();
    apply_update(
        &mut store,
        date(),
        EntryUpdate {
            text: Some("첫째 날".to_string()),
            emotions: Some(vec!["joy".to_string()]),
            ..Default::default()
        },
    )
    .unwrap();
    apply_update(
        &mut store,
        second,
        EntryUpdate {
            text: Some("둘째 날".to_string()),
            gratitude: Some("쉼".to_string()),
            ..Default::default()
        },
    )
    .unwrap();
    drop(store);

    let reloaded = EntryStore::load(&path).unwrap();
    assert_eq!(reloaded.entry(date()).unwrap().text, "첫째 날");
    assert_eq!(reloaded.entry(second).unwrap().text, "둘째 날");
    assert_eq!(
        reloaded.entry(second).unwrap().gratitude.as_deref(),
        Some("쉼")
    );
}
