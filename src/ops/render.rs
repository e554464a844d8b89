//! Plain-text rendering of entries and recommendations for the CLI.

use chrono::NaiveDate;

use crate::journal::{date_key, DiaryEntry};
use crate::recommend::{display_label, Hymn, Recommendation, Verse};

/// Renders one diary entry as readable text.
pub fn render_entry(date: NaiveDate, entry: &DiaryEntry) -> String {
    let mut out = format!("{}\n{}\n", date_key(date), "-".repeat(10));

    if entry.text.trim().is_empty() {
        out.push_str("(no diary text)\n");
    } else {
        out.push_str(&entry.text);
        out.push('\n');
    }

    if !entry.emotions.is_empty() {
        let labels = entry
            .emotions
            .iter()
            .map(|tag| display_label(tag))
            .collect::<Vec<_>>()
            .join(", ");
        out.push_str(&format!("\nEmotions: {}\n", labels));
    }

    if let Some(gratitude) = &entry.gratitude {
        out.push_str(&format!("Gratitude: {}\n", gratitude));
    }

    if let Some(verse) = &entry.saved_verse {
        out.push_str(&format!(
            "\nSaved verse: {}\n  {}\n",
            verse.reference(),
            verse.text
        ));
    }

    out
}

/// Renders a recommendation, marking the entry's already-saved verse.
///
/// The saved marker uses verse reference identity, so a passage the user
/// saved earlier stays marked even when the newly recommended wording
/// differs.
pub fn render_recommendation(recommendation: &Recommendation, saved: Option<&Verse>) -> String {
    let mut out = String::from("Verses:\n");

    for (i, verse) in recommendation.verses.iter().enumerate() {
        let marker = match saved {
            Some(saved) if saved.same_reference(verse) => " (saved)",
            _ => "",
        };
        out.push_str(&format!(
            "  {}. {}{}\n     {}\n",
            i + 1,
            verse.reference(),
            marker,
            verse.text
        ));
    }

    out.push_str("\nTraditional hymns:\n");
    for hymn in &recommendation.traditional_hymns {
        out.push_str(&render_song(hymn, true));
    }

    out.push_str("\nCCM:\n");
    for song in &recommendation.ccms {
        out.push_str(&render_song(song, false));
    }

    out
}

fn render_song(song: &Hymn, with_number: bool) -> String {
    let mut line = format!("  - {}", song.title);
    if with_number {
        if let Some(number) = song.number {
            line.push_str(&format!(" (no. {})", number));
        }
    }
    if let Some(query) = &song.youtube_search_query {
        line.push_str(&format!(" [search: {}]", query));
    }
    line.push('\n');
    line
}

#[cfg(test)]
mod tests {
    use super::*;

    fn psalm(text: &str) -> Verse {
        Verse {
            book: "시편".to_string(),
            chapter: 23,
            verse: "1".to_string(),
            text: text.to_string(),
        }
    }

    fn sample_recommendation() -> Recommendation {
        Recommendation {
            verses: vec![psalm("여호와는 나의 목자시니")],
            traditional_hymns: vec![Hymn {
                title: "내 주를 가까이 하게 함은".to_string(),
                number: Some(338),
                youtube_search_query: Some("내 주를 가까이 하게 함은".to_string()),
            }],
            ccms: vec![Hymn {
                title: "어노인팅 - 내가 주인 삼은".to_string(),
                number: None,
                youtube_search_query: None,
            }],
        }
    }

    #[test]
    fn test_entry_rendering_includes_all_fields() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();
        let entry = DiaryEntry {
            text: "오늘의 일기".to_string(),
            saved_verse: Some(psalm("여호와는 나의 목자시니")),
            emotions: vec!["joy".to_string(), "nostalgia".to_string()],
            gratitude: Some("가족".to_string()),
        };

        let rendered = render_entry(date, &entry);
        assert!(rendered.contains("2024-03-07"));
        assert!(rendered.contains("오늘의 일기"));
        // Known tags display as labels, unknown pass through
        assert!(rendered.contains("기쁨, nostalgia"));
        assert!(rendered.contains("Gratitude: 가족"));
        assert!(rendered.contains("시편 23:1"));
    }

    #[test]
    fn test_empty_entry_rendering() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();
        let rendered = render_entry(date, &DiaryEntry::default());
        assert!(rendered.contains("(no diary text)"));
        assert!(!rendered.contains("Emotions:"));
        assert!(!rendered.contains("Saved verse:"));
    }

    #[test]
    fn test_saved_verse_marked_despite_different_text() {
        // The earlier-saved copy has different wording than the new
        // recommendation; the marker must still appear
        let saved = psalm("A");
        let rendered = render_recommendation(&sample_recommendation(), Some(&saved));

        assert!(rendered.contains("시편 23:1 (saved)"));
    }

    #[test]
    fn test_no_marker_without_saved_verse() {
        let rendered = render_recommendation(&sample_recommendation(), None);
        assert!(!rendered.contains("(saved)"));
    }

    #[test]
    fn test_recommendation_rendering_sections() {
        let rendered = render_recommendation(&sample_recommendation(), None);
        assert!(rendered.contains("Verses:"));
        assert!(rendered.contains("1. 시편 23:1"));
        assert!(rendered.contains("(no. 338)"));
        assert!(rendered.contains("[search: 내 주를 가까이 하게 함은]"));
        assert!(rendered.contains("어노인팅 - 내가 주인 삼은"));
    }
}
