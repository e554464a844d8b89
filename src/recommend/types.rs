//! Data model for recommendations.
//!
//! These types mirror the wire shape produced by the generation service, so
//! field names on the wire stay exactly `verses`, `traditionalHymns`, `ccms`
//! and `youtubeSearchQuery`. The same `Verse` type is embedded in persisted
//! diary entries as the saved verse.

use serde::{Deserialize, Serialize};

/// A single scripture citation with reference and full text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verse {
    /// Full Korean name of the book (e.g. "시편", never an abbreviation)
    pub book: String,
    /// Chapter number
    pub chapter: u32,
    /// Verse number or range (e.g. "1" or "1-3")
    pub verse: String,
    /// Full text of the passage
    pub text: String,
}

impl Verse {
    /// Returns true if both verses cite the same passage.
    ///
    /// Identity is the (book, chapter, verse) triple; the `text` field is
    /// ignored, so a re-recommended passage whose wording differs from the
    /// saved copy still counts as already saved.
    ///
    /// # Examples
    ///
    /// ```
    /// use solace::recommend::Verse;
    ///
    /// let saved = Verse {
    ///     book: "시편".to_string(),
    ///     chapter: 23,
    ///     verse: "1".to_string(),
    ///     text: "여호와는 나의 목자시니".to_string(),
    /// };
    /// let recommended = Verse { text: "다른 번역".to_string(), ..saved.clone() };
    /// assert!(saved.same_reference(&recommended));
    /// ```
    pub fn same_reference(&self, other: &Verse) -> bool {
        self.book == other.book && self.chapter == other.chapter && self.verse == other.verse
    }

    /// Formats the citation as "book chapter:verse".
    pub fn reference(&self) -> String {
        format!("{} {}:{}", self.book, self.chapter, self.verse)
    }
}

/// A hymn or song suggestion.
///
/// Purely advisory metadata with no identity beyond its position in the list.
/// Traditional hymns may carry a hymnal number; both kinds may carry a
/// YouTube search query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hymn {
    /// Song title (for CCM, title and artist)
    pub title: String,
    /// Hymnal number, traditional hymns only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number: Option<u32>,
    /// Search terms for finding the song on YouTube; never a full URL
    #[serde(
        rename = "youtubeSearchQuery",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub youtube_search_query: Option<String>,
}

/// The structured bundle returned for one diary entry.
///
/// A recommendation is valid only if all three lists are present on the wire
/// (each may be empty but not absent); `validate::parse_recommendation`
/// rejects structurally incomplete documents. The value is transient: only a
/// verse the user explicitly saves is persisted, into the owning diary entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    /// Recommended scripture passages, 2-3 expected
    pub verses: Vec<Verse>,
    /// Traditional hymn suggestions
    #[serde(rename = "traditionalHymns")]
    pub traditional_hymns: Vec<Hymn>,
    /// Contemporary Christian Music suggestions
    pub ccms: Vec<Hymn>,
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

    #[test]
    fn test_same_reference_ignores_text() {
        let saved = psalm("A");
        let recommended = psalm("B");

        assert!(saved.same_reference(&recommended));
        // Field-for-field equality still distinguishes them
        assert_ne!(saved, recommended);
    }

    #[test]
    fn test_same_reference_requires_full_triple() {
        let saved = psalm("A");

        let other_book = Verse {
            book: "창세기".to_string(),
            ..saved.clone()
        };
        assert!(!saved.same_reference(&other_book));

        let other_chapter = Verse {
            chapter: 24,
            ..saved.clone()
        };
        assert!(!saved.same_reference(&other_chapter));

        let other_verse = Verse {
            verse: "1-3".to_string(),
            ..saved.clone()
        };
        assert!(!saved.same_reference(&other_verse));
    }

    #[test]
    fn test_reference_formatting() {
        let verse = Verse {
            book: "시편".to_string(),
            chapter: 23,
            verse: "1-3".to_string(),
            text: String::new(),
        };
        assert_eq!(verse.reference(), "시편 23:1-3");
    }

    #[test]
    fn test_hymn_optional_fields_omitted_from_wire() {
        let hymn = Hymn {
            title: "주 하나님 지으신 모든 세계".to_string(),
            number: None,
            youtube_search_query: None,
        };

        let json = serde_json::to_value(&hymn).unwrap();
        assert_eq!(json.as_object().unwrap().len(), 1);
        assert!(json.get("number").is_none());
        assert!(json.get("youtubeSearchQuery").is_none());
    }

    #[test]
    fn test_wire_field_names() {
        let recommendation = Recommendation {
            verses: vec![],
            traditional_hymns: vec![Hymn {
                title: "내 주를 가까이 하게 함은".to_string(),
                number: Some(338),
                youtube_search_query: Some("내 주를 가까이 하게 함은".to_string()),
            }],
            ccms: vec![],
        };

        let json = serde_json::to_value(&recommendation).unwrap();
        assert!(json.get("traditionalHymns").is_some());
        assert!(json.get("ccms").is_some());
        assert!(json["traditionalHymns"][0].get("youtubeSearchQuery").is_some());
    }
}
