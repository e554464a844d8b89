//! The fixed emotion tag vocabulary and its Korean display labels.
//!
//! Diary entries carry emotion tags as plain strings so that documents written
//! by older versions (or by hand) keep loading; the prompt builder maps known
//! tags through this vocabulary to their display labels and passes unknown
//! tags through as-is.

/// An emotion from the fixed eleven-value vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emotion {
    Joy,
    Gratitude,
    Peace,
    Excitement,
    Contentment,
    Sadness,
    Anger,
    Anxiety,
    Loneliness,
    Tiredness,
    Disappointment,
}

impl Emotion {
    /// Every emotion in the vocabulary, in display order.
    pub const ALL: [Emotion; 11] = [
        Emotion::Joy,
        Emotion::Gratitude,
        Emotion::Peace,
        Emotion::Excitement,
        Emotion::Contentment,
        Emotion::Sadness,
        Emotion::Anger,
        Emotion::Anxiety,
        Emotion::Loneliness,
        Emotion::Tiredness,
        Emotion::Disappointment,
    ];

    /// The stable tag stored in diary entries and accepted on the CLI.
    pub fn tag(&self) -> &'static str {
        match self {
            Emotion::Joy => "joy",
            Emotion::Gratitude => "gratitude",
            Emotion::Peace => "peace",
            Emotion::Excitement => "excitement",
            Emotion::Contentment => "contentment",
            Emotion::Sadness => "sadness",
            Emotion::Anger => "anger",
            Emotion::Anxiety => "anxiety",
            Emotion::Loneliness => "loneliness",
            Emotion::Tiredness => "tiredness",
            Emotion::Disappointment => "disappointment",
        }
    }

    /// The Korean display label interpolated into prompts.
    pub fn label(&self) -> &'static str {
        match self {
            Emotion::Joy => "기쁨",
            Emotion::Gratitude => "감사",
            Emotion::Peace => "평안",
            Emotion::Excitement => "설렘",
            Emotion::Contentment => "만족",
            Emotion::Sadness => "슬픔",
            Emotion::Anger => "화남",
            Emotion::Anxiety => "불안",
            Emotion::Loneliness => "외로움",
            Emotion::Tiredness => "피곤",
            Emotion::Disappointment => "실망",
        }
    }

    /// Looks up an emotion by its stable tag.
    ///
    /// Returns `None` for tags outside the vocabulary; callers that format
    /// labels should fall back to the raw tag in that case.
    pub fn from_tag(tag: &str) -> Option<Emotion> {
        Emotion::ALL.iter().copied().find(|e| e.tag() == tag)
    }
}

/// Maps a raw emotion tag to its display label.
///
/// Known tags resolve to their fixed Korean label; unknown tags pass through
/// unchanged.
///
/// # Examples
///
/// ```
/// use solace::recommend::display_label;
///
/// assert_eq!(display_label("joy"), "기쁨");
/// assert_eq!(display_label("nostalgia"), "nostalgia");
/// ```
pub fn display_label(tag: &str) -> &str {
    match Emotion::from_tag(tag) {
        Some(emotion) => emotion.label(),
        None => tag,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vocabulary_size() {
        assert_eq!(Emotion::ALL.len(), 11);
    }

    #[test]
    fn test_tag_round_trip() {
        for emotion in Emotion::ALL {
            assert_eq!(Emotion::from_tag(emotion.tag()), Some(emotion));
        }
    }

    #[test]
    fn test_labels_are_korean() {
        assert_eq!(Emotion::Joy.label(), "기쁨");
        assert_eq!(Emotion::Gratitude.label(), "감사");
        assert_eq!(Emotion::Peace.label(), "평안");
        assert_eq!(Emotion::Excitement.label(), "설렘");
        assert_eq!(Emotion::Contentment.label(), "만족");
        assert_eq!(Emotion::Sadness.label(), "슬픔");
        assert_eq!(Emotion::Anger.label(), "화남");
        assert_eq!(Emotion::Anxiety.label(), "불안");
        assert_eq!(Emotion::Loneliness.label(), "외로움");
        assert_eq!(Emotion::Tiredness.label(), "피곤");
        assert_eq!(Emotion::Disappointment.label(), "실망");
    }

    #[test]
    fn test_unknown_tag_passes_through() {
        assert_eq!(display_label("hope"), "hope");
        assert_eq!(display_label(""), "");
    }

    #[test]
    fn test_from_tag_rejects_labels() {
        // The Korean labels are display-only, not tags
        assert_eq!(Emotion::from_tag("기쁨"), None);
    }
}
