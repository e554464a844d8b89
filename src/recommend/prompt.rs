//! The prompt template and system instruction for recommendation requests.
//!
//! The wording here is a configuration artifact: it encodes the business
//! rules of the recommendation (how many passages and songs, full Korean book
//! names, search queries instead of URLs, translation fidelity) and is tested
//! on its own, independent of any CLI code, so edits to the persuasive
//! phrasing cannot silently break the required output shape.

use super::emotions::display_label;

/// System instruction establishing the guide persona and fidelity rules.
pub const SYSTEM_INSTRUCTION: &str = "You are a wise and compassionate theological guide. \
Your purpose is to provide comfort and guidance from the Christian Bible, traditional hymns, \
and Contemporary Christian Music (CCM) based on a user's diary entry. All Bible verse \
recommendations must be from the canonical Christian Bible and should not be fabricated. \
Your responses must be in Korean.";

/// Phrase interpolated when the user selected no emotions.
pub const NO_EMOTIONS_PHRASE: &str = "오늘의 감정은 따로 선택하지 않았습니다.";

/// Phrase interpolated when the user wrote no gratitude note.
pub const NO_GRATITUDE_PHRASE: &str = "감사 제목은 따로 적지 않았습니다.";

/// Formats the emotion tags into the prompt's emotion sentence.
///
/// Known tags are rendered with their Korean labels, unknown tags as-is.
/// An empty selection degrades to [`NO_EMOTIONS_PHRASE`] rather than an
/// empty list artifact.
pub fn emotion_summary(emotions: &[String]) -> String {
    if emotions.is_empty() {
        return NO_EMOTIONS_PHRASE.to_string();
    }

    let labels = emotions
        .iter()
        .map(|tag| display_label(tag))
        .collect::<Vec<_>>()
        .join(", ");
    format!("참고로 사용자의 오늘의 감정은 '{}'입니다.", labels)
}

/// Formats the gratitude note into the prompt's gratitude sentence.
///
/// A missing or whitespace-only note degrades to [`NO_GRATITUDE_PHRASE`].
pub fn gratitude_summary(gratitude: Option<&str>) -> String {
    match gratitude.map(str::trim).filter(|note| !note.is_empty()) {
        Some(note) => format!("사용자가 적은 오늘의 감사 제목은 \"{}\"입니다.", note),
        None => NO_GRATITUDE_PHRASE.to_string(),
    }
}

/// Builds the full instruction text for one recommendation request.
///
/// The diary text is embedded verbatim; the emotion and gratitude sentences
/// come from [`emotion_summary`] and [`gratitude_summary`].
///
/// # Arguments
///
/// * `diary_text` - The user's diary entry, non-empty after trimming
///   (enforced by the calling layer, not here)
/// * `emotions` - Selected emotion tags, possibly empty
/// * `gratitude` - Optional gratitude note
pub fn build_prompt(diary_text: &str, emotions: &[String], gratitude: Option<&str>) -> String {
    format!(
        "사용자의 다음 일기 내용을 분석하여, 위로와 힘이 되는 성경 구절 2-3개, \
         어울리는 전통 찬송가 2개, 그리고 현대적인 CCM 2곡을 추천해주세요. {} {} \
         전통 찬송가와 CCM에 대해서는, 추천하는 곡을 YouTube에서 찾기 위한 검색어를 \
         'youtubeSearchQuery' 필드에 포함시켜 주세요 \
         (예: '내 주를 가까이 하게 함은', '어노인팅 내가 주인 삼은'). \
         절대로 URL 전체를 생성하지 마세요. 응답은 반드시 JSON 형식이어야 합니다. \
         성경책 이름은 한국어 약어가 아닌 전체 이름(예: 창세기, 시편)으로 제공해주세요. \
         결과는 매번 다양하고 창의적으로 제안해주세요. \
         결과는 반드시 정의된 JSON 스키마를 따라야 합니다. 사용자 일기: \"{}\"",
        emotion_summary(emotions),
        gratitude_summary(gratitude),
        diary_text
    )
}
