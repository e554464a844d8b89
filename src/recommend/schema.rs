//! The JSON schema constraining the model's output shape.
//!
//! The schema is sent with every request as the Gemini `responseSchema`, so
//! the service is asked for exactly the three top-level lists the validator
//! requires. The validator shares [`REQUIRED_FIELDS`] with this module; the
//! two must not drift apart.

use serde_json::{json, Value};

/// The three top-level lists every recommendation must carry.
pub const REQUIRED_FIELDS: [&str; 3] = ["verses", "traditionalHymns", "ccms"];

/// Builds the response schema for a recommendation request.
///
/// The shape mirrors the data model in [`super::types`]: each verse requires
/// book, chapter, verse and text; hymns and CCMs require a title and a
/// YouTube search query, with the hymnal number optional.
pub fn response_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "verses": {
                "type": "ARRAY",
                "description": "추천 성경 구절 목록",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "book": { "type": "STRING", "description": "성경책의 전체 이름 (예: '시편')" },
                        "chapter": { "type": "INTEGER", "description": "장 번호" },
                        "verse": { "type": "STRING", "description": "절 번호 또는 범위 (예: '1' or '1-3')" },
                        "text": { "type": "STRING", "description": "구절의 전체 텍스트" }
                    },
                    "required": ["book", "chapter", "verse", "text"]
                }
            },
            "traditionalHymns": {
                "type": "ARRAY",
                "description": "추천 전통 찬송가 목록",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "title": { "type": "STRING", "description": "전통 찬송가 제목" },
                        "number": { "type": "INTEGER", "description": "찬송가 장 번호 (없는 경우 생략 가능)" },
                        "youtubeSearchQuery": { "type": "STRING", "description": "추천 찬송가를 YouTube에서 검색하기 위한 검색어 (예: '내 주를 가까이 하게 함은')" }
                    },
                    "required": ["title", "youtubeSearchQuery"]
                }
            },
            "ccms": {
                "type": "ARRAY",
                "description": "추천 CCM(현대 기독교 음악) 목록",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "title": { "type": "STRING", "description": "CCM 곡 제목과 아티스트" },
                        "youtubeSearchQuery": { "type": "STRING", "description": "추천 CCM을 YouTube에서 검색하기 위한 검색어 (예: '어노인팅 내가 주인 삼은')" }
                    },
                    "required": ["title", "youtubeSearchQuery"]
                }
            }
        },
        "required": REQUIRED_FIELDS
    })
}
