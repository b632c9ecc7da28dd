//! Shared fixtures for integration and property tests.

use episeek::Record;

/// Build a record with the given searchable fields.
pub fn record(serial: u32, title: &str, keywords: &[&str], characters: &[&str]) -> Record {
    Record {
        serial,
        title: title.to_string(),
        category: "동요".to_string(),
        season: "S1".to_string(),
        media_id: format!("media-{serial}"),
        keywords: keywords.iter().map(ToString::to_string).collect(),
        characters: characters.iter().map(ToString::to_string).collect(),
    }
}

/// A small but realistic slice of a kids' show catalog: Korean titles,
/// per-episode character lists, comma-joined keyword strings.
#[allow(dead_code)] // not every test binary uses the full fixture
pub fn sample_catalog() -> Vec<Record> {
    vec![
        record(
            1,
            "바다 탐험을 떠나요",
            &["바다", "탐험,모험"],
            &["뽀로로", "크롱"],
        ),
        record(
            2,
            "우주 친구를 만나요",
            &["우주,친구"],
            &["에디", "우주인"],
        ),
        record(3, "요리 대소동", &["요리", "주방"], &["루피", "에디"]),
        record(4, "겨울 썰매 대회", &["겨울", "썰매,눈"], &["뽀로로", "포비"]),
        record(5, "친구와 함께 춤을", &["친구", "춤"], &["루피", "패티"]),
    ]
}
