//! BSON 시각과 chrono 시각 간 변환

use chrono::{DateTime, Utc};

/// `mongodb::bson::DateTime`을 API 응답용 `chrono::DateTime<Utc>`로 변환합니다.
///
/// 표현 범위를 벗어난 값은 Unix epoch로 대체됩니다.
pub fn to_utc(value: mongodb::bson::DateTime) -> DateTime<Utc> {
    DateTime::<Utc>::from_timestamp_millis(value.timestamp_millis()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_utc_preserves_millis() {
        let bson = mongodb::bson::DateTime::from_millis(1_700_000_000_123);
        assert_eq!(to_utc(bson).timestamp_millis(), 1_700_000_000_123);
    }
}
