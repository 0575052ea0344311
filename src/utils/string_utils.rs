//! # 문자열 유틸리티
//!
//! 요청 값 정리와 MongoDB 정규식 검색에 쓰이는 공통 함수들입니다.

use serde::Deserialize;

use crate::core::errors::AppError;

/// 필수 문자열을 검증하고 앞뒤 공백을 제거합니다.
///
/// ```rust,ignore
/// let title = validate_required_string("  Rust Backend ", "강의 제목")?;
/// assert_eq!(title, "Rust Backend");
/// ```
pub fn validate_required_string(value: &str, field_name: &str) -> Result<String, AppError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::ValidationError(format!(
            "{}은(는) 필수입니다",
            field_name
        )));
    }
    Ok(trimmed.to_string())
}

/// 공백만 있는 선택 문자열을 `None`으로 정리합니다.
pub fn clean_optional_string(value: Option<String>) -> Option<String> {
    value.and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// serde 역직렬화 시 [`clean_optional_string`]을 적용합니다.
///
/// 필드가 없을 때도 동작하도록 `#[serde(default)]`와 함께 사용합니다.
pub fn deserialize_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(clean_optional_string(opt))
}

/// MongoDB `$regex`에 넣을 사용자 입력의 정규식 메타 문자를 이스케이프합니다.
pub fn escape_regex(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        if matches!(
            c,
            '\\' | '.' | '+' | '*' | '?' | '(' | ')' | '|' | '[' | ']' | '{' | '}' | '^' | '$'
        ) {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
