//! # 회원가입 요청 DTO
//!
//! ## 검증 규칙
//!
//! | 필드 | 규칙 |
//! |------|------|
//! | `username` | 3-20자, 영문/숫자/언더스코어 |
//! | `email` | 이메일 형식 |
//! | `password` | 6-20자 |
//! | `phone_number` | 1-15자, 숫자와 선행 `+`만 허용 |
//! | `country`, `city` | 선택, 최대 50자 |
//! | `roles` | 선택, `"admin"` 외의 값은 일반 사용자로 처리 (`"admin"`은 `ALLOW_ADMIN_SIGNUP`일 때만 허용) |
//!
//! 사용자명/이메일 중복 여부는 서비스 계층에서 검증합니다.

use serde::Deserialize;
use validator::{Validate, ValidationError};

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SignupRequest {
    #[validate(length(min = 3, max = 20, message = "사용자명은 3-20자 사이여야 합니다"))]
    #[validate(custom(function = "validate_username"))]
    pub username: String,

    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: String,

    #[validate(length(min = 6, max = 20, message = "비밀번호는 6-20자 사이여야 합니다"))]
    pub password: String,

    #[validate(length(min = 1, max = 15, message = "전화번호는 1-15자 사이여야 합니다"))]
    #[validate(custom(function = "validate_phone_number"))]
    pub phone_number: String,

    #[validate(length(max = 50, message = "국가명은 최대 50자입니다"))]
    pub country: Option<String>,

    #[validate(length(max = 50, message = "도시명은 최대 50자입니다"))]
    pub city: Option<String>,

    pub roles: Option<Vec<String>>,
}

fn validate_username(username: &str) -> Result<(), ValidationError> {
    if !username.chars().all(|c| c.is_alphanumeric() || c == '_') {
        return Err(ValidationError::new("invalid_username")
            .with_message("사용자명은 알파벳, 숫자, 언더스코어만 사용 가능합니다".into()));
    }
    Ok(())
}

fn validate_phone_number(phone: &str) -> Result<(), ValidationError> {
    let digits = phone.strip_prefix('+').unwrap_or(phone);
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err(ValidationError::new("invalid_phone_number")
            .with_message("전화번호는 숫자만 입력 가능합니다".into()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> SignupRequest {
        SignupRequest {
            username: "budi_01".to_string(),
            email: "budi@example.com".to_string(),
            password: "secret1".to_string(),
            phone_number: "+628123456".to_string(),
            country: Some("Indonesia".to_string()),
            city: None,
            roles: None,
        }
    }

    #[test]
    fn test_valid_signup_passes() {
        assert!(valid_request().validate().is_ok());
    }

    #[test]
    fn test_username_length_bounds() {
        let mut request = valid_request();
        request.username = "ab".to_string();
        assert!(request.validate().is_err());

        request.username = "a".repeat(21);
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_password_length_bounds() {
        let mut request = valid_request();
        request.password = "12345".to_string();
        assert!(request.validate().is_err());

        request.password = "x".repeat(21);
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_invalid_email_and_phone() {
        let mut request = valid_request();
        request.email = "not-an-email".to_string();
        assert!(request.validate().is_err());

        let mut request = valid_request();
        request.phone_number = "08-12".to_string();
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_city_too_long() {
        let mut request = valid_request();
        request.city = Some("c".repeat(51));
        assert!(request.validate().is_err());
    }
}
