//! 프로필 수정 요청 DTO
//!
//! 전달된 필드만 수정됩니다.

use serde::Deserialize;
use validator::Validate;

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateProfileRequest {
    #[validate(length(min = 1, max = 15, message = "전화번호는 1-15자 사이여야 합니다"))]
    pub phone_number: Option<String>,

    #[validate(length(max = 50, message = "국가명은 최대 50자입니다"))]
    pub country: Option<String>,

    #[validate(length(max = 50, message = "도시명은 최대 50자입니다"))]
    pub city: Option<String>,
}

impl UpdateProfileRequest {
    pub fn is_empty(&self) -> bool {
        self.phone_number.is_none() && self.country.is_none() && self.city.is_none()
    }
}
