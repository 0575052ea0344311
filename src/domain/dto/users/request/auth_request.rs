//! 인증 요청관련 DTO
//!
//! 로그인과 OTP 인증 요청 정보를 매핑합니다.
use serde::Deserialize;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "사용자명을 입력해주세요"))]
    pub username: String,

    #[validate(length(min = 1, message = "비밀번호를 입력해주세요"))]
    pub password: String,
}

/// 이메일로 받은 OTP 코드 확인 요청
///
/// 코드는 사용자별로 확인하므로 사용자명을 함께 받습니다.
#[derive(Debug, Deserialize, Validate)]
pub struct OtpRequest {
    #[validate(length(min = 1, message = "사용자명을 입력해주세요"))]
    pub username: String,

    #[validate(length(min = 1, max = 10, message = "OTP 코드를 입력해주세요"))]
    pub otp: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct ResendOtpRequest {
    #[validate(length(min = 1, message = "사용자명을 입력해주세요"))]
    pub username: String,
}
