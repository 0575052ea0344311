//! # Authentication Configuration Module
//!
//! JWT 액세스 토큰과 이메일 OTP 인증 관련 설정을 관리합니다.
//!
//! ## 환경 변수
//!
//! ```bash
//! export JWT_SECRET="your-super-secret-jwt-key"
//! export JWT_EXPIRATION_HOURS="24"
//!
//! export OTP_EXPIRATION_MINUTES="5"
//! export OTP_LENGTH="6"
//!
//! export ALLOW_ADMIN_SIGNUP="false"
//! ```

use std::env;

use super::data_config::env_or;

/// JSON Web Token (JWT) 관련 설정
///
/// 토큰은 HS256으로 서명되며 subject에는 사용자명이 들어갑니다.
pub struct JwtConfig;

impl JwtConfig {
    /// JWT 서명에 사용할 비밀키를 반환합니다.
    ///
    /// 환경 변수가 설정되지 않은 경우 개발용 기본값을 사용하며 경고 로그가 출력됩니다.
    ///
    /// ```bash
    /// openssl rand -base64 32
    /// ```
    pub fn secret() -> String {
        env::var("JWT_SECRET").unwrap_or_else(|_| {
            log::warn!("JWT_SECRET not set, using default (not secure for production!)");
            "your-secret-key".to_string()
        })
    }

    /// 액세스 토큰 만료 시간 (시간 단위, 기본값: 24)
    pub fn expiration_hours() -> i64 {
        env_or("JWT_EXPIRATION_HOURS", 24)
    }
}

/// 이메일 OTP(One-Time Password) 설정
pub struct OtpConfig;

impl OtpConfig {
    /// OTP 유효 시간 (분 단위, `OTP_EXPIRATION_MINUTES`, 기본값: 5)
    pub fn expiration_minutes() -> i64 {
        env_or("OTP_EXPIRATION_MINUTES", 5)
    }

    /// OTP 자릿수 (`OTP_LENGTH`, 기본값: 6, 4-10 범위로 제한)
    pub fn length() -> usize {
        env_or("OTP_LENGTH", 6usize).clamp(4, 10)
    }
}

/// 회원가입 정책
pub struct SignupConfig;

impl SignupConfig {
    /// 회원가입 요청에서 `"admin"` 역할을 허용할지 여부 (`ALLOW_ADMIN_SIGNUP`, 기본값: false)
    ///
    /// 초기 관리자 계정을 만들 때만 켜고, 운영 중에는 꺼 둡니다.
    pub fn allow_admin_signup() -> bool {
        env_or("ALLOW_ADMIN_SIGNUP", false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_otp_defaults() {
        if env::var("OTP_LENGTH").is_err() {
            assert_eq!(OtpConfig::length(), 6);
        }
        if env::var("OTP_EXPIRATION_MINUTES").is_err() {
            assert_eq!(OtpConfig::expiration_minutes(), 5);
        }
    }

    #[test]
    fn test_admin_signup_is_closed_by_default() {
        if env::var("ALLOW_ADMIN_SIGNUP").is_err() {
            assert!(!SignupConfig::allow_admin_signup());
        }
    }

    #[test]
    fn test_jwt_expiration_default() {
        if env::var("JWT_EXPIRATION_HOURS").is_err() {
            assert_eq!(JwtConfig::expiration_hours(), 24);
        }
    }
}
