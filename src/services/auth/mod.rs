//! 인증 및 보안 서비스 모듈
//!
//! - [`AuthService`] - 회원가입, 로그인, OTP 인증
//! - [`OtpService`] - 이메일 OTP 발급/검증 (SHA-256 다이제스트 저장)
//! - [`TokenService`] - HS256 JWT 액세스 토큰
//!
//! ```rust,ignore
//! use crate::services::auth::AuthService;
//!
//! let jwt = AuthService::instance().signin(request).await?;
//! ```

pub mod auth_service;
pub mod otp_service;
pub mod token_service;

pub use auth_service::AuthService;
pub use otp_service::OtpService;
pub use token_service::TokenService;
