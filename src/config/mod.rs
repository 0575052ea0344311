//! # Configuration Module
//!
//! 환경 변수 기반의 설정값들을 중앙집중식으로 관리합니다.
//! 모든 설정은 정적 접근자(`JwtConfig::secret()` 등)로 제공되며,
//! 값이 없거나 파싱할 수 없으면 개발용 기본값을 사용합니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 서버, 데이터베이스, 캐시, 카탈로그, 비밀번호 해싱
//! - [`auth_config`] - JWT, OTP, 회원가입 정책
//! - [`mail_config`] - SMTP 메일 발송
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # 서버
//! export HOST="0.0.0.0"
//! export PORT="8080"
//!
//! # 저장소
//! export MONGODB_URI="mongodb://localhost:27017"
//! export DATABASE_NAME="easyclass"
//! export REDIS_URL="redis://localhost:6379"
//!
//! # 인증
//! export JWT_SECRET="your-super-secret-key"
//! export BCRYPT_COST="12"
//! export OTP_EXPIRATION_MINUTES="5"
//!
//! # 메일 (미설정 시 콘솔 출력)
//! export SMTP_HOST="smtp.example.com"
//! ```

pub mod auth_config;
pub mod data_config;
pub mod mail_config;

pub use auth_config::*;
pub use data_config::*;
pub use mail_config::*;
