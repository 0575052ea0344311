//! 메일 발송(SMTP) 설정
//!
//! `SMTP_HOST`가 설정되지 않으면 이메일 서비스는 콘솔 출력 모드로 동작합니다.
//!
//! ```bash
//! export SMTP_HOST="smtp.gmail.com"
//! export SMTP_PORT="587"
//! export SMTP_USERNAME="noreply@easyclass.io"
//! export SMTP_PASSWORD="app-password"
//! export MAIL_FROM="noreply@easyclass.io"
//! export MAIL_FROM_NAME="easyclass"
//! ```

use std::env;

use super::data_config::env_or;

pub struct MailConfig;

impl MailConfig {
    pub fn smtp_host() -> Option<String> {
        env::var("SMTP_HOST").ok().filter(|host| !host.trim().is_empty())
    }

    /// 기본값: 587 (STARTTLS)
    pub fn smtp_port() -> u16 {
        env_or("SMTP_PORT", 587)
    }

    pub fn smtp_username() -> Option<String> {
        env::var("SMTP_USERNAME").ok()
    }

    pub fn smtp_password() -> Option<String> {
        env::var("SMTP_PASSWORD").ok()
    }

    /// 발신 주소 (기본값: "noreply@easyclass.local")
    pub fn from_address() -> String {
        env::var("MAIL_FROM").unwrap_or_else(|_| "noreply@easyclass.local".to_string())
    }

    /// 발신자 표시 이름 (기본값: "easyclass")
    pub fn from_name() -> String {
        env::var("MAIL_FROM_NAME").unwrap_or_else(|_| "easyclass".to_string())
    }
}
