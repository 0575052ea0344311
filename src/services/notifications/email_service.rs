//! # 이메일 발송 서비스
//!
//! `lettre`의 비동기 SMTP 전송(STARTTLS)으로 OTP와 주문 영수증을 보냅니다.
//! `SMTP_HOST`가 없으면 콘솔 출력 모드로 동작하며, 메일 본문을 로그로 남깁니다.
//!
//! ```text
//! send(recipient, subject, body)
//!   ├─ Message 빌드 (주소 검증)
//!   ├─ SMTP 설정 있음 → AsyncSmtpTransport::send
//!   └─ SMTP 설정 없음 → log::info!
//! ```

use std::sync::Arc;

use async_trait::async_trait;
use lettre::{
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
    message::{Mailbox, header::ContentType},
    transport::smtp::authentication::Credentials,
};
use once_cell::sync::OnceCell;

use crate::{
    config::MailConfig,
    core::errors::{AppError, AppResult},
    services::notifications::NotificationGateway,
};

pub struct EmailService {
    /// `None`이면 콘솔 출력 모드
    transport: Option<AsyncSmtpTransport<Tokio1Executor>>,
    /// `이름 <주소>` 형식의 발신자
    from: String,
}

static EMAIL_SERVICE_INSTANCE: OnceCell<Arc<EmailService>> = OnceCell::new();

impl EmailService {
    pub fn instance() -> Arc<Self> {
        EMAIL_SERVICE_INSTANCE
            .get_or_init(|| Arc::new(Self::from_config()))
            .clone()
    }

    fn from_config() -> Self {
        let from = format!("{} <{}>", MailConfig::from_name(), MailConfig::from_address());

        let transport = match MailConfig::smtp_host() {
            Some(host) => match Self::build_transport(&host) {
                Ok(transport) => {
                    log::info!("📧 SMTP 발송 활성화: {}:{}", host, MailConfig::smtp_port());
                    Some(transport)
                }
                Err(e) => {
                    log::error!("SMTP 설정 오류, 콘솔 출력 모드로 전환합니다: {}", e);
                    None
                }
            },
            None => {
                log::warn!("SMTP_HOST not set, emails will be written to the log");
                None
            }
        };

        Self { transport, from }
    }

    fn build_transport(
        host: &str,
    ) -> Result<AsyncSmtpTransport<Tokio1Executor>, lettre::transport::smtp::Error> {
        let mut builder = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(host)?
            .port(MailConfig::smtp_port());

        if let (Some(username), Some(password)) =
            (MailConfig::smtp_username(), MailConfig::smtp_password())
        {
            builder = builder.credentials(Credentials::new(username, password));
        }

        Ok(builder.build())
    }

    pub fn is_console_mode(&self) -> bool {
        self.transport.is_none()
    }

    fn build_message(&self, recipient: &str, subject: &str, body: &str) -> AppResult<Message> {
        let from: Mailbox = self
            .from
            .parse()
            .map_err(|e| AppError::ExternalServiceError(format!("잘못된 발신 주소: {}", e)))?;

        let to: Mailbox = recipient
            .parse()
            .map_err(|e| AppError::ExternalServiceError(format!("잘못된 수신 주소 {}: {}", recipient, e)))?;

        Message::builder()
            .from(from)
            .to(to)
            .subject(subject)
            .header(ContentType::TEXT_PLAIN)
            .body(body.to_string())
            .map_err(|e| AppError::ExternalServiceError(format!("메일 생성 실패: {}", e)))
    }
}

#[async_trait]
impl NotificationGateway for EmailService {
    async fn send(&self, recipient: &str, subject: &str, body: &str) -> AppResult<()> {
        let message = self.build_message(recipient, subject, body)?;

        match &self.transport {
            Some(transport) => {
                transport
                    .send(message)
                    .await
                    .map_err(|e| AppError::ExternalServiceError(format!("메일 발송 실패: {}", e)))?;

                log::info!("📧 메일 발송 완료: {} ({})", recipient, subject);
            }
            None => {
                log::info!(
                    "📧 [console] to={} subject={}\n{}",
                    recipient,
                    subject,
                    body
                );
            }
        }

        Ok(())
    }
}

fn email_service_constructor() -> Box<dyn std::any::Any + Send + Sync> {
    Box::new(EmailService::instance() as Arc<dyn std::any::Any + Send + Sync>)
}

inventory::submit! {
    crate::core::registry::ServiceRegistration {
        name: "email_service",
        constructor: email_service_constructor,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn console_service() -> EmailService {
        EmailService {
            transport: None,
            from: "easyclass <noreply@easyclass.local>".to_string(),
        }
    }

    #[test]
    fn test_invalid_recipient_rejected() {
        let service = console_service();
        let result = service.build_message("not an address", "hi", "body");
        assert!(matches!(result, Err(AppError::ExternalServiceError(_))));
    }

    #[actix_web::test]
    async fn test_console_mode_send_succeeds() {
        let service = console_service();
        assert!(service.is_console_mode());

        let result = service
            .send("budi@example.com", "E-receipt easyclass", "This is your receipt!")
            .await;
        assert!(result.is_ok());
    }
}
