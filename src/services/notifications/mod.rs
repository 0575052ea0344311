//! 알림 발송 모듈
//!
//! 서비스 계층은 [`NotificationGateway`] trait에만 의존하며,
//! 운영 환경에서는 SMTP 기반 [`EmailService`]가 주입됩니다.
//!
//! ```rust,ignore
//! let gateway: Arc<dyn NotificationGateway> = EmailService::instance();
//! gateway.send("budi@example.com", "E-receipt easyclass", &body).await?;
//! ```

pub mod email_service;

pub use email_service::EmailService;

use async_trait::async_trait;

use crate::core::errors::AppResult;

/// 단일 수신자에게 텍스트 메시지를 보내는 알림 포트
#[async_trait]
pub trait NotificationGateway: Send + Sync {
    /// 메시지를 동기적으로 발송합니다. 실패 시 `ExternalServiceError`를 반환합니다.
    async fn send(&self, recipient: &str, subject: &str, body: &str) -> AppResult<()>;
}
