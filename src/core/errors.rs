//! # Application Error Handling System
//!
//! 강의 마켓플레이스 백엔드의 통합 에러 처리 시스템입니다.
//! `thiserror`로 에러 타입을 정의하고 `actix_web::ResponseError`를 구현하여
//! 모든 계층의 에러가 일관된 JSON 응답으로 변환되도록 합니다.
//!
//! ## 설계 원칙
//!
//! ### 1. 명시적인 결과 타입
//! - "찾을 수 없음"은 예외가 아니라 `AppError::NotFound` 변형으로 전달됩니다.
//! - "이미 주문한 강의"는 에러가 아니라 주문 서비스의 정상 결과(`OrderOutcome`)입니다.
//! - 영수증 발송 실패는 주문 ID를 포함한 `AppError::NotificationError`로 전달되어
//!   "주문은 기록됨, 영수증 실패"와 "주문 기록 안 됨"을 호출자가 구분할 수 있습니다.
//!
//! ### 2. 자동 HTTP 응답 변환
//! - 모든 에러는 `{"error": "..."}` 형식의 JSON 본문으로 응답됩니다.
//! - 알림 실패 응답에는 `order_id` 필드가 추가됩니다.
//!
//! ## HTTP 응답 매핑
//!
//! | AppError | HTTP Status | 사용 시나리오 |
//! |----------|-------------|---------------|
//! | `ValidationError` | 400 Bad Request | 입력값 검증 실패, OTP 불일치/만료 |
//! | `AuthenticationError` | 401 Unauthorized | 로그인 실패, 토큰 만료 |
//! | `AuthorizationError` | 403 Forbidden | 역할 부족 |
//! | `NotFound` | 404 Not Found | 사용자/강의 없음 |
//! | `ConflictError` | 409 Conflict | 중복 사용자명, 중복 강의 코드 |
//! | `ExternalServiceError` | 502 Bad Gateway | SMTP 등 외부 연동 실패 |
//! | `NotificationError` | 502 Bad Gateway | 주문 저장 후 영수증 발송 실패 |
//! | `DatabaseError` | 500 Internal Server Error | MongoDB 오류 |
//! | `RedisError` | 500 Internal Server Error | 캐시 오류 |
//! | `InternalError` | 500 Internal Server Error | 예상치 못한 오류 |

use actix_web::http::StatusCode;
use thiserror::Error;

/// 애플리케이션 전역 에러 타입
///
/// 서비스와 리포지토리의 모든 메서드는 `Result<T, AppError>`를 반환하며,
/// 핸들러에서 `?`로 전파하면 자동으로 HTTP 응답으로 변환됩니다.
///
/// ```rust,ignore
/// let course = course_store.find_by_title(title).await?
///     .ok_or_else(|| AppError::NotFound("Course not found!".to_string()))?;
/// ```
#[derive(Error, Debug)]
pub enum AppError {
    /// 데이터베이스 관련 에러 (500 Internal Server Error)
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// Redis 캐시 관련 에러 (500 Internal Server Error)
    ///
    /// 리포지토리는 캐시 실패를 요청 실패로 전파하지 않으므로
    /// 주로 연결 초기화 과정에서만 발생합니다.
    #[error("Redis error: {0}")]
    RedisError(String),

    /// 입력값 검증 에러 (400 Bad Request)
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 리소스 찾을 수 없음 에러 (404 Not Found)
    #[error("Not found: {0}")]
    NotFound(String),

    /// 충돌/중복 에러 (409 Conflict)
    #[error("Conflict error: {0}")]
    ConflictError(String),

    /// 인증 실패 에러 (401 Unauthorized)
    #[error("Authentication error: {0}")]
    AuthenticationError(String),

    /// 권한 부족 에러 (403 Forbidden)
    #[error("Authorization error: {0}")]
    AuthorizationError(String),

    /// 외부 서비스 에러 (502 Bad Gateway)
    #[error("External service error: {0}")]
    ExternalServiceError(String),

    /// 주문은 저장되었으나 영수증 발송에 실패한 경우 (502 Bad Gateway)
    ///
    /// 주문 행은 이미 커밋된 상태이므로 클라이언트는 `order_id`로
    /// 주문 내역을 확인할 수 있습니다. 자동 재시도는 없습니다.
    #[error("Order {order_id} recorded but receipt delivery failed: {message}")]
    NotificationError {
        /// 저장된 주문의 ID
        order_id: String,
        /// 발송 실패 원인
        message: String,
    },

    /// 내부 서버 에러 (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// 에러에 해당하는 HTTP 상태 코드
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::ConflictError(_) => StatusCode::CONFLICT,
            AppError::AuthenticationError(_) => StatusCode::UNAUTHORIZED,
            AppError::AuthorizationError(_) => StatusCode::FORBIDDEN,
            AppError::ExternalServiceError(_) | AppError::NotificationError { .. } => {
                StatusCode::BAD_GATEWAY
            }
            AppError::DatabaseError(_) | AppError::RedisError(_) | AppError::InternalError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        self.status()
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 5xx 에러는 서버 로그에 남기고, 클라이언트에는 메시지만 전달합니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        let status = self.status();

        if status.is_server_error() {
            log::error!("요청 처리 실패 ({}): {}", status, self);
        }

        let body = match self {
            AppError::NotificationError { order_id, .. } => serde_json::json!({
                "error": self.to_string(),
                "order_id": order_id,
            }),
            _ => serde_json::json!({
                "error": self.to_string()
            }),
        };

        actix_web::HttpResponse::build(status).json(body)
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
///
/// ```rust,ignore
/// let hash = bcrypt::hash(&password, cost).context("비밀번호 해싱 실패")?;
/// ```
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }
}
