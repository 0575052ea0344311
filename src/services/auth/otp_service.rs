//! # 이메일 OTP 서비스
//!
//! 회원가입 직후 발급되는 숫자 인증 코드를 관리합니다.
//!
//! ```text
//! issue(user)
//!   ├─ 숫자 코드 생성 (UUIDv4 바이트 기반)
//!   ├─ SHA-256 다이제스트만 저장 (사용자당 1개, 기존 코드 교체)
//!   └─ 평문 코드를 이메일로 발송
//!
//! verify(user_id, code)
//!   ├─ (user_id, 다이제스트)로 조회 → 없음: "OTP different!"
//!   ├─ 만료 → 삭제 후 "OTP expired!"
//!   └─ 유효 → 삭제(1회용) 후 사용자 ID 반환
//! ```

use std::sync::Arc;

use mongodb::bson::{DateTime, oid::ObjectId};
use once_cell::sync::OnceCell;
use sha2::{Digest, Sha256};

use crate::{
    config::OtpConfig,
    core::errors::{AppError, AppResult},
    domain::entities::{otp::one_time_password::OneTimePassword, users::user::User},
    repositories::{otp::OtpRepository, stores::OtpStore},
    services::notifications::{EmailService, NotificationGateway},
};

const OTP_SUBJECT: &str = "easyclass email verification";

pub struct OtpService {
    otp_store: Arc<dyn OtpStore>,
    gateway: Arc<dyn NotificationGateway>,
}

static OTP_SERVICE_INSTANCE: OnceCell<Arc<OtpService>> = OnceCell::new();

impl OtpService {
    pub fn new(otp_store: Arc<dyn OtpStore>, gateway: Arc<dyn NotificationGateway>) -> Self {
        Self { otp_store, gateway }
    }

    pub fn instance() -> Arc<Self> {
        OTP_SERVICE_INSTANCE
            .get_or_init(|| {
                Arc::new(Self::new(OtpRepository::instance(), EmailService::instance()))
            })
            .clone()
    }

    /// `length`자리 숫자 코드를 생성합니다. (최대 16자리)
    pub fn generate_code(length: usize) -> String {
        uuid::Uuid::new_v4()
            .as_bytes()
            .iter()
            .take(length)
            .map(|byte| char::from(b'0' + byte % 10))
            .collect()
    }

    /// 저장용 SHA-256 hex 다이제스트
    pub fn digest(code: &str) -> String {
        format!("{:x}", Sha256::digest(code.trim().as_bytes()))
    }

    fn message_body(code: &str, valid_minutes: i64) -> String {
        format!(
            "Your easyclass verification code is: {}\nThe code expires in {} minutes.",
            code, valid_minutes
        )
    }

    /// 새 OTP를 발급해 사용자의 기존 OTP를 대체하고 이메일로 보냅니다.
    pub async fn issue(&self, user: &User) -> AppResult<()> {
        let user_id = user
            .id
            .ok_or_else(|| AppError::InternalError("사용자 ID가 없습니다".to_string()))?;

        let valid_minutes = OtpConfig::expiration_minutes();
        let code = Self::generate_code(OtpConfig::length());

        self.otp_store
            .replace_for_user(OneTimePassword::new(
                user_id,
                Self::digest(&code),
                valid_minutes,
            ))
            .await?;

        self.gateway
            .send(&user.email, OTP_SUBJECT, &Self::message_body(&code, valid_minutes))
            .await?;

        log::info!("🔐 OTP 발급: {}", user.username);
        Ok(())
    }

    /// `user_id`의 코드를 검증하고 소비합니다.
    ///
    /// 다른 사용자가 같은 숫자 코드를 받았더라도 그 사용자의 OTP는 건드리지 않습니다.
    pub async fn verify(&self, user_id: &ObjectId, code: &str) -> AppResult<()> {
        let otp = self
            .otp_store
            .find_for_user(user_id, &Self::digest(code))
            .await?
            .ok_or_else(|| AppError::ValidationError("OTP different!".to_string()))?;

        self.otp_store.delete(&otp).await?;

        if otp.is_expired_at(DateTime::now()) {
            log::warn!("만료된 OTP 사용 시도 (user_id={})", otp.user_id);
            return Err(AppError::ValidationError("OTP expired!".to_string()));
        }

        Ok(())
    }

    /// 사용자의 OTP를 모두 제거합니다. (계정 삭제 시)
    pub async fn revoke_for(&self, user_id: &ObjectId) -> AppResult<u64> {
        self.otp_store.delete_by_user(user_id).await
    }
}

fn otp_service_constructor() -> Box<dyn std::any::Any + Send + Sync> {
    Box::new(OtpService::instance() as Arc<dyn std::any::Any + Send + Sync>)
}

inventory::submit! {
    crate::core::registry::ServiceRegistration {
        name: "otp_service",
        constructor: otp_service_constructor,
    }
}
