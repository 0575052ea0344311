//! One-Time Password Entity
//!
//! 이메일 인증용 일회용 코드입니다. 사용자당 최대 하나가 유지되며,
//! 코드는 평문이 아닌 SHA-256 다이제스트로만 저장됩니다.

use mongodb::bson::{DateTime, oid::ObjectId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OneTimePassword {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub user_id: ObjectId,
    /// SHA-256 hex 다이제스트
    pub code_digest: String,
    pub expires_at: DateTime,
    pub created_at: DateTime,
}

impl OneTimePassword {
    /// 지금부터 `valid_minutes`분 동안 유효한 OTP를 생성합니다.
    pub fn new(user_id: ObjectId, code_digest: String, valid_minutes: i64) -> Self {
        let now = DateTime::now();
        let expires_at = DateTime::from_millis(now.timestamp_millis() + valid_minutes * 60_000);

        Self {
            id: None,
            user_id,
            code_digest,
            expires_at,
            created_at: now,
        }
    }

    pub fn is_expired_at(&self, now: DateTime) -> bool {
        now.timestamp_millis() >= self.expires_at.timestamp_millis()
    }
}
