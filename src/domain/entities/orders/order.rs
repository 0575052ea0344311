//! Order Entity
//!
//! 사용자의 강의 구매 기록입니다. 생성 후 수정되지 않으며,
//! 사용자/강의 삭제 시 연쇄 삭제로만 제거됩니다.
//! `(user_id, course_id)` 쌍마다 최대 하나의 주문만 존재합니다.

use mongodb::bson::{DateTime, oid::ObjectId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    /// UUID v4 문자열
    #[serde(rename = "_id")]
    pub id: String,
    pub user_id: ObjectId,
    pub course_id: String,
    /// 결제 수단 (자유 텍스트)
    pub payment_method: String,
    pub paid: bool,
    pub order_time: DateTime,
}

impl Order {
    /// 결제 완료 상태의 새 주문을 현재 시각으로 생성합니다.
    pub fn paid_now(user_id: ObjectId, course_id: String, payment_method: String) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            user_id,
            course_id,
            payment_method,
            paid: true,
            order_time: DateTime::now(),
        }
    }
}
