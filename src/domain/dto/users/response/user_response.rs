//! 사용자 응답 DTO
//!
//! 비밀번호 해시는 응답에 포함되지 않습니다.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::users::user::User;
use crate::utils::time_utils::to_utc;

#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: String,
    pub username: String,
    pub email: String,
    pub phone_number: String,
    pub country: Option<String>,
    pub city: Option<String>,
    pub roles: Vec<String>,
    pub is_verified: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        let User {
            id,
            username,
            email,
            phone_number,
            country,
            city,
            roles,
            is_verified,
            created_at,
            updated_at,
            ..
        } = user;

        Self {
            id: id.map(|id| id.to_hex()).unwrap_or_default(),
            username,
            email,
            phone_number,
            country,
            city,
            roles,
            is_verified,
            created_at: to_utc(created_at),
            updated_at: to_utc(updated_at),
        }
    }
}

/// 로그인 성공 응답
#[derive(Debug, Clone, Serialize)]
pub struct JwtResponse {
    pub token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub username: String,
    pub email: String,
    pub roles: Vec<String>,
}

impl JwtResponse {
    pub fn bearer(user: User, token: String, expires_in: i64) -> Self {
        Self {
            token,
            token_type: "Bearer".to_string(),
            expires_in,
            username: user.username,
            email: user.email,
            roles: user.roles,
        }
    }
}
