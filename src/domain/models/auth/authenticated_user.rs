//! 인증된 사용자 식별 정보
//!
//! `AuthMiddleware`가 JWT를 검증한 뒤 요청 extensions에 넣어두며,
//! 핸들러는 이를 추출하여 서비스 호출에 그대로 전달합니다.

use std::future::{Ready, ready};

use actix_web::{Error, FromRequest, HttpMessage, HttpRequest};
use serde::{Deserialize, Serialize};

use crate::core::errors::AppError;
use crate::domain::entities::users::user::ROLE_ADMIN;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    /// JWT subject
    pub username: String,
    pub roles: Vec<String>,
}

impl AuthenticatedUser {
    pub fn new(username: impl Into<String>, roles: Vec<String>) -> Self {
        Self {
            username: username.into(),
            roles,
        }
    }

    pub fn has_role(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r == role)
    }

    pub fn is_admin(&self) -> bool {
        self.has_role(ROLE_ADMIN)
    }
}

impl FromRequest for AuthenticatedUser {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        match req.extensions().get::<AuthenticatedUser>() {
            Some(user) => ready(Ok(user.clone())),
            None => ready(Err(AppError::AuthenticationError(
                "인증되지 않은 요청입니다".to_string(),
            )
            .into())),
        }
    }
}
