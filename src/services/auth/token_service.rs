//! JWT 액세스 토큰 서비스
//!
//! HS256으로 서명된 액세스 토큰을 발급하고 검증합니다.
//! subject는 사용자명이며, 역할 목록이 함께 실립니다.

use std::sync::Arc;

use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use once_cell::sync::OnceCell;

use crate::{
    config::JwtConfig,
    core::errors::AppError,
    domain::{entities::users::user::User, models::token::TokenClaims},
};

/// JWT 토큰 관리 서비스
pub struct TokenService;

static TOKEN_SERVICE_INSTANCE: OnceCell<Arc<TokenService>> = OnceCell::new();

impl TokenService {
    pub fn instance() -> Arc<Self> {
        TOKEN_SERVICE_INSTANCE
            .get_or_init(|| Arc::new(TokenService))
            .clone()
    }

    /// 사용자를 위한 JWT 액세스 토큰 생성
    ///
    /// # Errors
    ///
    /// * `AppError::InternalError` - 토큰 서명 실패
    ///
    /// ```rust,ignore
    /// let token = TokenService::instance().generate_access_token(&user)?;
    /// ```
    pub fn generate_access_token(&self, user: &User) -> Result<String, AppError> {
        let now = Utc::now();
        let expiration = now + Duration::hours(JwtConfig::expiration_hours());

        let claims = TokenClaims {
            sub: user.username.clone(),
            roles: user.roles.clone(),
            iat: now.timestamp(),
            exp: expiration.timestamp(),
        };

        let secret = JwtConfig::secret();
        let encoding_key = EncodingKey::from_secret(secret.as_ref());

        encode(&Header::default(), &claims, &encoding_key)
            .map_err(|e| AppError::InternalError(format!("JWT 토큰 생성 실패: {}", e)))
    }

    /// 액세스 토큰 유효 시간 (초)
    pub fn expires_in_seconds(&self) -> i64 {
        JwtConfig::expiration_hours() * 3600
    }

    /// JWT 토큰 검증 및 클레임 추출
    ///
    /// # Errors
    ///
    /// * `AppError::AuthenticationError` - 토큰 만료, 잘못된 형식/서명
    pub fn verify_token(&self, token: &str) -> Result<TokenClaims, AppError> {
        let secret = JwtConfig::secret();
        let decoding_key = DecodingKey::from_secret(secret.as_ref());

        decode::<TokenClaims>(token, &decoding_key, &Validation::default())
            .map(|token_data| token_data.claims)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                    AppError::AuthenticationError("토큰이 만료되었습니다".to_string())
                }
                jsonwebtoken::errors::ErrorKind::InvalidToken
                | jsonwebtoken::errors::ErrorKind::InvalidSignature
                | jsonwebtoken::errors::ErrorKind::Base64(_)
                | jsonwebtoken::errors::ErrorKind::Json(_)
                | jsonwebtoken::errors::ErrorKind::Utf8(_) => {
                    AppError::AuthenticationError("유효하지 않은 토큰입니다".to_string())
                }
                _ => AppError::InternalError(format!("토큰 검증 실패: {}", e)),
            })
    }

    /// `Bearer {token}` 형식의 Authorization 헤더에서 토큰 부분을 추출합니다.
    pub fn extract_bearer_token<'a>(&self, auth_header: &'a str) -> Result<&'a str, AppError> {
        auth_header
            .strip_prefix("Bearer ")
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .ok_or_else(|| {
                AppError::AuthenticationError("유효하지 않은 인증 헤더 형식입니다".to_string())
            })
    }
}

fn token_service_constructor() -> Box<dyn std::any::Any + Send + Sync> {
    Box::new(TokenService::instance() as Arc<dyn std::any::Any + Send + Sync>)
}

inventory::submit! {
    crate::core::registry::ServiceRegistration {
        name: "token_service",
        constructor: token_service_constructor,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::memory::verified_user;

    #[test]
    fn test_token_roundtrip_carries_username_and_roles() {
        let service = TokenService::instance();
        let user = verified_user("budi");

        let token = service.generate_access_token(&user).unwrap();
        let claims = service.verify_token(&token).unwrap();

        assert_eq!(claims.sub, "budi");
        assert_eq!(claims.roles, vec!["user"]);
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_tampered_token_rejected() {
        let service = TokenService::instance();
        let token = service
            .generate_access_token(&verified_user("budi"))
            .unwrap();
        let tampered = format!("{}x", token);

        assert!(matches!(
            service.verify_token(&tampered),
            Err(AppError::AuthenticationError(_))
        ));
    }

    #[test]
    fn test_extract_bearer_token() {
        let service = TokenService::instance();

        assert_eq!(service.extract_bearer_token("Bearer abc.def").unwrap(), "abc.def");
        assert!(service.extract_bearer_token("Basic abc").is_err());
        assert!(service.extract_bearer_token("Bearer ").is_err());
    }
}
