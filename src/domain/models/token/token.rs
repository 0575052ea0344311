//! JWT 액세스 토큰 클레임
//!
//! RFC 7519 표준 클레임(`sub`, `iat`, `exp`)에 역할 목록을 더한 구조입니다.
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    /// 사용자명
    pub sub: String,
    pub roles: Vec<String>,
    /// 발급 시각 (Unix timestamp)
    pub iat: i64,
    /// 만료 시각 (Unix timestamp)
    pub exp: i64,
}
