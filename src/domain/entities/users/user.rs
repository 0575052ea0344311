//! User Entity Implementation
//!
//! 강의 마켓플레이스 사용자 엔티티입니다.
//! 회원가입 시 미인증 상태로 생성되고, 이메일 OTP 확인 후 인증 상태가 됩니다.

use mongodb::bson::{DateTime, oid::ObjectId};
use serde::{Deserialize, Serialize};

/// 일반 사용자 역할
pub const ROLE_USER: &str = "user";
/// 관리자 역할
pub const ROLE_ADMIN: &str = "admin";

/// 사용자 엔티티
///
/// 사용자명과 이메일은 각각 유일합니다. 주문 워크플로우는 사용자를 읽기만 합니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 사용자명 (unique, 3-20자)
    pub username: String,
    /// 사용자 이메일 (unique), 영수증/OTP 수신 주소
    pub email: String,
    /// bcrypt 해시
    pub password_hash: String,
    pub phone_number: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    /// 사용자 역할 (`user`, `admin`)
    pub roles: Vec<String>,
    /// OTP 인증 완료 여부
    pub is_verified: bool,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

impl User {
    /// 회원가입용 미인증 사용자를 생성합니다.
    pub fn new(
        username: String,
        email: String,
        password_hash: String,
        phone_number: String,
        country: Option<String>,
        city: Option<String>,
        roles: Vec<String>,
    ) -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            username,
            email,
            password_hash,
            phone_number,
            country,
            city,
            roles,
            is_verified: false,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn is_admin(&self) -> bool {
        self.roles.iter().any(|role| role == ROLE_ADMIN)
    }

    /// 회원가입 요청의 역할 태그를 저장용 역할로 변환합니다.
    ///
    /// `"admin"`은 관리자, 그 외 값이나 빈 목록은 일반 사용자로 매핑됩니다.
    pub fn roles_from_request(requested: Option<&[String]>) -> Vec<String> {
        let mut roles: Vec<String> = requested
            .unwrap_or_default()
            .iter()
            .map(|role| {
                if role.eq_ignore_ascii_case(ROLE_ADMIN) {
                    ROLE_ADMIN.to_string()
                } else {
                    ROLE_USER.to_string()
                }
            })
            .collect();

        roles.sort();
        roles.dedup();

        if roles.is_empty() {
            roles.push(ROLE_USER.to_string());
        }

        roles
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roles_default_to_user() {
        assert_eq!(User::roles_from_request(None), vec!["user"]);
        assert_eq!(User::roles_from_request(Some(&[])), vec!["user"]);
    }

    #[test]
    fn test_roles_mapping() {
        let requested = vec!["Admin".to_string(), "mod".to_string(), "user".to_string()];
        assert_eq!(
            User::roles_from_request(Some(&requested)),
            vec!["admin", "user"]
        );
    }

    #[test]
    fn test_new_user_starts_unverified() {
        let user = User::new(
            "alice".to_string(),
            "alice@example.com".to_string(),
            "hash".to_string(),
            "0812".to_string(),
            None,
            None,
            vec![ROLE_USER.to_string()],
        );
        assert!(!user.is_verified);
        assert!(!user.is_admin());
        assert!(user.id.is_none());
    }
}
