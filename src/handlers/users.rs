//! # User Management HTTP Handlers
//!
//! | 메서드 | 경로 | 권한 | 설명 |
//! |--------|------|------|------|
//! | `GET` | `/me` | user | 내 프로필 조회 |
//! | `PUT` | `/me` | user | 내 프로필 수정 |
//! | `DELETE` | `/admin/users/{username}` | admin | 사용자와 주문/OTP 삭제 |
use actix_web::{delete, get, put, web, HttpResponse};
use validator::Validate;

use crate::core::errors::AppError;
use crate::domain::dto::users::request::UpdateProfileRequest;
use crate::domain::models::auth::AuthenticatedUser;
use crate::services::users::UserService;

/// 내 프로필 조회
#[get("")]
pub async fn get_profile(user: AuthenticatedUser) -> Result<HttpResponse, AppError> {
    let profile = UserService::instance().get_profile(&user).await?;

    Ok(HttpResponse::Ok().json(profile))
}

/// 내 프로필 수정
///
/// 전화번호, 국가, 도시 중 본문에 있는 필드만 바뀝니다.
#[put("")]
pub async fn update_profile(
    user: AuthenticatedUser,
    payload: web::Json<UpdateProfileRequest>,
) -> Result<HttpResponse, AppError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let profile = UserService::instance()
        .update_profile(&user, payload.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(profile))
}

/// 사용자 삭제 (관리자)
#[delete("/users/{username}")]
pub async fn delete_user(
    admin: AuthenticatedUser,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let username = path.into_inner();
    log::warn!("관리자 {}의 사용자 삭제 요청: {}", admin.username, username);

    let response = UserService::instance().delete_user(&username).await?;

    Ok(HttpResponse::Ok().json(response))
}
