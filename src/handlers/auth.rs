//! Authentication HTTP Handlers
//!
//! 회원가입과 이메일 OTP 인증, 로그인을 처리합니다. 모두 인증 없이 호출할 수 있습니다.
//!
//! # Flow
//!
//! 1. `POST /auth/signup` - 미인증 계정 생성 + OTP 메일 발송
//! 2. `POST /auth/otp` - 메일로 받은 코드로 계정 인증
//! 3. `POST /auth/signin` - JWT 발급
use actix_web::{post, web, HttpResponse};
use validator::Validate;

use crate::core::errors::AppError;
use crate::domain::dto::users::request::{LoginRequest, OtpRequest, ResendOtpRequest, SignupRequest};
use crate::services::auth::AuthService;

/// 회원가입 핸들러
///
/// # Endpoint
/// `POST /auth/signup`
///
/// # Responses
/// - 201: 계정 생성, OTP 메일 발송
/// - 400: 입력 검증 실패
/// - 409: 사용자명 또는 이메일 중복
#[post("/signup")]
pub async fn signup(payload: web::Json<SignupRequest>) -> Result<HttpResponse, AppError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let response = AuthService::instance().signup(payload.into_inner()).await?;

    Ok(HttpResponse::Created().json(response))
}

/// 로그인 핸들러
///
/// 인증된 계정에 한해 Bearer 토큰을 발급합니다.
///
/// # Endpoint
/// `POST /auth/signin`
#[post("/signin")]
pub async fn signin(payload: web::Json<LoginRequest>) -> Result<HttpResponse, AppError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    log::info!("로그인 시도 - 사용자: {}", payload.username);

    let response = AuthService::instance().signin(payload.into_inner()).await?;

    Ok(HttpResponse::Ok().json(response))
}

/// OTP 인증 핸들러
///
/// # Endpoint
/// `POST /auth/otp`
#[post("/otp")]
pub async fn verify_otp(payload: web::Json<OtpRequest>) -> Result<HttpResponse, AppError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let response = AuthService::instance().verify_otp(payload.into_inner()).await?;

    Ok(HttpResponse::Ok().json(response))
}

/// OTP 재발송 핸들러
///
/// # Endpoint
/// `POST /auth/otp/resend`
#[post("/otp/resend")]
pub async fn resend_otp(payload: web::Json<ResendOtpRequest>) -> Result<HttpResponse, AppError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let response = AuthService::instance().resend_otp(&payload.username).await?;

    Ok(HttpResponse::Ok().json(response))
}
