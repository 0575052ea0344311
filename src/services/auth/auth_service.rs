//! # 인증 서비스
//!
//! 회원가입, 로그인, 이메일 OTP 인증을 담당합니다.
//!
//! ## 계정 상태 흐름
//!
//! ```text
//! signup ──► [미인증] ──verify_otp──► [인증됨] ──signin──► JWT
//!               │
//!               └──resend_otp──► 새 OTP 발송 (기존 코드 폐기)
//! ```
//!
//! 미인증 계정은 로그인할 수 없습니다. 존재하지 않는 사용자와 잘못된 비밀번호는
//! 같은 메시지로 거절됩니다.

use std::sync::Arc;

use once_cell::sync::OnceCell;

use crate::{
    config::{PasswordConfig, SignupConfig},
    core::errors::{AppError, AppResult, ErrorContext},
    domain::{
        dto::{
            MessageResponse,
            users::{
                request::{LoginRequest, OtpRequest, SignupRequest},
                response::JwtResponse,
            },
        },
        entities::users::user::{ROLE_ADMIN, User},
    },
    repositories::{stores::UserStore, users::UserRepository},
    services::auth::{otp_service::OtpService, token_service::TokenService},
};

const INVALID_CREDENTIALS: &str = "Invalid username or password";

pub struct AuthService {
    users: Arc<dyn UserStore>,
    otp: Arc<OtpService>,
    tokens: Arc<TokenService>,
    bcrypt_cost: u32,
    allow_admin_signup: bool,
}

static AUTH_SERVICE_INSTANCE: OnceCell<Arc<AuthService>> = OnceCell::new();

impl AuthService {
    pub fn new(
        users: Arc<dyn UserStore>,
        otp: Arc<OtpService>,
        tokens: Arc<TokenService>,
        bcrypt_cost: u32,
        allow_admin_signup: bool,
    ) -> Self {
        Self {
            users,
            otp,
            tokens,
            bcrypt_cost,
            allow_admin_signup,
        }
    }

    pub fn instance() -> Arc<Self> {
        AUTH_SERVICE_INSTANCE
            .get_or_init(|| {
                Arc::new(Self::new(
                    UserRepository::instance(),
                    OtpService::instance(),
                    TokenService::instance(),
                    PasswordConfig::bcrypt_cost(),
                    SignupConfig::allow_admin_signup(),
                ))
            })
            .clone()
    }

    /// 회원가입
    ///
    /// 사용자를 미인증 상태로 저장하고 OTP를 이메일로 보냅니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ConflictError` - 사용자명 또는 이메일 중복
    /// * `AppError::AuthorizationError` - 관리자 가입이 닫혀 있는데 `"admin"` 역할 요청
    /// * `AppError::ExternalServiceError` - OTP 메일 발송 실패 (계정은 남으며 재발송 가능)
    pub async fn signup(&self, request: SignupRequest) -> AppResult<MessageResponse> {
        if self.users.find_by_username(&request.username).await?.is_some() {
            return Err(AppError::ConflictError("Username is already taken!".to_string()));
        }

        if self.users.find_by_email(&request.email).await?.is_some() {
            return Err(AppError::ConflictError("Email is already in use!".to_string()));
        }

        let roles = User::roles_from_request(request.roles.as_deref());
        if !self.allow_admin_signup && roles.iter().any(|role| role == ROLE_ADMIN) {
            log::warn!("관리자 역할 가입 요청 거절: {}", request.username);
            return Err(AppError::AuthorizationError(
                "Admin role cannot be requested at signup".to_string(),
            ));
        }

        let hash_start = std::time::Instant::now();
        let password_hash =
            bcrypt::hash(&request.password, self.bcrypt_cost).context("비밀번호 해싱 실패")?;
        log::debug!("Password hashing took: {:?}", hash_start.elapsed());

        let user = User::new(
            request.username,
            request.email,
            password_hash,
            request.phone_number,
            request.country,
            request.city,
            roles,
        );

        let user = self.users.insert(user).await?;
        log::info!("👤 회원가입: {} ({:?})", user.username, user.roles);

        self.otp.issue(&user).await?;

        Ok(MessageResponse::new(
            "User registered successfully! Please check your email for the OTP code",
        ))
    }

    /// 로그인
    ///
    /// # Errors
    ///
    /// * `AppError::AuthenticationError` - 사용자 없음, 비밀번호 불일치, 미인증 계정
    pub async fn signin(&self, request: LoginRequest) -> AppResult<JwtResponse> {
        let user = self
            .users
            .find_by_username(&request.username)
            .await?
            .ok_or_else(|| AppError::AuthenticationError(INVALID_CREDENTIALS.to_string()))?;

        let verified =
            bcrypt::verify(&request.password, &user.password_hash).context("비밀번호 검증 실패")?;

        if !verified {
            log::warn!("로그인 실패: {}", request.username);
            return Err(AppError::AuthenticationError(INVALID_CREDENTIALS.to_string()));
        }

        if !user.is_verified {
            return Err(AppError::AuthenticationError(
                "Account is not verified, please check your email for the OTP code".to_string(),
            ));
        }

        let token = self.tokens.generate_access_token(&user)?;
        log::info!("🔑 로그인 성공: {}", user.username);

        Ok(JwtResponse::bearer(
            user,
            token,
            self.tokens.expires_in_seconds(),
        ))
    }

    /// OTP 확인 후 계정을 인증 상태로 전환합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::NotFound` - 사용자 없음
    /// * `AppError::ValidationError` - 코드 불일치 또는 만료
    pub async fn verify_otp(&self, request: OtpRequest) -> AppResult<MessageResponse> {
        let user_id = self
            .users
            .find_by_username(&request.username)
            .await?
            .and_then(|user| user.id)
            .ok_or_else(|| AppError::NotFound("User not found!".to_string()))?;

        self.otp.verify(&user_id, &request.otp).await?;

        if !self.users.mark_verified(&user_id).await? {
            return Err(AppError::NotFound("User not found!".to_string()));
        }

        log::info!("✅ 계정 인증 완료 (user_id={})", user_id);
        Ok(MessageResponse::new("Account verified successfully!"))
    }

    /// 새 OTP를 발급해 다시 보냅니다. 이미 인증된 계정은 거절됩니다.
    pub async fn resend_otp(&self, username: &str) -> AppResult<MessageResponse> {
        let user = self
            .users
            .find_by_username(username)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found!".to_string()))?;

        if user.is_verified {
            return Err(AppError::ValidationError("Account is already verified".to_string()));
        }

        self.otp.issue(&user).await?;

        Ok(MessageResponse::new("OTP has been sent to your email"))
    }
}

fn auth_service_constructor() -> Box<dyn std::any::Any + Send + Sync> {
    Box::new(AuthService::instance() as Arc<dyn std::any::Any + Send + Sync>)
}

inventory::submit! {
    crate::core::registry::ServiceRegistration {
        name: "auth_service",
        constructor: auth_service_constructor,
    }
}
