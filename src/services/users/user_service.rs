//! # 사용자 관리 서비스 구현
//!
//! 로그인한 사용자의 프로필 조회/수정과 관리자의 계정 삭제를 담당합니다.
//! 계정 생성과 인증은 [`AuthService`](crate::services::auth::AuthService)가 담당합니다.
//!
//! ## 계정 삭제 순서
//!
//! ```text
//! delete_user(username)
//!   ├─ 1. 사용자 조회 (없으면 NotFound)
//!   ├─ 2. 주문 삭제 (OrderService::delete_by_username)
//!   ├─ 3. OTP 삭제
//!   └─ 4. 사용자 삭제 (캐시 무효화 포함)
//! ```
//!
//! 중간 단계에서 실패하면 사용자는 남아 있으므로 같은 요청을 다시 보내면 됩니다.

use std::sync::Arc;

use once_cell::sync::OnceCell;

use crate::{
    core::errors::{AppError, AppResult},
    domain::{
        dto::{
            MessageResponse,
            users::{request::UpdateProfileRequest, response::UserResponse},
        },
        entities::users::user::User,
        models::auth::AuthenticatedUser,
    },
    repositories::{
        stores::{ProfileUpdate, UserStore},
        users::UserRepository,
    },
    services::{auth::OtpService, orders::OrderService},
};

/// 사용자 관리 비즈니스 로직 서비스
pub struct UserService {
    users: Arc<dyn UserStore>,
    orders: Arc<OrderService>,
    otp: Arc<OtpService>,
}

static USER_SERVICE_INSTANCE: OnceCell<Arc<UserService>> = OnceCell::new();

impl UserService {
    pub fn new(users: Arc<dyn UserStore>, orders: Arc<OrderService>, otp: Arc<OtpService>) -> Self {
        Self { users, orders, otp }
    }

    pub fn instance() -> Arc<Self> {
        USER_SERVICE_INSTANCE
            .get_or_init(|| {
                Arc::new(Self::new(
                    UserRepository::instance(),
                    OrderService::instance(),
                    OtpService::instance(),
                ))
            })
            .clone()
    }

    async fn find_user(&self, username: &str) -> AppResult<User> {
        self.users
            .find_by_username(username)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found!".to_string()))
    }

    /// 내 프로필 조회
    pub async fn get_profile(&self, identity: &AuthenticatedUser) -> AppResult<UserResponse> {
        let user = self.find_user(&identity.username).await?;
        Ok(UserResponse::from(user))
    }

    /// 내 프로필 수정
    ///
    /// 전화번호, 국가, 도시 중 전달된 필드만 바뀝니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ValidationError` - 변경할 필드가 하나도 없음
    /// * `AppError::NotFound` - 토큰의 사용자가 더 이상 존재하지 않음
    pub async fn update_profile(
        &self,
        identity: &AuthenticatedUser,
        request: UpdateProfileRequest,
    ) -> AppResult<UserResponse> {
        if request.is_empty() {
            return Err(AppError::ValidationError("변경할 항목이 없습니다".to_string()));
        }

        let user = self.find_user(&identity.username).await?;
        let user_id = user
            .id
            .ok_or_else(|| AppError::InternalError("사용자 ID가 없습니다".to_string()))?;

        let update = ProfileUpdate {
            phone_number: request.phone_number,
            country: request.country,
            city: request.city,
        };

        let updated = self
            .users
            .update_profile(&user_id, update)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found!".to_string()))?;

        log::info!("프로필 수정: {}", updated.username);
        Ok(UserResponse::from(updated))
    }

    /// 사용자 계정과 연관 데이터를 삭제합니다. (관리자)
    pub async fn delete_user(&self, username: &str) -> AppResult<MessageResponse> {
        let user = self.find_user(username).await?;
        let user_id = user
            .id
            .ok_or_else(|| AppError::InternalError("사용자 ID가 없습니다".to_string()))?;

        log::warn!("사용자 삭제 시작: {}", username);

        let orders = self.orders.delete_by_username(username).await?;
        self.otp.revoke_for(&user_id).await?;
        self.users.delete(&user).await?;

        log::warn!("사용자 삭제 완료: {} (주문 {}건)", username, orders);
        Ok(MessageResponse::new(format!("User {} deleted successfully!", username)))
    }
}

fn user_service_constructor() -> Box<dyn std::any::Any + Send + Sync> {
    Box::new(UserService::instance() as Arc<dyn std::any::Any + Send + Sync>)
}

inventory::submit! {
    crate::core::registry::ServiceRegistration {
        name: "user_service",
        constructor: user_service_constructor,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{OneTimePassword, Order};
    use crate::repositories::memory::{
        MemoryCourseStore, MemoryOrderStore, MemoryOtpStore, MemoryUserStore, RecordingGateway,
        verified_user,
    };

    struct Fixture {
        service: UserService,
        users: Arc<MemoryUserStore>,
        orders: Arc<MemoryOrderStore>,
        otps: Arc<MemoryOtpStore>,
    }

    fn fixture() -> Fixture {
        let users = Arc::new(MemoryUserStore::default());
        let orders = Arc::new(MemoryOrderStore::default());
        let otps = Arc::new(MemoryOtpStore::default());
        let gateway = Arc::new(RecordingGateway::default());

        let order_service = Arc::new(OrderService::new(
            users.clone(),
            Arc::new(MemoryCourseStore::default()),
            orders.clone(),
            gateway.clone(),
        ));
        let otp_service = Arc::new(OtpService::new(otps.clone(), gateway));

        Fixture {
            service: UserService::new(users.clone(), order_service, otp_service),
            users,
            orders,
            otps,
        }
    }

    fn identity(username: &str) -> AuthenticatedUser {
        AuthenticatedUser::new(username, vec!["user".to_string()])
    }

    #[actix_web::test]
    async fn test_profile_hides_password_hash() {
        let f = fixture();
        f.users.seed(verified_user("budi"));

        let profile = f.service.get_profile(&identity("budi")).await.unwrap();
        let json = serde_json::to_value(&profile).unwrap();

        assert_eq!(profile.username, "budi");
        assert!(json.get("password_hash").is_none());
    }

    #[actix_web::test]
    async fn test_update_profile_changes_only_given_fields() {
        let f = fixture();
        f.users.seed(verified_user("budi"));

        let request = UpdateProfileRequest {
            city: Some("Bandung".to_string()),
            ..Default::default()
        };
        let updated = f
            .service
            .update_profile(&identity("budi"), request)
            .await
            .unwrap();

        assert_eq!(updated.city.as_deref(), Some("Bandung"));
        assert_eq!(updated.country.as_deref(), Some("Indonesia"));
        assert_eq!(updated.phone_number, "08123456789");

        let empty = f
            .service
            .update_profile(&identity("budi"), UpdateProfileRequest::default())
            .await;
        assert!(matches!(empty, Err(AppError::ValidationError(_))));
    }

    #[actix_web::test]
    async fn test_delete_user_cascades_orders_and_otp() {
        let f = fixture();
        let budi = f.users.seed(verified_user("budi"));
        let sari = f.users.seed(verified_user("sari"));
        let budi_id = budi.id.unwrap();

        f.orders.seed(Order::paid_now(budi_id, "c1".to_string(), "OVO".to_string()));
        f.orders.seed(Order::paid_now(budi_id, "c2".to_string(), "OVO".to_string()));
        f.orders.seed(Order::paid_now(sari.id.unwrap(), "c1".to_string(), "OVO".to_string()));
        f.otps.seed(OneTimePassword::new(budi_id, "digest".to_string(), 5));

        f.service.delete_user("budi").await.unwrap();

        assert!(f.users.find_by_username("budi").await.unwrap().is_none());
        assert_eq!(f.users.len(), 1);
        assert_eq!(f.orders.len(), 1);
        assert!(f.otps.for_user(&budi_id).is_empty());
    }

    #[actix_web::test]
    async fn test_delete_unknown_user() {
        let f = fixture();
        let result = f.service.delete_user("ghost").await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }
}
