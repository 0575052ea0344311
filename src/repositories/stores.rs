//! # 저장소 계약 (Store traits)
//!
//! 서비스 계층은 구체적인 MongoDB 리포지토리가 아니라 이 trait들에 의존합니다.
//! 운영 환경에서는 `*Repository` 싱글톤이, 테스트에서는 [`memory`](super::memory)의
//! 인메모리 구현이 주입됩니다.
//!
//! ```text
//! OrderService ──► Arc<dyn OrderStore> ──► OrderRepository (MongoDB + unique index)
//!                                     └──► MemoryOrderStore (tests)
//! ```

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;

use crate::core::errors::AppResult;
use crate::domain::entities::{Course, OneTimePassword, Order, User};
use crate::domain::models::catalog::CourseFilter;

/// 프로필 변경 사항. `None`인 필드는 변경하지 않습니다.
#[derive(Debug, Clone, Default)]
pub struct ProfileUpdate {
    pub phone_number: Option<String>,
    pub country: Option<String>,
    pub city: Option<String>,
}

/// 주문 저장 결과
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    Inserted,
    /// `(user_id, course_id)` 유니크 제약에 걸림
    AlreadyExists,
}

#[async_trait]
pub trait UserStore: Send + Sync {
    /// 캐시가 있으면 캐시를 먼저 봅니다.
    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>>;

    /// 캐시를 거치지 않고 주 저장소에서 직접 조회합니다.
    /// 삭제된 사용자에게 쓰기가 일어나면 안 되는 경로에서 사용합니다.
    async fn find_by_username_fresh(&self, username: &str) -> AppResult<Option<User>>;

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    async fn find_by_id(&self, id: &ObjectId) -> AppResult<Option<User>>;

    /// 새 사용자를 저장하고 ID가 채워진 사용자를 반환합니다.
    /// 사용자명/이메일 중복은 `ConflictError`입니다.
    async fn insert(&self, user: User) -> AppResult<User>;

    async fn mark_verified(&self, id: &ObjectId) -> AppResult<bool>;

    async fn update_profile(&self, id: &ObjectId, update: ProfileUpdate) -> AppResult<Option<User>>;

    async fn delete(&self, user: &User) -> AppResult<bool>;
}

#[async_trait]
pub trait CourseStore: Send + Sync {
    async fn find_by_title(&self, title: &str) -> AppResult<Option<Course>>;

    /// 캐시를 거치지 않는 제목 조회
    async fn find_by_title_fresh(&self, title: &str) -> AppResult<Option<Course>>;

    async fn find_by_code(&self, code: &str) -> AppResult<Option<Course>>;

    async fn find_by_ids(&self, ids: &[String]) -> AppResult<Vec<Course>>;

    /// 강의 코드/제목 중복은 `ConflictError`입니다.
    async fn insert(&self, course: Course) -> AppResult<Course>;

    /// 강의를 통째로 교체합니다. 제목이 바뀐 경우 이전 제목의 캐시도 무효화됩니다.
    async fn update(&self, course: &Course, previous_title: &str) -> AppResult<()>;

    async fn delete(&self, course: &Course) -> AppResult<bool>;

    /// 필터를 만족하는 강의를 제목순으로 반환합니다.
    async fn list(&self, filter: &CourseFilter) -> AppResult<Vec<Course>>;

    /// 제목순으로 정렬된 강의 중 `skip`부터 `limit`개를 반환합니다.
    async fn page(&self, skip: u64, limit: u64) -> AppResult<Vec<Course>>;

    async fn count(&self) -> AppResult<u64>;
}

#[async_trait]
pub trait OrderStore: Send + Sync {
    /// 주문을 저장합니다. 같은 `(user_id, course_id)` 주문이 이미 있으면
    /// 아무것도 쓰지 않고 `AlreadyExists`를 반환합니다.
    async fn insert(&self, order: &Order) -> AppResult<InsertOutcome>;

    /// 부수효과 없는 중복 주문 확인
    async fn exists_for(&self, user_id: &ObjectId, course_id: &str) -> AppResult<bool>;

    /// 사용자의 주문을 주문 시각순으로 반환합니다. 같은 밀리초의 주문은 ID순입니다.
    async fn find_by_user(&self, user_id: &ObjectId) -> AppResult<Vec<Order>>;

    async fn find_all(&self) -> AppResult<Vec<Order>>;

    async fn delete_by_user(&self, user_id: &ObjectId) -> AppResult<u64>;

    async fn delete_by_course(&self, course_id: &str) -> AppResult<u64>;
}

#[async_trait]
pub trait OtpStore: Send + Sync {
    /// 사용자의 기존 OTP를 지우고 새 OTP를 저장합니다.
    async fn replace_for_user(&self, otp: OneTimePassword) -> AppResult<()>;

    /// 해당 사용자의 OTP 중 다이제스트가 일치하는 것을 찾습니다.
    async fn find_for_user(
        &self,
        user_id: &ObjectId,
        digest: &str,
    ) -> AppResult<Option<OneTimePassword>>;

    async fn delete(&self, otp: &OneTimePassword) -> AppResult<bool>;

    async fn delete_by_user(&self, user_id: &ObjectId) -> AppResult<u64>;
}
