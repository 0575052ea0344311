//! 테스트용 인메모리 저장소와 알림 게이트웨이
//!
//! MongoDB/Redis/SMTP 없이 서비스 계층을 검증하기 위한 구현입니다.
//! 유니크 제약은 실제 인덱스와 같은 의미로 흉내 냅니다.

use std::sync::{Mutex, MutexGuard, PoisonError};
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use mongodb::bson::{DateTime, oid::ObjectId};

use crate::core::errors::{AppError, AppResult};
use crate::domain::entities::courses::course::{Course, CourseCategory, CourseLevel};
use crate::domain::entities::users::user::{ROLE_USER, User};
use crate::domain::entities::{OneTimePassword, Order};
use crate::domain::models::catalog::CourseFilter;
use crate::repositories::stores::{
    CourseStore, InsertOutcome, OrderStore, OtpStore, ProfileUpdate, UserStore,
};
use crate::services::notifications::NotificationGateway;

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// 인증 완료된 일반 사용자
pub fn verified_user(username: &str) -> User {
    let mut user = User::new(
        username.to_string(),
        format!("{}@example.com", username),
        "hash".to_string(),
        "08123456789".to_string(),
        Some("Indonesia".to_string()),
        None,
        vec![ROLE_USER.to_string()],
    );
    user.is_verified = true;
    user
}

pub fn backend_course(code: &str, title: &str, price: f64) -> Course {
    Course::new(
        code.to_string(),
        title.to_string(),
        price,
        CourseCategory::BackEnd,
        CourseLevel::Beginner,
        "Sari Dewi".to_string(),
        String::new(),
    )
}

// ---------------------------------------------------------------------------
// Users
// ---------------------------------------------------------------------------

/// 사용자 저장소. `cached`는 무효화되지 않은 Redis 캐시 항목을 흉내 냅니다.
#[derive(Default)]
pub struct MemoryUserStore {
    users: Mutex<Vec<User>>,
    cached: Mutex<Vec<User>>,
}

impl MemoryUserStore {
    /// 캐시에 사용자를 넣어 둡니다. 삭제해도 지워지지 않습니다.
    pub fn cache(&self, user: User) {
        lock(&self.cached).push(user);
    }

    /// 사용자를 바로 저장하고 ID가 채워진 사본을 반환합니다.
    pub fn seed(&self, mut user: User) -> User {
        user.id = Some(ObjectId::new());
        lock(&self.users).push(user.clone());
        user
    }

    pub fn len(&self) -> usize {
        lock(&self.users).len()
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        if let Some(cached) = lock(&self.cached).iter().find(|u| u.username == username) {
            return Ok(Some(cached.clone()));
        }

        self.find_by_username_fresh(username).await
    }

    async fn find_by_username_fresh(&self, username: &str) -> AppResult<Option<User>> {
        Ok(lock(&self.users)
            .iter()
            .find(|u| u.username == username)
            .cloned())
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        Ok(lock(&self.users).iter().find(|u| u.email == email).cloned())
    }

    async fn find_by_id(&self, id: &ObjectId) -> AppResult<Option<User>> {
        Ok(lock(&self.users)
            .iter()
            .find(|u| u.id.as_ref() == Some(id))
            .cloned())
    }

    async fn insert(&self, mut user: User) -> AppResult<User> {
        let mut users = lock(&self.users);
        if users
            .iter()
            .any(|u| u.username == user.username || u.email == user.email)
        {
            return Err(AppError::ConflictError("duplicate user".to_string()));
        }

        user.id = Some(ObjectId::new());
        users.push(user.clone());
        Ok(user)
    }

    async fn mark_verified(&self, id: &ObjectId) -> AppResult<bool> {
        let mut users = lock(&self.users);
        match users.iter_mut().find(|u| u.id.as_ref() == Some(id)) {
            Some(user) => {
                user.is_verified = true;
                user.updated_at = DateTime::now();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn update_profile(&self, id: &ObjectId, update: ProfileUpdate) -> AppResult<Option<User>> {
        let mut users = lock(&self.users);
        let Some(user) = users.iter_mut().find(|u| u.id.as_ref() == Some(id)) else {
            return Ok(None);
        };

        if let Some(phone_number) = update.phone_number {
            user.phone_number = phone_number;
        }
        if let Some(country) = update.country {
            user.country = Some(country);
        }
        if let Some(city) = update.city {
            user.city = Some(city);
        }
        user.updated_at = DateTime::now();

        Ok(Some(user.clone()))
    }

    async fn delete(&self, user: &User) -> AppResult<bool> {
        let mut users = lock(&self.users);
        let before = users.len();
        users.retain(|u| u.id != user.id);
        Ok(users.len() < before)
    }
}

// ---------------------------------------------------------------------------
// Courses
// ---------------------------------------------------------------------------

#[derive(Default)]
pub struct MemoryCourseStore {
    courses: Mutex<Vec<Course>>,
    cached: Mutex<Vec<Course>>,
}

impl MemoryCourseStore {
    /// 캐시에 강의를 넣어 둡니다. 삭제해도 지워지지 않습니다.
    pub fn cache(&self, course: Course) {
        lock(&self.cached).push(course);
    }

    pub fn seed(&self, course: Course) -> Course {
        lock(&self.courses).push(course.clone());
        course
    }

    fn sorted(&self) -> Vec<Course> {
        let mut courses = lock(&self.courses).clone();
        courses.sort_by(|a, b| a.title.cmp(&b.title));
        courses
    }
}

#[async_trait]
impl CourseStore for MemoryCourseStore {
    async fn find_by_title(&self, title: &str) -> AppResult<Option<Course>> {
        if let Some(cached) = lock(&self.cached).iter().find(|c| c.title == title) {
            return Ok(Some(cached.clone()));
        }

        self.find_by_title_fresh(title).await
    }

    async fn find_by_title_fresh(&self, title: &str) -> AppResult<Option<Course>> {
        Ok(lock(&self.courses)
            .iter()
            .find(|c| c.title == title)
            .cloned())
    }

    async fn find_by_code(&self, code: &str) -> AppResult<Option<Course>> {
        Ok(lock(&self.courses).iter().find(|c| c.code == code).cloned())
    }

    async fn find_by_ids(&self, ids: &[String]) -> AppResult<Vec<Course>> {
        Ok(self
            .sorted()
            .into_iter()
            .filter(|c| ids.contains(&c.id))
            .collect())
    }

    async fn insert(&self, course: Course) -> AppResult<Course> {
        let mut courses = lock(&self.courses);
        if courses
            .iter()
            .any(|c| c.code == course.code || c.title == course.title)
        {
            return Err(AppError::ConflictError("duplicate course".to_string()));
        }

        courses.push(course.clone());
        Ok(course)
    }

    async fn update(&self, course: &Course, _previous_title: &str) -> AppResult<()> {
        let mut courses = lock(&self.courses);
        if courses
            .iter()
            .any(|c| c.id != course.id && c.title == course.title)
        {
            return Err(AppError::ConflictError("duplicate title".to_string()));
        }

        if let Some(existing) = courses.iter_mut().find(|c| c.id == course.id) {
            *existing = course.clone();
        }
        Ok(())
    }

    async fn delete(&self, course: &Course) -> AppResult<bool> {
        let mut courses = lock(&self.courses);
        let before = courses.len();
        courses.retain(|c| c.id != course.id);
        Ok(courses.len() < before)
    }

    async fn list(&self, filter: &CourseFilter) -> AppResult<Vec<Course>> {
        Ok(self
            .sorted()
            .into_iter()
            .filter(|c| filter.matches(c))
            .collect())
    }

    async fn page(&self, skip: u64, limit: u64) -> AppResult<Vec<Course>> {
        Ok(self
            .sorted()
            .into_iter()
            .skip(skip as usize)
            .take(limit as usize)
            .collect())
    }

    async fn count(&self) -> AppResult<u64> {
        Ok(lock(&self.courses).len() as u64)
    }
}

// ---------------------------------------------------------------------------
// Orders
// ---------------------------------------------------------------------------

/// `(user_id, course_id)` 유니크 제약을 가진 주문 저장소
#[derive(Default)]
pub struct MemoryOrderStore {
    orders: Mutex<Vec<Order>>,
    /// `true`면 `exists_for`가 항상 `false`를 반환합니다.
    /// 두 요청이 동시에 중복 확인을 통과한 상황을 재현합니다.
    racing: bool,
}

impl MemoryOrderStore {
    pub fn racing() -> Self {
        Self {
            racing: true,
            ..Default::default()
        }
    }

    pub fn seed(&self, order: Order) {
        lock(&self.orders).push(order);
    }

    pub fn snapshot(&self) -> Vec<Order> {
        lock(&self.orders).clone()
    }

    pub fn len(&self) -> usize {
        lock(&self.orders).len()
    }
}

#[async_trait]
impl OrderStore for MemoryOrderStore {
    async fn insert(&self, order: &Order) -> AppResult<InsertOutcome> {
        let mut orders = lock(&self.orders);
        if orders
            .iter()
            .any(|o| o.user_id == order.user_id && o.course_id == order.course_id)
        {
            return Ok(InsertOutcome::AlreadyExists);
        }

        orders.push(order.clone());
        Ok(InsertOutcome::Inserted)
    }

    async fn exists_for(&self, user_id: &ObjectId, course_id: &str) -> AppResult<bool> {
        if self.racing {
            return Ok(false);
        }

        Ok(lock(&self.orders)
            .iter()
            .any(|o| &o.user_id == user_id && o.course_id == course_id))
    }

    async fn find_by_user(&self, user_id: &ObjectId) -> AppResult<Vec<Order>> {
        Ok(lock(&self.orders)
            .iter()
            .filter(|o| &o.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn find_all(&self) -> AppResult<Vec<Order>> {
        Ok(self.snapshot())
    }

    async fn delete_by_user(&self, user_id: &ObjectId) -> AppResult<u64> {
        let mut orders = lock(&self.orders);
        let before = orders.len();
        orders.retain(|o| &o.user_id != user_id);
        Ok((before - orders.len()) as u64)
    }

    async fn delete_by_course(&self, course_id: &str) -> AppResult<u64> {
        let mut orders = lock(&self.orders);
        let before = orders.len();
        orders.retain(|o| o.course_id != course_id);
        Ok((before - orders.len()) as u64)
    }
}

// ---------------------------------------------------------------------------
// OTP
// ---------------------------------------------------------------------------

#[derive(Default)]
pub struct MemoryOtpStore {
    otps: Mutex<Vec<OneTimePassword>>,
}

impl MemoryOtpStore {
    pub fn seed(&self, otp: OneTimePassword) {
        lock(&self.otps).push(otp);
    }

    pub fn for_user(&self, user_id: &ObjectId) -> Vec<OneTimePassword> {
        lock(&self.otps)
            .iter()
            .filter(|o| &o.user_id == user_id)
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        lock(&self.otps).len()
    }
}

#[async_trait]
impl OtpStore for MemoryOtpStore {
    async fn replace_for_user(&self, otp: OneTimePassword) -> AppResult<()> {
        let mut otps = lock(&self.otps);
        otps.retain(|o| o.user_id != otp.user_id);
        otps.push(otp);
        Ok(())
    }

    async fn find_for_user(
        &self,
        user_id: &ObjectId,
        digest: &str,
    ) -> AppResult<Option<OneTimePassword>> {
        Ok(lock(&self.otps)
            .iter()
            .find(|o| &o.user_id == user_id && o.code_digest == digest)
            .cloned())
    }

    async fn delete(&self, otp: &OneTimePassword) -> AppResult<bool> {
        let mut otps = lock(&self.otps);
        let before = otps.len();
        otps.retain(|o| !(o.user_id == otp.user_id && o.code_digest == otp.code_digest));
        Ok(otps.len() < before)
    }

    async fn delete_by_user(&self, user_id: &ObjectId) -> AppResult<u64> {
        let mut otps = lock(&self.otps);
        let before = otps.len();
        otps.retain(|o| &o.user_id != user_id);
        Ok((before - otps.len()) as u64)
    }
}

// ---------------------------------------------------------------------------
// Notifications
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct SentMessage {
    pub recipient: String,
    pub subject: String,
    pub body: String,
}

/// 보낸 메시지를 기록하는 게이트웨이
#[derive(Default)]
pub struct RecordingGateway {
    sent: Mutex<Vec<SentMessage>>,
}

impl RecordingGateway {
    pub fn sent(&self) -> Vec<SentMessage> {
        lock(&self.sent).clone()
    }
}

#[async_trait]
impl NotificationGateway for RecordingGateway {
    async fn send(&self, recipient: &str, subject: &str, body: &str) -> AppResult<()> {
        lock(&self.sent).push(SentMessage {
            recipient: recipient.to_string(),
            subject: subject.to_string(),
            body: body.to_string(),
        });
        Ok(())
    }
}

/// 항상 발송에 실패하는 게이트웨이
#[derive(Default)]
pub struct FailingGateway {
    attempts: AtomicUsize,
}

impl FailingGateway {
    pub fn attempts(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl NotificationGateway for FailingGateway {
    async fn send(&self, _recipient: &str, _subject: &str, _body: &str) -> AppResult<()> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        Err(AppError::ExternalServiceError(
            "SMTP connection refused".to_string(),
        ))
    }
}
