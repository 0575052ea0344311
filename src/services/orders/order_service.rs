//! # 주문 서비스
//!
//! 강의 구매 워크플로우의 핵심입니다.
//!
//! ## 주문 생성 흐름
//!
//! ```text
//! create_order(identity, course_title, payment_method)
//!   │
//!   ├─ 1. 사용자 조회 ─────────── 없음 → NotFound("User not found!")
//!   ├─ 2. 강의 조회 (제목) ────── 없음 → NotFound("Course not found!")
//!   ├─ 3. exists_for ─────────── 있음 → AlreadyOrdered (쓰기/발송 없음)
//!   ├─ 4. insert ─────────────── 유니크 인덱스 충돌 → AlreadyOrdered
//!   ├─ 5. 영수증 발송 ─────────── 실패 → NotificationError { order_id } (주문은 유지)
//!   └─ 6. Created { order_id }
//! ```
//!
//! 3번은 빠른 경로일 뿐입니다. 같은 `(사용자, 강의)`에 대한 동시 요청은
//! 모두 3번을 통과할 수 있으며, 4번의 유니크 제약이 하나만 남깁니다.

use std::sync::Arc;

use mongodb::bson::oid::ObjectId;
use once_cell::sync::OnceCell;

use crate::{
    core::errors::{AppError, AppResult},
    domain::{
        dto::orders::response::{
            OrderHistoryItem, OrderQuoteResponse, OrderSummaryResponse, OrderTransactionsResponse,
        },
        entities::{courses::course::Course, orders::order::Order, users::user::User},
        models::auth::AuthenticatedUser,
    },
    repositories::{
        courses::CourseRepository,
        orders::OrderRepository,
        stores::{CourseStore, InsertOutcome, OrderStore, UserStore},
        users::UserRepository,
    },
    services::{
        notifications::{EmailService, NotificationGateway},
        orders::{
            pricing,
            receipt::{RECEIPT_SUBJECT, Receipt},
        },
    },
    utils::time_utils::to_utc,
};

pub const ALREADY_ORDERED_MESSAGE: &str = "User already ordered this course!";
pub const ORDER_CREATED_MESSAGE: &str = "Create order successfully!";

/// 주문 생성 결과
///
/// 이미 주문한 강의는 에러가 아니라 정상 결과입니다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderOutcome {
    Created { order_id: String },
    AlreadyOrdered,
}

pub struct OrderService {
    users: Arc<dyn UserStore>,
    courses: Arc<dyn CourseStore>,
    orders: Arc<dyn OrderStore>,
    gateway: Arc<dyn NotificationGateway>,
}

static ORDER_SERVICE_INSTANCE: OnceCell<Arc<OrderService>> = OnceCell::new();

impl OrderService {
    pub fn new(
        users: Arc<dyn UserStore>,
        courses: Arc<dyn CourseStore>,
        orders: Arc<dyn OrderStore>,
        gateway: Arc<dyn NotificationGateway>,
    ) -> Self {
        Self {
            users,
            courses,
            orders,
            gateway,
        }
    }

    pub fn instance() -> Arc<Self> {
        ORDER_SERVICE_INSTANCE
            .get_or_init(|| {
                Arc::new(Self::new(
                    UserRepository::instance(),
                    CourseRepository::instance(),
                    OrderRepository::instance(),
                    EmailService::instance(),
                ))
            })
            .clone()
    }

    /// 사용자와 강의는 캐시를 건너뛰고 조회합니다.
    /// 삭제 직후 캐시에 남은 사용자나 강의로 주문이 만들어지지 않습니다.
    async fn resolve_user(&self, username: &str) -> AppResult<(User, ObjectId)> {
        let user = self
            .users
            .find_by_username_fresh(username)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found!".to_string()))?;

        let user_id = user
            .id
            .ok_or_else(|| AppError::InternalError("사용자 ID가 없습니다".to_string()))?;

        Ok((user, user_id))
    }

    async fn resolve_course(&self, title: &str) -> AppResult<Course> {
        self.courses
            .find_by_title_fresh(title)
            .await?
            .ok_or_else(|| AppError::NotFound("Course not found!".to_string()))
    }

    /// 강의를 주문하고 영수증을 보냅니다.
    ///
    /// # Returns
    ///
    /// * `Ok(OrderOutcome::Created)` - 주문 저장과 영수증 발송 모두 성공
    /// * `Ok(OrderOutcome::AlreadyOrdered)` - 이미 주문한 강의 (아무것도 쓰지 않음)
    ///
    /// # Errors
    ///
    /// * `AppError::NotFound` - 사용자 또는 강의 없음 (아무것도 쓰지 않음)
    /// * `AppError::NotificationError` - 주문은 저장되었으나 영수증 발송 실패
    pub async fn create_order(
        &self,
        identity: &AuthenticatedUser,
        course_title: &str,
        payment_method: &str,
    ) -> AppResult<OrderOutcome> {
        log::info!("🛒 주문 시작: {} → {}", identity.username, course_title);

        let (user, user_id) = self.resolve_user(&identity.username).await?;
        let course = self.resolve_course(course_title).await?;

        if self.exists_for(&user_id, &course.id).await? {
            log::info!("이미 주문한 강의: {} → {}", user.username, course.title);
            return Ok(OrderOutcome::AlreadyOrdered);
        }

        let order = Order::paid_now(user_id, course.id.clone(), payment_method.to_string());

        if self.orders.insert(&order).await? == InsertOutcome::AlreadyExists {
            log::info!("동시 주문 감지, 기존 주문 유지: {} → {}", user.username, course.title);
            return Ok(OrderOutcome::AlreadyOrdered);
        }

        let receipt = Receipt {
            username: &user.username,
            course_title: &course.title,
            payment_method: &order.payment_method,
            paid: order.paid,
            order_time: to_utc(order.order_time),
            order_id: &order.id,
        };

        if let Err(e) = self
            .gateway
            .send(&user.email, RECEIPT_SUBJECT, &receipt.body())
            .await
        {
            log::error!(
                "❌ 영수증 발송 실패 (order_id={}, course={}): {}",
                order.id,
                course.title,
                e
            );
            return Err(AppError::NotificationError {
                order_id: order.id,
                message: e.to_string(),
            });
        }

        log::info!("✅ 주문 완료: {} → {} ({})", user.username, course.title, order.id);

        Ok(OrderOutcome::Created { order_id: order.id })
    }

    /// 결제 전 견적 (부가세 11%)
    pub async fn get_data_order(
        &self,
        identity: &AuthenticatedUser,
        course_title: &str,
    ) -> AppResult<OrderQuoteResponse> {
        self.resolve_user(&identity.username).await?;
        let course = self.resolve_course(course_title).await?;

        let quote = pricing::quote(course.price);

        Ok(OrderQuoteResponse {
            title: course.title,
            teacher: course.teacher,
            category: course.category,
            price: quote.price,
            tax: quote.tax,
            total_price: quote.total,
        })
    }

    /// 사용자의 주문 내역 (저장 순서)
    pub async fn get_order_transactions(
        &self,
        identity: &AuthenticatedUser,
    ) -> AppResult<OrderTransactionsResponse> {
        let (_, user_id) = self.resolve_user(&identity.username).await?;

        let orders = self
            .orders
            .find_by_user(&user_id)
            .await?
            .into_iter()
            .map(OrderHistoryItem::from)
            .collect();

        Ok(OrderTransactionsResponse {
            user_id: user_id.to_hex(),
            orders,
        })
    }

    /// 사용자가 주문한 강의 ID 목록
    pub async fn purchased_course_ids(&self, identity: &AuthenticatedUser) -> AppResult<Vec<String>> {
        let (_, user_id) = self.resolve_user(&identity.username).await?;

        Ok(self
            .orders
            .find_by_user(&user_id)
            .await?
            .into_iter()
            .map(|order| order.course_id)
            .collect())
    }

    /// 전체 주문 (관리자)
    pub async fn get_all_orders(&self) -> AppResult<Vec<OrderSummaryResponse>> {
        Ok(self
            .orders
            .find_all()
            .await?
            .into_iter()
            .map(OrderSummaryResponse::from)
            .collect())
    }

    /// 사용자의 모든 주문을 삭제하고 삭제된 수를 반환합니다.
    pub async fn delete_by_username(&self, username: &str) -> AppResult<u64> {
        let (_, user_id) = self.resolve_user(username).await?;

        let deleted = self.orders.delete_by_user(&user_id).await?;
        log::info!("🗑️ 사용자 주문 삭제: {} ({}건)", username, deleted);

        Ok(deleted)
    }

    /// 강의의 모든 주문을 삭제하고 삭제된 수를 반환합니다.
    pub async fn delete_by_course_code(&self, code: &str) -> AppResult<u64> {
        let course = self
            .courses
            .find_by_code(code)
            .await?
            .ok_or_else(|| AppError::NotFound("Course not found!".to_string()))?;

        let deleted = self.orders.delete_by_course(&course.id).await?;
        log::info!("🗑️ 강의 주문 삭제: {} ({}건)", code, deleted);

        Ok(deleted)
    }

    /// 중복 주문 확인 (부수효과 없음)
    pub async fn exists_for(&self, user_id: &ObjectId, course_id: &str) -> AppResult<bool> {
        self.orders.exists_for(user_id, course_id).await
    }
}

fn order_service_constructor() -> Box<dyn std::any::Any + Send + Sync> {
    Box::new(OrderService::instance() as Arc<dyn std::any::Any + Send + Sync>)
}

inventory::submit! {
    crate::core::registry::ServiceRegistration {
        name: "order_service",
        constructor: order_service_constructor,
    }
}
