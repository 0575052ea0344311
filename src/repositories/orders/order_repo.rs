//! # 주문 리포지토리 구현
//!
//! `orders` 컬렉션의 `(user_id, course_id)` 복합 유니크 인덱스가 중복 주문 방지의
//! 최종 보루입니다. 서비스 계층의 `exists_for` 확인은 빠른 경로일 뿐이며,
//! 동시에 들어온 요청은 삽입 시점의 중복 키 오류(11000)로 걸러집니다.
//!
//! 주문은 캐싱하지 않습니다.

use std::sync::Arc;

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{
    Collection, IndexModel,
    bson::{Document, doc, oid::ObjectId},
    options::IndexOptions,
};
use once_cell::sync::OnceCell;

use crate::{
    core::{errors::AppError, errors::AppResult, registry::ServiceLocator},
    db::Database,
    domain::entities::orders::order::Order,
    repositories::{
        is_duplicate_key,
        stores::{InsertOutcome, OrderStore},
    },
};

const COLLECTION: &str = "orders";

/// 중복 주문 방지용 복합 유니크 인덱스 이름
pub const USER_COURSE_UNIQUE_INDEX: &str = "user_course_unique";

pub struct OrderRepository {
    db: Arc<Database>,
}

static ORDER_REPOSITORY_INSTANCE: OnceCell<Arc<OrderRepository>> = OnceCell::new();

impl OrderRepository {
    pub fn instance() -> Arc<Self> {
        ORDER_REPOSITORY_INSTANCE
            .get_or_init(|| {
                Arc::new(Self {
                    db: ServiceLocator::get::<Database>(),
                })
            })
            .clone()
    }

    fn collection(&self) -> Collection<Order> {
        self.db.get_database().collection::<Order>(COLLECTION)
    }

    /// 주문 내역 정렬 기준
    ///
    /// `order_time`은 밀리초 단위라 같은 밀리초에 저장된 주문은 `_id`로 순서를 고정합니다.
    /// 이 경우 순서는 결정적이지만 저장 순서와 다를 수 있습니다.
    fn history_sort() -> Document {
        doc! { "order_time": 1, "_id": 1 }
    }

    async fn find_sorted(&self, filter: Document) -> AppResult<Vec<Order>> {
        let cursor = self
            .collection()
            .find(filter)
            .sort(Self::history_sort())
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        cursor
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    pub async fn create_indexes(&self) -> AppResult<()> {
        let user_course_index = IndexModel::builder()
            .keys(doc! { "user_id": 1, "course_id": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name(USER_COURSE_UNIQUE_INDEX.to_string())
                    .build(),
            )
            .build();

        let course_index = IndexModel::builder()
            .keys(doc! { "course_id": 1 })
            .options(
                IndexOptions::builder()
                    .name("course_id".to_string())
                    .build(),
            )
            .build();

        self.collection()
            .create_indexes([user_course_index, course_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}

#[async_trait]
impl OrderStore for OrderRepository {
    async fn insert(&self, order: &Order) -> AppResult<InsertOutcome> {
        match self.collection().insert_one(order).await {
            Ok(_) => Ok(InsertOutcome::Inserted),
            Err(e) if is_duplicate_key(&e) => {
                log::debug!(
                    "중복 주문 삽입 차단 (user_id={}, course_id={})",
                    order.user_id,
                    order.course_id
                );
                Ok(InsertOutcome::AlreadyExists)
            }
            Err(e) => Err(AppError::DatabaseError(e.to_string())),
        }
    }

    async fn exists_for(&self, user_id: &ObjectId, course_id: &str) -> AppResult<bool> {
        let count = self
            .collection()
            .count_documents(doc! { "user_id": *user_id, "course_id": course_id })
            .limit(1)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(count > 0)
    }

    async fn find_by_user(&self, user_id: &ObjectId) -> AppResult<Vec<Order>> {
        self.find_sorted(doc! { "user_id": *user_id }).await
    }

    async fn find_all(&self) -> AppResult<Vec<Order>> {
        self.find_sorted(doc! {}).await
    }

    async fn delete_by_user(&self, user_id: &ObjectId) -> AppResult<u64> {
        let result = self
            .collection()
            .delete_many(doc! { "user_id": *user_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(result.deleted_count)
    }

    async fn delete_by_course(&self, course_id: &str) -> AppResult<u64> {
        let result = self
            .collection()
            .delete_many(doc! { "course_id": course_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(result.deleted_count)
    }
}

fn order_repository_constructor() -> Box<dyn std::any::Any + Send + Sync> {
    Box::new(OrderRepository::instance() as Arc<dyn std::any::Any + Send + Sync>)
}

inventory::submit! {
    crate::core::registry::RepositoryRegistration {
        name: "order_repository",
        constructor: order_repository_constructor,
    }
}
