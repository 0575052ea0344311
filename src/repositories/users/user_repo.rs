//! # 사용자 리포지토리 구현
//!
//! MongoDB `users` 컬렉션을 주 저장소로 사용하고,
//! 사용자명 조회 결과를 Redis에 캐싱합니다.
//!
//! ## 캐시 키
//!
//! | 키 | 값 | 무효화 시점 |
//! |----|----|-------------|
//! | `user:username:{username}` | `User` | 인증 완료, 프로필 수정, 삭제 |
//!
//! Redis 오류는 경고 로그만 남기고 MongoDB 결과를 그대로 사용합니다.
//! 무효화가 실패하면 TTL 동안 이전 값이 남을 수 있으므로, 쓰기 직전의
//! 존재 확인은 [`UserStore::find_by_username_fresh`]로 캐시를 건너뜁니다.

use std::sync::Arc;

use async_trait::async_trait;
use mongodb::{
    Collection, IndexModel,
    bson::{DateTime, Document, doc, oid::ObjectId},
    options::{FindOneAndUpdateOptions, IndexOptions, ReturnDocument},
};
use once_cell::sync::OnceCell;

use crate::{
    caching::redis::RedisClient,
    config::CacheConfig,
    core::{errors::AppError, errors::AppResult, registry::ServiceLocator},
    db::Database,
    domain::entities::users::user::User,
    repositories::{
        is_duplicate_key,
        stores::{ProfileUpdate, UserStore},
    },
};

const COLLECTION: &str = "users";

pub struct UserRepository {
    db: Arc<Database>,
    redis: Arc<RedisClient>,
}

static USER_REPOSITORY_INSTANCE: OnceCell<Arc<UserRepository>> = OnceCell::new();

impl UserRepository {
    pub fn instance() -> Arc<Self> {
        USER_REPOSITORY_INSTANCE
            .get_or_init(|| {
                Arc::new(Self {
                    db: ServiceLocator::get::<Database>(),
                    redis: ServiceLocator::get::<RedisClient>(),
                })
            })
            .clone()
    }

    fn collection(&self) -> Collection<User> {
        self.db.get_database().collection::<User>(COLLECTION)
    }

    fn cache_key(username: &str) -> String {
        format!("user:username:{}", username)
    }

    async fn invalidate(&self, username: &str) {
        if let Err(e) = self.redis.del(&Self::cache_key(username)).await {
            log::warn!("사용자 캐시 무효화 실패 ({}): {}", username, e);
        }
    }

    async fn update_by_id(&self, id: &ObjectId, set: Document) -> AppResult<Option<User>> {
        let options = FindOneAndUpdateOptions::builder()
            .return_document(ReturnDocument::After)
            .build();

        let updated = self
            .collection()
            .find_one_and_update(doc! { "_id": *id }, doc! { "$set": set })
            .with_options(options)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        if let Some(ref user) = updated {
            self.invalidate(&user.username).await;
        }

        Ok(updated)
    }

    pub async fn create_indexes(&self) -> AppResult<()> {
        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("email_unique".to_string())
                    .build(),
            )
            .build();

        let username_index = IndexModel::builder()
            .keys(doc! { "username": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("username_unique".to_string())
                    .build(),
            )
            .build();

        self.collection()
            .create_indexes([email_index, username_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}

#[async_trait]
impl UserStore for UserRepository {
    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        let cache_key = Self::cache_key(username);

        match self.redis.get::<User>(&cache_key).await {
            Ok(Some(cached)) => return Ok(Some(cached)),
            Ok(None) => {}
            Err(e) => log::warn!("사용자 캐시 조회 실패 ({}): {}", username, e),
        }

        let user = self.find_by_username_fresh(username).await?;

        if let Some(ref user) = user {
            if let Err(e) = self
                .redis
                .set_with_expiry(&cache_key, user, CacheConfig::ttl_seconds())
                .await
            {
                log::warn!("사용자 캐시 저장 실패 ({}): {}", username, e);
            }
        }

        Ok(user)
    }

    async fn find_by_username_fresh(&self, username: &str) -> AppResult<Option<User>> {
        self.collection()
            .find_one(doc! { "username": username })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        self.collection()
            .find_one(doc! { "email": email })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn find_by_id(&self, id: &ObjectId) -> AppResult<Option<User>> {
        self.collection()
            .find_one(doc! { "_id": *id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn insert(&self, mut user: User) -> AppResult<User> {
        let result = self.collection().insert_one(&user).await.map_err(|e| {
            if is_duplicate_key(&e) {
                AppError::ConflictError("이미 사용 중인 사용자명 또는 이메일입니다".to_string())
            } else {
                AppError::DatabaseError(e.to_string())
            }
        })?;

        let id = result.inserted_id.as_object_id().ok_or_else(|| {
            AppError::InternalError("삽입된 사용자 ID를 확인할 수 없습니다".to_string())
        })?;
        user.id = Some(id);

        Ok(user)
    }

    async fn mark_verified(&self, id: &ObjectId) -> AppResult<bool> {
        let updated = self
            .update_by_id(
                id,
                doc! { "is_verified": true, "updated_at": DateTime::now() },
            )
            .await?;

        Ok(updated.is_some())
    }

    async fn update_profile(&self, id: &ObjectId, update: ProfileUpdate) -> AppResult<Option<User>> {
        let mut set = doc! { "updated_at": DateTime::now() };
        if let Some(phone_number) = update.phone_number {
            set.insert("phone_number", phone_number);
        }
        if let Some(country) = update.country {
            set.insert("country", country);
        }
        if let Some(city) = update.city {
            set.insert("city", city);
        }

        self.update_by_id(id, set).await
    }

    async fn delete(&self, user: &User) -> AppResult<bool> {
        let Some(id) = user.id else {
            return Ok(false);
        };

        let result = self
            .collection()
            .delete_one(doc! { "_id": id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        self.invalidate(&user.username).await;

        Ok(result.deleted_count > 0)
    }
}

fn user_repository_constructor() -> Box<dyn std::any::Any + Send + Sync> {
    Box::new(UserRepository::instance() as Arc<dyn std::any::Any + Send + Sync>)
}

inventory::submit! {
    crate::core::registry::RepositoryRegistration {
        name: "user_repository",
        constructor: user_repository_constructor,
    }
}
