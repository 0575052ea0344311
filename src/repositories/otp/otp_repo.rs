//! # OTP 리포지토리 구현
//!
//! 사용자당 하나의 OTP만 유지합니다. 조회는 항상 `(user_id, code_digest)`로 하며,
//! 다른 사용자의 같은 코드와 섞이지 않습니다. 만료된 문서는 `expires_at` TTL 인덱스로
//! MongoDB가 정리하지만, 만료 판정은 항상 서비스 계층에서 다시 합니다.

use std::sync::Arc;

use async_trait::async_trait;
use mongodb::{
    Collection, IndexModel,
    bson::{doc, oid::ObjectId},
    options::IndexOptions,
};
use once_cell::sync::OnceCell;

use crate::{
    core::{errors::AppError, errors::AppResult, registry::ServiceLocator},
    db::Database,
    domain::entities::otp::one_time_password::OneTimePassword,
    repositories::stores::OtpStore,
};

const COLLECTION: &str = "one_time_passwords";

pub struct OtpRepository {
    db: Arc<Database>,
}

static OTP_REPOSITORY_INSTANCE: OnceCell<Arc<OtpRepository>> = OnceCell::new();

impl OtpRepository {
    pub fn instance() -> Arc<Self> {
        OTP_REPOSITORY_INSTANCE
            .get_or_init(|| {
                Arc::new(Self {
                    db: ServiceLocator::get::<Database>(),
                })
            })
            .clone()
    }

    fn collection(&self) -> Collection<OneTimePassword> {
        self.db
            .get_database()
            .collection::<OneTimePassword>(COLLECTION)
    }

    pub async fn create_indexes(&self) -> AppResult<()> {
        let user_index = IndexModel::builder()
            .keys(doc! { "user_id": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("user_unique".to_string())
                    .build(),
            )
            .build();

        let ttl_index = IndexModel::builder()
            .keys(doc! { "expires_at": 1 })
            .options(
                IndexOptions::builder()
                    .expire_after(std::time::Duration::from_secs(0))
                    .name("expires_at_ttl".to_string())
                    .build(),
            )
            .build();

        self.collection()
            .create_indexes([user_index, ttl_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}

#[async_trait]
impl OtpStore for OtpRepository {
    async fn replace_for_user(&self, otp: OneTimePassword) -> AppResult<()> {
        self.delete_by_user(&otp.user_id).await?;

        self.collection()
            .insert_one(&otp)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }

    async fn find_for_user(
        &self,
        user_id: &ObjectId,
        digest: &str,
    ) -> AppResult<Option<OneTimePassword>> {
        self.collection()
            .find_one(doc! { "user_id": *user_id, "code_digest": digest })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn delete(&self, otp: &OneTimePassword) -> AppResult<bool> {
        let result = self
            .collection()
            .delete_one(doc! { "user_id": otp.user_id, "code_digest": otp.code_digest.as_str() })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(result.deleted_count > 0)
    }

    async fn delete_by_user(&self, user_id: &ObjectId) -> AppResult<u64> {
        let result = self
            .collection()
            .delete_many(doc! { "user_id": *user_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(result.deleted_count)
    }
}

fn otp_repository_constructor() -> Box<dyn std::any::Any + Send + Sync> {
    Box::new(OtpRepository::instance() as Arc<dyn std::any::Any + Send + Sync>)
}

inventory::submit! {
    crate::core::registry::RepositoryRegistration {
        name: "otp_repository",
        constructor: otp_repository_constructor,
    }
}
