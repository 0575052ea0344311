//! # 강의 리포지토리 구현
//!
//! MongoDB `courses` 컬렉션을 사용하며, 주문 흐름에서 가장 자주 일어나는
//! 제목 조회 결과를 Redis에 캐싱합니다.
//!
//! | 키 | 값 | 무효화 시점 |
//! |----|----|-------------|
//! | `course:title:{title}` | `Course` | 수정(이전/새 제목), 삭제 |

use std::sync::Arc;

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{
    Collection, IndexModel,
    bson::{Document, doc, to_bson},
    options::IndexOptions,
};
use once_cell::sync::OnceCell;

use crate::{
    caching::redis::RedisClient,
    config::CacheConfig,
    core::{errors::AppError, errors::AppResult, registry::ServiceLocator},
    db::Database,
    domain::{entities::courses::course::Course, models::catalog::CourseFilter},
    repositories::{is_duplicate_key, stores::CourseStore},
    utils::string_utils::escape_regex,
};

const COLLECTION: &str = "courses";

pub struct CourseRepository {
    db: Arc<Database>,
    redis: Arc<RedisClient>,
}

static COURSE_REPOSITORY_INSTANCE: OnceCell<Arc<CourseRepository>> = OnceCell::new();

impl CourseRepository {
    pub fn instance() -> Arc<Self> {
        COURSE_REPOSITORY_INSTANCE
            .get_or_init(|| {
                Arc::new(Self {
                    db: ServiceLocator::get::<Database>(),
                    redis: ServiceLocator::get::<RedisClient>(),
                })
            })
            .clone()
    }

    fn collection(&self) -> Collection<Course> {
        self.db.get_database().collection::<Course>(COLLECTION)
    }

    fn cache_key(title: &str) -> String {
        format!("course:title:{}", title)
    }

    /// 필터를 MongoDB 쿼리 문서로 변환합니다.
    fn filter_document(filter: &CourseFilter) -> AppResult<Document> {
        let mut query = Document::new();

        if let Some(category) = filter.category {
            let value = to_bson(&category).map_err(|e| AppError::InternalError(e.to_string()))?;
            query.insert("category", value);
        }

        if let Some(level) = filter.level {
            let value = to_bson(&level).map_err(|e| AppError::InternalError(e.to_string()))?;
            query.insert("level", value);
        }

        match filter.premium {
            Some(true) => {
                query.insert("price", doc! { "$gt": 0.0 });
            }
            Some(false) => {
                query.insert("price", doc! { "$lte": 0.0 });
            }
            None => {}
        }

        if let Some(title) = &filter.title {
            query.insert(
                "title",
                doc! { "$regex": escape_regex(title), "$options": "i" },
            );
        }

        Ok(query)
    }

    async fn collect(&self, cursor: mongodb::Cursor<Course>) -> AppResult<Vec<Course>> {
        cursor
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    pub async fn create_indexes(&self) -> AppResult<()> {
        let code_index = IndexModel::builder()
            .keys(doc! { "code": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("code_unique".to_string())
                    .build(),
            )
            .build();

        let title_index = IndexModel::builder()
            .keys(doc! { "title": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("title_unique".to_string())
                    .build(),
            )
            .build();

        self.collection()
            .create_indexes([code_index, title_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}

#[async_trait]
impl CourseStore for CourseRepository {
    async fn find_by_title(&self, title: &str) -> AppResult<Option<Course>> {
        let cache_key = Self::cache_key(title);

        match self.redis.get::<Course>(&cache_key).await {
            Ok(Some(cached)) => return Ok(Some(cached)),
            Ok(None) => {}
            Err(e) => log::warn!("강의 캐시 조회 실패 ({}): {}", title, e),
        }

        let course = self.find_by_title_fresh(title).await?;

        if let Some(ref course) = course {
            if let Err(e) = self
                .redis
                .set_with_expiry(&cache_key, course, CacheConfig::ttl_seconds())
                .await
            {
                log::warn!("강의 캐시 저장 실패 ({}): {}", title, e);
            }
        }

        Ok(course)
    }

    async fn find_by_title_fresh(&self, title: &str) -> AppResult<Option<Course>> {
        self.collection()
            .find_one(doc! { "title": title })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn find_by_code(&self, code: &str) -> AppResult<Option<Course>> {
        self.collection()
            .find_one(doc! { "code": code })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn find_by_ids(&self, ids: &[String]) -> AppResult<Vec<Course>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let cursor = self
            .collection()
            .find(doc! { "_id": { "$in": ids.to_vec() } })
            .sort(doc! { "title": 1 })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        self.collect(cursor).await
    }

    async fn insert(&self, course: Course) -> AppResult<Course> {
        self.collection().insert_one(&course).await.map_err(|e| {
            if is_duplicate_key(&e) {
                AppError::ConflictError("이미 존재하는 강의 코드 또는 제목입니다".to_string())
            } else {
                AppError::DatabaseError(e.to_string())
            }
        })?;

        Ok(course)
    }

    async fn update(&self, course: &Course, previous_title: &str) -> AppResult<()> {
        self.collection()
            .replace_one(doc! { "_id": course.id.as_str() }, course)
            .await
            .map_err(|e| {
                if is_duplicate_key(&e) {
                    AppError::ConflictError("이미 존재하는 강의 제목입니다".to_string())
                } else {
                    AppError::DatabaseError(e.to_string())
                }
            })?;

        if let Err(e) = self
            .redis
            .del_multiple(&[Self::cache_key(previous_title), Self::cache_key(&course.title)])
            .await
        {
            log::warn!("강의 캐시 무효화 실패 ({}): {}", course.code, e);
        }

        Ok(())
    }

    async fn delete(&self, course: &Course) -> AppResult<bool> {
        let result = self
            .collection()
            .delete_one(doc! { "_id": course.id.as_str() })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        if let Err(e) = self.redis.del(&Self::cache_key(&course.title)).await {
            log::warn!("강의 캐시 무효화 실패 ({}): {}", course.code, e);
        }

        Ok(result.deleted_count > 0)
    }

    async fn list(&self, filter: &CourseFilter) -> AppResult<Vec<Course>> {
        let cursor = self
            .collection()
            .find(Self::filter_document(filter)?)
            .sort(doc! { "title": 1 })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        self.collect(cursor).await
    }

    async fn page(&self, skip: u64, limit: u64) -> AppResult<Vec<Course>> {
        let cursor = self
            .collection()
            .find(doc! {})
            .sort(doc! { "title": 1 })
            .skip(skip)
            .limit(i64::try_from(limit).unwrap_or(i64::MAX))
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        self.collect(cursor).await
    }

    async fn count(&self) -> AppResult<u64> {
        self.collection()
            .count_documents(doc! {})
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }
}

fn course_repository_constructor() -> Box<dyn std::any::Any + Send + Sync> {
    Box::new(CourseRepository::instance() as Arc<dyn std::any::Any + Send + Sync>)
}

inventory::submit! {
    crate::core::registry::RepositoryRegistration {
        name: "course_repository",
        constructor: course_repository_constructor,
    }
}
