//! # Redis 캐시 클라이언트
//!
//! 리포지토리의 cache-aside 조회에 사용하는 JSON 기반 Redis 래퍼입니다.
//! 값은 `serde_json`으로 직렬화되어 문자열로 저장됩니다.

use redis::{AsyncCommands, Client};
use serde::{Serialize, de::DeserializeOwned};

use crate::config::CacheConfig;

/// Redis 캐시 클라이언트 래퍼
///
/// ```rust,ignore
/// let redis = RedisClient::new().await?;
/// redis.set_with_expiry("course:title:rust-101", &course, 600).await?;
/// let cached: Option<Course> = redis.get("course:title:rust-101").await?;
/// ```
#[derive(Clone)]
pub struct RedisClient {
    /// 멀티플렉싱을 지원하는 Redis 클라이언트
    client: Client,
}

impl RedisClient {
    /// `CacheConfig::redis_url()`로 연결하고 `PING`으로 가용성을 확인합니다.
    pub async fn new() -> Result<Self, Box<dyn std::error::Error>> {
        let client = Client::open(CacheConfig::redis_url())?;

        let mut conn = client.get_multiplexed_async_connection().await?;
        redis::cmd("PING").query_async::<()>(&mut conn).await?;

        log::info!("✅ Redis 연결 성공");

        Ok(Self { client })
    }

    /// 키에 저장된 JSON을 역직렬화하여 반환합니다. 키가 없으면 `None`.
    pub async fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, redis::RedisError> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        let value: Option<String> = conn.get(key).await?;

        match value {
            Some(json) => {
                let deserialized = serde_json::from_str(&json).map_err(|e| {
                    redis::RedisError::from((
                        redis::ErrorKind::TypeError,
                        "Deserialization failed",
                        e.to_string(),
                    ))
                })?;
                Ok(Some(deserialized))
            }
            None => Ok(None),
        }
    }

    /// TTL(초)과 함께 값을 저장합니다.
    pub async fn set_with_expiry<T: Serialize>(
        &self,
        key: &str,
        value: &T,
        seconds: u64,
    ) -> Result<(), redis::RedisError> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        let json = serde_json::to_string(value).map_err(|e| {
            redis::RedisError::from((
                redis::ErrorKind::TypeError,
                "Serialization failed",
                e.to_string(),
            ))
        })?;
        conn.set_ex(key, json, seconds).await
    }

    /// 키를 삭제합니다. 키가 없어도 성공으로 처리됩니다.
    pub async fn del(&self, key: &str) -> Result<(), redis::RedisError> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        conn.del(key).await
    }

    /// 여러 키를 한 번에 삭제합니다.
    pub async fn del_multiple(&self, keys: &[String]) -> Result<(), redis::RedisError> {
        if keys.is_empty() {
            return Ok(());
        }
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        conn.del(keys).await
    }
}
