//! # Core Framework Module
//!
//! 백엔드 전역에서 사용하는 핵심 기능을 제공합니다.
//!
//! ## 모듈 구성
//!
//! ### [`registry`] - 싱글톤 레지스트리
//! - **ServiceLocator**: `Database`, `RedisClient` 등 인프라 컴포넌트 보관
//! - **자동 레지스트리**: `inventory` 기반 리포지토리/서비스 등록 정보 수집
//!
//! ### [`errors`] - 통합 에러 처리
//! - **AppError**: 애플리케이션 전역 에러 타입
//! - **HTTP 통합**: Actix-Web `ResponseError` 구현
//!
//! ## 애플리케이션 초기화
//!
//! ```rust,ignore
//! let database = Arc::new(Database::new().await?);
//! let redis = Arc::new(RedisClient::new().await?);
//!
//! ServiceLocator::set(database);
//! ServiceLocator::set(redis);
//!
//! ServiceLocator::initialize_all().await?;
//! ```

pub mod errors;
pub mod registry;

pub use errors::*;
pub use registry::*;
