//! 사용자 관리 서비스 모듈
//!
//! ```rust,ignore
//! use crate::services::users::UserService;
//!
//! let profile = UserService::instance().get_profile(&identity).await?;
//! ```

pub mod user_service;

pub use user_service::UserService;
