//! 사용자 리포지토리
//!
//! ```rust,ignore
//! use crate::repositories::users::UserRepository;
//!
//! let user = UserRepository::instance().find_by_username("budi").await?;
//! ```

pub mod user_repo;

pub use user_repo::UserRepository;
