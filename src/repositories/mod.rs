//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 각 리포지토리는 `instance()`로 접근하는 싱글톤이며, [`stores`]의
//! 저장소 trait을 구현합니다. MongoDB를 주 저장소로 사용하고,
//! 사용자/강의 조회는 Redis에 캐싱합니다.
//!
//! | 리포지토리 | 컬렉션 | 캐시 |
//! |------------|--------|------|
//! | [`UserRepository`](users::UserRepository) | `users` | ✓ |
//! | [`CourseRepository`](courses::CourseRepository) | `courses` | ✓ |
//! | [`OrderRepository`](orders::OrderRepository) | `orders` | - |
//! | [`OtpRepository`](otp::OtpRepository) | `one_time_passwords` | - |
//!
//! ```rust,ignore
//! use crate::repositories::users::UserRepository;
//!
//! let user_repo = UserRepository::instance();
//! let user = user_repo.find_by_email("user@example.com").await?;
//! ```

use mongodb::error::{ErrorKind, WriteFailure};

pub mod courses;
pub mod orders;
pub mod otp;
pub mod stores;
pub mod users;

#[cfg(test)]
pub mod memory;

/// MongoDB 중복 키 에러 코드
const DUPLICATE_KEY_CODE: i32 = 11000;

/// 유니크 인덱스 위반(E11000) 여부
pub(crate) fn is_duplicate_key(error: &mongodb::error::Error) -> bool {
    match error.kind.as_ref() {
        ErrorKind::Write(WriteFailure::WriteError(write_error)) => {
            write_error.code == DUPLICATE_KEY_CODE
        }
        ErrorKind::Command(command_error) => command_error.code == DUPLICATE_KEY_CODE,
        _ => false,
    }
}
