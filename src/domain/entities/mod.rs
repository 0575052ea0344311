//! 도메인 엔티티
//!
//! MongoDB 컬렉션에 저장되는 영속 객체들입니다.
//!
//! | 엔티티 | 컬렉션 | 식별자 |
//! |--------|--------|--------|
//! | [`User`] | `users` | `ObjectId` |
//! | [`Course`] | `courses` | UUID 문자열 |
//! | [`Order`] | `orders` | UUID 문자열 |
//! | [`OneTimePassword`] | `one_time_passwords` | `ObjectId` |

pub mod courses;
pub mod orders;
pub mod otp;
pub mod users;

pub use courses::*;
pub use orders::*;
pub use otp::*;
pub use users::*;
