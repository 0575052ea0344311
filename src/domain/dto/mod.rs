//! 데이터 전송 객체 (Request/Response)
//!
//! 요청 DTO는 `validator::Validate`를 구현하며, 핸들러에서 검증 후 서비스로 전달됩니다.
//! 응답 DTO는 엔티티에서 `From` 변환으로 생성되며 민감 정보를 포함하지 않습니다.

pub mod common;
pub mod courses;
pub mod orders;
pub mod users;

pub use common::*;
