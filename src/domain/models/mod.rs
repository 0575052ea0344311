//! 도메인 모델
//!
//! 영속되지 않는 도메인 값 객체들입니다.
//!
//! - [`auth`] - 인증된 사용자 식별 정보, 라우트별 인증 요구사항
//! - [`token`] - JWT 클레임
//! - [`catalog`] - 강의 목록 필터

pub mod auth;
pub mod catalog;
pub mod token;
