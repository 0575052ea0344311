//! # Domain Layer Module
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── entities  - MongoDB에 저장되는 영속 객체 (User, Course, Order, OneTimePassword)
//! ├── dto       - API 요청/응답 계약
//! └── models    - 인증 정보, JWT 클레임, 카탈로그 필터 등 값 객체
//!      │
//!      ▼
//! Application Layer (services)
//!      │
//!      ▼
//! Infrastructure Layer (repositories, db, caching)
//! ```

pub mod dto;
pub mod entities;
pub mod models;
