//! easyclass 강의 마켓플레이스 백엔드
//!
//! 회원가입/OTP 이메일 인증, 강의 카탈로그, 그리고 핵심인 주문 워크플로를 제공하는
//! Actix-web 기반 REST 서비스입니다.
//!
//! # Features
//!
//! - **인증**: bcrypt 비밀번호, 이메일 OTP 계정 인증, HS256 JWT
//! - **강의 카탈로그**: 분야/난이도/유료 여부/제목 필터, 페이지 조회
//! - **주문**: 사용자-강의당 1회 주문 보장, 부가세 11% 견적, 이메일 영수증
//! - **MongoDB**: 영구 저장 (주문 중복은 유니크 인덱스로 차단)
//! - **Redis**: 사용자/강의 조회 캐시
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← scope별 인증 미들웨어
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청 검증, 상태 코드 결정
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 비즈니스 로직 (Store 트레이트에 의존)
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← MongoDB 구현 + Redis 캐시
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ MongoDB + Redis │ ← 저장소
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use easyclass_backend::services::orders::{OrderOutcome, OrderService};
//!
//! match OrderService::instance().create_order(&identity, "Rust Backend", "OVO").await? {
//!     OrderOutcome::Created { order_id } => println!("주문 완료: {}", order_id),
//!     OrderOutcome::AlreadyOrdered => println!("이미 주문한 강의"),
//! }
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod caching;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
pub mod middlewares;
