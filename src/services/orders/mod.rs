//! 주문 서비스 모듈
//!
//! - [`OrderService`] - 주문 생성, 견적, 내역, 연쇄 삭제
//! - [`pricing`] - 부가세 11% 견적 계산
//! - [`receipt`] - 영수증 메일 본문

pub mod order_service;
pub mod pricing;
pub mod receipt;

pub use order_service::{OrderOutcome, OrderService};
