//! 주문 리포지토리

pub mod order_repo;

pub use order_repo::OrderRepository;
