//! 미들웨어 모듈
//!
//! ### 인증 미들웨어 (AuthMiddleware)
//! - Bearer JWT 검증 후 `AuthenticatedUser`를 request extension에 저장
//! - 필수/선택 인증 모드, 역할 요구사항(`member`, `admin`) 지원
//!
//! ```rust,ignore
//! App::new()
//!     .service(
//!         web::scope("/api/v1/orders")
//!             .wrap(AuthMiddleware::member())
//!             .service(handlers::orders::create_order)
//!     )
//! ```

mod auth_inner;
pub mod auth_middleware;

pub use auth_middleware::AuthMiddleware;
