//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 각 서비스는 `instance()`로 접근하는 싱글톤이며, 저장소는 `Arc<dyn *Store>`로
//! 주입받습니다. 테스트에서는 `new(...)`에 인메모리 저장소를 넘겨 생성합니다.
//!
//! | 모듈 | 서비스 | 역할 |
//! |------|--------|------|
//! | [`auth`] | `AuthService`, `OtpService`, `TokenService` | 회원가입, 로그인, OTP, JWT |
//! | [`users`] | `UserService` | 프로필 조회/수정, 계정 삭제 |
//! | [`courses`] | `CourseService` | 강의 카탈로그 관리 |
//! | [`orders`] | `OrderService` | 주문 워크플로우 |
//! | [`notifications`] | `EmailService` | SMTP 메일 발송 |
//!
//! ```rust,ignore
//! use crate::services::orders::OrderService;
//!
//! let outcome = OrderService::instance()
//!     .create_order(&identity, "Rust Backend", "BCA Virtual Account")
//!     .await?;
//! ```

pub mod auth;
pub mod courses;
pub mod notifications;
pub mod orders;
pub mod users;
