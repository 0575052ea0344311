//! # HTTP Request Handlers
//!
//! 서비스 레이어를 HTTP 엔드포인트로 노출하는 핸들러 함수들입니다.
//! 경로 접두사와 인증 미들웨어는 [`crate::routes`]에서 scope 단위로 붙습니다.
//!
//! ```text
//! Client ──► Handlers (이 모듈) ──► Services ──► Repositories ──► MongoDB / Redis
//! ```
//!
//! ## 공통 규칙
//!
//! - 모든 핸들러는 `Result<HttpResponse, AppError>`를 반환하고, 에러는
//!   `AppError::error_response()`가 `{"error": ...}` JSON으로 변환합니다.
//! - 요청 본문은 `validator`로 먼저 검증하며 실패 시 400을 반환합니다.
//! - 로그인 사용자는 `AuthenticatedUser` 추출자로 받습니다. 미들웨어가 없는
//!   경로에서 추출하면 401이 됩니다.
//!
//! | 모듈 | 담당 |
//! |------|------|
//! | `auth` | 회원가입, 로그인, OTP 인증/재발송 |
//! | `users` | 내 프로필, 사용자 삭제(관리자) |
//! | `courses` | 강의 목록/상세, 구매 강의, 강의 관리(관리자) |
//! | `orders` | 견적, 주문 생성, 주문 내역, 전체 주문(관리자) |
//! | `health` | 헬스체크 |

pub mod auth;
pub mod courses;
pub mod health;
pub mod orders;
pub mod users;
