//! # User Data Transfer Objects
//!
//! 회원가입, 로그인, OTP 인증, 프로필 관련 요청/응답 구조입니다.
//!
//! ```text
//! users/
//! ├── request/
//! │   ├── signup_request.rs          # 회원가입
//! │   ├── auth_request.rs            # 로그인, OTP 확인/재발송
//! │   └── update_profile_request.rs  # 프로필 수정
//! └── response/
//!     └── user_response.rs           # UserResponse, JwtResponse
//! ```
//!
//! ## 로그인 응답 예제
//!
//! ```json
//! {
//!   "token": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...",
//!   "token_type": "Bearer",
//!   "expires_in": 86400,
//!   "username": "budi_01",
//!   "email": "budi@example.com",
//!   "roles": ["user"]
//! }
//! ```

pub mod request;
pub mod response;

pub use request::*;
pub use response::*;
