//! 이메일 인증 OTP 리포지토리

pub mod otp_repo;

pub use otp_repo::OtpRepository;
