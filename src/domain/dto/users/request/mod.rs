pub mod auth_request;
pub mod signup_request;
pub mod update_profile_request;

pub use auth_request::{LoginRequest, OtpRequest, ResendOtpRequest};
pub use signup_request::SignupRequest;
pub use update_profile_request::UpdateProfileRequest;
