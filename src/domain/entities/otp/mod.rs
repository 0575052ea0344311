pub mod one_time_password;

pub use one_time_password::*;
