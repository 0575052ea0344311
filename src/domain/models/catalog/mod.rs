pub mod course_filter;

pub use course_filter::*;
