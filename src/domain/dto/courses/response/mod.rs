pub mod course_response;

pub use course_response::CourseResponse;
