pub mod course_request;

pub use course_request::{AddCourseRequest, CourseListQuery, UpdateCourseRequest};
