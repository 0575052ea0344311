//! 강의 리포지토리

pub mod course_repo;

pub use course_repo::CourseRepository;
