//! 강의 카탈로그 서비스 모듈

pub mod course_service;

pub use course_service::CourseService;
