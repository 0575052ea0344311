//! 강의 관리 요청 DTO

use serde::Deserialize;
use validator::Validate;

use crate::domain::entities::courses::course::{CourseCategory, CourseLevel};

/// 강의 등록 요청 (관리자)
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct AddCourseRequest {
    #[validate(length(min = 1, max = 20, message = "강의 코드는 1-20자 사이여야 합니다"))]
    pub code: String,

    #[validate(length(min = 1, max = 100, message = "강의 제목은 1-100자 사이여야 합니다"))]
    pub title: String,

    #[validate(range(min = 0.0, message = "가격은 0 이상이어야 합니다"))]
    pub price: f64,

    pub category: CourseCategory,

    pub level: CourseLevel,

    #[validate(length(min = 1, max = 50, message = "강사 이름은 1-50자 사이여야 합니다"))]
    pub teacher: String,

    #[serde(default)]
    #[validate(length(max = 2000, message = "강의 설명은 최대 2000자입니다"))]
    pub description: String,
}

/// 강의 수정 요청 (관리자). 전달된 필드만 수정됩니다.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateCourseRequest {
    #[validate(length(min = 1, max = 100, message = "강의 제목은 1-100자 사이여야 합니다"))]
    pub title: Option<String>,

    #[validate(range(min = 0.0, message = "가격은 0 이상이어야 합니다"))]
    pub price: Option<f64>,

    pub category: Option<CourseCategory>,

    pub level: Option<CourseLevel>,

    #[validate(length(min = 1, max = 50, message = "강사 이름은 1-50자 사이여야 합니다"))]
    pub teacher: Option<String>,

    #[validate(length(max = 2000, message = "강의 설명은 최대 2000자입니다"))]
    pub description: Option<String>,
}

/// 강의 목록 조회 쿼리
///
/// `GET /api/v1/courses?category=backend&level=beginner&premium=true&title=rust`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CourseListQuery {
    pub category: Option<String>,
    pub level: Option<String>,
    /// `true`: 유료 강의만, `false`: 무료 강의만
    pub premium: Option<bool>,
    pub title: Option<String>,
}
