use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::courses::course::{Course, CourseCategory, CourseLevel};
use crate::utils::time_utils::to_utc;

#[derive(Debug, Clone, Serialize)]
pub struct CourseResponse {
    pub id: String,
    pub code: String,
    pub title: String,
    pub price: f64,
    pub premium: bool,
    pub category: CourseCategory,
    pub level: CourseLevel,
    pub teacher: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
}

impl From<Course> for CourseResponse {
    fn from(course: Course) -> Self {
        let premium = course.is_premium();

        Self {
            id: course.id,
            code: course.code,
            title: course.title,
            price: course.price,
            premium,
            category: course.category,
            level: course.level,
            teacher: course.teacher,
            description: course.description,
            created_at: to_utc(course.created_at),
        }
    }
}
