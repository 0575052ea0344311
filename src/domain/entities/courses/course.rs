//! Course Entity
//!
//! 판매 중인 강의입니다. 강의 코드와 제목은 각각 유일하며,
//! 주문 워크플로우는 강의를 읽기만 합니다.

use mongodb::bson::DateTime;
use serde::{Deserialize, Serialize};

/// 강의 분야 (기술 스택)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CourseCategory {
    BackEnd,
    FrontEnd,
    FullStack,
}

impl CourseCategory {
    /// 쿼리 파라미터 값(`backend`, `front-end`, `FULL_STACK` 등)을 해석합니다.
    pub fn parse(raw: &str) -> Option<Self> {
        let normalized: String = raw
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect::<String>()
            .to_lowercase();

        match normalized.as_str() {
            "backend" => Some(CourseCategory::BackEnd),
            "frontend" => Some(CourseCategory::FrontEnd),
            "fullstack" => Some(CourseCategory::FullStack),
            _ => None,
        }
    }
}

/// 강의 난이도
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CourseLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl CourseLevel {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "beginner" => Some(CourseLevel::Beginner),
            "intermediate" => Some(CourseLevel::Intermediate),
            "advanced" => Some(CourseLevel::Advanced),
            _ => None,
        }
    }
}

/// 강의 엔티티
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Course {
    /// UUID v4 문자열
    #[serde(rename = "_id")]
    pub id: String,
    /// 강의 코드 (unique)
    pub code: String,
    /// 강의 제목 (unique)
    pub title: String,
    /// 가격 (0 이상, 0이면 무료 강의)
    pub price: f64,
    pub category: CourseCategory,
    pub level: CourseLevel,
    /// 강사 이름
    pub teacher: String,
    #[serde(default)]
    pub description: String,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

impl Course {
    pub fn new(
        code: String,
        title: String,
        price: f64,
        category: CourseCategory,
        level: CourseLevel,
        teacher: String,
        description: String,
    ) -> Self {
        let now = DateTime::now();

        Self {
            id: uuid::Uuid::new_v4().to_string(),
            code,
            title,
            price,
            category,
            level,
            teacher,
            description,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn is_premium(&self) -> bool {
        self.price > 0.0
    }
}
