//! 강의 목록 필터
//!
//! 모든 조건은 AND로 결합되며, 비어 있는 필터는 전체 강의를 의미합니다.

use crate::core::errors::AppError;
use crate::domain::dto::courses::request::CourseListQuery;
use crate::domain::entities::courses::course::{Course, CourseCategory, CourseLevel};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CourseFilter {
    pub category: Option<CourseCategory>,
    pub level: Option<CourseLevel>,
    /// `Some(true)`: 유료만, `Some(false)`: 무료만
    pub premium: Option<bool>,
    /// 제목 부분 일치 (대소문자 무시)
    pub title: Option<String>,
}

impl CourseFilter {
    /// 메모리에서 강의가 필터를 만족하는지 확인합니다.
    ///
    /// MongoDB 쿼리와 같은 의미를 가지며, 구매 강의 목록처럼
    /// 이미 조회한 강의를 거를 때 사용합니다.
    pub fn matches(&self, course: &Course) -> bool {
        if let Some(category) = self.category {
            if course.category != category {
                return false;
            }
        }

        if let Some(level) = self.level {
            if course.level != level {
                return false;
            }
        }

        if let Some(premium) = self.premium {
            if course.is_premium() != premium {
                return false;
            }
        }

        if let Some(title) = &self.title {
            if !course.title.to_lowercase().contains(&title.to_lowercase()) {
                return false;
            }
        }

        true
    }
}

impl TryFrom<CourseListQuery> for CourseFilter {
    type Error = AppError;

    fn try_from(query: CourseListQuery) -> Result<Self, Self::Error> {
        let category = match query.category.as_deref() {
            Some(raw) => Some(CourseCategory::parse(raw).ok_or_else(|| {
                AppError::ValidationError(format!("알 수 없는 강의 분야입니다: {}", raw))
            })?),
            None => None,
        };

        let level = match query.level.as_deref() {
            Some(raw) => Some(CourseLevel::parse(raw).ok_or_else(|| {
                AppError::ValidationError(format!("알 수 없는 강의 난이도입니다: {}", raw))
            })?),
            None => None,
        };

        let title = query
            .title
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty());

        Ok(Self {
            category,
            level,
            premium: query.premium,
            title,
        })
    }
}
