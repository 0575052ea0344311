//! # 강의 카탈로그 서비스
//!
//! 강의 등록/수정/삭제(관리자)와 목록, 검색, 페이지 조회를 담당합니다.
//!
//! | 작업 | 실패 |
//! |------|------|
//! | `add_course` | 코드/제목 중복 → Conflict |
//! | `update_course` | 코드 없음 → NotFound, 새 제목 중복 → Conflict |
//! | `delete_course` | 코드 없음 → NotFound (주문 먼저 삭제) |
//! | `course_details`, `get_course` | 없음 → NotFound |

use std::sync::Arc;

use mongodb::bson::DateTime;
use once_cell::sync::OnceCell;

use crate::{
    config::CatalogConfig,
    core::errors::{AppError, AppResult},
    domain::{
        dto::{
            MessageResponse, PageResponse,
            courses::{
                request::{AddCourseRequest, UpdateCourseRequest},
                response::CourseResponse,
            },
        },
        entities::courses::course::Course,
        models::{auth::AuthenticatedUser, catalog::CourseFilter},
    },
    repositories::{courses::CourseRepository, stores::CourseStore},
    services::orders::OrderService,
};

pub struct CourseService {
    courses: Arc<dyn CourseStore>,
    orders: Arc<OrderService>,
    page_size: u64,
}

static COURSE_SERVICE_INSTANCE: OnceCell<Arc<CourseService>> = OnceCell::new();

impl CourseService {
    pub fn new(courses: Arc<dyn CourseStore>, orders: Arc<OrderService>, page_size: u64) -> Self {
        Self {
            courses,
            orders,
            page_size: page_size.max(1),
        }
    }

    pub fn instance() -> Arc<Self> {
        COURSE_SERVICE_INSTANCE
            .get_or_init(|| {
                Arc::new(Self::new(
                    CourseRepository::instance(),
                    OrderService::instance(),
                    CatalogConfig::page_size(),
                ))
            })
            .clone()
    }

    async fn find_by_code(&self, code: &str) -> AppResult<Course> {
        self.courses
            .find_by_code(code)
            .await?
            .ok_or_else(|| AppError::NotFound("Course not found!".to_string()))
    }

    /// 강의 등록 (관리자)
    pub async fn add_course(&self, request: AddCourseRequest) -> AppResult<CourseResponse> {
        if self.courses.find_by_code(&request.code).await?.is_some() {
            return Err(AppError::ConflictError("Course code is already used!".to_string()));
        }

        if self.courses.find_by_title(&request.title).await?.is_some() {
            return Err(AppError::ConflictError("Course title is already used!".to_string()));
        }

        let course = Course::new(
            request.code,
            request.title,
            request.price,
            request.category,
            request.level,
            request.teacher,
            request.description,
        );

        let course = self.courses.insert(course).await?;
        log::info!("📚 강의 등록: {} ({})", course.title, course.code);

        Ok(CourseResponse::from(course))
    }

    /// 필터 조건에 맞는 강의 목록 (제목순)
    pub async fn list_courses(&self, filter: &CourseFilter) -> AppResult<Vec<CourseResponse>> {
        Ok(self
            .courses
            .list(filter)
            .await?
            .into_iter()
            .map(CourseResponse::from)
            .collect())
    }

    /// 0부터 시작하는 페이지 조회
    pub async fn list_courses_page(&self, page: u64) -> AppResult<PageResponse<CourseResponse>> {
        let skip = page.saturating_mul(self.page_size);

        let total = self.courses.count().await?;
        let content = self
            .courses
            .page(skip, self.page_size)
            .await?
            .into_iter()
            .map(CourseResponse::from)
            .collect();

        Ok(PageResponse::new(content, page, self.page_size, total))
    }

    /// 강의 수정 (관리자). 요청에 있는 필드만 바뀝니다.
    pub async fn update_course(
        &self,
        code: &str,
        request: UpdateCourseRequest,
    ) -> AppResult<CourseResponse> {
        let mut course = self.find_by_code(code).await?;
        let previous_title = course.title.clone();

        if let Some(title) = request.title {
            if title != course.title {
                if let Some(existing) = self.courses.find_by_title(&title).await? {
                    if existing.id != course.id {
                        return Err(AppError::ConflictError(
                            "Course title is already used!".to_string(),
                        ));
                    }
                }
                course.title = title;
            }
        }
        if let Some(price) = request.price {
            course.price = price;
        }
        if let Some(category) = request.category {
            course.category = category;
        }
        if let Some(level) = request.level {
            course.level = level;
        }
        if let Some(teacher) = request.teacher {
            course.teacher = teacher;
        }
        if let Some(description) = request.description {
            course.description = description;
        }
        course.updated_at = DateTime::now();

        self.courses.update(&course, &previous_title).await?;
        log::info!("📚 강의 수정: {}", course.code);

        Ok(CourseResponse::from(course))
    }

    /// 강의 삭제 (관리자). 강의의 주문이 먼저 삭제됩니다.
    pub async fn delete_course(&self, code: &str) -> AppResult<MessageResponse> {
        let course = self.find_by_code(code).await?;

        let orders = self.orders.delete_by_course_code(code).await?;
        self.courses.delete(&course).await?;

        log::warn!("강의 삭제: {} (주문 {}건)", code, orders);
        Ok(MessageResponse::new(format!("Course {} deleted successfully!", code)))
    }

    /// 제목으로 강의 상세 조회
    pub async fn course_details(&self, title: &str) -> AppResult<CourseResponse> {
        let course = self
            .courses
            .find_by_title(title)
            .await?
            .ok_or_else(|| AppError::NotFound("Course not found!".to_string()))?;

        Ok(CourseResponse::from(course))
    }

    /// 강의 코드로 조회
    pub async fn get_course(&self, code: &str) -> AppResult<CourseResponse> {
        Ok(CourseResponse::from(self.find_by_code(code).await?))
    }

    /// 사용자가 구매한 강의 중 필터 조건에 맞는 강의 (제목순)
    pub async fn purchased_courses(
        &self,
        identity: &AuthenticatedUser,
        filter: &CourseFilter,
    ) -> AppResult<Vec<CourseResponse>> {
        let ids = self.orders.purchased_course_ids(identity).await?;

        Ok(self
            .courses
            .find_by_ids(&ids)
            .await?
            .into_iter()
            .filter(|course| filter.matches(course))
            .map(CourseResponse::from)
            .collect())
    }
}

fn course_service_constructor() -> Box<dyn std::any::Any + Send + Sync> {
    Box::new(CourseService::instance() as Arc<dyn std::any::Any + Send + Sync>)
}

inventory::submit! {
    crate::core::registry::ServiceRegistration {
        name: "course_service",
        constructor: course_service_constructor,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::courses::course::{CourseCategory, CourseLevel};
    use crate::repositories::memory::{
        MemoryCourseStore, MemoryOrderStore, MemoryUserStore, RecordingGateway, backend_course,
        verified_user,
    };

    struct Fixture {
        service: CourseService,
        orders_service: Arc<OrderService>,
        users: Arc<MemoryUserStore>,
        courses: Arc<MemoryCourseStore>,
        orders: Arc<MemoryOrderStore>,
    }

    fn fixture(page_size: u64) -> Fixture {
        let users = Arc::new(MemoryUserStore::default());
        let courses = Arc::new(MemoryCourseStore::default());
        let orders = Arc::new(MemoryOrderStore::default());
        let orders_service = Arc::new(OrderService::new(
            users.clone(),
            courses.clone(),
            orders.clone(),
            Arc::new(RecordingGateway::default()),
        ));

        Fixture {
            service: CourseService::new(courses.clone(), orders_service.clone(), page_size),
            orders_service,
            users,
            courses,
            orders,
        }
    }

    fn add_request(code: &str, title: &str, price: f64) -> AddCourseRequest {
        AddCourseRequest {
            code: code.to_string(),
            title: title.to_string(),
            price,
            category: CourseCategory::FrontEnd,
            level: CourseLevel::Intermediate,
            teacher: "Andi".to_string(),
            description: "Hands-on".to_string(),
        }
    }

    fn identity(username: &str) -> AuthenticatedUser {
        AuthenticatedUser::new(username, vec!["user".to_string()])
    }

    #[actix_web::test]
    async fn test_add_course_rejects_duplicate_code_or_title() {
        let f = fixture(10);
        let created = f
            .service
            .add_course(add_request("FE-01", "React Basics", 25.0))
            .await
            .unwrap();
        assert!(created.premium);

        let same_code = f.service.add_course(add_request("FE-01", "Vue", 0.0)).await;
        assert!(matches!(same_code, Err(AppError::ConflictError(_))));

        let same_title = f
            .service
            .add_course(add_request("FE-02", "React Basics", 0.0))
            .await;
        assert!(matches!(same_title, Err(AppError::ConflictError(_))));
    }

    #[actix_web::test]
    async fn test_list_filters_premium_and_free() {
        let f = fixture(10);
        f.courses.seed(backend_course("BE-01", "Rust Backend", 100.0));
        f.courses.seed(backend_course("BE-02", "Go Intro", 0.0));
        f.courses.seed(backend_course("BE-03", "Advanced Rust", 50.0));

        let premium = CourseFilter {
            premium: Some(true),
            ..Default::default()
        };
        let titles: Vec<String> = f
            .service
            .list_courses(&premium)
            .await
            .unwrap()
            .into_iter()
            .map(|c| c.title)
            .collect();
        assert_eq!(titles, vec!["Advanced Rust", "Rust Backend"]);

        let free = CourseFilter {
            premium: Some(false),
            ..Default::default()
        };
        let free_courses = f.service.list_courses(&free).await.unwrap();
        assert_eq!(free_courses.len(), 1);
        assert_eq!(free_courses[0].title, "Go Intro");

        let search = CourseFilter {
            title: Some("rust".to_string()),
            ..Default::default()
        };
        assert_eq!(f.service.list_courses(&search).await.unwrap().len(), 2);
    }

    #[actix_web::test]
    async fn test_pages_are_zero_based() {
        let f = fixture(2);
        for (i, title) in ["A", "B", "C", "D", "E"].iter().enumerate() {
            f.courses
                .seed(backend_course(&format!("C-{}", i), title, 0.0));
        }

        let first = f.service.list_courses_page(0).await.unwrap();
        assert_eq!(first.content.len(), 2);
        assert_eq!(first.content[0].title, "A");
        assert_eq!(first.total_elements, 5);
        assert_eq!(first.total_pages, 3);

        let last = f.service.list_courses_page(2).await.unwrap();
        assert_eq!(last.content.len(), 1);
        assert_eq!(last.content[0].title, "E");

        let beyond = f.service.list_courses_page(9).await.unwrap();
        assert!(beyond.content.is_empty());
    }

    #[actix_web::test]
    async fn test_update_course_partial_and_title_conflict() {
        let f = fixture(10);
        f.courses.seed(backend_course("BE-01", "Rust Backend", 100.0));
        f.courses.seed(backend_course("BE-02", "Go Intro", 0.0));

        let request = UpdateCourseRequest {
            price: Some(80.0),
            title: Some("Rust Backend 2".to_string()),
            ..Default::default()
        };
        let updated = f.service.update_course("BE-01", request).await.unwrap();
        assert_eq!(updated.price, 80.0);
        assert_eq!(updated.title, "Rust Backend 2");
        assert_eq!(updated.teacher, "Sari Dewi");

        let conflict = UpdateCourseRequest {
            title: Some("Go Intro".to_string()),
            ..Default::default()
        };
        let result = f.service.update_course("BE-01", conflict).await;
        assert!(matches!(result, Err(AppError::ConflictError(_))));

        let missing = f
            .service
            .update_course("XX-99", UpdateCourseRequest::default())
            .await;
        assert!(matches!(missing, Err(AppError::NotFound(_))));
    }

    #[actix_web::test]
    async fn test_delete_course_cascades_orders() {
        let f = fixture(10);
        f.users.seed(verified_user("budi"));
        f.courses.seed(backend_course("BE-01", "Rust Backend", 100.0));
        f.orders_service
            .create_order(&identity("budi"), "Rust Backend", "OVO")
            .await
            .unwrap();

        f.service.delete_course("BE-01").await.unwrap();

        assert_eq!(f.orders.len(), 0);
        let gone = f.service.get_course("BE-01").await;
        assert!(matches!(gone, Err(AppError::NotFound(_))));

        let again = f.service.delete_course("BE-01").await;
        assert!(matches!(again, Err(AppError::NotFound(_))));
    }

    #[actix_web::test]
    async fn test_details_by_title() {
        let f = fixture(10);
        f.courses.seed(backend_course("BE-01", "Rust Backend", 100.0));

        let details = f.service.course_details("Rust Backend").await.unwrap();
        assert_eq!(details.code, "BE-01");

        let missing = f.service.course_details("rust backend").await;
        assert!(matches!(missing, Err(AppError::NotFound(_))));
    }

    #[actix_web::test]
    async fn test_purchased_courses_apply_filter() {
        let f = fixture(10);
        f.users.seed(verified_user("budi"));
        f.courses.seed(backend_course("BE-01", "Rust Backend", 100.0));
        f.courses.seed(backend_course("BE-02", "Go Intro", 0.0));
        f.courses.seed(backend_course("BE-03", "Never Bought", 10.0));

        for title in ["Rust Backend", "Go Intro"] {
            f.orders_service
                .create_order(&identity("budi"), title, "OVO")
                .await
                .unwrap();
        }

        let all = f
            .service
            .purchased_courses(&identity("budi"), &CourseFilter::default())
            .await
            .unwrap();
        let titles: Vec<&str> = all.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(titles, vec!["Go Intro", "Rust Backend"]);

        let premium_only = CourseFilter {
            premium: Some(true),
            ..Default::default()
        };
        let premium = f
            .service
            .purchased_courses(&identity("budi"), &premium_only)
            .await
            .unwrap();
        assert_eq!(premium.len(), 1);
        assert_eq!(premium[0].title, "Rust Backend");
    }
}
