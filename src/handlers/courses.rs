//! # Course Catalog HTTP Handlers
//!
//! 공개 조회 엔드포인트는 인증 없이 호출할 수 있고, 구매 강의 조회는 로그인,
//! 등록/수정/삭제는 관리자 권한이 필요합니다.
//!
//! ## 목록 필터
//!
//! ```bash
//! curl "http://localhost:8080/api/v1/courses?category=backend&level=beginner&premium=false"
//! ```
//!
//! 알 수 없는 분야나 난이도 값은 400으로 거절됩니다.
use actix_web::{delete, get, post, put, web, HttpResponse};
use validator::Validate;

use crate::core::errors::AppError;
use crate::domain::dto::courses::request::{AddCourseRequest, CourseListQuery, UpdateCourseRequest};
use crate::domain::models::auth::AuthenticatedUser;
use crate::domain::models::catalog::CourseFilter;
use crate::services::courses::CourseService;

/// 강의 목록 (쿼리 필터, 제목순)
#[get("")]
pub async fn list_courses(query: web::Query<CourseListQuery>) -> Result<HttpResponse, AppError> {
    let filter = CourseFilter::try_from(query.into_inner())?;

    let courses = CourseService::instance().list_courses(&filter).await?;

    Ok(HttpResponse::Ok().json(courses))
}

/// 강의 목록 페이지 (0부터 시작)
#[get("/page/{page}")]
pub async fn list_courses_page(path: web::Path<u64>) -> Result<HttpResponse, AppError> {
    let page = CourseService::instance()
        .list_courses_page(path.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(page))
}

#[get("/title/{title}")]
pub async fn course_details(path: web::Path<String>) -> Result<HttpResponse, AppError> {
    let course = CourseService::instance()
        .course_details(&path.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(course))
}

#[get("/code/{code}")]
pub async fn get_course(path: web::Path<String>) -> Result<HttpResponse, AppError> {
    let course = CourseService::instance().get_course(&path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(course))
}

/// 내가 주문한 강의 (목록과 같은 필터 사용)
#[get("")]
pub async fn purchased_courses(
    user: AuthenticatedUser,
    query: web::Query<CourseListQuery>,
) -> Result<HttpResponse, AppError> {
    let filter = CourseFilter::try_from(query.into_inner())?;

    let courses = CourseService::instance()
        .purchased_courses(&user, &filter)
        .await?;

    Ok(HttpResponse::Ok().json(courses))
}

/// 강의 등록 (관리자)
#[post("/courses")]
pub async fn add_course(payload: web::Json<AddCourseRequest>) -> Result<HttpResponse, AppError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let course = CourseService::instance()
        .add_course(payload.into_inner())
        .await?;

    Ok(HttpResponse::Created().json(course))
}

/// 강의 수정 (관리자)
#[put("/courses/{code}")]
pub async fn update_course(
    path: web::Path<String>,
    payload: web::Json<UpdateCourseRequest>,
) -> Result<HttpResponse, AppError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let course = CourseService::instance()
        .update_course(&path.into_inner(), payload.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(course))
}

/// 강의 삭제 (관리자). 해당 강의의 주문도 함께 삭제됩니다.
#[delete("/courses/{code}")]
pub async fn delete_course(path: web::Path<String>) -> Result<HttpResponse, AppError> {
    let response = CourseService::instance()
        .delete_course(&path.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(response))
}
