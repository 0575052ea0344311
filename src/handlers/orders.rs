//! # Order HTTP Handlers
//!
//! 로그인한 사용자의 견적 조회, 주문, 주문 내역과 관리자의 전체 주문 조회를 처리합니다.
//!
//! ## 주문 생성 응답
//!
//! | 상황 | 상태 코드 | 본문 |
//! |------|-----------|------|
//! | 새 주문 | 201 | `{"message": "Create order successfully!", "order_id": "..."}` |
//! | 이미 주문함 | 200 | `{"message": "User already ordered this course!"}` |
//! | 사용자/강의 없음 | 404 | `{"error": "..."}` |
//! | 영수증 발송 실패 | 502 | `{"error": "...", "order_id": "..."}` |
use actix_web::{get, post, web, HttpResponse};
use validator::Validate;

use crate::core::errors::AppError;
use crate::domain::dto::orders::request::CreateOrderRequest;
use crate::domain::dto::orders::response::CreateOrderResponse;
use crate::domain::models::auth::AuthenticatedUser;
use crate::services::orders::order_service::{ALREADY_ORDERED_MESSAGE, ORDER_CREATED_MESSAGE};
use crate::services::orders::{OrderOutcome, OrderService};

/// 결제 전 견적 (가격, 부가세, 합계)
#[get("/quote/{title}")]
pub async fn get_data_order(
    user: AuthenticatedUser,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let quote = OrderService::instance()
        .get_data_order(&user, &path.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(quote))
}

/// 주문 생성
#[post("")]
pub async fn create_order(
    user: AuthenticatedUser,
    payload: web::Json<CreateOrderRequest>,
) -> Result<HttpResponse, AppError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let outcome = OrderService::instance()
        .create_order(&user, &payload.course_title, &payload.payment_method)
        .await?;

    let response = match outcome {
        OrderOutcome::Created { order_id } => HttpResponse::Created().json(CreateOrderResponse {
            message: ORDER_CREATED_MESSAGE.to_string(),
            order_id: Some(order_id),
        }),
        OrderOutcome::AlreadyOrdered => HttpResponse::Ok().json(CreateOrderResponse {
            message: ALREADY_ORDERED_MESSAGE.to_string(),
            order_id: None,
        }),
    };

    Ok(response)
}

/// 내 주문 내역
#[get("/transactions")]
pub async fn get_order_transactions(user: AuthenticatedUser) -> Result<HttpResponse, AppError> {
    let history = OrderService::instance()
        .get_order_transactions(&user)
        .await?;

    Ok(HttpResponse::Ok().json(history))
}

/// 전체 주문 (관리자)
#[get("/orders")]
pub async fn get_all_orders() -> Result<HttpResponse, AppError> {
    let orders = OrderService::instance().get_all_orders().await?;

    Ok(HttpResponse::Ok().json(orders))
}
