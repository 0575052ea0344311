//! 주문 응답 DTO

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::courses::course::CourseCategory;
use crate::domain::entities::orders::order::Order;
use crate::utils::time_utils::to_utc;

/// 결제 전 주문 견적 (부가세 11% 포함)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderQuoteResponse {
    pub title: String,
    pub teacher: String,
    pub category: CourseCategory,
    pub price: f64,
    pub tax: f64,
    pub total_price: f64,
}

/// 사용자 주문 내역 항목
#[derive(Debug, Clone, Serialize)]
pub struct OrderHistoryItem {
    pub time: DateTime<Utc>,
    pub payment_method: String,
    pub paid: bool,
    pub course_id: String,
}

impl From<Order> for OrderHistoryItem {
    fn from(order: Order) -> Self {
        Self {
            time: to_utc(order.order_time),
            payment_method: order.payment_method,
            paid: order.paid,
            course_id: order.course_id,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct OrderTransactionsResponse {
    pub user_id: String,
    pub orders: Vec<OrderHistoryItem>,
}

/// 관리자용 전체 주문 항목
#[derive(Debug, Clone, Serialize)]
pub struct OrderSummaryResponse {
    pub user_id: String,
    pub time: DateTime<Utc>,
    pub payment_method: String,
    pub paid: bool,
    pub course_id: String,
}

impl From<Order> for OrderSummaryResponse {
    fn from(order: Order) -> Self {
        Self {
            user_id: order.user_id.to_hex(),
            time: to_utc(order.order_time),
            payment_method: order.payment_method,
            paid: order.paid,
            course_id: order.course_id,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CreateOrderResponse {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,
}
