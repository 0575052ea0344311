//! 주문 영수증 메일

use chrono::{DateTime, Utc};

pub const RECEIPT_SUBJECT: &str = "E-receipt easyclass";

/// 영수증에 들어가는 주문 정보
#[derive(Debug, Clone)]
pub struct Receipt<'a> {
    pub username: &'a str,
    pub course_title: &'a str,
    pub payment_method: &'a str,
    pub paid: bool,
    pub order_time: DateTime<Utc>,
    pub order_id: &'a str,
}

impl Receipt<'_> {
    pub fn body(&self) -> String {
        format!(
            "This is your receipt!\n\
             Username: {}\n\
             Course: {}\n\
             Payment: {}\n\
             Paid: {}\n\
             Order Time: {}\n\
             Order Id: {}\n\
             Thank you!",
            self.username,
            self.course_title,
            self.payment_method,
            self.paid,
            self.order_time.format("%Y-%m-%d %H:%M:%S UTC"),
            self.order_id,
        )
    }
}
