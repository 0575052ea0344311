use serde::Deserialize;
use validator::Validate;

/// 주문 생성 요청
///
/// 주문자는 요청 본문이 아니라 인증된 사용자에서 결정됩니다.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateOrderRequest {
    #[validate(length(min = 1, message = "강의 제목을 입력해주세요"))]
    pub course_title: String,

    #[validate(length(min = 1, max = 50, message = "결제 수단은 1-50자 사이여야 합니다"))]
    pub payment_method: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_fields_rejected() {
        let request = CreateOrderRequest {
            course_title: String::new(),
            payment_method: "BCA".to_string(),
        };
        assert!(request.validate().is_err());

        let request = CreateOrderRequest {
            course_title: "Rust Backend".to_string(),
            payment_method: String::new(),
        };
        assert!(request.validate().is_err());
    }
}
