//! 주문 견적 계산
//!
//! 부가세는 강의 가격의 11%이며, 세액과 합계는 센트 단위로 반올림합니다.

/// 부가세율
pub const TAX_RATE: f64 = 0.11;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quote {
    pub price: f64,
    pub tax: f64,
    pub total: f64,
}

/// 소수점 둘째 자리 반올림
pub fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

pub fn quote(price: f64) -> Quote {
    let tax = round_to_cents(price * TAX_RATE);

    Quote {
        price,
        tax,
        total: round_to_cents(price + tax),
    }
}
