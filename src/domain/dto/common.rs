//! 공통 응답 DTO

use serde::Serialize;

/// 단순 메시지 응답
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// 0부터 시작하는 페이지 응답
#[derive(Debug, Clone, Serialize)]
pub struct PageResponse<T> {
    pub content: Vec<T>,
    pub page: u64,
    pub size: u64,
    pub total_elements: u64,
    pub total_pages: u64,
}

impl<T> PageResponse<T> {
    pub fn new(content: Vec<T>, page: u64, size: u64, total_elements: u64) -> Self {
        let total_pages = if size == 0 {
            0
        } else {
            total_elements.div_ceil(size)
        };

        Self {
            content,
            page,
            size,
            total_elements,
            total_pages,
        }
    }
}
