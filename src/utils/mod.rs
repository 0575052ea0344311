//! 공통 유틸리티 함수 모듈
//!
//! - [`string_utils`] - 문자열 검증, 정리, 정규식 이스케이프
//! - [`time_utils`] - BSON/chrono 시각 변환
//! - [`display_terminal`] - 부트스트랩 터미널 출력

pub mod display_terminal;
pub mod string_utils;
pub mod time_utils;
