//! 데이터 및 서버 설정 관리 모듈
//!
//! 데이터베이스, 캐시, 서버, 카탈로그 및 비밀번호 해싱 관련 설정을 관리합니다.

use std::env;
use std::str::FromStr;

/// 환경 변수를 읽어 파싱하고, 없거나 파싱에 실패하면 기본값을 사용합니다.
pub(crate) fn env_or<T: FromStr>(key: &str, default: T) -> T {
    parse_or(env::var(key).ok().as_deref(), default)
}

pub(crate) fn parse_or<T: FromStr>(raw: Option<&str>, default: T) -> T {
    raw.and_then(|value| value.trim().parse().ok())
        .unwrap_or(default)
}

/// 애플리케이션 실행 환경
#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    /// 개발 환경 - 빠른 개발을 위한 설정
    Development,
    /// 테스트 환경 - 자동화된 테스트용 설정
    Test,
    /// 스테이징 환경 - 프로덕션 유사 환경
    Staging,
    /// 프로덕션 환경
    Production,
}

impl Environment {
    /// 현재 실행 환경을 감지합니다.
    ///
    /// `ENVIRONMENT` 또는 `NODE_ENV` 환경 변수를 확인하며,
    /// 설정되지 않은 경우 `Production`을 기본값으로 사용합니다.
    pub fn current() -> Self {
        let name = env::var("ENVIRONMENT")
            .or_else(|_| env::var("NODE_ENV"))
            .unwrap_or_else(|_| "production".to_string());

        Self::from_name(&name)
    }

    /// 환경 이름(대소문자 무관)에서 Environment를 생성합니다.
    /// 알 수 없는 값인 경우 `Production`을 반환합니다.
    pub fn from_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }
}

/// 패스워드 해싱 설정
pub struct PasswordConfig;

impl PasswordConfig {
    /// 현재 환경에 맞는 bcrypt cost를 반환합니다.
    ///
    /// `BCRYPT_COST`가 4-15 범위로 설정되어 있으면 그 값을 사용하고,
    /// 아니면 환경별 기본값을 사용합니다.
    pub fn bcrypt_cost() -> u32 {
        match env::var("BCRYPT_COST").ok().and_then(|v| v.parse::<u32>().ok()) {
            Some(cost) if (4..=15).contains(&cost) => cost,
            _ => Self::bcrypt_cost_for_env(&Environment::current()),
        }
    }

    /// 환경별 bcrypt cost
    ///
    /// - Development/Test: 4
    /// - Staging: 10
    /// - Production: 12
    pub fn bcrypt_cost_for_env(env: &Environment) -> u32 {
        match env {
            Environment::Development => 4,
            Environment::Test => 4,
            Environment::Staging => 10,
            Environment::Production => 12,
        }
    }
}

/// 서버 바인딩 설정
pub struct ServerConfig;

impl ServerConfig {
    /// 서버가 바인딩할 포트 (`PORT`, 기본값: 8080)
    pub fn port() -> u16 {
        env_or("PORT", 8080)
    }

    /// 서버가 바인딩할 호스트 주소 (`HOST`, 기본값: "0.0.0.0")
    pub fn host() -> String {
        env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string())
    }

    /// 초당 허용 요청 수 (`RATE_LIMIT_PER_SECOND`, 기본값: 100)
    pub fn rate_limit_per_second() -> u64 {
        env_or("RATE_LIMIT_PER_SECOND", 100)
    }

    /// 순간 허용량 (`RATE_LIMIT_BURST_SIZE`, 기본값: 200)
    pub fn rate_limit_burst_size() -> u32 {
        env_or("RATE_LIMIT_BURST_SIZE", 200)
    }

    /// CORS 허용 Origin 목록 (`CORS_ALLOWED_ORIGINS`, 쉼표 구분)
    ///
    /// 기본값은 로컬 프론트엔드 개발 서버입니다.
    pub fn cors_origins() -> Vec<String> {
        split_origins(
            &env::var("CORS_ALLOWED_ORIGINS")
                .unwrap_or_else(|_| "http://localhost:3000,http://127.0.0.1:3000".to_string()),
        )
    }
}

fn split_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(str::to_string)
        .collect()
}

/// MongoDB 연결 설정
pub struct DatabaseConfig;

impl DatabaseConfig {
    /// `MONGODB_URI` (기본값: "mongodb://localhost:27017")
    pub fn uri() -> String {
        env::var("MONGODB_URI").unwrap_or_else(|_| "mongodb://localhost:27017".to_string())
    }

    /// `DATABASE_NAME` (기본값: "easyclass_dev")
    pub fn name() -> String {
        env::var("DATABASE_NAME").unwrap_or_else(|_| "easyclass_dev".to_string())
    }
}

/// Redis 캐시 설정
pub struct CacheConfig;

impl CacheConfig {
    /// `REDIS_URL` (기본값: "redis://localhost:6379")
    pub fn redis_url() -> String {
        env::var("REDIS_URL").unwrap_or_else(|_| "redis://localhost:6379".to_string())
    }

    /// 리포지토리 캐시 항목의 TTL (`CACHE_TTL_SECONDS`, 기본값: 600초)
    pub fn ttl_seconds() -> u64 {
        env_or("CACHE_TTL_SECONDS", 600)
    }
}

/// 강의 카탈로그 설정
pub struct CatalogConfig;

impl CatalogConfig {
    /// 페이지당 강의 수 (`COURSE_PAGE_SIZE`, 기본값: 10)
    ///
    /// 0이 설정되면 기본값을 사용합니다.
    pub fn page_size() -> u64 {
        match env_or("COURSE_PAGE_SIZE", 10u64) {
            0 => 10,
            size => size,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_from_name() {
        assert_eq!(Environment::from_name("development"), Environment::Development);
        assert_eq!(Environment::from_name("DEV"), Environment::Development);
        assert_eq!(Environment::from_name("test"), Environment::Test);
        assert_eq!(Environment::from_name("stage"), Environment::Staging);
        assert_eq!(Environment::from_name("production"), Environment::Production);
        assert_eq!(Environment::from_name("unknown"), Environment::Production);
    }

    #[test]
    fn test_bcrypt_cost_for_each_environment() {
        assert_eq!(PasswordConfig::bcrypt_cost_for_env(&Environment::Development), 4);
        assert_eq!(PasswordConfig::bcrypt_cost_for_env(&Environment::Test), 4);
        assert_eq!(PasswordConfig::bcrypt_cost_for_env(&Environment::Staging), 10);
        assert_eq!(PasswordConfig::bcrypt_cost_for_env(&Environment::Production), 12);
    }

    #[test]
    fn test_parse_or_falls_back_on_garbage() {
        assert_eq!(parse_or(Some("42"), 7u64), 42);
        assert_eq!(parse_or(Some(" 42 "), 7u64), 42);
        assert_eq!(parse_or(Some("abc"), 7u64), 7);
        assert_eq!(parse_or::<u64>(None, 7), 7);
    }

    #[test]
    fn test_server_config_defaults() {
        if env::var("PORT").is_err() {
            assert_eq!(ServerConfig::port(), 8080);
        }

        if env::var("HOST").is_err() {
            assert_eq!(ServerConfig::host(), "0.0.0.0");
        }
    }

    #[test]
    fn test_split_origins_skips_blanks() {
        assert_eq!(
            split_origins(" http://a.test , ,http://b.test"),
            vec!["http://a.test".to_string(), "http://b.test".to_string()]
        );
        assert!(split_origins("").is_empty());
    }

    #[test]
    fn test_catalog_page_size_default() {
        if env::var("COURSE_PAGE_SIZE").is_err() {
            assert_eq!(CatalogConfig::page_size(), 10);
        }
    }
}
