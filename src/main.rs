//! easyclass 백엔드 메인 애플리케이션
//!
//! 시작 순서:
//!
//! ```text
//! .env 로드 → 로깅 → MongoDB/Redis 연결 → 레지스트리 초기화 → 인덱스 생성 → HTTP 서버
//! ```
//!
//! 주문 중복 방지 인덱스를 만들지 못하면 서버를 띄우지 않습니다.

use std::io;
use std::sync::Arc;

use actix_cors::Cors;
use actix_governor::{Governor, GovernorConfigBuilder};
use actix_web::http::header;
use actix_web::{App, HttpServer, middleware};
use env_logger::Env;
use log::{error, info, warn};

use easyclass_backend::caching::redis::RedisClient;
use easyclass_backend::config::ServerConfig;
use easyclass_backend::core::errors::AppResult;
use easyclass_backend::core::registry::ServiceLocator;
use easyclass_backend::db::Database;
use easyclass_backend::repositories::courses::CourseRepository;
use easyclass_backend::repositories::orders::OrderRepository;
use easyclass_backend::repositories::orders::order_repo::USER_COURSE_UNIQUE_INDEX;
use easyclass_backend::repositories::otp::OtpRepository;
use easyclass_backend::repositories::users::UserRepository;
use easyclass_backend::routes::configure_all_routes;
use easyclass_backend::utils::display_terminal::print_index_ready;

#[actix_web::main]
async fn main() -> io::Result<()> {
    let profile = load_env_file();
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=debug"));

    info!("🚀 easyclass 백엔드 시작중... (profile: {})", profile);

    let (database, redis_client) = connect_data_stores().await?;
    ServiceLocator::set(database);
    ServiceLocator::set(redis_client);

    ServiceLocator::initialize_all()
        .await
        .map_err(|e| startup_error("서비스 초기화 실패", e))?;

    ensure_indexes()
        .await
        .map_err(|e| startup_error("인덱스 생성 실패", e))?;

    info!("✅ 모든 서비스가 성공적으로 초기화되었습니다!");

    start_http_server().await
}

fn startup_error(stage: &str, cause: impl std::fmt::Display) -> io::Error {
    error!("{}: {}", stage, cause);
    io::Error::other(format!("{}: {}", stage, cause))
}

/// `PROFILE`에 맞는 .env 파일을 읽고 프로필 이름을 반환합니다.
///
/// * `dev` (기본값) → `.env.dev`
/// * `prod` → `.env.prod`
/// * 그 외 → `.env`
///
/// 로거 초기화 전에 호출되므로 결과는 `main`에서 로그로 남깁니다.
fn load_env_file() -> String {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    let loaded = match profile.as_str() {
        "prod" => dotenv::from_filename(".env.prod").is_ok(),
        "dev" => dotenv::from_filename(".env.dev").is_ok(),
        _ => dotenv::dotenv().is_ok(),
    };

    if loaded {
        profile
    } else {
        format!("{} (env 파일 없음, 시스템 환경변수 사용)", profile)
    }
}

/// MongoDB와 Redis에 연결합니다. 하나라도 실패하면 서버는 시작되지 않습니다.
async fn connect_data_stores() -> io::Result<(Arc<Database>, Arc<RedisClient>)> {
    info!("📡 데이터베이스 연결 중...");

    let database = Database::new()
        .await
        .map_err(|e| startup_error("MongoDB 연결 실패", e))?;

    let redis_client = RedisClient::new()
        .await
        .map_err(|e| startup_error("Redis 연결 실패", e))?;

    Ok((Arc::new(database), Arc::new(redis_client)))
}

/// 모든 컬렉션의 인덱스를 생성합니다.
async fn ensure_indexes() -> AppResult<()> {
    UserRepository::instance().create_indexes().await?;
    print_index_ready("users", "username_unique, email_unique");

    CourseRepository::instance().create_indexes().await?;
    print_index_ready("courses", "code_unique, title_unique");

    OrderRepository::instance().create_indexes().await?;
    print_index_ready("orders", USER_COURSE_UNIQUE_INDEX);

    OtpRepository::instance().create_indexes().await?;
    print_index_ready("one_time_passwords", "expires_at_ttl");

    Ok(())
}

/// HTTP 서버를 구성하고 실행합니다.
///
/// actix는 마지막에 등록한 미들웨어가 가장 바깥쪽이므로 경로 정규화가 가장 먼저 실행됩니다.
async fn start_http_server() -> io::Result<()> {
    let bind_address = format!("{}:{}", ServerConfig::host(), ServerConfig::port());

    let per_second = ServerConfig::rate_limit_per_second();
    let burst_size = ServerConfig::rate_limit_burst_size();
    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(per_second)
        .burst_size(burst_size)
        .use_headers()
        .finish()
        .ok_or_else(|| {
            startup_error(
                "Rate Limiting 설정 오류",
                format!("per_second={}, burst_size={}", per_second, burst_size),
            )
        })?;
    info!("🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개", per_second, burst_size);

    let origins = ServerConfig::cors_origins();
    if origins.is_empty() {
        warn!("CORS 허용 Origin이 없습니다. 브라우저 요청은 모두 차단됩니다");
    } else {
        info!("🌍 CORS 허용 Origin: {:?}", origins);
    }

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);

    HttpServer::new(move || {
        App::new()
            .wrap(Governor::new(&governor_conf))
            .wrap(configure_cors(&origins))
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .configure(configure_all_routes)
    })
    .bind(bind_address.as_str())?
    .workers(4)
    .run()
    .await
}

fn configure_cors(origins: &[String]) -> Cors {
    origins
        .iter()
        .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
        .allowed_headers(vec![header::AUTHORIZATION, header::ACCEPT, header::CONTENT_TYPE])
        .supports_credentials()
        .max_age(3600)
}
