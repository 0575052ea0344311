use actix_web::{get, HttpResponse};
use serde_json::json;

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// 로드밸런서나 모니터링 시스템에서 사용합니다. 데이터 저장소에는 접근하지 않습니다.
///
/// ```bash
/// curl http://localhost:8080/health
/// ```
#[get("/health")]
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "easyclass_backend",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "features": {
            "database": "MongoDB",
            "cache": "Redis",
            "mail": "SMTP"
        }
    }))
}
