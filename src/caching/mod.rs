//! 캐싱 계층 모듈
//!
//! Redis를 백엔드로 하는 JSON 캐시를 제공합니다.
//! 리포지토리는 사용자명/강의 제목 조회 결과를 캐싱하고, 쓰기 시 무효화합니다.
//! 캐시 오류는 요청 실패로 전파하지 않습니다.
//!
//! ```bash
//! REDIS_URL=redis://localhost:6379  # 기본값
//! CACHE_TTL_SECONDS=600             # 기본값
//! ```

pub mod redis;
