//! # Jenkins Sample Application (Rust)
//!
//! 환경변수 기반 설정을 네 개의 읽기 전용 JSON 엔드포인트로 노출하는
//! 데모용 HTTP 서버입니다.
//!
//! | 메서드 | 경로 | 설명 |
//! |--------|------|------|
//! | GET | / | 상태 요약 (환경/버전/빌드/시각) |
//! | GET | /health | 생존 확인 (업타임 포함) |
//! | GET | /config | 설정 에코 (비밀값은 설정 여부만) |
//! | GET | /info | 런타임/플랫폼/메모리 정보 |
//!
//! 라우터 구성을 라이브러리로 분리해 두어, 실행 파일(main.rs)과
//! 통합 테스트(tests/)가 같은 앱을 공유합니다.

pub mod config;
pub mod routes;
pub mod services;

use axum::{routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub use crate::config::Config;
pub use crate::routes::AppState;
pub use crate::services::monitor::SystemMonitor;

/// 주입받은 상태로 전체 애플리케이션 라우터를 구성합니다.
///
/// 핸들러는 AppState에 담긴 설정만 보므로, 테스트에서는
/// 환경변수 없이 원하는 Config를 직접 만들어 넣을 수 있습니다.
pub fn app(state: AppState) -> Router {
    // 데모 서비스이므로 CORS는 모두 허용합니다.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(routes::root_status))
        .route("/health", get(routes::health_check))
        .route("/config", get(routes::show_config))
        .route("/info", get(routes::runtime_info))
        .with_state(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http()) // HTTP 요청/응답 자동 로깅
}
