//! # 라우트 핸들러 모듈
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 모아둔 모듈입니다.
//! Axum에서 핸들러는 HTTP 요청을 받아 응답을 반환하는 async 함수입니다.
//!
//! 각 하위 모듈 (엔드포인트당 하나):
//! - `status`: `GET /` 루트 상태 응답
//! - `health`: `GET /health` 헬스체크 (업타임 포함)
//! - `config`: `GET /config` 설정 에코 (비밀값은 설정 여부만)
//! - `info`: `GET /info` 런타임/메모리 정보

use crate::config::Config;
use crate::services::monitor::SystemMonitor;
use chrono::{SecondsFormat, Utc};

pub mod config;
pub mod health;
pub mod info;
pub mod status;

// 각 모듈의 핸들러 함수들을 재공개하여
// 라우터 구성에서 `routes::health_check`처럼 바로 접근 가능하게 합니다.
pub use config::*;
pub use health::*;
pub use info::*;
pub use status::*;

/// 모든 라우트 핸들러가 공유하는 애플리케이션 상태
///
/// Axum에서는 State를 통해 핸들러에 의존성을 주입합니다.
/// 핸들러가 환경변수를 직접 읽지 않도록, 시작 시 해석된 설정과
/// 프로세스 모니터를 여기에 담아 전달합니다.
#[derive(Clone)]
pub struct AppState {
    /// 시작 시 환경변수에서 한 번 해석된 불변 설정
    pub config: Config,
    /// 업타임/메모리 측정용 모니터 (내부는 Arc로 공유)
    pub monitor: SystemMonitor,
}

/// 현재 시각을 ISO-8601(RFC 3339) UTC 문자열로 반환합니다.
///
/// JavaScript의 `new Date().toISOString()`과 같은 형태입니다.
/// 예: "2025-03-14T09:26:53.589Z"
pub(crate) fn iso_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

// 핸들러 단위 테스트들이 공유하는 AppState 생성 도우미.
// 환경변수를 읽지 않고 Config를 직접 만들어 주입하므로
// 테스트끼리 프로세스 환경을 두고 경합하지 않습니다.
#[cfg(test)]
pub(crate) fn test_state() -> AppState {
    use crate::config::{API_KEY_NOT_SET, DATABASE_NOT_CONFIGURED};

    AppState {
        config: Config {
            port: 3000,
            environment: "development".to_string(),
            version: "1.0.0".to_string(),
            build_number: "local".to_string(),
            api_key: API_KEY_NOT_SET.to_string(),
            database_url: DATABASE_NOT_CONFIGURED.to_string(),
        },
        monitor: SystemMonitor::new(),
    }
}
