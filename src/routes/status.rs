//! # 루트 상태 핸들러
//!
//! 애플리케이션의 기본 상태 정보를 반환하는 엔드포인트입니다.
//!
//! ## 엔드포인트
//! | 메서드 | 경로 | 설명 |
//! |--------|------|------|
//! | GET | / | 환경/버전/빌드 정보와 현재 시각 |

use axum::{extract::State, Json};
use serde_json::{json, Value};

use super::{iso_timestamp, AppState};

/// `GET /` — 애플리케이션 상태 요약을 반환합니다.
///
/// 쿼리/바디는 무시하며 항상 200과 고정 필드 집합을 반환합니다.
/// `timestamp`만 호출 시점에 새로 계산됩니다.
pub async fn root_status(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "running",
        "message": "Jenkins Sample Application",
        "environment": state.config.environment,
        "version": state.config.version,
        "build": state.config.build_number,
        "timestamp": iso_timestamp(),
    }))
}
