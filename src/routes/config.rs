//! # 설정 에코 핸들러
//!
//! 현재 적용된 설정을 돌려주는 엔드포인트입니다.
//!
//! ## 엔드포인트
//! | 메서드 | 경로 | 설명 |
//! |--------|------|------|
//! | GET | /config | 환경/버전/빌드/포트와 비밀값 설정 여부 |
//!
//! 비밀값(API 키, 데이터베이스 URL)은 값이 아니라
//! "설정되었는가"를 나타내는 불리언으로만 나갑니다.

use axum::{extract::State, Json};
use serde_json::{json, Value};

use super::AppState;

/// `GET /config` — 해석된 설정과 비밀값 설정 여부를 반환합니다.
///
/// `apiKeyConfigured`/`databaseConfigured`는 각 설정값이
/// 센티널("not-set" / "not-configured")과 다를 때만 true입니다.
/// 비밀값 자체는 응답 어디에도 포함되지 않습니다.
pub async fn show_config(State(state): State<AppState>) -> Json<Value> {
    let config = &state.config;
    Json(json!({
        "environment": config.environment,
        "version": config.version,
        "build": config.build_number,
        "port": config.port,
        "apiKeyConfigured": config.api_key_configured(),
        "databaseConfigured": config.database_configured(),
    }))
}
