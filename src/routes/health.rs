//! # 헬스체크(Health Check) 핸들러
//!
//! 서버가 정상적으로 동작하는지 확인하는 엔드포인트입니다.
//!
//! ## 엔드포인트
//! - `GET /health` → `{ "status": "healthy", "uptime": ..., "timestamp": ... }`
//!
//! 주로 다음 용도로 사용됩니다:
//! - 로드밸런서의 서버 상태 확인
//! - 컨테이너 오케스트레이터의 liveness probe
//! - 모니터링 시스템의 가동 시간 추적

use axum::{extract::State, Json};
use serde_json::{json, Value};

use super::{iso_timestamp, AppState};

/// `GET /health` — 서버 생존 여부와 업타임을 반환합니다.
///
/// `uptime`은 프로세스 시작 이후 경과 초(부동소수점)이며,
/// 단조 시계 기반이므로 같은 프로세스 안에서는 절대 줄어들지 않습니다.
///
/// 참고: `Result`를 사용하지 않으므로 이 핸들러는 실패하지 않습니다.
pub async fn health_check(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "uptime": state.monitor.uptime_seconds(),
        "timestamp": iso_timestamp(),
    }))
}
