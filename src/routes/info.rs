//! # 런타임 정보 핸들러
//!
//! 실행 중인 런타임과 플랫폼, 메모리 사용량을 보여주는 엔드포인트입니다.
//!
//! ## 엔드포인트
//! | 메서드 | 경로 | 설명 |
//! |--------|------|------|
//! | GET | /info | 런타임 버전, OS, 아키텍처, 메모리 스냅샷 |
//!
//! 응답 필드 이름(`nodeVersion` 등)은 기존 배포 도구들이 파싱하는
//! 와이어 포맷의 일부이므로 그대로 유지합니다.

use axum::{extract::State, Json};
use serde_json::{json, Value};

use super::AppState;

/// 빌드에 사용된 툴체인 버전. build.rs가 `rustc --version`으로 캡처합니다.
const RUNTIME_VERSION: &str = env!("RUSTC_VERSION");

/// `GET /info` — 런타임/플랫폼/메모리 스냅샷을 반환합니다.
///
/// - `nodeVersion`: 툴체인 버전 문자열 (빌드 시점에 고정)
/// - `platform` / `architecture`: `std::env::consts`의 OS/ARCH 값
/// - `memory`: 호출 시점에 새로 측정한 프로세스 메모리 (MB 단위 문자열)
pub async fn runtime_info(State(state): State<AppState>) -> Json<Value> {
    let memory = state.monitor.memory_snapshot();
    Json(json!({
        "nodeVersion": RUNTIME_VERSION,
        "platform": std::env::consts::OS,
        "architecture": std::env::consts::ARCH,
        "memory": {
            "total": format!("{} MB", memory.total_mb),
            "used": format!("{} MB", memory.used_mb),
        },
    }))
}
