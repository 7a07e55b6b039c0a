//! # 빌드 스크립트
//!
//! `/info` 엔드포인트가 보고할 툴체인 버전 문자열을 빌드 시점에 캡처합니다.
//! Go의 `runtime.Version()`처럼 컴파일러 버전이 실행 파일에 구워집니다.

use std::env;
use std::process::Command;

fn main() {
    // Cargo가 실제 사용한 컴파일러를 RUSTC 환경변수로 알려줍니다.
    let rustc = env::var("RUSTC").unwrap_or_else(|_| "rustc".to_string());

    // `rustc --version` → "rustc 1.83.0 (90b35a623 2024-11-26)"
    let version = Command::new(&rustc)
        .arg("--version")
        .output()
        .ok()
        .and_then(|out| String::from_utf8(out.stdout).ok())
        .map(|s| s.trim().to_string())
        .unwrap_or_else(|| "unknown".to_string());

    // env!("RUSTC_VERSION")으로 소스 코드에서 읽을 수 있게 내보냅니다.
    println!("cargo:rustc-env=RUSTC_VERSION={version}");
    println!("cargo:rerun-if-env-changed=RUSTC");
}
