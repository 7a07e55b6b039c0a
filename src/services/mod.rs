//! # 서비스 모듈
//!
//! 라우트 핸들러가 사용하는 비즈니스 로직/유틸리티를 모아둔 모듈입니다.
//!
//! 각 하위 모듈:
//! - `monitor`: 프로세스 업타임/메모리 모니터링 (sysinfo 기반)

pub mod monitor;
