//! # 프로세스 모니터링 서비스
//!
//! 헬스체크의 업타임과 `/info`의 메모리 스냅샷을 제공합니다.
//!
//! 이 모듈의 항목:
//! - `SystemMonitor`: 프로세스 시작 시각과 sysinfo 핸들을 보관
//! - `MemorySnapshot`: 메가바이트 단위 메모리 사용량 스냅샷

use std::sync::{Arc, Mutex};
use std::time::Instant;
use sysinfo::{Pid, RefreshKind, System};

/// 호출 시점의 프로세스 메모리 사용량 (메가바이트 단위)
///
/// Node.js의 `process.memoryUsage()`가 보여주는 heapTotal/heapUsed에
/// 대응하는 프로세스 수준 값입니다:
/// - `total_mb`: 가상 메모리 크기 (프로세스가 예약한 전체 공간)
/// - `used_mb`: 상주 메모리 크기 (실제로 점유 중인 물리 메모리)
///
/// 두 값의 대소 관계는 플랫폼에 따라 다르므로 가정하지 않습니다.
#[derive(Debug, Clone, Copy)]
pub struct MemorySnapshot {
    pub total_mb: u64,
    pub used_mb: u64,
}

/// 프로세스 업타임과 메모리 통계를 제공하는 모니터
///
/// `System`은 내부적으로 큰 상태를 들고 있으므로 Arc<Mutex<...>>로 감싸
/// 핸들러들이 하나의 인스턴스를 공유합니다.
/// clone해도 실제 System이 복제되지 않고 같은 인스턴스를 가리킵니다.
#[derive(Clone)]
pub struct SystemMonitor {
    system: Arc<Mutex<System>>,
    pid: Option<Pid>,
    started_at: Instant,
}

impl SystemMonitor {
    /// 현재 프로세스를 관찰하는 모니터를 생성합니다.
    ///
    /// 생성 시각이 업타임의 기준점이 되므로 서버 시작 직후에
    /// 한 번만 만들어 AppState에 넣어야 합니다.
    pub fn new() -> Self {
        let mut system = System::new_with_specifics(RefreshKind::everything());
        system.refresh_all();

        // PID 조회는 지원되지 않는 플랫폼에서 실패할 수 있습니다.
        // 그 경우 메모리 스냅샷만 0으로 내려가고 서버는 계속 동작합니다.
        let pid = sysinfo::get_current_pid().ok();
        if pid.is_none() {
            tracing::warn!("Could not resolve current PID, memory stats will read 0");
        }

        Self {
            system: Arc::new(Mutex::new(system)),
            pid,
            started_at: Instant::now(),
        }
    }

    /// 프로세스 시작 이후 경과 시간 (초, 소수점 포함)
    ///
    /// Instant는 단조 시계(monotonic clock)를 사용하므로
    /// 이 값은 호출할 때마다 같거나 커집니다.
    pub fn uptime_seconds(&self) -> f64 {
        self.started_at.elapsed().as_secs_f64()
    }

    /// 현재 프로세스의 메모리 사용량을 새로 측정합니다.
    pub fn memory_snapshot(&self) -> MemorySnapshot {
        let snapshot = self.pid.and_then(|pid| {
            let mut system = self.system.lock().ok()?;
            system.refresh_all();
            let process = system.process(pid)?;
            Some(MemorySnapshot {
                // sysinfo는 바이트 단위로 보고하므로 MB로 변환합니다.
                total_mb: process.virtual_memory() / 1024 / 1024,
                used_mb: process.memory() / 1024 / 1024,
            })
        });

        snapshot.unwrap_or(MemorySnapshot {
            total_mb: 0,
            used_mb: 0,
        })
    }
}

impl Default for SystemMonitor {
    fn default() -> Self {
        Self::new()
    }
}
