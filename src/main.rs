//! # 서버 진입점
//!
//! 이 파일이 수행하는 작업:
//! 1. 환경변수(.env) 로딩
//! 2. 로깅(tracing) 초기화
//! 3. 환경변수에서 설정 해석
//! 4. 시작 배너 출력 (비밀값은 설정 여부만 표시)
//! 5. HTTP 서버 시작
//! 6. 종료 시그널 수신 시 진행 중인 요청을 마치고 우아하게 종료

use anyhow::Result;
use jenkins_sample::{app, AppState, Config, SystemMonitor};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // ── 1단계: 환경변수 로딩 ──
    // .env 파일이 있으면 읽어옵니다. 없어도 에러 없이 넘어갑니다.
    dotenvy::dotenv().ok();

    // ── 2단계: 로깅(tracing) 초기화 ──
    // RUST_LOG 환경변수가 없으면 기본 필터를 사용합니다.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "jenkins_sample=debug,tower_http=debug,axum=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // ── 3단계: 설정 해석 ──
    // 환경변수는 여기서 한 번만 읽고, 이후에는 Config만 전달합니다.
    let config = Config::from_env();
    print_banner(&config);

    // ── 4단계: 공유 상태 구성 ──
    // 모니터 생성 시각이 업타임의 기준점이 됩니다.
    let state = AppState {
        config: config.clone(),
        monitor: SystemMonitor::new(),
    };

    // ── 5단계: 서버 시작 ──
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);
    println!("Server running on http://localhost:{}", config.port);
    println!("=================================");

    // with_graceful_shutdown: 시그널을 받으면 새 연결 수락을 멈추고
    // 진행 중인 요청이 끝날 때까지 기다린 뒤 반환합니다.
    axum::serve(listener, app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server closed");
    Ok(())
}

/// 해석된 설정을 사람이 읽을 수 있는 배너로 출력합니다.
///
/// 비밀값(API 키, 데이터베이스 URL)은 값 대신
/// CONFIGURED / NOT CONFIGURED 여부만 표시합니다.
fn print_banner(config: &Config) {
    println!("=================================");
    println!("Jenkins Sample Application");
    println!("=================================");
    println!("Environment: {}", config.environment);
    println!("Version: {}", config.version);
    println!("Build: {}", config.build_number);
    println!("Port: {}", config.port);
    println!(
        "API Key: {}",
        if config.api_key_configured() { "CONFIGURED ✓" } else { "NOT CONFIGURED" }
    );
    println!(
        "Database: {}",
        if config.database_configured() { "CONFIGURED ✓" } else { "NOT CONFIGURED" }
    );
    println!("=================================");
}

/// 종료 시그널(SIGTERM 또는 Ctrl+C)을 기다립니다.
///
/// 이 future가 완료되면 axum이 graceful shutdown을 시작합니다.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    // SIGTERM은 유닉스 계열에만 존재합니다. (컨테이너 종료 시그널)
    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    // 둘 중 먼저 도착하는 시그널을 기다립니다.
    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Termination signal received, shutting down gracefully...");
}
