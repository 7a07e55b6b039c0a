//! 실제 리스너를 띄우고 HTTP로 네 엔드포인트를 검증하는 통합 테스트.
//!
//! 환경변수 대신 Config를 직접 주입하므로 테스트끼리 간섭하지 않습니다.

use jenkins_sample::{app, AppState, Config, SystemMonitor};

fn default_config() -> Config {
    Config {
        port: 3000,
        environment: "development".to_string(),
        version: "1.0.0".to_string(),
        build_number: "local".to_string(),
        api_key: "not-set".to_string(),
        database_url: "not-configured".to_string(),
    }
}

/// 임의의 포트에 서버를 띄우고 베이스 URL을 돌려줍니다.
async fn spawn_server(config: Config) -> String {
    let state = AppState {
        config,
        monitor: SystemMonitor::new(),
    };
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app(state)).await.unwrap();
    });

    format!("http://{addr}")
}

async fn get_json(url: &str) -> (reqwest::StatusCode, serde_json::Value) {
    let response = reqwest::get(url).await.unwrap();
    let status = response.status();
    let content_type = response
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert!(content_type.starts_with("application/json"), "got {content_type}");
    (status, response.json().await.unwrap())
}

#[tokio::test]
async fn root_returns_defaults_when_nothing_is_configured() {
    let base = spawn_server(default_config()).await;
    let (status, body) = get_json(&format!("{base}/")).await;

    assert_eq!(status, 200);
    assert_eq!(body["status"], "running");
    assert_eq!(body["message"], "Jenkins Sample Application");
    assert_eq!(body["environment"], "development");
    assert_eq!(body["version"], "1.0.0");
    assert_eq!(body["build"], "local");
    assert_eq!(body.as_object().unwrap().len(), 6);
}

#[tokio::test]
async fn health_uptime_is_non_decreasing_across_calls() {
    let base = spawn_server(default_config()).await;

    let (status, first) = get_json(&format!("{base}/health")).await;
    assert_eq!(status, 200);
    assert_eq!(first["status"], "healthy");
    assert_eq!(first.as_object().unwrap().len(), 3);

    let (_, second) = get_json(&format!("{base}/health")).await;
    let first_uptime = first["uptime"].as_f64().unwrap();
    let second_uptime = second["uptime"].as_f64().unwrap();
    assert!(first_uptime >= 0.0);
    assert!(second_uptime >= first_uptime);
}

#[tokio::test]
async fn config_reports_presence_without_leaking_secrets() {
    let config = Config {
        port: 9999,
        environment: "staging".to_string(),
        version: "2.1.0".to_string(),
        build_number: "42".to_string(),
        api_key: "secret123".to_string(),
        database_url: "postgres://user:pw@db/app".to_string(),
    };
    let base = spawn_server(config).await;

    let response = reqwest::get(format!("{base}/config")).await.unwrap();
    assert_eq!(response.status(), 200);
    let raw = response.text().await.unwrap();

    // 비밀값 문자열은 응답 본문 어디에도 나타나면 안 됩니다.
    assert!(!raw.contains("secret123"));
    assert!(!raw.contains("postgres://"));

    let body: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(body["environment"], "staging");
    assert_eq!(body["version"], "2.1.0");
    assert_eq!(body["build"], "42");
    assert_eq!(body["port"], 9999);
    assert_eq!(body["apiKeyConfigured"], true);
    assert_eq!(body["databaseConfigured"], true);
    assert_eq!(body.as_object().unwrap().len(), 6);
}

#[tokio::test]
async fn config_booleans_follow_the_sentinels() {
    let base = spawn_server(default_config()).await;
    let (_, body) = get_json(&format!("{base}/config")).await;

    assert_eq!(body["apiKeyConfigured"], false);
    assert_eq!(body["databaseConfigured"], false);
}

#[tokio::test]
async fn info_reports_runtime_and_memory_in_megabytes() {
    let base = spawn_server(default_config()).await;
    let (status, body) = get_json(&format!("{base}/info")).await;

    assert_eq!(status, 200);
    assert_eq!(body.as_object().unwrap().len(), 4);
    assert!(!body["nodeVersion"].as_str().unwrap().is_empty());
    assert_eq!(body["platform"], std::env::consts::OS);
    assert_eq!(body["architecture"], std::env::consts::ARCH);

    for key in ["total", "used"] {
        let text = body["memory"][key].as_str().unwrap();
        let digits = text.strip_suffix(" MB").unwrap();
        assert!(!digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()));
    }
}

#[tokio::test]
async fn server_drains_and_stops_on_shutdown_signal() {
    let state = AppState {
        config: default_config(),
        monitor: SystemMonitor::new(),
    };
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel::<()>();

    let server = tokio::spawn(async move {
        axum::serve(listener, app(state))
            .with_graceful_shutdown(async move {
                shutdown_rx.await.ok();
            })
            .await
    });

    // 서버가 살아 있는 동안 요청 하나를 처리시킵니다.
    let (status, _) = get_json(&format!("http://{addr}/health")).await;
    assert_eq!(status, 200);

    // 종료 신호를 보내면 serve가 에러 없이 반환되어야 합니다.
    shutdown_tx.send(()).unwrap();
    let result = tokio::time::timeout(std::time::Duration::from_secs(5), server)
        .await
        .expect("server did not shut down in time")
        .unwrap();
    assert!(result.is_ok());
}
