//! # 애플리케이션 설정(Configuration) 모듈
//!
//! 환경변수에서 서버 설정값을 읽어오는 모듈입니다.
//! `.env` 파일이나 시스템 환경변수에서 값을 가져옵니다.
//!
//! 설정 항목 (모두 선택, 없으면 기본값 사용):
//! - `PORT`: 서버 포트 번호 (기본값: 3000)
//! - `NODE_ENV`: 실행 환경 이름 (기본값: "development")
//! - `APP_VERSION`: 애플리케이션 버전 (기본값: "1.0.0")
//! - `BUILD_NUMBER`: 빌드 식별자 (기본값: "local")
//! - `API_KEY`: API 비밀키 (기본값: 센티널 "not-set")
//! - `DATABASE_URL`: 데이터베이스 주소 (기본값: 센티널 "not-configured")
//!
//! 비밀값(API_KEY, DATABASE_URL)은 설정 "여부"만 외부에 노출되고,
//! 값 자체는 어떤 HTTP 응답에도 포함되지 않습니다.

use std::env;

/// API 키가 설정되지 않았음을 나타내는 센티널 값
pub const API_KEY_NOT_SET: &str = "not-set";
/// 데이터베이스 URL이 설정되지 않았음을 나타내는 센티널 값
pub const DATABASE_NOT_CONFIGURED: &str = "not-configured";

/// 애플리케이션 전체 설정을 담는 구조체
///
/// 서버 시작 시 환경변수에서 한 번 읽어온 후,
/// `AppState`를 통해 모든 핸들러에 주입됩니다.
/// 핸들러는 환경변수를 직접 읽지 않고 이 구조체만 봅니다.
#[derive(Debug, Clone)]
pub struct Config {
    /// 서버 포트 번호
    /// u16: 0~65535 범위의 부호 없는 16비트 정수. 포트 번호에 딱 맞는 타입입니다.
    pub port: u16,
    /// 실행 환경 이름 (development / staging / production)
    pub environment: String,
    /// 애플리케이션 버전 문자열
    pub version: String,
    /// CI가 주입하는 빌드 식별자 (로컬 빌드는 "local")
    pub build_number: String,
    /// API 비밀키. 센티널 값이면 "미설정"으로 취급합니다.
    pub api_key: String,
    /// 데이터베이스 연결 문자열. 센티널 값이면 "미설정"으로 취급합니다.
    pub database_url: String,
}

impl Config {
    /// 환경변수에서 설정값을 읽어 Config 인스턴스를 생성합니다.
    ///
    /// 모든 항목에 기본값이 있으므로 이 함수는 실패하지 않습니다.
    /// `PORT`가 숫자로 파싱되지 않으면 경고 로그를 남기고 기본값을 사용합니다.
    pub fn from_env() -> Self {
        // unwrap_or_else(|_| ...): 환경변수가 없을 때 기본값을 만드는 클로저
        let port_raw = env::var("PORT").unwrap_or_else(|_| "3000".to_string());
        // .parse(): 문자열을 u16으로 변환. "abc" 같은 값은 기본 포트로 대체합니다.
        let port = port_raw.parse().unwrap_or_else(|_| {
            tracing::warn!("Invalid PORT value {:?}, falling back to 3000", port_raw);
            3000
        });

        Self {
            port,
            environment: env::var("NODE_ENV").unwrap_or_else(|_| "development".to_string()),
            version: env::var("APP_VERSION").unwrap_or_else(|_| "1.0.0".to_string()),
            build_number: env::var("BUILD_NUMBER").unwrap_or_else(|_| "local".to_string()),
            api_key: env::var("API_KEY").unwrap_or_else(|_| API_KEY_NOT_SET.to_string()),
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| DATABASE_NOT_CONFIGURED.to_string()),
        }
    }

    /// API 키가 실제로 설정되었는지 여부 (센티널 값과 다르면 true)
    pub fn api_key_configured(&self) -> bool {
        self.api_key != API_KEY_NOT_SET
    }

    /// 데이터베이스 URL이 실제로 설정되었는지 여부
    pub fn database_configured(&self) -> bool {
        self.database_url != DATABASE_NOT_CONFIGURED
    }
}
