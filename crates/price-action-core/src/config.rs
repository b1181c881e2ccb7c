//! 설정 관리.
//!
//! 설정 로드 순서: 기본값 → 설정 파일(선택) → `PRICE_ACTION__` 접두사 환경 변수.
//! 감지 임계값은 코드 상수이며 설정으로 노출하지 않습니다.

use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::Path;

use crate::error::{CoreError, CoreResult};

/// 기본 설정 파일 경로.
pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

/// 환경 변수 접두사.
pub const ENV_PREFIX: &str = "PRICE_ACTION";

/// 애플리케이션 설정.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AppConfig {
    /// 서버 설정
    #[serde(default)]
    pub server: ServerConfig,
    /// 로깅 설정
    #[serde(default)]
    pub logging: LoggingConfig,
    /// 서비스 식별 정보
    #[serde(default)]
    pub service: ServiceConfig,
    /// CORS 설정
    #[serde(default)]
    pub cors: CorsConfig,
}

/// 서버 설정.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// 바인딩할 호스트
    pub host: String,
    /// 리스닝할 포트
    pub port: u16,
    /// 요청 타임아웃 (초)
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_request_timeout_secs() -> u64 {
    30
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5001,
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

impl ServerConfig {
    /// 바인딩 주소를 생성합니다.
    pub fn socket_addr(&self) -> CoreResult<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| CoreError::Config(format!("잘못된 서버 주소 {}:{}: {}", self.host, self.port, e)))
    }
}

/// 로깅 설정.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// 로그 레벨
    pub level: String,
    /// 로그 형식 (pretty, json, compact)
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

/// 서비스 식별 정보.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServiceConfig {
    /// 헬스 체크 응답에 표시되는 서비스 이름
    pub name: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            name: "AI Engine".to_string(),
        }
    }
}

/// CORS 설정.
///
/// `origins`가 비어 있으면 모든 origin을 허용합니다.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CorsConfig {
    /// 허용할 origin 목록
    #[serde(default)]
    pub origins: Vec<String>,
}

impl AppConfig {
    /// 파일과 환경 변수에서 설정을 로드합니다.
    ///
    /// 파일이 없으면 기본값과 환경 변수만 사용합니다.
    pub fn load<P: AsRef<Path>>(path: P) -> CoreResult<Self> {
        let builder = config::Config::builder()
            // 기본값으로 시작
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 5001)?
            .set_default("logging.level", "info")?
            .set_default("logging.format", "pretty")?
            .set_default("service.name", "AI Engine")?
            // 파일에서 로드
            .add_source(config::File::from(path.as_ref()).required(false))
            // 환경 변수로 오버라이드 (예: PRICE_ACTION__SERVER__PORT=8080)
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("cors.origins")
                    .try_parsing(true),
            );

        let config = builder.build()?;
        Ok(config.try_deserialize()?)
    }

    /// 기본 경로에서 설정을 로드합니다.
    pub fn load_default() -> CoreResult<Self> {
        Self::load(DEFAULT_CONFIG_PATH)
    }
}
