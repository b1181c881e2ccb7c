//! 패턴 분석 시스템의 에러 타입.
//!
//! 캔들 이력이 부족한 것은 에러가 아니며 빈 결과로 처리됩니다.
//! 이 모듈의 에러는 요청 파싱 실패, 협력자 실패, 설정 오류에만 사용됩니다.

use thiserror::Error;

/// 핵심 에러.
#[derive(Debug, Error)]
pub enum CoreError {
    /// 설정 에러
    #[error("설정 에러: {0}")]
    Config(String),

    /// 직렬화 에러
    #[error("직렬화 에러: {0}")]
    Serialization(String),

    /// 외부 협력자(지표, 의사결정, 리스크) 에러
    #[error("협력자 에러: {0}")]
    Collaborator(String),
}

/// 핵심 작업을 위한 Result 타입.
pub type CoreResult<T> = Result<T, CoreError>;

impl From<serde_json::Error> for CoreError {
    fn from(err: serde_json::Error) -> Self {
        CoreError::Serialization(err.to_string())
    }
}

impl From<config::ConfigError> for CoreError {
    fn from(err: config::ConfigError) -> Self {
        CoreError::Config(err.to_string())
    }
}
