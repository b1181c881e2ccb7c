//! API 에러 응답 타입.
//!
//! 모든 분석 실패(잘못된 JSON, 필드 누락, 협력자 에러)는 HTTP 500과
//! `{"error": 메시지}` 본문으로 응답합니다. 캔들 이력 부족은 에러가 아닙니다.

use axum::{http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use tracing::error;

/// API 에러 응답.
///
/// ```json
/// { "error": "직렬화 에러: missing field `candles` at line 1 column 2" }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    /// 사람이 읽을 수 있는 에러 메시지
    pub error: String,
}

impl ApiErrorResponse {
    /// 에러 응답 생성.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }

    /// 500 응답으로 변환합니다.
    ///
    /// `map_err(ApiErrorResponse::internal)` 형태로 사용합니다.
    pub fn internal(err: impl Display) -> (StatusCode, Json<Self>) {
        let message = err.to_string();
        error!(error = %message, "Analysis request failed");
        (StatusCode::INTERNAL_SERVER_ERROR, Json(Self::new(message)))
    }
}

/// API 핸들러 결과 타입.
pub type ApiResult<T> = Result<T, (StatusCode, Json<ApiErrorResponse>)>;

#[cfg(test)]
mod tests {
    use super::*;
    use price_action_core::CoreError;

    #[test]
    fn test_internal_error_shape() {
        let (status, Json(body)) =
            ApiErrorResponse::internal(CoreError::Collaborator("timeout".to_string()));

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.error, "협력자 에러: timeout");

        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json, serde_json::json!({"error": "협력자 에러: timeout"}));
    }
}
