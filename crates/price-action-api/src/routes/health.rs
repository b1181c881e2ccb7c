//! 헬스 체크 endpoint.
//!
//! 의존성 확인 없이 고정된 응답을 반환합니다.

use axum::{extract::State, routing::get, Json, Router};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::state::AppState;

/// 헬스 체크 응답.
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// 항상 "ok"
    pub status: String,
    /// 서비스 이름
    pub service: String,
}

/// 헬스 체크.
///
/// GET /health
pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        service: state.service_name.clone(),
    })
}

/// 헬스 체크 라우터 생성.
pub fn health_router() -> Router<Arc<AppState>> {
    Router::new().route("/health", get(health_check))
}
