//! 미들웨어가 적용된 전체 라우터.

use std::sync::Arc;
use std::time::Duration;

use axum::http::{header, Method, StatusCode};
use axum::Router;
use price_action_core::{AppConfig, CorsConfig};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::routes::create_api_router;
use crate::state::AppState;

/// CORS 레이어 구성.
///
/// 설정의 `cors.origins`가 비어 있으면 모든 origin을 허용합니다.
/// 예: `PRICE_ACTION__CORS__ORIGINS=https://dashboard.example.com,https://admin.example.com`
pub fn cors_layer(config: &CorsConfig) -> CorsLayer {
    let origins: Vec<_> = config
        .origins
        .iter()
        .filter_map(|s| s.trim().parse().ok())
        .collect();

    let allow_origin = if origins.is_empty() {
        if config.origins.is_empty() {
            warn!("CORS origins not set, allowing any origin");
        } else {
            warn!("CORS origins contain no valid entries, allowing any origin");
        }
        AllowOrigin::any()
    } else {
        info!("CORS configured with {} allowed origins", origins.len());
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .max_age(Duration::from_secs(3600))
}

/// 전체 라우터 생성.
pub fn create_router(state: Arc<AppState>, config: &AppConfig) -> Router {
    create_api_router()
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        // 요청 타임아웃 - 408 반환
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(config.server.request_timeout_secs),
        ))
        .layer(cors_layer(&config.cors))
}
