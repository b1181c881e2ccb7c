//! API 라우트.
//!
//! # 라우트 구조
//!
//! - `GET /health` - 헬스 체크
//! - `POST /analyze` - 패턴 감지 + 지표 + 매매 판단 + 리스크 평가
//! - `POST /patterns` - 패턴 감지만 수행
//! - `GET /patterns/types` - 지원 패턴 목록

pub mod analyze;
pub mod health;
pub mod patterns;

pub use analyze::{analyze_router, AnalysisRequest, AnalyzeResponse};
pub use health::{health_router, HealthResponse};
pub use patterns::{patterns_router, PatternDetectionResponse, PatternTypeInfo};

use axum::Router;
use std::sync::Arc;

use crate::state::AppState;

/// 전체 API 라우터 생성.
pub fn create_api_router() -> Router<Arc<AppState>> {
    Router::new()
        .merge(health_router())
        .merge(analyze_router())
        .merge(patterns_router())
}
