//! 패턴 감지 API 엔드포인트.
//!
//! # 엔드포인트
//!
//! - `POST /patterns` - 캔들스틱 + 차트 패턴 감지 (협력자 호출 없음)
//! - `GET /patterns/types` - 지원되는 패턴 타입 목록

use axum::{
    body::Bytes,
    extract::State,
    routing::{get, post},
    Json, Router,
};
use price_action_core::{analysis_span, PatternBias, PatternCategory, PatternLabel, PatternSet};
use serde::Serialize;
use std::sync::Arc;

use super::analyze::AnalysisRequest;
use crate::error::{ApiErrorResponse, ApiResult};
use crate::state::AppState;

// ==================== 응답 타입 ====================

/// 패턴 감지 응답.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PatternDetectionResponse {
    /// 심볼
    pub symbol: String,
    /// 타임프레임
    pub timeframe: String,
    /// 분석된 캔들 수
    pub candles_analyzed: usize,
    /// 캔들스틱 패턴
    pub candlestick: Vec<PatternLabel>,
    /// 차트 패턴
    pub chart: Vec<PatternLabel>,
    /// 전체 패턴 (캔들스틱 다음 차트)
    pub patterns: PatternSet,
}

/// 패턴 타입 정보.
#[derive(Debug, Serialize)]
pub struct PatternTypeInfo {
    /// 패턴 이름 (감지 결과와 같은 철자)
    pub name: &'static str,
    /// 패턴 카테고리
    pub category: PatternCategory,
    /// 신호 방향
    pub bias: PatternBias,
}

impl From<PatternLabel> for PatternTypeInfo {
    fn from(label: PatternLabel) -> Self {
        Self {
            name: label.as_str(),
            category: label.category(),
            bias: label.bias(),
        }
    }
}

// ==================== 핸들러 ====================

/// 패턴 감지.
///
/// POST /patterns
async fn detect_patterns(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> ApiResult<Json<PatternDetectionResponse>> {
    let request = AnalysisRequest::from_slice(&body).map_err(ApiErrorResponse::internal)?;
    let candles = &request.candles;

    let _span = analysis_span!(
        "detect_patterns",
        request.symbol,
        request.timeframe,
        candles.len()
    )
    .entered();

    let patterns = state.pattern_engine.analyze(candles);

    Ok(Json(PatternDetectionResponse {
        candles_analyzed: candles.len(),
        candlestick: patterns.of_category(PatternCategory::Candlestick),
        chart: patterns.of_category(PatternCategory::Chart),
        patterns,
        symbol: request.symbol,
        timeframe: request.timeframe,
    }))
}

/// 지원되는 패턴 타입 목록.
///
/// GET /patterns/types
async fn get_pattern_types() -> Json<Vec<PatternTypeInfo>> {
    Json(PatternLabel::ALL.into_iter().map(PatternTypeInfo::from).collect())
}

/// 패턴 라우터 생성.
pub fn patterns_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/patterns", post(detect_patterns))
        .route("/patterns/types", get(get_pattern_types))
}
