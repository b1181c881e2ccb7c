//! 분석 endpoint.
//!
//! 요청 캔들에 패턴 엔진을 적용하고, 결과를 지표/의사결정/리스크 모듈에 전달하여
//! 하나의 응답으로 합칩니다.
//!
//! 요청 본문은 `Json` 추출기 대신 직접 역직렬화하며, 잘못된 본문도
//! 다른 분석 실패와 같이 500으로 응답합니다.

use axum::{body::Bytes, extract::State, routing::post, Json, Router};
use price_action_core::{
    analysis_span, CandleSeries, CoreError, IndicatorMap, MarketTrend, PatternSet, TradeSignal,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, Instrument};

use crate::error::{ApiErrorResponse, ApiResult};
use crate::state::AppState;

// ==================== 요청/응답 ====================

/// 분석 요청 본문.
///
/// 세 필드 모두 필수이며, `symbol`, `timeframe`은 그대로 응답에 반영됩니다.
#[derive(Debug, Clone, Deserialize)]
pub struct AnalysisRequest {
    /// 심볼 (예: "BTCUSDT")
    pub symbol: String,
    /// 타임프레임 (예: "1h")
    pub timeframe: String,
    /// 시간 순서 캔들
    pub candles: CandleSeries,
}

impl AnalysisRequest {
    /// 요청 본문을 파싱합니다.
    pub fn from_slice(body: &[u8]) -> Result<Self, CoreError> {
        Ok(serde_json::from_slice(body)?)
    }
}

/// 분석 응답.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeResponse {
    /// 심볼
    pub symbol: String,
    /// 타임프레임
    pub timeframe: String,
    /// 매매 신호
    pub signal: TradeSignal,
    /// 진입 가격
    pub entry: f64,
    /// 손절가
    pub stop_loss: Option<f64>,
    /// 목표가 목록
    pub targets: Vec<f64>,
    /// 신뢰도
    pub confidence: f64,
    /// 추세
    pub trend: MarketTrend,
    /// 판단 근거
    pub reason: String,
    /// 감지된 패턴 (캔들스틱 다음 차트)
    pub patterns: PatternSet,
    /// 지표 값
    pub indicators: IndicatorMap,
    /// 손익비
    pub risk_reward: Option<f64>,
}

// ==================== 핸들러 ====================

/// 캔들 분석.
///
/// POST /analyze
pub async fn analyze(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> ApiResult<Json<AnalyzeResponse>> {
    let request = AnalysisRequest::from_slice(&body).map_err(ApiErrorResponse::internal)?;

    let span = analysis_span!(
        "analyze",
        request.symbol,
        request.timeframe,
        request.candles.len()
    );

    run_analysis(&state, request).instrument(span).await
}

async fn run_analysis(
    state: &AppState,
    request: AnalysisRequest,
) -> ApiResult<Json<AnalyzeResponse>> {
    let candles = &request.candles;

    let indicators = state
        .indicators
        .compute(candles)
        .await
        .map_err(ApiErrorResponse::internal)?;

    let patterns = state.pattern_engine.analyze(candles);

    let decision = state
        .decision_engine
        .decide(candles, &patterns, &indicators)
        .await
        .map_err(ApiErrorResponse::internal)?;

    let risk = state
        .risk_assessor
        .assess(candles, &decision)
        .await
        .map_err(ApiErrorResponse::internal)?;

    debug!(signal = %decision.signal, patterns = patterns.len(), "Analysis completed");

    Ok(Json(AnalyzeResponse {
        symbol: request.symbol,
        timeframe: request.timeframe,
        signal: decision.signal,
        entry: decision.entry,
        stop_loss: risk.stop_loss,
        targets: risk.targets,
        confidence: decision.confidence,
        trend: decision.trend,
        reason: decision.reason,
        patterns,
        indicators,
        risk_reward: risk.risk_reward,
    }))
}

/// 분석 라우터 생성.
pub fn analyze_router() -> Router<Arc<AppState>> {
    Router::new().route("/analyze", post(analyze))
}
