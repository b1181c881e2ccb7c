//! 미설정 상태의 기본 협력자.
//!
//! 지표 계산과 매매 판단은 이 서비스의 범위 밖입니다. 실제 구현이 연결되지 않았을 때
//! `/analyze` 응답 형태를 유지하기 위해 아무 분석도 하지 않는 구현을 제공합니다.
//! 실제 구현은 [`AppState`](crate::state::AppState)의 `with_*` 메서드로 교체합니다.

use async_trait::async_trait;
use price_action_core::{
    CandleSeries, CoreResult, Decision, DecisionEngine, IndicatorMap, IndicatorProvider,
    MarketTrend, PatternSet, PriceExt, RiskAssessment, RiskAssessor, TradeSignal,
};

/// 빈 지표 맵을 반환하는 지표 모듈.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoIndicators;

#[async_trait]
impl IndicatorProvider for NoIndicators {
    async fn compute(&self, _series: &CandleSeries) -> CoreResult<IndicatorMap> {
        Ok(IndicatorMap::new())
    }
}

/// 항상 관망(HOLD)을 반환하는 의사결정 모듈.
///
/// 진입가는 마지막 종가(캔들이 없으면 0), 신뢰도 0, 추세 중립이며
/// 판단 근거에 감지된 패턴을 나열합니다.
#[derive(Debug, Clone, Copy, Default)]
pub struct HoldDecision;

#[async_trait]
impl DecisionEngine for HoldDecision {
    async fn decide(
        &self,
        series: &CandleSeries,
        patterns: &PatternSet,
        _indicators: &IndicatorMap,
    ) -> CoreResult<Decision> {
        let entry = series
            .last()
            .map(|c| c.close.to_f64_lossy())
            .unwrap_or_default();

        let detected = if patterns.is_empty() {
            "none".to_string()
        } else {
            patterns.names().join(", ")
        };

        Ok(Decision {
            signal: TradeSignal::Hold,
            entry,
            confidence: 0.0,
            trend: MarketTrend::Neutral,
            reason: format!("No decision engine configured. Patterns: {}", detected),
        })
    }
}

/// 손절가/목표가를 산출하지 않는 리스크 모듈.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoRiskAssessment;

#[async_trait]
impl RiskAssessor for NoRiskAssessment {
    async fn assess(&self, _series: &CandleSeries, _decision: &Decision) -> CoreResult<RiskAssessment> {
        Ok(RiskAssessment::default())
    }
}
