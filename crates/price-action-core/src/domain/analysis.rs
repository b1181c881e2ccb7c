//! 외부 협력자 trait 및 관련 타입.
//!
//! 패턴 감지 결과를 소비하는 주변 모듈(지표 계산, 의사결정, 리스크 관리)에 대한
//! 추상화 계층입니다. 이 크레이트는 인터페이스만 정의하며 실제 지표 수식이나
//! 의사결정 정책은 구현하지 않습니다.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use super::candle::CandleSeries;
use super::pattern::PatternSet;
use crate::error::CoreResult;

/// 지표 이름 → 값 매핑.
pub type IndicatorMap = BTreeMap<String, f64>;

/// 매매 신호.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TradeSignal {
    /// 매수
    Buy,
    /// 매도
    Sell,
    /// 관망
    Hold,
}

impl fmt::Display for TradeSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TradeSignal::Buy => write!(f, "BUY"),
            TradeSignal::Sell => write!(f, "SELL"),
            TradeSignal::Hold => write!(f, "HOLD"),
        }
    }
}

/// 추세 방향.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MarketTrend {
    /// 상승 추세
    Bullish,
    /// 하락 추세
    Bearish,
    /// 중립
    Neutral,
}

/// 의사결정 모듈 출력.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Decision {
    /// 매매 신호
    pub signal: TradeSignal,
    /// 진입 가격
    pub entry: f64,
    /// 신뢰도 (0 ~ 100)
    pub confidence: f64,
    /// 추세 방향
    pub trend: MarketTrend,
    /// 판단 근거
    pub reason: String,
}

/// 리스크 관리 모듈 출력.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskAssessment {
    /// 손절가
    pub stop_loss: Option<f64>,
    /// 목표가 목록
    pub targets: Vec<f64>,
    /// 손익비
    pub risk_reward: Option<f64>,
}

/// 지표 계산 모듈.
///
/// 패턴 감지와 같은 캔들 시리즈로부터 이름 붙은 수치 지표를 계산합니다.
#[async_trait]
pub trait IndicatorProvider: Send + Sync {
    /// 지표 계산.
    async fn compute(&self, series: &CandleSeries) -> CoreResult<IndicatorMap>;
}

/// 의사결정 모듈.
///
/// 패턴 집합과 지표를 결합하여 매매 신호를 만듭니다.
#[async_trait]
pub trait DecisionEngine: Send + Sync {
    /// 매매 판단.
    async fn decide(
        &self,
        series: &CandleSeries,
        patterns: &PatternSet,
        indicators: &IndicatorMap,
    ) -> CoreResult<Decision>;
}

/// 리스크 관리 모듈.
///
/// 의사결정 결과로부터 손절가와 목표가를 산출합니다.
#[async_trait]
pub trait RiskAssessor: Send + Sync {
    /// 리스크 평가.
    async fn assess(&self, series: &CandleSeries, decision: &Decision) -> CoreResult<RiskAssessment>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;

    struct FixedIndicators;

    #[async_trait]
    impl IndicatorProvider for FixedIndicators {
        async fn compute(&self, series: &CandleSeries) -> CoreResult<IndicatorMap> {
            if series.is_empty() {
                return Err(CoreError::Collaborator("빈 시리즈".to_string()));
            }
            let mut map = IndicatorMap::new();
            map.insert("rsi".to_string(), 50.0);
            Ok(map)
        }
    }

    #[tokio::test]
    async fn test_indicator_provider_object_safety() {
        let provider: Box<dyn IndicatorProvider> = Box::new(FixedIndicators);

        let err = provider.compute(&CandleSeries::default()).await;
        assert!(err.is_err());
    }

    #[test]
    fn test_decision_serialization() {
        let decision = Decision {
            signal: TradeSignal::Hold,
            entry: 101.5,
            confidence: 0.0,
            trend: MarketTrend::Neutral,
            reason: "none".to_string(),
        };

        let json = serde_json::to_value(&decision).unwrap();
        assert_eq!(json["signal"], "HOLD");
        assert_eq!(json["trend"], "NEUTRAL");
        assert_eq!(json["entry"], 101.5);
    }

    #[test]
    fn test_risk_assessment_camel_case() {
        let risk = RiskAssessment {
            stop_loss: Some(95.0),
            targets: vec![105.0, 110.0],
            risk_reward: Some(2.0),
        };

        let json = serde_json::to_value(&risk).unwrap();
        assert_eq!(json["stopLoss"], 95.0);
        assert_eq!(json["riskReward"], 2.0);
        assert_eq!(json["targets"][1], 110.0);
    }
}
