//! 애플리케이션 상태 관리.
//!
//! 모든 API 핸들러에서 공유되는 상태를 정의합니다.
//! 패턴 엔진은 상태가 없으므로 값으로 보관하고, 외부 협력자는 trait 객체로 보관합니다.

use std::sync::Arc;

use price_action_core::{DecisionEngine, IndicatorProvider, RiskAssessor};
use price_action_patterns::PatternEngine;

use crate::collaborators::{HoldDecision, NoIndicators, NoRiskAssessment};

/// 애플리케이션 공유 상태.
///
/// Axum 핸들러에서 `State<Arc<AppState>>`로 접근합니다.
#[derive(Clone)]
pub struct AppState {
    /// 패턴 엔진 (캔들스틱 + 차트)
    pub pattern_engine: PatternEngine,

    /// 지표 계산 모듈
    pub indicators: Arc<dyn IndicatorProvider>,

    /// 의사결정 모듈
    pub decision_engine: Arc<dyn DecisionEngine>,

    /// 리스크 관리 모듈
    pub risk_assessor: Arc<dyn RiskAssessor>,

    /// 헬스 체크에 표시되는 서비스 이름
    pub service_name: String,

    /// API 버전
    pub version: String,
}

impl AppState {
    /// 미설정 협력자로 새 상태를 생성합니다.
    pub fn new(service_name: impl Into<String>) -> Self {
        Self {
            pattern_engine: PatternEngine::new(),
            indicators: Arc::new(NoIndicators),
            decision_engine: Arc::new(HoldDecision),
            risk_assessor: Arc::new(NoRiskAssessment),
            service_name: service_name.into(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }

    /// 지표 계산 모듈 설정.
    pub fn with_indicator_provider(mut self, provider: Arc<dyn IndicatorProvider>) -> Self {
        self.indicators = provider;
        self
    }

    /// 의사결정 모듈 설정.
    pub fn with_decision_engine(mut self, engine: Arc<dyn DecisionEngine>) -> Self {
        self.decision_engine = engine;
        self
    }

    /// 리스크 관리 모듈 설정.
    pub fn with_risk_assessor(mut self, assessor: Arc<dyn RiskAssessor>) -> Self {
        self.risk_assessor = assessor;
        self
    }
}

/// 테스트용 상태 생성.
#[cfg(test)]
pub fn create_test_state() -> AppState {
    AppState::new("AI Engine")
}
