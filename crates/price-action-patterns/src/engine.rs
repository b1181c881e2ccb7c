//! 패턴 엔진.
//!
//! 캔들스틱 감지기와 차트 매처를 같은 시리즈에 적용하고 결과를 이어 붙입니다.

use price_action_core::{CandleSeries, PatternSet};
use tracing::debug;

use crate::candlestick::CandlestickPatternDetector;
use crate::chart::ChartPatternMatcher;

/// 패턴 엔진.
///
/// 상태가 없으므로 요청 간에 잠금 없이 공유할 수 있습니다.
#[derive(Debug, Clone, Copy, Default)]
pub struct PatternEngine {
    candlestick: CandlestickPatternDetector,
    chart: ChartPatternMatcher,
}

impl PatternEngine {
    /// 새 엔진을 생성합니다.
    pub fn new() -> Self {
        Self {
            candlestick: CandlestickPatternDetector::new(),
            chart: ChartPatternMatcher::new(),
        }
    }

    /// 캔들스틱 감지기.
    pub fn candlestick(&self) -> &CandlestickPatternDetector {
        &self.candlestick
    }

    /// 차트 매처.
    pub fn chart(&self) -> &ChartPatternMatcher {
        &self.chart
    }

    /// 전체 패턴 집합(캔들스틱 라벨 다음 차트 라벨)을 계산합니다.
    pub fn analyze(&self, series: &CandleSeries) -> PatternSet {
        let candlestick = self.candlestick.detect(series);
        let chart = self.chart.match_patterns(series);

        let patterns = PatternSet::concat(candlestick, chart);

        debug!(
            candles = series.len(),
            patterns = ?patterns.names(),
            "패턴 감지 완료"
        );

        patterns
    }
}
