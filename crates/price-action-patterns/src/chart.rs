//! 차트 패턴 매칭.
//!
//! 최근 윈도우의 스윙 포인트를 최신 것부터(`p[-1]`, `p[-2]`, ...) 비교하여
//! 기하 형태를 판정합니다. 규칙은 서로 배타적이지 않아 같은 스윙 포인트에서
//! 여러 라벨이 함께 나올 수 있습니다.

use price_action_core::{CandleSeries, PatternLabel, Price, PriceExt, Ratio};
use rust_decimal_macros::dec;

use crate::swing::{SwingPointExtractor, SWING_WINDOW};

/// 매칭에 필요한 최소 캔들 수.
pub const MIN_CANDLES: usize = SWING_WINDOW;

/// 이중 천장/바닥: 마지막 두 극값 차이가 이전 극값의 이 비율 미만
pub const DOUBLE_EXTREMA_TOLERANCE: Ratio = dec!(0.02);

/// 상승 삼각형: 마지막 두 고점 차이가 최근 고점의 이 비율 미만 (수평 저항선)
pub const FLAT_RESISTANCE_TOLERANCE: Ratio = dec!(0.01);

/// 머리어깨형: 양 어깨 차이가 오른쪽 어깨의 이 비율 미만
pub const SHOULDER_TOLERANCE: Ratio = dec!(0.02);

type Rule = (PatternLabel, fn(&[Price], &[Price]) -> bool);

/// 평가 순서대로 나열된 규칙 테이블 (고점 가격, 저점 가격).
const RULES: [Rule; 4] = [
    (PatternLabel::DoubleTop, is_double_top),
    (PatternLabel::DoubleBottom, is_double_bottom),
    (PatternLabel::AscendingTriangle, is_ascending_triangle),
    (PatternLabel::HeadAndShoulders, is_head_and_shoulders),
];

fn is_double_top(peaks: &[Price], _troughs: &[Price]) -> bool {
    match peaks {
        [.., p2, p1] => p1.is_within(*p2, *p2, DOUBLE_EXTREMA_TOLERANCE),
        _ => false,
    }
}

fn is_double_bottom(_peaks: &[Price], troughs: &[Price]) -> bool {
    match troughs {
        [.., t2, t1] => t1.is_within(*t2, *t2, DOUBLE_EXTREMA_TOLERANCE),
        _ => false,
    }
}

fn is_ascending_triangle(peaks: &[Price], troughs: &[Price]) -> bool {
    match (peaks, troughs) {
        ([.., p2, p1], [.., t2, t1]) => {
            t1 > t2 && p1.is_within(*p2, *p1, FLAT_RESISTANCE_TOLERANCE)
        }
        _ => false,
    }
}

fn is_head_and_shoulders(peaks: &[Price], _troughs: &[Price]) -> bool {
    match peaks {
        [.., left, head, right] => {
            head > right && head > left && right.is_within(*left, *right, SHOULDER_TOLERANCE)
        }
        _ => false,
    }
}

/// 차트 패턴 매처.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChartPatternMatcher {
    extractor: SwingPointExtractor,
}

impl ChartPatternMatcher {
    /// 새 매처를 생성합니다.
    pub fn new() -> Self {
        Self {
            extractor: SwingPointExtractor::new(),
        }
    }

    /// 시리즈에서 차트 패턴을 매칭합니다.
    ///
    /// 캔들이 [`MIN_CANDLES`]개 미만이면 빈 벡터를 반환합니다.
    pub fn match_patterns(&self, series: &CandleSeries) -> Vec<PatternLabel> {
        if series.len() < MIN_CANDLES {
            return Vec::new();
        }

        let points = self.extractor.extract(series);
        self.match_prices(&points.peak_prices(), &points.trough_prices())
    }

    /// 고점/저점 가격 목록(인덱스 오름차순)에 규칙을 적용합니다.
    ///
    /// 스윙 포인트를 이미 가진 호출자를 위한 슬라이스 단위 진입점이며,
    /// [`match_patterns`](Self::match_patterns)도 추출 후 이 메서드를 거칩니다.
    pub fn match_prices(&self, peaks: &[Price], troughs: &[Price]) -> Vec<PatternLabel> {
        RULES
            .iter()
            .filter(|(_, matches)| matches(peaks, troughs))
            .map(|(label, _)| *label)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use price_action_core::Candle;
    use rust_decimal::Decimal;

    fn bar(high: Decimal, low: Decimal) -> Candle {
        Candle::new(
            Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            low,
            high,
            low,
            high,
        )
    }

    #[test]
    fn test_short_series_is_empty() {
        let mut data = vec![bar(dec!(100), dec!(95)); 19];
        data[4] = bar(dec!(110), dec!(95));
        data[10] = bar(dec!(110), dec!(95));

        let series = CandleSeries::new(data);
        assert!(ChartPatternMatcher::new().match_patterns(&series).is_empty());
    }

    #[test]
    fn test_double_top_tolerance() {
        let matcher = ChartPatternMatcher::new();

        let labels = matcher.match_prices(&[dec!(100), dec!(101.9)], &[]);
        assert!(labels.contains(&PatternLabel::DoubleTop));

        let labels = matcher.match_prices(&[dec!(100), dec!(103)], &[]);
        assert!(!labels.contains(&PatternLabel::DoubleTop));

        // |102 - 100| == 0.02 * 100
        let labels = matcher.match_prices(&[dec!(100), dec!(102)], &[]);
        assert!(!labels.contains(&PatternLabel::DoubleTop));
    }

    #[test]
    fn test_double_bottom() {
        let labels = ChartPatternMatcher::new().match_prices(&[], &[dec!(90), dec!(90.5)]);
        assert_eq!(labels, vec![PatternLabel::DoubleBottom]);
    }

    #[test]
    fn test_ascending_triangle() {
        let matcher = ChartPatternMatcher::new();

        let labels = matcher.match_prices(&[dec!(110), dec!(110.5)], &[dec!(95), dec!(100)]);
        assert!(labels.contains(&PatternLabel::AscendingTriangle));
        // 같은 고점이 이중 천장도 충족
        assert!(labels.contains(&PatternLabel::DoubleTop));

        // 저점이 낮아지면 불성립
        let labels = matcher.match_prices(&[dec!(110), dec!(110.5)], &[dec!(100), dec!(95)]);
        assert!(!labels.contains(&PatternLabel::AscendingTriangle));
    }

    #[test]
    fn test_head_and_shoulders() {
        let matcher = ChartPatternMatcher::new();

        let labels = matcher.match_prices(&[dec!(100), dec!(120), dec!(101)], &[]);
        assert_eq!(labels, vec![PatternLabel::HeadAndShoulders]);

        // 머리가 오른쪽 어깨보다 높지 않음
        let labels = matcher.match_prices(&[dec!(100), dec!(120), dec!(121)], &[]);
        assert!(!labels.contains(&PatternLabel::HeadAndShoulders));
    }

    #[test]
    fn test_uses_most_recent_points() {
        // 오래된 고점은 무시
        let labels =
            ChartPatternMatcher::new().match_prices(&[dec!(50), dec!(100), dec!(101)], &[]);
        assert_eq!(labels, vec![PatternLabel::DoubleTop]);
    }

    #[test]
    fn test_double_top_from_series() {
        let mut data = vec![bar(dec!(100), dec!(95)); 20];
        data[5] = bar(dec!(110), dec!(95));
        data[14] = bar(dec!(111), dec!(95));

        let labels = ChartPatternMatcher::new().match_patterns(&CandleSeries::new(data));
        assert!(labels.contains(&PatternLabel::DoubleTop));
    }

    #[test]
    fn test_flat_series_is_empty() {
        let series = CandleSeries::new(vec![bar(dec!(100), dec!(100)); 25]);
        assert!(ChartPatternMatcher::new().match_patterns(&series).is_empty());
    }
}
