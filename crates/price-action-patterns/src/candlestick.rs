//! 캔들스틱 패턴 감지.
//!
//! 시리즈의 마지막 세 캔들(`prev2`, `prev`, `last`)만 검사합니다.
//! 규칙은 고정된 순서로 독립 평가되며, 일치하는 모든 라벨이 순서대로 추가됩니다.
//!
//! | 순서 | 라벨 | 조건 |
//! |---|---|---|
//! | 1 | Hammer | 아래꼬리 > 2·몸통, 위꼬리 < 0.3·몸통, 양봉 |
//! | 2 | Shooting Star | 위꼬리 > 2·몸통, 아래꼬리 < 0.3·몸통, 음봉 |
//! | 3 | Doji | 몸통 < 0.1·범위 |
//! | 4 | Bullish Engulfing | prev 음봉, last 양봉, last 몸통이 prev 몸통을 감쌈 |
//! | 5 | Bearish Engulfing | prev 양봉, last 음봉, last 몸통이 prev 몸통을 감쌈 |
//! | 6 | Morning Star | prev2 음봉, prev 몸통 < 0.3·last 몸통, last 양봉이 prev2 몸통 중간 위에서 마감 |
//! | 7 | Bullish / Bearish Pin Bar | 범위 > 0, 꼬리 > 0.6·범위, 몸통 < 0.3·범위 (강세 우선) |
//!
//! 모든 비교는 엄격 부등호이며 허용 오차를 두지 않습니다.

use price_action_core::{Candle, CandleSeries, PatternLabel};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// 감지에 필요한 최소 캔들 수.
pub const MIN_CANDLES: usize = 3;

// ==================== 임계값 ====================

/// 망치형/유성형: 긴 꼬리는 몸통의 이 배수보다 커야 함
pub const SHADOW_BODY_MULTIPLE: Decimal = dec!(2.0);
/// 망치형/유성형: 반대쪽 짧은 꼬리는 몸통의 이 비율보다 작아야 함
pub const OPPOSITE_SHADOW_BODY_RATIO: Decimal = dec!(0.3);

/// 도지: 몸통이 범위의 이 비율보다 작아야 함
pub const DOJI_BODY_RANGE_RATIO: Decimal = dec!(0.1);

/// 샛별형: 가운데 캔들 몸통이 마지막 몸통의 이 비율보다 작아야 함
pub const STAR_BODY_RATIO: Decimal = dec!(0.3);

/// 핀바: 꼬리가 범위의 이 비율보다 커야 함
pub const PIN_BAR_SHADOW_RANGE_RATIO: Decimal = dec!(0.6);
/// 핀바: 몸통이 범위의 이 비율보다 작아야 함
pub const PIN_BAR_BODY_RANGE_RATIO: Decimal = dec!(0.3);

/// 평가 대상 세 캔들 (오래된 것부터).
#[derive(Debug, Clone, Copy)]
struct Window<'a> {
    prev2: &'a Candle,
    prev: &'a Candle,
    last: &'a Candle,
}

impl<'a> Window<'a> {
    fn from_tail(candles: &'a [Candle]) -> Option<Self> {
        match candles {
            [.., prev2, prev, last] => Some(Self { prev2, prev, last }),
            _ => None,
        }
    }
}

type Rule = (PatternLabel, fn(&Window<'_>) -> bool);

/// 평가 순서대로 나열된 규칙 테이블.
const RULES: [Rule; 8] = [
    (PatternLabel::Hammer, is_hammer),
    (PatternLabel::ShootingStar, is_shooting_star),
    (PatternLabel::Doji, is_doji),
    (PatternLabel::BullishEngulfing, is_bullish_engulfing),
    (PatternLabel::BearishEngulfing, is_bearish_engulfing),
    (PatternLabel::MorningStar, is_morning_star),
    (PatternLabel::BullishPinBar, is_bullish_pin_bar),
    (PatternLabel::BearishPinBar, is_bearish_pin_bar),
];

/// `value > factor * base`. 곱이 `Decimal` 범위를 넘으면 거짓.
fn exceeds(value: Decimal, factor: Decimal, base: Decimal) -> bool {
    factor.checked_mul(base).is_some_and(|limit| value > limit)
}

/// `value < factor * base`. 곱이 `Decimal` 범위를 넘으면 거짓.
fn falls_below(value: Decimal, factor: Decimal, base: Decimal) -> bool {
    factor.checked_mul(base).is_some_and(|limit| value < limit)
}

fn is_hammer(w: &Window<'_>) -> bool {
    let c = w.last;
    let body = c.body();
    exceeds(c.lower_shadow(), SHADOW_BODY_MULTIPLE, body)
        && falls_below(c.upper_shadow(), OPPOSITE_SHADOW_BODY_RATIO, body)
        && c.is_bullish()
}

fn is_shooting_star(w: &Window<'_>) -> bool {
    let c = w.last;
    let body = c.body();
    exceeds(c.upper_shadow(), SHADOW_BODY_MULTIPLE, body)
        && falls_below(c.lower_shadow(), OPPOSITE_SHADOW_BODY_RATIO, body)
        && c.is_bearish()
}

fn is_doji(w: &Window<'_>) -> bool {
    falls_below(w.last.body(), DOJI_BODY_RANGE_RATIO, w.last.range())
}

fn is_bullish_engulfing(w: &Window<'_>) -> bool {
    let (prev, last) = (w.prev, w.last);
    prev.is_bearish() && last.is_bullish() && last.open < prev.close && last.close > prev.open
}

fn is_bearish_engulfing(w: &Window<'_>) -> bool {
    let (prev, last) = (w.prev, w.last);
    prev.is_bullish() && last.is_bearish() && last.open > prev.close && last.close < prev.open
}

fn is_morning_star(w: &Window<'_>) -> bool {
    w.prev2.is_bearish()
        && falls_below(w.prev.body(), STAR_BODY_RATIO, w.last.body())
        && w.last.is_bullish()
        && w
            .prev2
            .body_midpoint()
            .is_some_and(|midpoint| w.last.close > midpoint)
}

/// 범위가 0인 캔들은 핀바 판정에서 제외.
fn pin_bar_candidate(c: &Candle) -> bool {
    let range = c.range();
    range > Decimal::ZERO && falls_below(c.body(), PIN_BAR_BODY_RANGE_RATIO, range)
}

fn is_bullish_pin_bar(w: &Window<'_>) -> bool {
    let c = w.last;
    pin_bar_candidate(c) && exceeds(c.lower_shadow(), PIN_BAR_SHADOW_RANGE_RATIO, c.range())
}

// 강세 핀바가 우선하며, 같은 캔들에서 두 핀바가 함께 나오지 않음
fn is_bearish_pin_bar(w: &Window<'_>) -> bool {
    let c = w.last;
    pin_bar_candidate(c)
        && !is_bullish_pin_bar(w)
        && exceeds(c.upper_shadow(), PIN_BAR_SHADOW_RANGE_RATIO, c.range())
}

/// 캔들스틱 패턴 감지기.
///
/// 상태가 없으므로 복사하거나 스레드 간에 자유롭게 공유할 수 있습니다.
#[derive(Debug, Clone, Copy, Default)]
pub struct CandlestickPatternDetector;

impl CandlestickPatternDetector {
    /// 새 감지기를 생성합니다.
    pub fn new() -> Self {
        Self
    }

    /// 시리즈의 마지막 캔들들에서 캔들스틱 패턴을 감지합니다.
    ///
    /// 캔들이 [`MIN_CANDLES`]개 미만이면 빈 벡터를 반환합니다.
    pub fn detect(&self, series: &CandleSeries) -> Vec<PatternLabel> {
        self.detect_candles(series.as_slice())
    }

    /// 캔들 슬라이스에서 캔들스틱 패턴을 감지합니다.
    ///
    /// [`CandleSeries`]로 감싸지 않은 캔들 버퍼(예: 스트리밍 윈도우)를 위한
    /// 슬라이스 단위 진입점이며, [`detect`](Self::detect)도 이 메서드를 거칩니다.
    pub fn detect_candles(&self, candles: &[Candle]) -> Vec<PatternLabel> {
        let Some(window) = Window::from_tail(candles) else {
            return Vec::new();
        };

        RULES
            .iter()
            .filter(|(_, matches)| matches(&window))
            .map(|(label, _)| *label)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn create_test_candle(open: Decimal, high: Decimal, low: Decimal, close: Decimal) -> Candle {
        Candle::new(
            Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            open,
            high,
            low,
            close,
        )
    }

    /// 앞쪽 두 캔들을 평평한 캔들로 채워 마지막 캔들만 평가되게 합니다.
    fn with_flat_prefix(last: Candle) -> Vec<Candle> {
        let flat = create_test_candle(dec!(100), dec!(100), dec!(100), dec!(100));
        vec![flat, flat, last]
    }

    #[test]
    fn test_short_series_is_empty() {
        let detector = CandlestickPatternDetector::new();
        let c = create_test_candle(dec!(100), dec!(105), dec!(95), dec!(100));

        assert!(detector.detect_candles(&[]).is_empty());
        assert!(detector.detect_candles(&[c]).is_empty());
        assert!(detector.detect_candles(&[c, c]).is_empty());
        assert!(!detector.detect_candles(&[c, c, c]).is_empty());
    }

    #[test]
    fn test_hammer_detection() {
        // 몸통 2, 아래꼬리 10, 위꼬리 0.5
        let candles = with_flat_prefix(create_test_candle(dec!(100), dec!(102.5), dec!(90), dec!(102)));
        let labels = CandlestickPatternDetector::new().detect_candles(&candles);

        assert!(labels.contains(&PatternLabel::Hammer));
        assert!(!labels.contains(&PatternLabel::ShootingStar));
    }

    #[test]
    fn test_hammer_requires_bullish_close() {
        // 같은 기하지만 음봉
        let candles = with_flat_prefix(create_test_candle(dec!(102), dec!(102.5), dec!(90), dec!(100)));
        let labels = CandlestickPatternDetector::new().detect_candles(&candles);

        assert!(!labels.contains(&PatternLabel::Hammer));
    }

    #[test]
    fn test_shooting_star_detection() {
        // 몸통 2, 위꼬리 10, 아래꼬리 0.5
        let candles = with_flat_prefix(create_test_candle(dec!(102), dec!(112), dec!(99.5), dec!(100)));
        let labels = CandlestickPatternDetector::new().detect_candles(&candles);

        assert!(labels.contains(&PatternLabel::ShootingStar));
        assert!(labels.contains(&PatternLabel::BearishPinBar));
        assert!(!labels.contains(&PatternLabel::Hammer));
    }

    #[test]
    fn test_doji_detection() {
        let candles = with_flat_prefix(create_test_candle(dec!(100), dec!(105), dec!(95), dec!(100.5)));
        let labels = CandlestickPatternDetector::new().detect_candles(&candles);

        assert!(labels.contains(&PatternLabel::Doji));
    }

    #[test]
    fn test_doji_boundary_is_strict() {
        // 몸통 1 == 0.1 * 범위 10
        let candles = with_flat_prefix(create_test_candle(dec!(100), dec!(105), dec!(95), dec!(101)));
        let labels = CandlestickPatternDetector::new().detect_candles(&candles);

        assert!(!labels.contains(&PatternLabel::Doji));
    }

    #[test]
    fn test_flat_candle_is_not_doji() {
        // 몸통 0, 범위 0: 0 < 0 은 거짓
        let flat = create_test_candle(dec!(100), dec!(100), dec!(100), dec!(100));
        let labels = CandlestickPatternDetector::new().detect_candles(&[flat, flat, flat]);

        assert!(labels.is_empty());
    }

    #[test]
    fn test_engulfing_detection() {
        let flat = create_test_candle(dec!(100), dec!(100), dec!(100), dec!(100));
        let bearish = create_test_candle(dec!(102), dec!(103), dec!(99), dec!(100));
        let bullish = create_test_candle(dec!(99), dec!(104), dec!(98), dec!(103));

        let detector = CandlestickPatternDetector::new();

        let labels = detector.detect_candles(&[flat, bearish, bullish]);
        assert!(labels.contains(&PatternLabel::BullishEngulfing));
        assert!(!labels.contains(&PatternLabel::BearishEngulfing));

        // 대칭: 양봉 다음 감싸는 음봉
        let bullish_prev = create_test_candle(dec!(100), dec!(103), dec!(99), dec!(102));
        let bearish_last = create_test_candle(dec!(103), dec!(104), dec!(98), dec!(99));
        let labels = detector.detect_candles(&[flat, bullish_prev, bearish_last]);
        assert!(labels.contains(&PatternLabel::BearishEngulfing));
        assert!(!labels.contains(&PatternLabel::BullishEngulfing));
    }

    #[test]
    fn test_engulfing_requires_strict_overlap() {
        let flat = create_test_candle(dec!(100), dec!(100), dec!(100), dec!(100));
        let bearish = create_test_candle(dec!(102), dec!(103), dec!(99), dec!(100));
        // 시가가 이전 종가와 같음
        let bullish = create_test_candle(dec!(100), dec!(104), dec!(99), dec!(103));

        let labels = CandlestickPatternDetector::new().detect_candles(&[flat, bearish, bullish]);
        assert!(!labels.contains(&PatternLabel::BullishEngulfing));
    }

    #[test]
    fn test_morning_star_detection() {
        let first = create_test_candle(dec!(110), dec!(111), dec!(99), dec!(100));
        let star = create_test_candle(dec!(99), dec!(100), dec!(98), dec!(99.5));
        let third = create_test_candle(dec!(100), dec!(109), dec!(99.8), dec!(108));

        let labels = CandlestickPatternDetector::new().detect_candles(&[first, star, third]);
        assert!(labels.contains(&PatternLabel::MorningStar));
    }

    #[test]
    fn test_morning_star_needs_close_above_midpoint() {
        let first = create_test_candle(dec!(110), dec!(111), dec!(99), dec!(100));
        let star = create_test_candle(dec!(99), dec!(100), dec!(98), dec!(99.5));
        // 중간값 105에서 정확히 마감
        let third = create_test_candle(dec!(100), dec!(106), dec!(99.8), dec!(105));

        let labels = CandlestickPatternDetector::new().detect_candles(&[first, star, third]);
        assert!(!labels.contains(&PatternLabel::MorningStar));
    }

    #[test]
    fn test_pin_bars_are_exclusive() {
        // 아래꼬리 7 / 범위 10, 몸통 1
        let candles = with_flat_prefix(create_test_candle(dec!(100), dec!(102), dec!(92), dec!(99)));
        let labels = CandlestickPatternDetector::new().detect_candles(&candles);

        assert!(labels.contains(&PatternLabel::BullishPinBar));
        assert!(!labels.contains(&PatternLabel::BearishPinBar));
    }

    #[test]
    fn test_scenario_three_candles() {
        let candles = vec![
            create_test_candle(dec!(10), dec!(10), dec!(10), dec!(10)),
            create_test_candle(dec!(9), dec!(10), dec!(8), dec!(9.5)),
            create_test_candle(dec!(9), dec!(9.2), dec!(7), dec!(9.1)),
        ];

        let labels = CandlestickPatternDetector::new().detect_candles(&candles);

        // 위꼬리 0.1은 0.3 * 몸통 0.1 보다 크므로 망치형 아님
        assert_eq!(labels, vec![PatternLabel::Doji, PatternLabel::BullishPinBar]);
    }

    #[test]
    fn test_extreme_prices_do_not_panic() {
        // 2 * 몸통이 Decimal::MAX를 넘음
        let huge = Decimal::from_i128_with_scale(50_000_000_000_000_000_000_000_000_000, 0);
        let c = create_test_candle(Decimal::ZERO, huge, Decimal::ZERO, huge);

        let labels = CandlestickPatternDetector::new().detect_candles(&[c, c, c]);
        assert!(labels.is_empty());
    }

    #[test]
    fn test_morning_star_midpoint_overflow_does_not_match() {
        let near_max = Decimal::MAX - dec!(1);
        let first = create_test_candle(near_max, near_max, near_max - dec!(10), near_max - dec!(10));
        let star = create_test_candle(dec!(99), dec!(100), dec!(98), dec!(99.5));
        let third = create_test_candle(dec!(100), dec!(109), dec!(99.8), dec!(108));

        let labels = CandlestickPatternDetector::new().detect_candles(&[first, star, third]);
        assert!(!labels.contains(&PatternLabel::MorningStar));
    }

    #[test]
    fn test_rule_order_is_stable() {
        let candles = with_flat_prefix(create_test_candle(dec!(102), dec!(112), dec!(99.5), dec!(100)));
        let detector = CandlestickPatternDetector::new();

        let first = detector.detect_candles(&candles);
        let second = detector.detect_candles(&candles);
        assert_eq!(first, second);
        assert_eq!(first, vec![PatternLabel::ShootingStar, PatternLabel::BearishPinBar]);
    }
}
