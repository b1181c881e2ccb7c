//! 스윙 포인트(국소 고점/저점) 추출.
//!
//! 최근 [`SWING_WINDOW`]개 캔들만 검사합니다. 윈도우 안의 각 내부 캔들에 대해
//! 양쪽 이웃보다 고가가 엄격히 높으면 고점, 저가가 엄격히 낮으면 저점입니다.
//! 평탄 구간과 윈도우 양 끝 캔들은 극값이 될 수 없습니다.

use price_action_core::{Candle, CandleSeries, Price};
use serde::{Deserialize, Serialize};

/// 스윙 포인트 추출 윈도우 크기.
pub const SWING_WINDOW: usize = 20;

/// 스윙 포인트 종류.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SwingKind {
    /// 국소 고점 (고가 기준)
    Peak,
    /// 국소 저점 (저가 기준)
    Trough,
}

/// 스윙 포인트.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwingPoint {
    /// 윈도우 내 인덱스 (시리즈 인덱스가 아님)
    pub index: usize,
    /// 고점이면 고가, 저점이면 저가
    pub price: Price,
    /// 종류
    pub kind: SwingKind,
}

/// 추출된 고점/저점 목록 (각각 인덱스 오름차순).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwingPoints {
    /// 고점 목록
    pub peaks: Vec<SwingPoint>,
    /// 저점 목록
    pub troughs: Vec<SwingPoint>,
}

impl SwingPoints {
    /// 고점 가격 목록.
    pub fn peak_prices(&self) -> Vec<Price> {
        self.peaks.iter().map(|p| p.price).collect()
    }

    /// 저점 가격 목록.
    pub fn trough_prices(&self) -> Vec<Price> {
        self.troughs.iter().map(|p| p.price).collect()
    }
}

/// 스윙 포인트 추출기.
#[derive(Debug, Clone, Copy, Default)]
pub struct SwingPointExtractor;

impl SwingPointExtractor {
    /// 새 추출기를 생성합니다.
    pub fn new() -> Self {
        Self
    }

    /// 시리즈의 최근 윈도우에서 고점과 저점을 추출합니다.
    ///
    /// 캔들이 [`SWING_WINDOW`]개보다 적으면 있는 캔들 전체를 검사합니다.
    pub fn extract(&self, series: &CandleSeries) -> SwingPoints {
        self.extract_window(series.tail(SWING_WINDOW))
    }

    fn extract_window(&self, window: &[Candle]) -> SwingPoints {
        let mut points = SwingPoints::default();

        for (offset, triple) in window.windows(3).enumerate() {
            let [left, mid, right] = triple else {
                continue;
            };
            let index = offset + 1;

            if mid.high > left.high && mid.high > right.high {
                points.peaks.push(SwingPoint {
                    index,
                    price: mid.high,
                    kind: SwingKind::Peak,
                });
            }

            if mid.low < left.low && mid.low < right.low {
                points.troughs.push(SwingPoint {
                    index,
                    price: mid.low,
                    kind: SwingKind::Trough,
                });
            }
        }

        points
    }
}
