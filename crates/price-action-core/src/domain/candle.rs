//! OHLC 캔들 및 캔들 시리즈.
//!
//! 이 모듈은 패턴 감지기의 입력이 되는 시장 데이터 타입을 정의합니다:
//! - `Candle` - 시간 단위로 묶인 시가/고가/저가/종가
//! - `CandleSeries` - 시간 순서(오래된 것 먼저)로 정렬된 불변 캔들 시퀀스
//!
//! 몸통, 그림자, 범위 같은 캔들 기하 값은 저장하지 않고 호출 시마다 계산합니다.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::Price;

/// OHLC 캔들.
///
/// `high >= max(open, close)`, `low <= min(open, close)`는 입력이 보장한다고 가정하며
/// 검증하지 않습니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candle {
    /// 캔들 시작 시간 (전송 형식은 epoch 밀리초)
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub time: DateTime<Utc>,
    /// 시가
    pub open: Price,
    /// 고가
    pub high: Price,
    /// 저가
    pub low: Price,
    /// 종가
    pub close: Price,
}

impl Candle {
    /// 새 캔들을 생성합니다.
    pub fn new(time: DateTime<Utc>, open: Price, high: Price, low: Price, close: Price) -> Self {
        Self {
            time,
            open,
            high,
            low,
            close,
        }
    }

    /// 캔들 몸통 크기(|종가 - 시가|)를 반환합니다.
    ///
    /// 기하 값은 `Decimal` 표현 범위에서 포화됩니다.
    pub fn body(&self) -> Decimal {
        self.close.saturating_sub(self.open).abs()
    }

    /// 상단 그림자 크기(고가 - max(시가, 종가))를 반환합니다.
    pub fn upper_shadow(&self) -> Decimal {
        self.high.saturating_sub(self.open.max(self.close))
    }

    /// 하단 그림자 크기(min(시가, 종가) - 저가)를 반환합니다.
    pub fn lower_shadow(&self) -> Decimal {
        self.open.min(self.close).saturating_sub(self.low)
    }

    /// 캔들 범위(고가 - 저가)를 반환합니다.
    pub fn range(&self) -> Decimal {
        self.high.saturating_sub(self.low)
    }

    /// 몸통의 중간 가격((시가 + 종가) / 2)을 반환합니다.
    ///
    /// 합이 `Decimal` 범위를 넘으면 `None`.
    pub fn body_midpoint(&self) -> Option<Decimal> {
        self.open
            .checked_add(self.close)
            .map(|sum| sum / Decimal::from(2))
    }

    /// 양봉(종가 > 시가)인지 확인합니다.
    pub fn is_bullish(&self) -> bool {
        self.close > self.open
    }

    /// 음봉(종가 < 시가)인지 확인합니다.
    pub fn is_bearish(&self) -> bool {
        self.close < self.open
    }
}

/// 시간 순서로 정렬된 캔들 시리즈.
///
/// 한 번 생성되면 변경되지 않으며, 요청 단위로 생성되고 폐기됩니다.
/// JSON에서는 캔들 배열로 직렬화됩니다.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CandleSeries {
    candles: Vec<Candle>,
}

impl CandleSeries {
    /// 캔들 벡터로부터 시리즈를 생성합니다.
    pub fn new(candles: Vec<Candle>) -> Self {
        Self { candles }
    }

    /// 캔들 개수.
    pub fn len(&self) -> usize {
        self.candles.len()
    }

    /// 비어있는지 확인합니다.
    pub fn is_empty(&self) -> bool {
        self.candles.is_empty()
    }

    /// 인덱스로 캔들을 조회합니다.
    pub fn get(&self, index: usize) -> Option<&Candle> {
        self.candles.get(index)
    }

    /// 가장 최근 캔들.
    pub fn last(&self) -> Option<&Candle> {
        self.candles.last()
    }

    /// 최근 `n`개 캔들 슬라이스 (캔들이 부족하면 전체).
    pub fn tail(&self, n: usize) -> &[Candle] {
        let start = self.candles.len().saturating_sub(n);
        &self.candles[start..]
    }

    /// 전체 캔들 슬라이스.
    pub fn as_slice(&self) -> &[Candle] {
        &self.candles
    }

    /// 캔들 반복자.
    pub fn iter(&self) -> std::slice::Iter<'_, Candle> {
        self.candles.iter()
    }
}

impl From<Vec<Candle>> for CandleSeries {
    fn from(candles: Vec<Candle>) -> Self {
        Self::new(candles)
    }
}

impl FromIterator<Candle> for CandleSeries {
    fn from_iter<I: IntoIterator<Item = Candle>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a CandleSeries {
    type Item = &'a Candle;
    type IntoIter = std::slice::Iter<'a, Candle>;

    fn into_iter(self) -> Self::IntoIter {
        self.candles.iter()
    }
}
