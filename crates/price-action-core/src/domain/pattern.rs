//! 패턴 라벨 어휘 및 패턴 집합.
//!
//! 감지기가 출력하는 라벨은 닫힌 어휘이며, 표시 문자열의 철자는
//! 하위 의사결정 모듈이 그대로 비교하므로 변경하면 안 됩니다.
//!
//! ## 캔들스틱 패턴
//! - Hammer, Shooting Star, Doji
//! - Bullish Engulfing, Bearish Engulfing
//! - Morning Star
//! - Bullish Pin Bar, Bearish Pin Bar
//!
//! ## 차트 패턴
//! - Double Top, Double Bottom
//! - Ascending Triangle
//! - Head and Shoulders

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 패턴 라벨.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PatternLabel {
    // === 캔들스틱 패턴 ===
    /// 망치형 - 긴 아래꼬리의 양봉 (상승 반전)
    #[serde(rename = "Hammer")]
    Hammer,
    /// 유성형 - 긴 위꼬리의 음봉 (하락 반전)
    #[serde(rename = "Shooting Star")]
    ShootingStar,
    /// 도지 - 범위 대비 매우 작은 몸통 (우유부단)
    #[serde(rename = "Doji")]
    Doji,
    /// 강세 장악형 - 양봉 몸통이 이전 음봉 몸통을 감쌈
    #[serde(rename = "Bullish Engulfing")]
    BullishEngulfing,
    /// 약세 장악형 - 음봉 몸통이 이전 양봉 몸통을 감쌈
    #[serde(rename = "Bearish Engulfing")]
    BearishEngulfing,
    /// 샛별형 - 음봉 + 작은 캔들 + 반등 양봉
    #[serde(rename = "Morning Star")]
    MorningStar,
    /// 강세 핀바 - 범위의 대부분이 아래꼬리
    #[serde(rename = "Bullish Pin Bar")]
    BullishPinBar,
    /// 약세 핀바 - 범위의 대부분이 위꼬리
    #[serde(rename = "Bearish Pin Bar")]
    BearishPinBar,

    // === 차트 패턴 ===
    /// 이중 천장
    #[serde(rename = "Double Top")]
    DoubleTop,
    /// 이중 바닥
    #[serde(rename = "Double Bottom")]
    DoubleBottom,
    /// 상승 삼각형 - 상승 지지선 + 수평 저항선
    #[serde(rename = "Ascending Triangle")]
    AscendingTriangle,
    /// 머리어깨형
    #[serde(rename = "Head and Shoulders")]
    HeadAndShoulders,
}

/// 패턴 카테고리.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PatternCategory {
    /// 마지막 1~3개 캔들의 형태
    Candlestick,
    /// 스윙 포인트로 구성되는 기하 형태
    Chart,
}

/// 패턴이 시사하는 방향.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PatternBias {
    /// 상승
    Bullish,
    /// 하락
    Bearish,
    /// 중립
    Neutral,
}

impl PatternLabel {
    /// 전체 어휘 (감지 규칙 평가 순서).
    pub const ALL: [PatternLabel; 12] = [
        PatternLabel::Hammer,
        PatternLabel::ShootingStar,
        PatternLabel::Doji,
        PatternLabel::BullishEngulfing,
        PatternLabel::BearishEngulfing,
        PatternLabel::MorningStar,
        PatternLabel::BullishPinBar,
        PatternLabel::BearishPinBar,
        PatternLabel::DoubleTop,
        PatternLabel::DoubleBottom,
        PatternLabel::AscendingTriangle,
        PatternLabel::HeadAndShoulders,
    ];

    /// 하위 모듈이 사용하는 정확한 표시 문자열.
    pub fn as_str(&self) -> &'static str {
        match self {
            PatternLabel::Hammer => "Hammer",
            PatternLabel::ShootingStar => "Shooting Star",
            PatternLabel::Doji => "Doji",
            PatternLabel::BullishEngulfing => "Bullish Engulfing",
            PatternLabel::BearishEngulfing => "Bearish Engulfing",
            PatternLabel::MorningStar => "Morning Star",
            PatternLabel::BullishPinBar => "Bullish Pin Bar",
            PatternLabel::BearishPinBar => "Bearish Pin Bar",
            PatternLabel::DoubleTop => "Double Top",
            PatternLabel::DoubleBottom => "Double Bottom",
            PatternLabel::AscendingTriangle => "Ascending Triangle",
            PatternLabel::HeadAndShoulders => "Head and Shoulders",
        }
    }

    /// 패턴 카테고리.
    pub fn category(&self) -> PatternCategory {
        match self {
            PatternLabel::DoubleTop
            | PatternLabel::DoubleBottom
            | PatternLabel::AscendingTriangle
            | PatternLabel::HeadAndShoulders => PatternCategory::Chart,
            _ => PatternCategory::Candlestick,
        }
    }

    /// 패턴이 시사하는 방향.
    pub fn bias(&self) -> PatternBias {
        match self {
            PatternLabel::Hammer
            | PatternLabel::BullishEngulfing
            | PatternLabel::MorningStar
            | PatternLabel::BullishPinBar
            | PatternLabel::DoubleBottom
            | PatternLabel::AscendingTriangle => PatternBias::Bullish,
            PatternLabel::ShootingStar
            | PatternLabel::BearishEngulfing
            | PatternLabel::BearishPinBar
            | PatternLabel::DoubleTop
            | PatternLabel::HeadAndShoulders => PatternBias::Bearish,
            PatternLabel::Doji => PatternBias::Neutral,
        }
    }
}

impl fmt::Display for PatternLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PatternLabel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PatternLabel::ALL
            .iter()
            .copied()
            .find(|label| label.as_str() == s)
            .ok_or_else(|| format!("Unknown pattern label: {}", s))
    }
}

/// 패턴 집합.
///
/// 캔들스틱 라벨 뒤에 차트 라벨이 이어지는 순서 있는 시퀀스입니다.
/// 같은 입력에서 여러 라벨이 동시에 나올 수 있습니다.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PatternSet {
    labels: Vec<PatternLabel>,
}

impl PatternSet {
    /// 라벨 벡터로부터 집합을 생성합니다.
    pub fn new(labels: Vec<PatternLabel>) -> Self {
        Self { labels }
    }

    /// 캔들스틱 라벨과 차트 라벨을 순서대로 이어 붙입니다.
    pub fn concat(candlestick: Vec<PatternLabel>, chart: Vec<PatternLabel>) -> Self {
        let mut labels = candlestick;
        labels.extend(chart);
        Self { labels }
    }

    /// 라벨 포함 여부.
    pub fn contains(&self, label: PatternLabel) -> bool {
        self.labels.contains(&label)
    }

    /// 라벨 개수.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// 비어있는지 확인합니다.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// 라벨 슬라이스.
    pub fn as_slice(&self) -> &[PatternLabel] {
        &self.labels
    }

    /// 라벨 반복자.
    pub fn iter(&self) -> std::slice::Iter<'_, PatternLabel> {
        self.labels.iter()
    }

    /// 특정 카테고리의 라벨만 추립니다.
    pub fn of_category(&self, category: PatternCategory) -> Vec<PatternLabel> {
        self.labels
            .iter()
            .copied()
            .filter(|label| label.category() == category)
            .collect()
    }

    /// 표시 문자열 목록.
    pub fn names(&self) -> Vec<&'static str> {
        self.labels.iter().map(PatternLabel::as_str).collect()
    }
}

impl From<Vec<PatternLabel>> for PatternSet {
    fn from(labels: Vec<PatternLabel>) -> Self {
        Self::new(labels)
    }
}

impl<'a> IntoIterator for &'a PatternSet {
    type Item = &'a PatternLabel;
    type IntoIter = std::slice::Iter<'a, PatternLabel>;

    fn into_iter(self) -> Self::IntoIter {
        self.labels.iter()
    }
}
