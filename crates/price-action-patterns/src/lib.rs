//! # Price Action Patterns
//!
//! OHLC 캔들 시리즈에서 가격 행동 패턴을 감지합니다.
//!
//! ## 구성
//! - [`candlestick`] - 마지막 1~3개 캔들의 반전 형태 감지
//! - [`swing`] - 최근 20개 캔들 윈도우의 스윙 고점/저점 추출
//! - [`chart`] - 스윙 포인트 기반 차트 패턴 매칭
//! - [`engine`] - 두 감지기를 결합한 패턴 엔진
//!
//! 모든 감지기는 상태가 없는 순수 함수이며, 이력이 부족하면 빈 결과를 반환합니다.
//!
//! # 예제
//!
//! ```
//! use price_action_core::CandleSeries;
//! use price_action_patterns::PatternEngine;
//!
//! let engine = PatternEngine::new();
//! let patterns = engine.analyze(&CandleSeries::default());
//! assert!(patterns.is_empty());
//! ```

pub mod candlestick;
pub mod chart;
pub mod engine;
pub mod swing;

pub use candlestick::CandlestickPatternDetector;
pub use chart::ChartPatternMatcher;
pub use engine::PatternEngine;
pub use swing::{SwingKind, SwingPoint, SwingPointExtractor, SwingPoints};
