//! 가격 행동 분석을 위한 도메인 모델.

mod analysis;
mod candle;
mod pattern;

pub use analysis::*;
pub use candle::*;
pub use pattern::*;
