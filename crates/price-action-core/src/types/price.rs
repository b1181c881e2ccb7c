//! 가격 계산을 위한 Decimal 타입 및 유틸리티.
//!
//! 캔들 가격과 패턴 임계값은 모두 `Decimal`로 표현하여
//! 비율 비교가 이진 부동소수점 오차 없이 이루어지도록 합니다.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

/// 가격 타입.
pub type Price = Decimal;

/// 비율 타입 (0.02 = 2%).
pub type Ratio = Decimal;

/// 가격 연산을 위한 확장 트레이트.
pub trait PriceExt {
    /// `f64`로 변환합니다. 표현 범위를 벗어나면 0.0을 반환합니다.
    fn to_f64_lossy(&self) -> f64;

    /// 두 가격의 차이가 `base * ratio` 미만인지 확인합니다 (엄격 비교).
    ///
    /// 차이나 허용 폭이 `Decimal` 범위를 넘으면 거짓입니다.
    fn is_within(&self, other: Price, base: Price, ratio: Ratio) -> bool;
}

impl PriceExt for Decimal {
    fn to_f64_lossy(&self) -> f64 {
        self.to_f64().unwrap_or(0.0)
    }

    fn is_within(&self, other: Price, base: Price, ratio: Ratio) -> bool {
        match (self.checked_sub(other), base.checked_mul(ratio)) {
            (Some(diff), Some(limit)) => diff.abs() < limit,
            _ => false,
        }
    }
}
