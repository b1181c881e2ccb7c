//! # Price Action Core
//!
//! 가격 행동(price action) 패턴 분석의 핵심 도메인 모델 및 타입을 제공합니다.
//!
//! 이 크레이트는 패턴 감지 시스템 전반에서 사용되는 기본 타입을 제공합니다:
//! - OHLC 캔들 및 캔들 시리즈
//! - 패턴 라벨 어휘 및 패턴 집합
//! - 외부 협력자(지표, 의사결정, 리스크) 인터페이스
//! - 설정 관리
//! - 로깅 인프라

pub mod config;
pub mod domain;
pub mod error;
pub mod logging;
pub mod types;

pub use config::*;
pub use domain::*;
pub use error::*;
pub use logging::*;
pub use types::*;
