//! 가격 행동 패턴 분석 HTTP 서버.
//!
//! 이 크레이트는 다음을 제공합니다:
//! - Axum 기반 REST API
//! - 헬스 체크 엔드포인트
//! - 패턴 감지 및 분석 엔드포인트
//!
//! # 모듈 구성
//!
//! - [`state`]: 애플리케이션 공유 상태 (AppState)
//! - [`routes`]: REST API 엔드포인트
//! - [`collaborators`]: 미설정 상태의 기본 협력자 구현
//! - [`server`]: 미들웨어가 적용된 전체 라우터
//! - [`error`]: API 에러 응답

pub mod collaborators;
pub mod error;
pub mod routes;
pub mod server;
pub mod state;

pub use error::{ApiErrorResponse, ApiResult};
pub use routes::create_api_router;
pub use server::create_router;
pub use state::AppState;
