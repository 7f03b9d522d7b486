//! # Stock Core
//!
//! 주식 대시보드의 핵심 도메인 모델과 변환 로직을 제공합니다.
//!
//! 이 크레이트는 I/O 없이 순수하게 동작하는 부분을 담당합니다:
//! - 심볼 및 샘플링 간격 타입
//! - 주간/월간/연간 조회 윈도우 계산
//! - 원시 시세 포인트 정규화
//! - 연간 고가/저가 통계 추출
//! - 에러 분류, 설정 관리, 로깅 인프라

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
