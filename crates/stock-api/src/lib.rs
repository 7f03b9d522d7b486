//! 주식 대시보드 REST API 서버.
//!
//! 이 크레이트는 다음을 제공합니다:
//! - Axum 기반 REST API (기업 목록, 시세, 히스토리, 연간 통계)
//! - 헬스 체크 엔드포인트
//! - Prometheus 메트릭
//! - OpenAPI 문서 및 Swagger UI
//!
//! # 모듈 구성
//!
//! - [`state`]: 애플리케이션 공유 상태 (AppState)
//! - [`services`]: 히스토리/통계 집계 서비스
//! - [`routes`]: REST API 엔드포인트
//! - [`app`]: 미들웨어를 포함한 전체 라우터 조립
//! - [`metrics`]: Prometheus 메트릭 수집
//! - [`middleware`]: HTTP 미들웨어
//! - [`openapi`]: OpenAPI 문서 및 Swagger UI

pub mod app;
pub mod error;
pub mod metrics;
pub mod middleware;
pub mod openapi;
pub mod routes;
pub mod services;
pub mod state;

pub use app::{cors_layer, create_router};
pub use error::{ApiErrorResponse, ApiResult};
pub use metrics::setup_metrics_recorder;
pub use middleware::metrics_layer;
pub use routes::create_api_router;
pub use services::MarketDataService;
pub use state::AppState;
