//! API 라우트.
//!
//! # 라우트 구조
//!
//! - `/health` - 헬스 체크 (liveness)
//! - `/health/ready` - 상세 헬스 체크 (readiness)
//! - `/api/companies` - 기업 목록
//! - `/api/stock` - 현재 시세
//! - `/api/stock/history` - 주간/월간/연간 히스토리
//! - `/api/stock/stats` - 연간 최고가/최저가

pub mod companies;
pub mod health;
pub mod stock;

pub use companies::companies_router;
pub use health::{health_router, ComponentHealth, ComponentStatus, HealthResponse};
pub use stock::{stock_router, StockQuery};

use axum::Router;
use std::sync::Arc;

use crate::state::AppState;

/// 전체 API 라우터 생성.
pub fn create_api_router() -> Router<Arc<AppState>> {
    Router::new()
        .nest("/health", health_router())
        .nest("/api/companies", companies_router())
        .nest("/api/stock", stock_router())
}
