//! 회사 목록 저장소.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::error::Result;
use stock_core::Company;

mod companies;
#[cfg(any(test, feature = "test-utils"))]
pub mod memory;

pub use companies::PgCompanyStore;

/// 회사 목록 저장소 trait.
#[async_trait]
pub trait CompanyStore: Send + Sync {
    /// 모든 회사를 이름순으로 조회합니다.
    async fn list_companies(&self) -> Result<Vec<Company>>;

    /// 연결 상태를 확인하고 저장소의 현재 시각을 반환합니다.
    async fn ping(&self) -> Result<DateTime<Utc>>;
}
