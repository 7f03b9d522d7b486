//! 외부 세계와의 I/O 경계.
//!
//! - [`provider`]: 시세/히스토리 제공자 게이트웨이 (Yahoo Finance)
//! - [`storage`]: 회사 목록 데이터 저장소 (PostgreSQL)
//!
//! 두 경계 모두 trait으로 정의되어 테스트에서 결정적인 더블로 교체할 수 있습니다.

pub mod error;
pub mod provider;
pub mod storage;

pub use error::{DataError, Result};
pub use provider::{MarketDataGateway, YahooGateway};
pub use storage::{CompanyStore, PgCompanyStore};

#[cfg(any(test, feature = "test-utils"))]
pub use provider::fixture::StaticMarketData;
#[cfg(any(test, feature = "test-utils"))]
pub use storage::memory::InMemoryCompanyStore;
