//! 메모리 기반 테스트용 저장소.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use super::CompanyStore;
use crate::error::{DataError, Result};
use stock_core::Company;

/// 고정된 회사 목록을 반환하는 `CompanyStore`.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCompanyStore {
    companies: Vec<Company>,
    unavailable: bool,
}

impl InMemoryCompanyStore {
    /// 주어진 회사 목록으로 생성합니다.
    pub fn new(companies: Vec<Company>) -> Self {
        Self {
            companies,
            unavailable: false,
        }
    }

    /// 모든 호출이 실패하는 저장소.
    pub fn unavailable() -> Self {
        Self {
            companies: Vec::new(),
            unavailable: true,
        }
    }

    fn check(&self) -> Result<()> {
        if self.unavailable {
            return Err(DataError::ConnectionError("connection refused".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl CompanyStore for InMemoryCompanyStore {
    async fn list_companies(&self) -> Result<Vec<Company>> {
        self.check()?;
        let mut companies = self.companies.clone();
        companies.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(companies)
    }

    async fn ping(&self) -> Result<DateTime<Utc>> {
        self.check()?;
        Ok(Utc::now())
    }
}
