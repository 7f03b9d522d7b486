//! PostgreSQL 기반 회사 목록 저장소.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::postgres::{PgConnectOptions, PgPool, PgPoolOptions};
use tracing::debug;

use super::CompanyStore;
use crate::error::{DataError, Result};
use stock_core::{Company, DatabaseConfig};

/// `companies` 테이블을 읽는 저장소.
#[derive(Clone)]
pub struct PgCompanyStore {
    pool: PgPool,
}

impl PgCompanyStore {
    /// 기존 연결 풀로 생성합니다.
    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    /// 지연 연결 풀을 생성합니다.
    ///
    /// 실제 연결은 첫 쿼리 시점에 맺어지므로 DB가 내려가 있어도 서버는 시작됩니다.
    pub fn connect_lazy(config: &DatabaseConfig) -> Result<Self> {
        let options = connect_options(config)?;
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(config.connect_timeout())
            .connect_lazy_with(options);

        Ok(Self { pool })
    }

    /// 내부 연결 풀.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

/// 설정에서 접속 옵션을 만듭니다. `url`이 있으면 개별 필드보다 우선합니다.
fn connect_options(config: &DatabaseConfig) -> Result<PgConnectOptions> {
    if let Some(url) = &config.url {
        return url
            .parse::<PgConnectOptions>()
            .map_err(|e| DataError::ConnectionError(e.to_string()));
    }

    let options = PgConnectOptions::new()
        .host(&config.host)
        .port(config.port)
        .username(&config.user)
        .database(&config.name);

    Ok(match &config.password {
        Some(password) => options.password(password),
        None => options,
    })
}

#[async_trait]
impl CompanyStore for PgCompanyStore {
    async fn list_companies(&self) -> Result<Vec<Company>> {
        let rows: Vec<serde_json::Value> = sqlx::query_scalar(
            r#"
            SELECT row_to_json(c)
            FROM companies c
            ORDER BY c.name
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        debug!(count = rows.len(), "Loaded companies");

        rows.into_iter()
            .map(|row| serde_json::from_value(row).map_err(DataError::from))
            .collect()
    }

    async fn ping(&self) -> Result<DateTime<Utc>> {
        let now: DateTime<Utc> = sqlx::query_scalar("SELECT NOW()")
            .fetch_one(&self.pool)
            .await?;
        Ok(now)
    }
}
