//! 모든 핸들러에서 공유되는 애플리케이션 상태.
//!
//! 외부 의존성(시세 게이트웨이, 기업 저장소, 시계)은 모두 생성 시점에 주입됩니다.
//! Arc로 래핑되어 여러 요청 간에 공유됩니다.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use stock_data::{CompanyStore, MarketDataGateway};

use crate::services::MarketDataService;

/// 현재 시각 공급자.
pub type Clock = Arc<dyn Fn() -> DateTime<Utc> + Send + Sync>;

/// 애플리케이션 공유 상태.
#[derive(Clone)]
pub struct AppState {
    /// 히스토리/통계/시세 서비스
    pub market_data: MarketDataService,

    /// 기업 목록 저장소
    pub companies: Arc<dyn CompanyStore>,

    /// 조회 윈도우 계산에 쓰이는 시계
    clock: Clock,

    /// 서버 시작 시간
    pub started_at: DateTime<Utc>,

    /// API 버전
    pub version: String,
}

impl AppState {
    /// 새로운 AppState 생성. 시계는 시스템 UTC 시각을 사용합니다.
    pub fn new(gateway: Arc<dyn MarketDataGateway>, companies: Arc<dyn CompanyStore>) -> Self {
        Self {
            market_data: MarketDataService::new(gateway),
            companies,
            clock: Arc::new(Utc::now),
            started_at: Utc::now(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }

    /// 시계 교체.
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    /// 고정 시각 시계로 교체.
    pub fn with_fixed_now(self, now: DateTime<Utc>) -> Self {
        self.with_clock(Arc::new(move || now))
    }

    /// 현재 시각.
    pub fn now(&self) -> DateTime<Utc> {
        (self.clock)()
    }

    /// 서버 업타임(초).
    pub fn uptime_secs(&self) -> i64 {
        Utc::now().signed_duration_since(self.started_at).num_seconds()
    }

    /// 데이터베이스 연결 상태 확인.
    pub async fn is_db_healthy(&self) -> bool {
        self.companies.ping().await.is_ok()
    }
}

/// 테스트용 AppState 생성 헬퍼.
///
/// 외부 네트워크나 DB 없이 동작하는 인메모리 구현을 사용합니다.
#[cfg(any(test, feature = "test-utils"))]
pub fn create_test_state() -> AppState {
    use stock_data::{InMemoryCompanyStore, StaticMarketData};

    AppState::new(
        Arc::new(StaticMarketData::empty()),
        Arc::new(InMemoryCompanyStore::new(Vec::new())),
    )
}
