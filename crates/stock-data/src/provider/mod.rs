//! 시세/히스토리 제공자 게이트웨이.
//!
//! 시장 데이터에 대한 유일한 외부 I/O 경계입니다. 재시도나 캐싱은 하지 않으며,
//! 실패는 제공자의 메시지를 담은 `MarketDataError::Upstream`으로 그대로 전달됩니다.

use async_trait::async_trait;

use stock_core::{DateRange, Interval, MarketDataResult, QuoteSnapshot, RawPoint, Symbol};

#[cfg(any(test, feature = "test-utils"))]
pub mod fixture;
mod yahoo;

pub use yahoo::YahooGateway;

/// 시장 데이터 제공자 trait.
#[async_trait]
pub trait MarketDataGateway: Send + Sync {
    /// 날짜 구간의 시계열을 조회합니다.
    ///
    /// 반환되는 포인트는 날짜 오름차순입니다.
    ///
    /// # 인자
    /// * `symbol` - 티커 심볼 (예: "AAPL", "005930.KS")
    /// * `range` - 조회 구간 (양 끝 포함)
    /// * `interval` - 샘플링 간격
    async fn fetch_series(
        &self,
        symbol: &Symbol,
        range: DateRange,
        interval: Interval,
    ) -> MarketDataResult<Vec<RawPoint>>;

    /// 현재 시세를 조회합니다.
    async fn fetch_quote(&self, symbol: &Symbol) -> MarketDataResult<QuoteSnapshot>;
}
