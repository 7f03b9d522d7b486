//! 시장 데이터 집계 서비스.
//!
//! 게이트웨이에서 받은 원시 시계열을 윈도우별로 정규화하고
//! 히스토리/연간 통계 응답을 조립합니다. 모든 실패는 재시도 없이
//! 호출자에게 전달됩니다.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{debug, instrument, Instrument};

use stock_core::{
    extremes, normalize, MarketDataError, MarketDataResult, NormalizedPoint, PriceHistory,
    QuoteSnapshot, Symbol, Window, WindowSet, YearlyStats,
};
use stock_data::MarketDataGateway;

use crate::metrics::record_market_data_fetch;

/// 히스토리/통계/시세 조회를 담당하는 서비스.
#[derive(Clone)]
pub struct MarketDataService {
    gateway: Arc<dyn MarketDataGateway>,
}

impl MarketDataService {
    pub fn new(gateway: Arc<dyn MarketDataGateway>) -> Self {
        Self { gateway }
    }

    /// 현재 시세 조회.
    #[instrument(skip(self), fields(symbol = %symbol))]
    pub async fn quote(&self, symbol: &Symbol) -> MarketDataResult<QuoteSnapshot> {
        let result = self.gateway.fetch_quote(symbol).await;
        record_market_data_fetch("quote", outcome(&result));
        result
    }

    /// 주간/월간/연간 히스토리 조회.
    ///
    /// 세 윈도우를 동시에 요청하며, 하나라도 실패하면 그 에러로 전체가 실패합니다.
    /// 모든 요청이 성공했더라도 연간 시계열이 비어 있으면 `NoData`입니다.
    #[instrument(skip(self), fields(symbol = %symbol))]
    pub async fn history(
        &self,
        symbol: &Symbol,
        now: DateTime<Utc>,
    ) -> MarketDataResult<PriceHistory> {
        let windows = WindowSet::resolve(now);

        let (weekly, monthly, yearly) = tokio::try_join!(
            self.fetch_window(symbol, windows.weekly),
            self.fetch_window(symbol, windows.monthly),
            self.fetch_window(symbol, windows.yearly),
        )?;

        if yearly.is_empty() {
            return Err(MarketDataError::NoData);
        }

        Ok(PriceHistory {
            weekly,
            monthly,
            yearly,
        })
    }

    /// 최근 1년의 최고가/최저가 조회.
    #[instrument(skip(self), fields(symbol = %symbol))]
    pub async fn stats(&self, symbol: &Symbol, now: DateTime<Utc>) -> MarketDataResult<YearlyStats> {
        let yearly = self.fetch_window(symbol, Window::yearly(now)).await?;

        if yearly.is_empty() {
            return Err(MarketDataError::NoData);
        }

        extremes(&yearly)
    }

    async fn fetch_window(
        &self,
        symbol: &Symbol,
        window: Window,
    ) -> MarketDataResult<Vec<NormalizedPoint>> {
        let result = self
            .gateway
            .fetch_series(symbol, window.range, window.interval)
            .instrument(stock_core::market_span!("fetch_window", symbol, window.kind))
            .await
            .and_then(normalize);

        record_market_data_fetch(window.kind.as_str(), outcome(&result));

        if let Ok(points) = &result {
            debug!(
                window = %window.kind,
                range = %window.range,
                points = points.len(),
                "Fetched price window"
            );
        }

        result
    }
}

fn outcome<T>(result: &MarketDataResult<T>) -> &'static str {
    match result {
        Ok(_) => "success",
        Err(_) => "error",
    }
}
