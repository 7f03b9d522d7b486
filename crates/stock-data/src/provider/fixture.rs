//! 결정적 테스트용 게이트웨이.
//!
//! 고정된 시계열을 보관하고, 요청 구간에 속하는 포인트만 돌려줍니다.
//! 호출 내역을 기록하므로 "게이트웨이가 호출되지 않았음"도 검증할 수 있습니다.

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use super::MarketDataGateway;
use stock_core::{
    DateRange, Interval, MarketDataError, MarketDataResult, QuoteSnapshot, RawPoint, Symbol,
};

/// 기록된 시계열 요청.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesRequest {
    pub symbol: Symbol,
    pub range: DateRange,
    pub interval: Interval,
}

/// 고정 데이터를 반환하는 `MarketDataGateway`.
#[derive(Debug, Default)]
pub struct StaticMarketData {
    series: Vec<RawPoint>,
    quote: Option<QuoteSnapshot>,
    failure: Option<String>,
    series_calls: Mutex<Vec<SeriesRequest>>,
    quote_calls: Mutex<Vec<Symbol>>,
}

impl StaticMarketData {
    /// 주어진 시계열을 보관하는 게이트웨이를 생성합니다.
    pub fn with_series(series: Vec<RawPoint>) -> Self {
        Self {
            series,
            ..Default::default()
        }
    }

    /// 데이터가 하나도 없는 게이트웨이.
    pub fn empty() -> Self {
        Self::default()
    }

    /// 모든 호출이 주어진 메시지로 실패하는 게이트웨이.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            failure: Some(message.into()),
            ..Default::default()
        }
    }

    /// 현재 시세를 설정합니다.
    pub fn with_quote(mut self, quote: QuoteSnapshot) -> Self {
        self.quote = Some(quote);
        self
    }

    /// 지금까지 기록된 시계열 요청.
    pub fn series_requests(&self) -> Vec<SeriesRequest> {
        self.series_calls
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    /// 시계열 + 시세 호출 총 횟수.
    pub fn call_count(&self) -> usize {
        let series = self.series_calls.lock().unwrap_or_else(|e| e.into_inner()).len();
        let quotes = self.quote_calls.lock().unwrap_or_else(|e| e.into_inner()).len();
        series + quotes
    }

    fn in_range(point: &RawPoint, range: &DateRange) -> bool {
        DateTime::<Utc>::from_timestamp(point.timestamp, 0)
            .map(|t| range.contains(t.date_naive()))
            .unwrap_or(true)
    }
}

#[async_trait]
impl MarketDataGateway for StaticMarketData {
    async fn fetch_series(
        &self,
        symbol: &Symbol,
        range: DateRange,
        interval: Interval,
    ) -> MarketDataResult<Vec<RawPoint>> {
        self.series_calls
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(SeriesRequest {
                symbol: symbol.clone(),
                range,
                interval,
            });

        if let Some(message) = &self.failure {
            return Err(MarketDataError::upstream(message.clone()));
        }

        Ok(self
            .series
            .iter()
            .filter(|p| Self::in_range(p, &range))
            .copied()
            .collect())
    }

    async fn fetch_quote(&self, symbol: &Symbol) -> MarketDataResult<QuoteSnapshot> {
        self.quote_calls
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(symbol.clone());

        if let Some(message) = &self.failure {
            return Err(MarketDataError::upstream(message.clone()));
        }

        self.quote
            .clone()
            .ok_or_else(|| MarketDataError::upstream(format!("No quote data found for {}", symbol)))
    }
}
