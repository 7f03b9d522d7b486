//! Yahoo Finance 게이트웨이.
//!
//! `yahoo_finance_api` 크레이트로 차트 데이터를 조회합니다.
//!
//! 날짜 구간 `[start, end]`는 제공자의 반열린 시각 구간
//! `[start 00:00 UTC, (end + 1일) 00:00 UTC)`로 변환됩니다. 주간/월간/연간 요청이 모두
//! 같은 방식으로 표현되므로 윈도우 간 경계가 일관됩니다.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone, Utc};
use serde::Deserialize;
use time::OffsetDateTime;
use tracing::{debug, warn};
use yahoo_finance_api as yahoo;

use super::MarketDataGateway;
use stock_core::{
    DateRange, Interval, MarketDataError, MarketDataResult, QuoteSnapshot, RawPoint, Symbol,
};

/// 현재 시세 계산에 사용하는 최근 조회 기간.
const QUOTE_LOOKBACK_RANGE: &str = "5d";

/// Yahoo Finance 기반 `MarketDataGateway`.
pub struct YahooGateway {
    connector: yahoo::YahooConnector,
}

impl YahooGateway {
    /// 새 게이트웨이를 생성합니다.
    pub fn new() -> MarketDataResult<Self> {
        let connector = yahoo::YahooConnector::new()
            .map_err(|e| MarketDataError::upstream(e.to_string()))?;

        Ok(Self { connector })
    }

    /// 날짜 구간을 제공자 요청 시각으로 변환합니다.
    pub fn request_bounds(range: DateRange) -> MarketDataResult<(OffsetDateTime, OffsetDateTime)> {
        let exclusive_end = range.end().succ_opt().unwrap_or(range.end());
        Ok((
            date_to_offset_datetime(range.start())?,
            date_to_offset_datetime(exclusive_end)?,
        ))
    }
}

/// 날짜의 UTC 자정을 `time::OffsetDateTime`으로 변환합니다.
fn date_to_offset_datetime(date: NaiveDate) -> MarketDataResult<OffsetDateTime> {
    let midnight = Utc.from_utc_datetime(&date.and_time(NaiveTime::MIN));
    OffsetDateTime::from_unix_timestamp(midnight.timestamp())
        .map_err(|e| MarketDataError::InvalidRequest(format!("Date out of range: {}", e)))
}

/// 차트 지표의 가격/거래량 열.
#[derive(Debug, Default, Deserialize)]
struct QuoteColumns {
    #[serde(default)]
    open: Option<Vec<Option<f64>>>,
    #[serde(default)]
    high: Option<Vec<Option<f64>>>,
    #[serde(default)]
    low: Option<Vec<Option<f64>>>,
    #[serde(default)]
    close: Option<Vec<Option<f64>>>,
    #[serde(default)]
    volume: Option<Vec<Option<u64>>>,
}

#[derive(Debug, Default, Deserialize)]
struct Indicators {
    #[serde(default)]
    quote: Vec<QuoteColumns>,
}

fn column<T: Copy>(values: &Option<Vec<Option<T>>>, i: usize) -> Option<T> {
    values.as_ref()?.get(i).copied().flatten()
}

/// 차트 응답의 첫 결과를 원시 포인트로 변환합니다.
///
/// 결과나 타임스탬프가 없으면 빈 목록입니다. 종가가 없는 행은 건너뛰고
/// 나머지 누락 필드는 `None`으로 유지합니다.
pub(crate) fn chart_points(response: &yahoo::YResponse) -> MarketDataResult<Vec<RawPoint>> {
    let Some(block) = response.chart.result.as_ref().and_then(|r| r.first()) else {
        return Ok(Vec::new());
    };
    let timestamps = match &block.timestamp {
        Some(ts) if !ts.is_empty() => ts,
        _ => return Ok(Vec::new()),
    };

    let indicators: Indicators = serde_json::to_value(&block.indicators)
        .and_then(serde_json::from_value)
        .map_err(|e| MarketDataError::upstream(format!("Malformed chart indicators: {}", e)))?;
    let Some(columns) = indicators.quote.into_iter().next() else {
        return Ok(Vec::new());
    };

    let points = timestamps
        .iter()
        .enumerate()
        .filter_map(|(i, &timestamp)| {
            Some(RawPoint {
                timestamp,
                close: Some(column(&columns.close, i)?),
                open: column(&columns.open, i),
                high: column(&columns.high, i),
                low: column(&columns.low, i),
                volume: column(&columns.volume, i),
            })
        })
        .collect();

    Ok(points)
}

/// 제공자가 빈 결과를 에러로 보고한 경우인지 확인합니다.
fn is_empty_data_set(err: &yahoo::YahooError) -> bool {
    matches!(
        err,
        yahoo::YahooError::NoResult | yahoo::YahooError::NoQuotes
    )
}

/// 현재 시세 스냅샷을 만듭니다.
///
/// 메타데이터의 정규장 값(가격, 고가, 저가, 거래량, 전일 종가, 시각)을 우선하고
/// 없는 값은 최근 일봉으로 채웁니다. 일봉 기준 전일 종가는 직전 포인트의 종가입니다.
pub(crate) fn build_snapshot(
    symbol: &Symbol,
    meta: Option<&yahoo::YMetaData>,
    points: &[RawPoint],
) -> MarketDataResult<QuoteSnapshot> {
    let latest = points.last();
    let meta_price = meta.and_then(|m| m.regular_market_price);

    if latest.is_none() && meta_price.is_none() {
        return Err(MarketDataError::upstream(format!(
            "No quote data found for {}",
            symbol
        )));
    }

    let bar_previous_close = points
        .len()
        .checked_sub(2)
        .and_then(|i| points.get(i))
        .and_then(|p| p.close);

    Ok(QuoteSnapshot {
        symbol: symbol.to_string(),
        currency: meta.and_then(|m| m.currency.clone()),
        regular_market_price: meta_price.or_else(|| latest.and_then(|p| p.close)),
        regular_market_open: latest.and_then(|p| p.open),
        regular_market_day_high: meta
            .and_then(|m| m.regular_market_day_high)
            .or_else(|| latest.and_then(|p| p.high)),
        regular_market_day_low: meta
            .and_then(|m| m.regular_market_day_low)
            .or_else(|| latest.and_then(|p| p.low)),
        regular_market_previous_close: meta
            .and_then(|m| m.previous_close)
            .or(bar_previous_close),
        regular_market_volume: meta
            .and_then(|m| m.regular_market_volume)
            .filter(|v| v.is_finite() && *v >= 0.0)
            .map(|v| v as u64)
            .or_else(|| latest.and_then(|p| p.volume)),
        regular_market_time: meta
            .and_then(|m| m.regular_market_time)
            .and_then(|t| DateTime::<Utc>::from_timestamp(i64::from(t), 0))
            .or_else(|| latest.and_then(|p| DateTime::<Utc>::from_timestamp(p.timestamp, 0))),
    })
}

#[async_trait]
impl MarketDataGateway for YahooGateway {
    async fn fetch_series(
        &self,
        symbol: &Symbol,
        range: DateRange,
        interval: Interval,
    ) -> MarketDataResult<Vec<RawPoint>> {
        let (start, end) = Self::request_bounds(range)?;

        debug!(
            symbol = %symbol,
            interval = %interval,
            range = %range,
            "Yahoo Finance chart request"
        );

        let response = match self
            .connector
            .get_quote_history_interval(symbol.as_str(), start, end, interval.as_str())
            .await
        {
            Ok(response) => response,
            Err(e) if is_empty_data_set(&e) => {
                warn!(symbol = %symbol, range = %range, "Yahoo Finance returned no data");
                return Ok(Vec::new());
            }
            Err(e) => return Err(MarketDataError::upstream(e.to_string())),
        };

        let points = chart_points(&response)?;

        debug!(symbol = %symbol, count = points.len(), "Yahoo Finance points received");

        Ok(points)
    }

    async fn fetch_quote(&self, symbol: &Symbol) -> MarketDataResult<QuoteSnapshot> {
        let response = self
            .connector
            .get_quote_range(symbol.as_str(), Interval::D1.as_str(), QUOTE_LOOKBACK_RANGE)
            .await
            .map_err(|e| MarketDataError::upstream(e.to_string()))?;

        let points = chart_points(&response)?;

        let meta = match response.metadata() {
            Ok(meta) => Some(meta),
            Err(e) => {
                warn!(symbol = %symbol, error = %e, "Quote metadata unavailable");
                None
            }
        };

        build_snapshot(symbol, meta.as_ref(), &points)
    }
}
