//! 시계열 정규화.
//!
//! 제공자 고유 형식의 포인트(`RawPoint`)를 응답용 표준 형식(`NormalizedPoint`)으로
//! 1:1 변환합니다. 입력 순서(오래된 날짜부터)를 그대로 유지하며 단위 변환은 하지 않습니다.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::MarketDataError;

/// 제공자가 반환한 한 샘플링 시점의 원시 데이터.
///
/// 해당 날짜에 값이 없으면 개별 필드가 비어 있을 수 있습니다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RawPoint {
    /// Unix timestamp (초)
    pub timestamp: i64,
    pub open: Option<f64>,
    pub high: Option<f64>,
    pub low: Option<f64>,
    pub close: Option<f64>,
    pub volume: Option<u64>,
}

/// 정규화된 OHLCV 포인트.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "utoipa-support", derive(utoipa::ToSchema))]
pub struct NormalizedPoint {
    /// 샘플링 시각 (UTC)
    pub date: DateTime<Utc>,
    /// 시가
    pub open: Option<f64>,
    /// 고가
    pub high: Option<f64>,
    /// 저가
    pub low: Option<f64>,
    /// 종가
    pub close: Option<f64>,
    /// 거래량
    pub volume: Option<u64>,
}

impl TryFrom<RawPoint> for NormalizedPoint {
    type Error = MarketDataError;

    fn try_from(raw: RawPoint) -> Result<Self, Self::Error> {
        let date = DateTime::<Utc>::from_timestamp(raw.timestamp, 0).ok_or_else(|| {
            MarketDataError::upstream(format!(
                "Malformed response: invalid timestamp {}",
                raw.timestamp
            ))
        })?;

        Ok(Self {
            date,
            open: raw.open,
            high: raw.high,
            low: raw.low,
            close: raw.close,
            volume: raw.volume,
        })
    }
}

/// 원시 포인트 목록을 정규화합니다.
///
/// # Errors
/// 타임스탬프를 날짜로 해석할 수 없으면 `MarketDataError::Upstream`을 반환합니다.
pub fn normalize(raw: Vec<RawPoint>) -> Result<Vec<NormalizedPoint>, MarketDataError> {
    raw.into_iter().map(NormalizedPoint::try_from).collect()
}

/// 세 윈도우의 정규화된 시계열.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "utoipa-support", derive(utoipa::ToSchema))]
pub struct PriceHistory {
    /// 최근 7일
    pub weekly: Vec<NormalizedPoint>,
    /// 최근 30일
    pub monthly: Vec<NormalizedPoint>,
    /// 최근 1년
    pub yearly: Vec<NormalizedPoint>,
}
