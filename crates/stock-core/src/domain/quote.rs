//! 현재 시세 스냅샷.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 종목의 현재 시세.
///
/// 제공자의 quote 응답 필드명을 그대로 따르도록 camelCase로 직렬화됩니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "utoipa-support", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct QuoteSnapshot {
    /// 심볼
    pub symbol: String,
    /// 통화 코드 (예: USD, KRW)
    pub currency: Option<String>,
    /// 현재가
    pub regular_market_price: Option<f64>,
    /// 당일 시가
    pub regular_market_open: Option<f64>,
    /// 당일 고가
    pub regular_market_day_high: Option<f64>,
    /// 당일 저가
    pub regular_market_day_low: Option<f64>,
    /// 전일 종가
    pub regular_market_previous_close: Option<f64>,
    /// 당일 거래량
    pub regular_market_volume: Option<u64>,
    /// 시세 시각
    pub regular_market_time: Option<DateTime<Utc>>,
}

impl QuoteSnapshot {
    /// 심볼만 채운 빈 스냅샷을 생성합니다.
    pub fn empty(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            currency: None,
            regular_market_price: None,
            regular_market_open: None,
            regular_market_day_high: None,
            regular_market_day_low: None,
            regular_market_previous_close: None,
            regular_market_volume: None,
            regular_market_time: None,
        }
    }

    /// 전일 대비 변동률(%)을 계산합니다.
    pub fn change_percent(&self) -> Option<f64> {
        let price = self.regular_market_price?;
        let prev = self.regular_market_previous_close?;
        if prev == 0.0 {
            return None;
        }
        Some((price - prev) / prev * 100.0)
    }
}
