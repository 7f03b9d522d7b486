//! 연간 고가/저가 통계.
//!
//! 연간 시계열을 한 번 순회하면서 최고 고가와 최저 저가, 그리고 각각의 발생 시각을 찾습니다.
//! 비교는 엄격한 `>` / `<`를 사용하므로 같은 값이 여러 번 나오면 가장 먼저 나온 시점이 유지됩니다.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::series::NormalizedPoint;
use crate::error::MarketDataError;

/// 가격과 발생 시각의 쌍.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "utoipa-support", derive(utoipa::ToSchema))]
pub struct Extremum {
    pub price: f64,
    pub date: DateTime<Utc>,
}

/// 연간 최고/최저 통계.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "utoipa-support", derive(utoipa::ToSchema))]
pub struct YearlyStats {
    /// 최고 고가
    pub max: Extremum,
    /// 최저 저가
    pub min: Extremum,
}

/// 시계열에서 최고 고가와 최저 저가를 찾습니다.
///
/// 고가(저가)가 비어 있거나 NaN인 포인트는 해당 쪽 비교에서 제외됩니다.
///
/// # Errors
/// 시계열이 비어 있거나 비교 가능한 고가/저가가 하나도 없으면 `MarketDataError::NoData`.
pub fn extremes(points: &[NormalizedPoint]) -> Result<YearlyStats, MarketDataError> {
    let mut max: Option<Extremum> = None;
    let mut min: Option<Extremum> = None;

    for point in points {
        if let Some(high) = point.high.filter(|v| !v.is_nan()) {
            if max.map_or(true, |m| high > m.price) {
                max = Some(Extremum {
                    price: high,
                    date: point.date,
                });
            }
        }
        if let Some(low) = point.low.filter(|v| !v.is_nan()) {
            if min.map_or(true, |m| low < m.price) {
                min = Some(Extremum {
                    price: low,
                    date: point.date,
                });
            }
        }
    }

    match (max, min) {
        (Some(max), Some(min)) => Ok(YearlyStats { max, min }),
        _ => Err(MarketDataError::NoData),
    }
}
