//! 조회 윈도우 계산.
//!
//! 기준 시각 "now"로부터 세 개의 히스토리 조회 구간을 만듭니다:
//! - 주간: 최근 7일
//! - 월간: 최근 30일
//! - 연간: 최근 1년 (달력 기준)
//!
//! 모든 구간은 UTC 달력 날짜의 닫힌 구간 `[start, end]`이며 `end`는 항상 오늘입니다.
//! 연간 구간은 365일 고정 길이가 아니라 달력상 연도를 빼서 계산합니다.

use chrono::{DateTime, Days, Months, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::MarketDataError;
use crate::types::Interval;

/// 달력 날짜 구간. 항상 `start <= end`를 만족합니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    /// 새 날짜 구간을 생성합니다.
    ///
    /// # Errors
    /// `start > end`이면 `MarketDataError::InvalidRequest`를 반환합니다.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, MarketDataError> {
        if start > end {
            return Err(MarketDataError::InvalidRequest(format!(
                "Invalid date range: {} is after {}",
                start, end
            )));
        }
        Ok(Self { start, end })
    }

    /// 구간 시작일.
    pub fn start(&self) -> NaiveDate {
        self.start
    }

    /// 구간 종료일 (포함).
    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// 구간에 포함된 날짜 수.
    pub fn num_days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }

    /// 날짜가 구간에 포함되는지 확인합니다.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.start, self.end)
    }
}

/// 조회 윈도우 종류.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WindowKind {
    /// 최근 7일
    Weekly,
    /// 최근 30일
    Monthly,
    /// 최근 1년
    Yearly,
}

impl WindowKind {
    /// 메트릭 라벨 및 로그용 이름.
    pub fn as_str(&self) -> &'static str {
        match self {
            WindowKind::Weekly => "weekly",
            WindowKind::Monthly => "monthly",
            WindowKind::Yearly => "yearly",
        }
    }

    /// 종료일로부터 시작일을 계산합니다.
    fn start_from(&self, end: NaiveDate) -> NaiveDate {
        let start = match self {
            WindowKind::Weekly => end.checked_sub_days(Days::new(7)),
            WindowKind::Monthly => end.checked_sub_days(Days::new(30)),
            // 2월 29일은 전년도 2월 28일로 맞춰짐
            WindowKind::Yearly => end.checked_sub_months(Months::new(12)),
        };
        start.unwrap_or(NaiveDate::MIN)
    }
}

impl fmt::Display for WindowKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 날짜 구간과 샘플링 간격의 쌍.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Window {
    pub kind: WindowKind,
    pub range: DateRange,
    pub interval: Interval,
}

impl Window {
    /// 기준 시각에 대한 윈도우를 계산합니다.
    pub fn resolve(kind: WindowKind, now: DateTime<Utc>) -> Self {
        let end = now.date_naive();
        let start = kind.start_from(end);

        Self {
            kind,
            range: DateRange { start, end },
            interval: Interval::D1,
        }
    }

    /// 연간 윈도우.
    pub fn yearly(now: DateTime<Utc>) -> Self {
        Self::resolve(WindowKind::Yearly, now)
    }
}

/// 히스토리 조회에 쓰이는 세 윈도우 묶음.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowSet {
    pub weekly: Window,
    pub monthly: Window,
    pub yearly: Window,
}

impl WindowSet {
    /// 기준 시각에 대한 세 윈도우를 계산합니다.
    pub fn resolve(now: DateTime<Utc>) -> Self {
        Self {
            weekly: Window::resolve(WindowKind::Weekly, now),
            monthly: Window::resolve(WindowKind::Monthly, now),
            yearly: Window::resolve(WindowKind::Yearly, now),
        }
    }
}
