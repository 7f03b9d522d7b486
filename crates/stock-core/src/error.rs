//! 시장 데이터 처리의 에러 타입.
//!
//! 모든 실패는 내부에서 복구되거나 재시도되지 않고 호출자에게 그대로 전달됩니다.

use thiserror::Error;

/// 히스토리 데이터가 없을 때 사용자에게 노출되는 고정 메시지.
pub const NO_DATA_MESSAGE: &str = "No historical data available";

/// 심볼이 누락되었을 때 사용자에게 노출되는 고정 메시지.
pub const SYMBOL_REQUIRED_MESSAGE: &str = "Stock symbol is required";

/// 시장 데이터 조회/집계 에러.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MarketDataError {
    /// 잘못된 요청 (심볼 누락 등 사용자 에러)
    #[error("{0}")]
    InvalidRequest(String),

    /// 외부 제공자 호출 실패 또는 잘못된 응답.
    ///
    /// 제공자의 메시지를 가공 없이 그대로 담습니다.
    #[error("{0}")]
    Upstream(String),

    /// 정상 응답이지만 연간 시계열이 비어 있음
    #[error("No historical data available")]
    NoData,
}

impl MarketDataError {
    /// 심볼 누락 에러를 생성합니다.
    pub fn symbol_required() -> Self {
        Self::InvalidRequest(SYMBOL_REQUIRED_MESSAGE.to_string())
    }

    /// 외부 제공자 에러를 생성합니다.
    pub fn upstream(message: impl Into<String>) -> Self {
        Self::Upstream(message.into())
    }

    /// 사용자 입력에서 비롯된 에러인지 확인합니다.
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::InvalidRequest(_))
    }
}

/// 시장 데이터 작업을 위한 Result 타입.
pub type MarketDataResult<T> = Result<T, MarketDataError>;
