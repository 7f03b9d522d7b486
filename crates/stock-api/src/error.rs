//! API 에러 응답 타입.
//!
//! 모든 엔드포인트는 실패 시 동일한 JSON 형식을 사용합니다:
//!
//! ```json
//! { "error": "No historical data available", "code": "NO_DATA" }
//! ```
//!
//! `error` 필드는 클라이언트가 그대로 표시하는 메시지이므로
//! 도메인 에러의 메시지를 가공하지 않고 담습니다.

use axum::{http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use stock_core::MarketDataError;
use stock_data::DataError;

/// 데이터베이스 실패 시 노출되는 고정 메시지.
pub const SERVER_ERROR_MESSAGE: &str = "Server error";

/// API 에러 응답.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ApiErrorResponse {
    /// 사람이 읽을 수 있는 에러 메시지
    pub error: String,
    /// 에러 코드 (예: "INVALID_REQUEST", "UPSTREAM_ERROR")
    pub code: String,
}

impl ApiErrorResponse {
    pub fn new(code: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            code: code.into(),
        }
    }

    /// 에러 코드 반환.
    pub fn code(&self) -> &str {
        &self.code
    }

    /// 에러 메시지 반환.
    pub fn message(&self) -> &str {
        &self.error
    }
}

impl std::fmt::Display for ApiErrorResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.error)
    }
}

impl std::error::Error for ApiErrorResponse {}

/// 핸들러 반환 타입.
///
/// ```ignore
/// async fn get_stats(...) -> ApiResult<Json<YearlyStats>> {
///     let symbol = Symbol::from_param(query.stock.as_deref()).map_err(market_data_error)?;
///     ...
/// }
/// ```
pub type ApiResult<T> = Result<T, (StatusCode, Json<ApiErrorResponse>)>;

/// 도메인 에러 코드.
fn market_data_code(err: &MarketDataError) -> &'static str {
    match err {
        MarketDataError::InvalidRequest(_) => "INVALID_REQUEST",
        MarketDataError::Upstream(_) => "UPSTREAM_ERROR",
        MarketDataError::NoData => "NO_DATA",
    }
}

/// `MarketDataError`를 HTTP 응답으로 변환합니다.
///
/// 사용자 에러는 400, 그 외(외부 제공자 실패, 데이터 없음)는 500입니다.
/// 서버 측 실패는 응답 전에 `error` 레벨로 기록됩니다.
pub fn market_data_error(err: MarketDataError) -> (StatusCode, Json<ApiErrorResponse>) {
    let status = if err.is_client_error() {
        tracing::warn!(error = %err, "Rejected market data request");
        StatusCode::BAD_REQUEST
    } else {
        tracing::error!(error = %err, "Market data request failed");
        StatusCode::INTERNAL_SERVER_ERROR
    };

    (
        status,
        Json(ApiErrorResponse::new(market_data_code(&err), err.to_string())),
    )
}

/// 데이터베이스 에러를 HTTP 응답으로 변환합니다.
///
/// 내부 상세는 로그에만 남기고 응답에는 고정 메시지를 사용합니다.
pub fn database_error(err: DataError) -> (StatusCode, Json<ApiErrorResponse>) {
    tracing::error!(error = %err, "Database query failed");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ApiErrorResponse::new("DATABASE_ERROR", SERVER_ERROR_MESSAGE)),
    )
}
