//! 종목 시세/히스토리/통계 endpoint.
//!
//! 모든 엔드포인트는 `stock` 쿼리 파라미터로 심볼을 받습니다.
//! 심볼이 없거나 비어 있으면 외부 제공자를 호출하지 않고 400을 반환합니다.
//!
//! # 엔드포인트
//!
//! - `GET /api/stock?stock=AAPL` - 현재 시세
//! - `GET /api/stock/history?stock=AAPL` - 주간/월간/연간 일봉 히스토리
//! - `GET /api/stock/stats?stock=AAPL` - 최근 1년 최고가/최저가

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use tracing::{debug, info};
use utoipa::IntoParams;

use stock_core::{PriceHistory, QuoteSnapshot, Symbol, YearlyStats};

use crate::error::{market_data_error, ApiErrorResponse, ApiResult};
use crate::state::AppState;

/// 종목 조회 쿼리.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct StockQuery {
    /// 종목 심볼 (예: AAPL, 005930.KS). 대소문자/공백을 변환하지 않습니다.
    pub stock: Option<String>,
}

impl StockQuery {
    fn symbol(&self) -> ApiResult<Symbol> {
        Symbol::from_param(self.stock.as_deref()).map_err(market_data_error)
    }
}

/// 현재 시세 조회.
///
/// GET /api/stock
#[utoipa::path(
    get,
    path = "/api/stock",
    params(StockQuery),
    responses(
        (status = 200, description = "현재 시세", body = QuoteSnapshot),
        (status = 400, description = "심볼 누락", body = ApiErrorResponse),
        (status = 500, description = "외부 제공자 오류", body = ApiErrorResponse)
    ),
    tag = "stock"
)]
pub async fn get_quote(
    State(state): State<Arc<AppState>>,
    Query(query): Query<StockQuery>,
) -> ApiResult<Json<QuoteSnapshot>> {
    let symbol = query.symbol()?;

    let quote = state
        .market_data
        .quote(&symbol)
        .await
        .map_err(market_data_error)?;

    debug!(
        symbol = %symbol,
        price = ?quote.regular_market_price,
        change_percent = ?quote.change_percent(),
        "Quote served"
    );

    Ok(Json(quote))
}

/// 주간/월간/연간 히스토리 조회.
///
/// GET /api/stock/history
#[utoipa::path(
    get,
    path = "/api/stock/history",
    params(StockQuery),
    responses(
        (status = 200, description = "윈도우별 일봉 히스토리", body = PriceHistory),
        (status = 400, description = "심볼 누락", body = ApiErrorResponse),
        (status = 500, description = "외부 제공자 오류 또는 데이터 없음", body = ApiErrorResponse)
    ),
    tag = "stock"
)]
pub async fn get_history(
    State(state): State<Arc<AppState>>,
    Query(query): Query<StockQuery>,
) -> ApiResult<Json<PriceHistory>> {
    let symbol = query.symbol()?;

    let history = state
        .market_data
        .history(&symbol, state.now())
        .await
        .map_err(market_data_error)?;

    info!(
        symbol = %symbol,
        weekly = history.weekly.len(),
        monthly = history.monthly.len(),
        yearly = history.yearly.len(),
        "History served"
    );

    Ok(Json(history))
}

/// 최근 1년 최고가/최저가 조회.
///
/// GET /api/stock/stats
#[utoipa::path(
    get,
    path = "/api/stock/stats",
    params(StockQuery),
    responses(
        (status = 200, description = "연간 최고가/최저가", body = YearlyStats),
        (status = 400, description = "심볼 누락", body = ApiErrorResponse),
        (status = 500, description = "외부 제공자 오류 또는 데이터 없음", body = ApiErrorResponse)
    ),
    tag = "stock"
)]
pub async fn get_stats(
    State(state): State<Arc<AppState>>,
    Query(query): Query<StockQuery>,
) -> ApiResult<Json<YearlyStats>> {
    let symbol = query.symbol()?;

    let stats = state
        .market_data
        .stats(&symbol, state.now())
        .await
        .map_err(market_data_error)?;

    Ok(Json(stats))
}

/// 종목 라우터 생성.
pub fn stock_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(get_quote))
        .route("/history", get(get_history))
        .route("/stats", get(get_stats))
}
