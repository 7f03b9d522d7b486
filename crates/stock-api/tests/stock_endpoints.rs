//! HTTP 계층 통합 테스트.
//!
//! 전체 라우터(미들웨어 포함)를 인메모리 게이트웨이/저장소와 고정 시계로 구성해
//! 엔드포인트 동작을 검증합니다.

use std::sync::Arc;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use metrics_exporter_prometheus::PrometheusBuilder;
use serde_json::{json, Value};
use tower::ServiceExt;

use stock_api::{create_router, AppState};
use stock_core::{Company, HttpConfig, QuoteSnapshot, RawPoint};
use stock_data::{InMemoryCompanyStore, StaticMarketData};

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 15, 18, 0, 0).unwrap()
}

fn bar(day: NaiveDate, high: f64, low: f64) -> RawPoint {
    RawPoint {
        timestamp: day.and_hms_opt(14, 30, 0).unwrap().and_utc().timestamp(),
        open: Some((high + low) / 2.0),
        high: Some(high),
        low: Some(low),
        close: Some((high + low) / 2.0),
        volume: Some(1_000_000),
    }
}

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn app_with(gateway: Arc<StaticMarketData>, store: InMemoryCompanyStore) -> Router {
    let state = AppState::new(gateway, Arc::new(store)).with_fixed_now(now());
    let handle = PrometheusBuilder::new().build_recorder().handle();
    create_router(Arc::new(state), handle, &HttpConfig::default())
}

fn app(gateway: Arc<StaticMarketData>) -> Router {
    app_with(gateway, InMemoryCompanyStore::default())
}

async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn stats_reports_yearly_extremes() {
    let gateway = Arc::new(StaticMarketData::with_series(vec![
        bar(ymd(2024, 1, 2), 10.0, 8.0),
        bar(ymd(2024, 1, 3), 25.0, 20.0),
        bar(ymd(2024, 1, 4), 18.0, 5.0),
    ]));

    let (status, body) = get(app(gateway), "/api/stock/stats?stock=AAPL").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["max"]["price"], 25.0);
    assert!(body["max"]["date"].as_str().unwrap().starts_with("2024-01-03"));
    assert_eq!(body["min"]["price"], 5.0);
    assert!(body["min"]["date"].as_str().unwrap().starts_with("2024-01-04"));
}

#[tokio::test]
async fn stats_ties_keep_earliest_date() {
    let gateway = Arc::new(StaticMarketData::with_series(vec![
        bar(ymd(2023, 11, 1), 30.0, 10.0),
        bar(ymd(2023, 12, 1), 30.0, 10.0),
    ]));

    let (status, body) = get(app(gateway), "/api/stock/stats?stock=AAPL").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["max"]["date"].as_str().unwrap().starts_with("2023-11-01"));
    assert!(body["min"]["date"].as_str().unwrap().starts_with("2023-11-01"));
}

#[tokio::test]
async fn stats_without_data_is_server_error() {
    let gateway = Arc::new(StaticMarketData::empty());

    let (status, body) = get(app(gateway), "/api/stock/stats?stock=AAPL").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({"error": "No historical data available", "code": "NO_DATA"}));
}

#[tokio::test]
async fn history_without_yearly_data_is_server_error() {
    let gateway = Arc::new(StaticMarketData::empty());

    let (status, body) = get(app(gateway), "/api/stock/history?stock=AAPL").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "No historical data available");
}

#[tokio::test]
async fn missing_symbol_never_reaches_gateway() {
    let gateway = Arc::new(StaticMarketData::with_series(vec![bar(ymd(2024, 3, 14), 10.0, 9.0)]));

    for uri in [
        "/api/stock",
        "/api/stock/history",
        "/api/stock/stats",
        "/api/stock/stats?stock=",
        "/api/stock/history?other=AAPL",
    ] {
        let (status, body) = get(app(gateway.clone()), uri).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
        assert_eq!(body["error"], "Stock symbol is required", "{uri}");
        assert_eq!(body["code"], "INVALID_REQUEST", "{uri}");
    }

    assert_eq!(gateway.call_count(), 0);
}

#[tokio::test]
async fn history_requests_daily_windows_ending_today() {
    let gateway = Arc::new(StaticMarketData::with_series(vec![
        bar(ymd(2023, 5, 10), 11.0, 10.0),
        bar(ymd(2024, 2, 28), 12.0, 11.0),
        bar(ymd(2024, 3, 11), 13.0, 12.0),
        bar(ymd(2024, 3, 15), 14.0, 13.0),
    ]));

    let (status, body) = get(app(gateway.clone()), "/api/stock/history?stock=005930.KS").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["weekly"].as_array().unwrap().len(), 2);
    assert_eq!(body["monthly"].as_array().unwrap().len(), 3);
    assert_eq!(body["yearly"].as_array().unwrap().len(), 4);

    let mut requests = gateway.series_requests();
    requests.sort_by_key(|r| r.range.start());
    let bounds: Vec<_> = requests
        .iter()
        .map(|r| (r.range.start(), r.range.end()))
        .collect();
    assert_eq!(
        bounds,
        vec![
            (ymd(2023, 3, 15), ymd(2024, 3, 15)),
            (ymd(2024, 2, 14), ymd(2024, 3, 15)),
            (ymd(2024, 3, 8), ymd(2024, 3, 15)),
        ]
    );
    assert!(requests.iter().all(|r| r.symbol.as_str() == "005930.KS"));
}

#[tokio::test]
async fn history_yearly_preserves_provider_order_and_values() {
    let points = vec![
        bar(ymd(2023, 6, 1), 11.0, 10.0),
        bar(ymd(2023, 9, 1), 15.5, 12.25),
        bar(ymd(2024, 1, 2), 20.0, 18.0),
    ];
    let gateway = Arc::new(StaticMarketData::with_series(points.clone()));

    let (status, body) = get(app(gateway), "/api/stock/history?stock=AAPL").await;

    assert_eq!(status, StatusCode::OK);
    let yearly = body["yearly"].as_array().unwrap();
    assert_eq!(yearly.len(), points.len());

    for (json_point, raw) in yearly.iter().zip(&points) {
        let date: DateTime<Utc> = serde_json::from_value(json_point["date"].clone()).unwrap();
        assert_eq!(date.timestamp(), raw.timestamp);
        assert_eq!(json_point["high"], raw.high.unwrap());
        assert_eq!(json_point["low"], raw.low.unwrap());
        assert_eq!(json_point["volume"], raw.volume.unwrap());
    }
}

#[tokio::test]
async fn upstream_failure_message_is_passed_through() {
    let message = "Not Found: No data found, symbol may be delisted";

    for uri in [
        "/api/stock?stock=NOPE",
        "/api/stock/history?stock=NOPE",
        "/api/stock/stats?stock=NOPE",
    ] {
        let gateway = Arc::new(StaticMarketData::failing(message));
        let (status, body) = get(app(gateway), uri).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR, "{uri}");
        assert_eq!(body["error"], message, "{uri}");
        assert_eq!(body["code"], "UPSTREAM_ERROR", "{uri}");
    }
}

#[tokio::test]
async fn quote_is_serialized_in_camel_case() {
    let mut quote = QuoteSnapshot::empty("AAPL");
    quote.currency = Some("USD".to_string());
    quote.regular_market_price = Some(172.62);
    quote.regular_market_previous_close = Some(170.0);
    let gateway = Arc::new(StaticMarketData::empty().with_quote(quote));

    let (status, body) = get(app(gateway), "/api/stock?stock=AAPL").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["symbol"], "AAPL");
    assert_eq!(body["currency"], "USD");
    assert_eq!(body["regularMarketPrice"], 172.62);
    assert_eq!(body["regularMarketPreviousClose"], 170.0);
}

#[tokio::test]
async fn companies_are_listed_by_name() {
    let store = InMemoryCompanyStore::new(vec![
        Company::new("Tesla").with_attribute("symbol", json!("TSLA")),
        Company::new("Alphabet")
            .with_attribute("symbol", json!("GOOGL"))
            .with_attribute("id", json!(3)),
    ]);

    let (status, body) = get(
        app_with(Arc::new(StaticMarketData::empty()), store),
        "/api/companies",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!([
            {"id": 3, "name": "Alphabet", "symbol": "GOOGL"},
            {"name": "Tesla", "symbol": "TSLA"}
        ])
    );
}

#[tokio::test]
async fn companies_datastore_failure_hides_details() {
    let (status, body) = get(
        app_with(
            Arc::new(StaticMarketData::empty()),
            InMemoryCompanyStore::unavailable(),
        ),
        "/api/companies",
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Server error");
}
