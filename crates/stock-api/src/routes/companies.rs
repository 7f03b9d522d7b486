//! 기업 목록 endpoint.
//!
//! `companies` 테이블의 모든 행을 이름순으로 반환합니다.

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};

use stock_core::Company;

use crate::error::{database_error, ApiErrorResponse, ApiResult};
use crate::state::AppState;

/// 기업 목록 조회.
///
/// GET /api/companies
#[utoipa::path(
    get,
    path = "/api/companies",
    responses(
        (status = 200, description = "기업 목록 (이름순)", body = Vec<Company>),
        (status = 500, description = "데이터베이스 오류", body = ApiErrorResponse)
    ),
    tag = "companies"
)]
pub async fn list_companies(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<Company>>> {
    let companies = state
        .companies
        .list_companies()
        .await
        .map_err(database_error)?;

    Ok(Json(companies))
}

/// 기업 라우터 생성.
pub fn companies_router() -> Router<Arc<AppState>> {
    Router::new().route("/", get(list_companies))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use serde_json::json;
    use stock_data::{InMemoryCompanyStore, StaticMarketData};
    use tower::ServiceExt;

    fn app(store: InMemoryCompanyStore) -> Router {
        let state = AppState::new(Arc::new(StaticMarketData::empty()), Arc::new(store));
        Router::new()
            .nest("/api/companies", companies_router())
            .with_state(Arc::new(state))
    }

    async fn call(app: Router) -> (StatusCode, serde_json::Value) {
        let response = app
            .oneshot(Request::builder().uri("/api/companies").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn test_companies_ordered_with_all_columns() {
        let store = InMemoryCompanyStore::new(vec![
            Company::new("Microsoft").with_attribute("symbol", json!("MSFT")),
            Company::new("Apple").with_attribute("symbol", json!("AAPL")),
        ]);

        let (status, body) = call(app(store)).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!([
                {"name": "Apple", "symbol": "AAPL"},
                {"name": "Microsoft", "symbol": "MSFT"}
            ])
        );
    }

    #[tokio::test]
    async fn test_datastore_failure_is_server_error() {
        let (status, body) = call(app(InMemoryCompanyStore::unavailable())).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({"error": "Server error", "code": "DATABASE_ERROR"}));
    }
}
