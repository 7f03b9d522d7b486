//! 전체 HTTP 애플리케이션 조립.
//!
//! API 라우터에 메트릭, Swagger UI, 공통 미들웨어(트레이싱, 타임아웃, CORS)를 얹습니다.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::State,
    http::{header, Method, StatusCode},
    middleware,
    routing::get,
    Router,
};
use metrics_exporter_prometheus::PrometheusHandle;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::{info, warn};

use stock_core::HttpConfig;

use crate::middleware::metrics_layer;
use crate::openapi::swagger_ui_router;
use crate::routes::create_api_router;
use crate::state::AppState;

/// CORS 레이어 생성.
///
/// 허용 origin 목록이 비어 있으면 모든 origin을 허용합니다.
/// 목록의 값이 하나도 유효하지 않을 때도 같습니다.
pub fn cors_layer(http: &HttpConfig) -> CorsLayer {
    let configured = http.cors_origin_list();

    let allow_origin = if configured.is_empty() {
        warn!("CORS origins not configured, allowing any origin");
        AllowOrigin::any()
    } else {
        let origins: Vec<_> = configured
            .iter()
            .filter_map(|s| s.parse().ok())
            .collect();

        if origins.is_empty() {
            warn!("CORS origins contain no valid values, allowing any");
            AllowOrigin::any()
        } else {
            info!("CORS configured with {} allowed origins", origins.len());
            AllowOrigin::list(origins)
        }
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .max_age(Duration::from_secs(3600))
}

/// /metrics 엔드포인트 핸들러.
async fn metrics_handler(State(handle): State<PrometheusHandle>) -> String {
    handle.render()
}

/// 전체 라우터 생성.
pub fn create_router(
    state: Arc<AppState>,
    metrics_handle: PrometheusHandle,
    http: &HttpConfig,
) -> Router {
    let metrics_router = Router::new()
        .route("/metrics", get(metrics_handler))
        .with_state(metrics_handle);

    Router::new()
        .merge(metrics_router)
        .merge(create_api_router().with_state(state))
        .merge(swagger_ui_router())
        .layer(middleware::from_fn(metrics_layer))
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            http.request_timeout(),
        ))
        .layer(cors_layer(http))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::Request};
    use metrics_exporter_prometheus::PrometheusBuilder;
    use tower::ServiceExt;

    use crate::state::create_test_state;

    fn app(http: &HttpConfig) -> Router {
        let handle = PrometheusBuilder::new().build_recorder().handle();
        create_router(Arc::new(create_test_state()), handle, http)
    }

    #[tokio::test]
    async fn test_metrics_endpoint() {
        let response = app(&HttpConfig::default())
            .oneshot(Request::builder().uri("/metrics").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_openapi_json_served() {
        let response = app(&HttpConfig::default())
            .oneshot(
                Request::builder()
                    .uri("/api-docs/openapi.json")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_permissive_cors_by_default() {
        let response = app(&HttpConfig::default())
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .header(header::ORIGIN, "http://localhost:5173")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
            "*"
        );
    }

    #[tokio::test]
    async fn test_restricted_cors_rejects_unknown_origin() {
        let http = HttpConfig {
            cors_origins: "https://dashboard.example.com".to_string(),
            ..HttpConfig::default()
        };

        let response = app(&http)
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .header(header::ORIGIN, "https://evil.example.com")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert!(response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .is_none());
    }
}
