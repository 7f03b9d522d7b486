//! HTTP 요청 metrics middleware.

use axum::{
    extract::{MatchedPath, Request},
    middleware::Next,
    response::Response,
};
use std::time::Instant;

use crate::metrics::{
    record_http_duration, record_http_request, record_http_response, UNMATCHED_PATH,
};

/// HTTP 메트릭을 수집하는 미들웨어 레이어.
///
/// path 라벨은 실제 URI가 아니라 매칭된 라우트 패턴을 사용하므로
/// 쿼리 문자열이나 임의 경로로 라벨 수가 늘어나지 않습니다.
pub async fn metrics_layer(request: Request, next: Next) -> Response {
    let start = Instant::now();

    let method = request.method().to_string();
    let path = request
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_string())
        .unwrap_or_else(|| UNMATCHED_PATH.to_string());

    record_http_request(&method, &path);

    let response = next.run(request).await;

    let status = response.status().as_u16();
    record_http_response(&method, &path, status);
    record_http_duration(&method, &path, start.elapsed().as_secs_f64());

    response
}
