//! OpenAPI 문서화 설정.
//!
//! utoipa로 REST API의 OpenAPI 3.0 문서를 생성합니다.
//! Swagger UI는 `/swagger-ui` 경로에서 사용 가능합니다.
//!
//! 새 엔드포인트를 추가할 때:
//!
//! 1. 응답 타입에 `ToSchema` 추가 (core 타입은 `utoipa-support` feature)
//! 2. 핸들러에 `#[utoipa::path(...)]` 추가
//! 3. 이 파일의 `components(schemas(...))`와 `paths(...)`에 등록

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use stock_core::{Company, Extremum, NormalizedPoint, PriceHistory, QuoteSnapshot, YearlyStats};

use crate::error::ApiErrorResponse;
use crate::routes::{ComponentHealth, ComponentStatus, HealthResponse};

/// Stock Dashboard API 문서.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Stock Dashboard API",
        description = r#"
# Stock Dashboard REST API

기업 목록과 종목 시세/히스토리/연간 통계를 제공하는 읽기 전용 API입니다.

## 에러 형식

모든 에러는 `{"error": "<메시지>", "code": "<코드>"}` 형식입니다.
심볼 누락은 400, 외부 제공자 오류와 데이터 없음은 500을 반환합니다.
"#,
        license(name = "MIT", url = "https://opensource.org/licenses/MIT"),
    ),
    servers(
        (url = "http://localhost:3000", description = "로컬 개발 서버"),
    ),
    tags(
        (name = "health", description = "헬스 체크 - 서버 상태 확인"),
        (name = "companies", description = "기업 - 등록된 기업 목록"),
        (name = "stock", description = "종목 - 시세, 히스토리, 연간 통계")
    ),
    components(
        schemas(
            // ===== Health =====
            HealthResponse,
            ComponentHealth,
            ComponentStatus,

            // ===== Common =====
            ApiErrorResponse,

            // ===== Stock =====
            QuoteSnapshot,
            PriceHistory,
            NormalizedPoint,
            YearlyStats,
            Extremum,
            Company,
        )
    ),
    paths(
        crate::routes::health::health_check,
        crate::routes::health::health_ready,
        crate::routes::companies::list_companies,
        crate::routes::stock::get_quote,
        crate::routes::stock::get_history,
        crate::routes::stock::get_stats,
    )
)]
pub struct ApiDoc;

/// Swagger UI 라우터 생성.
///
/// - `/swagger-ui` - Swagger UI 대화형 문서
/// - `/api-docs/openapi.json` - OpenAPI JSON 문서
pub fn swagger_ui_router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    SwaggerUi::new("/swagger-ui")
        .url("/api-docs/openapi.json", ApiDoc::openapi())
        .into()
}

/// OpenAPI 문서를 보기 좋은 JSON 문자열로 직렬화합니다.
pub fn openapi_json() -> Result<String, serde_json::Error> {
    ApiDoc::openapi().to_pretty_json()
}
