//! 주식 대시보드 API 서버 바이너리.

use std::sync::Arc;

use anyhow::Context;
use tracing::{error, info, warn};

use stock_api::openapi::openapi_json;
use stock_api::{create_router, setup_metrics_recorder, AppState};
use stock_core::{init_logging, AppConfig, LogConfig};
use stock_data::{CompanyStore, PgCompanyStore, YahooGateway};

/// OpenAPI 문서 내보내기 처리.
///
/// `--export-openapi` 플래그 또는 `EXPORT_OPENAPI` 환경변수가 설정된 경우
/// OpenAPI JSON을 stdout으로 출력하고 `true`를 반환합니다.
fn handle_export_openapi() -> anyhow::Result<bool> {
    let export_flag = std::env::args().any(|arg| arg == "--export-openapi");
    let export_env = std::env::var("EXPORT_OPENAPI")
        .map(|v| v == "1" || v == "true")
        .unwrap_or(false);

    if export_flag || export_env {
        println!("{}", openapi_json()?);
        return Ok(true);
    }

    Ok(false)
}

/// 시작 시 데이터베이스 연결 확인.
///
/// 실패해도 서버는 계속 동작하며 결과만 기록합니다.
fn spawn_database_probe(store: PgCompanyStore) {
    tokio::spawn(async move {
        match store.ping().await {
            Ok(now) => info!(db_time = %now, "Database connection established"),
            Err(e) => error!(error = %e, "Database connection failed"),
        }
    });
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    if handle_export_openapi()? {
        return Ok(());
    }

    let config = AppConfig::load_default().context("Failed to load configuration")?;

    init_logging(LogConfig::from_settings(&config.logging))
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    info!("Starting Stock API server...");

    let metrics_handle = setup_metrics_recorder().context("Failed to install metrics recorder")?;
    info!("Prometheus metrics recorder initialized");

    let gateway = YahooGateway::new().context("Failed to create market data gateway")?;
    let store = PgCompanyStore::connect_lazy(&config.database)
        .context("Invalid database configuration")?;
    spawn_database_probe(store.clone());

    let state = Arc::new(AppState::new(Arc::new(gateway), Arc::new(store)));
    info!(version = %state.version, "Application state initialized");

    let app = create_router(state, metrics_handle, &config.http);

    let addr = config.server.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    info!(%addr, "API server listening");
    info!("Swagger UI available at http://{}/swagger-ui", addr);
    info!("Metrics available at http://{}/metrics", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped gracefully");

    Ok(())
}

/// Graceful shutdown 시그널 대기.
///
/// Ctrl+C 또는 SIGTERM 시그널을 수신하면 반환합니다.
/// 시그널 핸들러 설치에 실패한 쪽은 무시합니다.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            warn!("Received Ctrl+C, initiating graceful shutdown...");
        }
        _ = terminate => {
            warn!("Received SIGTERM, initiating graceful shutdown...");
        }
    }
}
