//! Chirpy API 서버.
//!
//! 설정을 로드하고 저장소를 연결한 뒤 Axum 서버를 시작합니다.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use axum::{http::StatusCode, routing::get, Router};
use chirpy_core::{init_logging, AppConfig, LogConfig};
use metrics_exporter_prometheus::PrometheusHandle;
use sqlx::postgres::PgPoolOptions;
use tokio_util::sync::CancellationToken;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::{debug, info, warn};

use chirpy_api::metrics::setup_metrics_recorder;
use chirpy_api::repository::{MemoryStore, PgStore};
use chirpy_api::state::AppState;
use chirpy_api::create_app_router;

/// AppState 초기화.
///
/// `DB_URL`이 있으면 PostgreSQL에 연결하고 마이그레이션을 적용합니다.
/// 없으면 인메모리 저장소를 사용합니다.
async fn create_app_state(config: &AppConfig) -> anyhow::Result<AppState> {
    let Some(database_url) = config.db_url.as_deref() else {
        warn!("DB_URL not set, using in-memory store (data is lost on restart)");
        return Ok(AppState::from_config(config, Arc::new(MemoryStore::new())));
    };

    let pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .acquire_timeout(Duration::from_secs(config.database.acquire_timeout_secs))
        .connect(database_url)
        .await
        .context("failed to connect to database")?;

    let store = PgStore::new(pool.clone());
    store.migrate().await.context("failed to run migrations")?;
    info!("Connected to PostgreSQL, migrations applied");

    Ok(AppState::from_config(config, Arc::new(store)).with_db_pool(pool))
}

/// CORS 미들웨어 구성.
///
/// CORS_ORIGINS 환경변수가 설정되어 있으면 해당 origin만 허용합니다.
/// 설정되지 않으면 모든 origin을 허용합니다.
fn cors_layer() -> CorsLayer {
    let configured = std::env::var("CORS_ORIGINS").ok().filter(|v| !v.is_empty());

    let allow_origin = match &configured {
        Some(origins) => {
            let origins: Vec<_> = origins
                .split(',')
                .filter_map(|s| s.trim().parse().ok())
                .collect();

            if origins.is_empty() {
                warn!("CORS_ORIGINS is set but contains no valid origins, allowing any");
                AllowOrigin::any()
            } else {
                info!("CORS configured with {} allowed origins", origins.len());
                AllowOrigin::list(origins)
            }
        }
        None => {
            debug!("CORS_ORIGINS not set, allowing any origin");
            AllowOrigin::any()
        }
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([
            axum::http::Method::GET,
            axum::http::Method::POST,
            axum::http::Method::PUT,
            axum::http::Method::DELETE,
            axum::http::Method::OPTIONS,
        ])
        .allow_headers([
            axum::http::header::CONTENT_TYPE,
            axum::http::header::AUTHORIZATION,
            axum::http::header::ACCEPT,
        ])
        .max_age(Duration::from_secs(3600))
}

/// /metrics 엔드포인트 핸들러.
async fn metrics_handler(
    axum::extract::State(handle): axum::extract::State<PrometheusHandle>,
) -> String {
    handle.render()
}

/// 전체 라우터 생성.
fn create_router(state: Arc<AppState>, static_root: &str, metrics_handle: PrometheusHandle) -> Router {
    let metrics_router = Router::new()
        .route("/metrics", get(metrics_handler))
        .with_state(metrics_handle);

    Router::new()
        .merge(metrics_router)
        .merge(create_app_router(state, static_root))
        .layer(TraceLayer::new_for_http())
        // 전역 타임아웃 (30초) - 408 상태 코드 반환
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(30),
        ))
        .layer(cors_layer())
}

/// OpenAPI 스펙 내보내기 처리.
///
/// `--export-openapi` 플래그 또는 `EXPORT_OPENAPI` 환경변수가 설정된 경우
/// OpenAPI JSON 스펙을 stdout으로 출력하고 `true`를 반환합니다.
fn handle_export_openapi() -> anyhow::Result<bool> {
    use chirpy_api::openapi::ApiDoc;
    use utoipa::OpenApi as _;

    let export_flag = std::env::args().any(|arg| arg == "--export-openapi");
    let export_env = std::env::var("EXPORT_OPENAPI")
        .map(|v| v == "1" || v == "true")
        .unwrap_or(false);

    if !(export_flag || export_env) {
        return Ok(false);
    }

    let json = serde_json::to_string_pretty(&ApiDoc::openapi())?;
    println!("{}", json);
    Ok(true)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env 파일 로드 (있는 경우)
    let dotenv = dotenvy::dotenv();

    if handle_export_openapi()? {
        return Ok(());
    }

    let config = AppConfig::load_default().context("failed to load configuration")?;

    init_logging(LogConfig::from(&config.log))
        .map_err(|e| anyhow::anyhow!("failed to initialize logging: {e}"))?;

    for warning in config.warnings() {
        warn!("{warning}");
    }

    match dotenv {
        Ok(path) => debug!(path = %path.display(), "Loaded .env"),
        Err(e) => debug!(error = %e, "No .env loaded"),
    }

    info!("Starting Chirpy API server...");

    let metrics_handle = setup_metrics_recorder().context("failed to install metrics recorder")?;

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port)
        .parse()
        .with_context(|| {
            format!(
                "invalid listen address {}:{}",
                config.server.host, config.server.port
            )
        })?;

    let state = Arc::new(create_app_state(&config).await?);
    info!(
        version = %state.version,
        platform = %state.platform,
        has_db = state.db_pool.is_some(),
        "Application state initialized"
    );

    let app = create_router(state, &config.server.static_root, metrics_handle);

    info!(%addr, static_root = %config.server.static_root, "API server listening");
    info!("Swagger UI available at http://{}/swagger-ui", addr);
    info!("Metrics available at http://{}/metrics", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    let shutdown_token = CancellationToken::new();

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(shutdown_token.clone()))
        .await?;

    info!("Server stopped gracefully");
    Ok(())
}

/// Graceful shutdown 시그널 대기.
///
/// Ctrl+C 또는 SIGTERM 시그널을 수신하면 종료 토큰을 취소합니다.
async fn shutdown_signal(shutdown_token: CancellationToken) {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "Failed to install Ctrl+C handler");
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
                warn!(error = %e, "Failed to install SIGTERM handler");
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
        _ = shutdown_token.cancelled() => {}
    }

    shutdown_token.cancel();
}
