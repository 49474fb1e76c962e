//! Chirpy REST API 서버.
//!
//! 이 크레이트는 다음을 제공합니다:
//! - Axum 기반 REST API (사용자, 세션, 처프, 웹훅, 관리자)
//! - Argon2 비밀번호 해싱, HS256 Access Token, 리프레시 토큰
//! - PostgreSQL 저장소와 인메모리 저장소
//! - Prometheus 메트릭, OpenAPI 문서
//!
//! # 모듈 구성
//!
//! - [`state`]: 애플리케이션 공유 상태 (AppState)
//! - [`routes`]: REST API 엔드포인트
//! - [`auth`]: 인증 기본 요소와 추출기
//! - [`services`]: 인증/처프/업그레이드 서비스
//! - [`repository`]: 저장소 구현
//! - [`metrics`]: Prometheus 메트릭 수집
//! - [`middleware`]: HTTP 미들웨어
//! - [`openapi`]: OpenAPI 문서 및 Swagger UI

pub mod auth;
pub mod error;
pub mod metrics;
pub mod middleware;
pub mod openapi;
pub mod repository;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;

pub use error::{ApiError, ApiResult, JsonBody};
pub use metrics::setup_metrics_recorder;
pub use repository::{MemoryStore, PgStore};
pub use routes::create_api_router;
pub use state::AppState;

use std::path::Path;
use std::sync::Arc;

use axum::{middleware::from_fn, middleware::from_fn_with_state, Router};
use tower_http::services::ServeDir;

/// API, 정적 파일, Swagger UI를 합친 애플리케이션 라우터.
///
/// `/app` 아래 정적 파일 요청만 방문 카운터를 증가시킵니다.
/// `/metrics`와 trace/timeout/CORS 레이어는 바이너리에서 덧붙입니다.
pub fn create_app_router(state: Arc<AppState>, static_root: impl AsRef<Path>) -> Router {
    let static_router = Router::new()
        .nest_service("/app", ServeDir::new(static_root.as_ref()))
        .route_layer(from_fn_with_state(state.clone(), middleware::hits_layer));

    Router::new()
        .merge(create_api_router().with_state(state))
        .merge(static_router)
        .merge(openapi::swagger_ui_router())
        .layer(from_fn(middleware::metrics_layer))
}
