//! 관리자 endpoint.
//!
//! - `GET /admin/metrics` - `/app` 방문 수 HTML
//! - `POST /admin/reset` - 방문 수와 사용자 전체 삭제 (dev 플랫폼 전용)

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::Html,
    routing::{get, post},
    Router,
};
use chirpy_core::ChirpyError;
use tracing::{info, warn};

use crate::error::ApiResult;
use crate::services::store_failure;
use crate::state::AppState;

const METRICS_TEMPLATE: &str = include_str!("../../templates/metrics.html");

/// 방문 수 페이지.
#[utoipa::path(
    get,
    path = "/admin/metrics",
    responses((status = 200, description = "방문 수 HTML", body = String, content_type = "text/html")),
    tag = "admin"
)]
pub async fn metrics_page(State(state): State<Arc<AppState>>) -> Html<String> {
    Html(render_metrics(state.hits()))
}

fn render_metrics(hits: i32) -> String {
    METRICS_TEMPLATE.replace("{{hits}}", &hits.to_string())
}

/// 방문 수 초기화 및 사용자 전체 삭제.
///
/// 사용자 삭제는 리프레시 토큰과 처프까지 연쇄 삭제합니다.
#[utoipa::path(
    post,
    path = "/admin/reset",
    responses(
        (status = 200, description = "초기화 완료"),
        (status = 403, description = "dev 플랫폼이 아님"),
        (status = 500, description = "저장소 오류")
    ),
    tag = "admin"
)]
pub async fn reset(State(state): State<Arc<AppState>>) -> ApiResult<StatusCode> {
    if !state.is_dev() {
        warn!(platform = %state.platform, "Reset rejected outside dev platform");
        return Err(ChirpyError::forbidden().into());
    }

    state.reset_hits();
    state
        .users
        .delete_users()
        .await
        .map_err(|e| store_failure("delete_users", e))?;

    info!("Hit counter and users reset");
    Ok(StatusCode::OK)
}

/// 관리자 라우터 (`/admin`에 마운트).
pub fn admin_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/metrics", get(metrics_page))
        .route("/reset", post(reset))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_metrics() {
        let html = render_metrics(42);
        assert!(html.contains("Chirpy has been visited 42 times!"));
        assert!(!html.contains("{{hits}}"));
    }
}
