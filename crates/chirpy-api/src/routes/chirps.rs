//! 처프 endpoint.
//!
//! - `POST /api/chirps` - 처프 작성 (Access Token 필요)
//! - `GET /api/chirps` - 목록 (`author_id`, `sort` 쿼리)
//! - `GET /api/chirps/{chirp_id}` - 단일 조회
//! - `DELETE /api/chirps/{chirp_id}` - 작성자 본인만 삭제

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use chirpy_core::{Chirp, ChirpyError, SortOrder};
use serde::{Deserialize, Serialize};
use tracing::debug;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use crate::auth::AuthUser;
use crate::error::{ApiResult, JsonBody};
use crate::state::AppState;
use crate::utils::format_timestamp;

/// 처프 작성 요청.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct ChirpRequest {
    pub body: String,
}

/// 처프 응답.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ChirpPayload {
    pub id: Uuid,
    pub created_at: String,
    pub updated_at: String,
    pub user_id: Uuid,
    pub body: String,
}

impl From<&Chirp> for ChirpPayload {
    fn from(chirp: &Chirp) -> Self {
        Self {
            id: chirp.id,
            created_at: format_timestamp(&chirp.created_at),
            updated_at: format_timestamp(&chirp.updated_at),
            user_id: chirp.user_id,
            body: chirp.body.clone(),
        }
    }
}

/// 목록 쿼리.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListChirpsQuery {
    /// 작성자 필터 (비어 있으면 전체)
    pub author_id: Option<String>,
    /// `desc`이면 최신순, 그 외는 오래된 순
    pub sort: Option<String>,
}

/// 경로/쿼리의 UUID 해석. 실패는 500으로 응답합니다.
fn parse_uuid(raw: &str, field: &'static str) -> ApiResult<Uuid> {
    Uuid::parse_str(raw).map_err(|e| {
        debug!(field, error = %e, "Invalid UUID");
        ChirpyError::internal().into()
    })
}

/// 처프 작성.
#[utoipa::path(
    post,
    path = "/api/chirps",
    request_body = ChirpRequest,
    responses(
        (status = 201, description = "작성 성공", body = ChirpPayload),
        (status = 400, description = "빈 본문 또는 140자 초과"),
        (status = 401, description = "인증 실패")
    ),
    security(("bearer_auth" = [])),
    tag = "chirps"
)]
pub async fn create_chirp(
    State(state): State<Arc<AppState>>,
    auth: AuthUser,
    JsonBody(request): JsonBody<ChirpRequest>,
) -> ApiResult<(StatusCode, Json<ChirpPayload>)> {
    let chirp = state.chirps.create(auth.user_id, &request.body).await?;
    Ok((StatusCode::CREATED, Json(ChirpPayload::from(&chirp))))
}

/// 처프 목록.
#[utoipa::path(
    get,
    path = "/api/chirps",
    params(ListChirpsQuery),
    responses(
        (status = 200, description = "목록 조회 성공", body = [ChirpPayload]),
        (status = 500, description = "잘못된 author_id 또는 서버 오류")
    ),
    tag = "chirps"
)]
pub async fn list_chirps(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ListChirpsQuery>,
) -> ApiResult<Json<Vec<ChirpPayload>>> {
    let author_id = match query.author_id.as_deref() {
        None | Some("") => None,
        Some(raw) => Some(parse_uuid(raw, "author_id")?),
    };
    let order = SortOrder::from_query(query.sort.as_deref());

    let chirps = state.chirps.list(author_id, order).await?;
    Ok(Json(chirps.iter().map(ChirpPayload::from).collect()))
}

/// 단일 처프 조회.
#[utoipa::path(
    get,
    path = "/api/chirps/{chirp_id}",
    params(("chirp_id" = String, Path, description = "처프 ID")),
    responses(
        (status = 200, description = "조회 성공", body = ChirpPayload),
        (status = 404, description = "처프 없음"),
        (status = 500, description = "잘못된 ID")
    ),
    tag = "chirps"
)]
pub async fn get_chirp(
    State(state): State<Arc<AppState>>,
    Path(chirp_id): Path<String>,
) -> ApiResult<Json<ChirpPayload>> {
    let chirp_id = parse_uuid(&chirp_id, "chirp_id")?;
    let chirp = state.chirps.get(chirp_id).await?;
    Ok(Json(ChirpPayload::from(&chirp)))
}

/// 처프 삭제.
#[utoipa::path(
    delete,
    path = "/api/chirps/{chirp_id}",
    params(("chirp_id" = String, Path, description = "처프 ID")),
    responses(
        (status = 204, description = "삭제 완료"),
        (status = 401, description = "인증 실패"),
        (status = 403, description = "작성자가 아님"),
        (status = 404, description = "처프 없음"),
        (status = 500, description = "잘못된 ID")
    ),
    security(("bearer_auth" = [])),
    tag = "chirps"
)]
pub async fn delete_chirp(
    State(state): State<Arc<AppState>>,
    auth: AuthUser,
    Path(chirp_id): Path<String>,
) -> ApiResult<StatusCode> {
    let chirp_id = parse_uuid(&chirp_id, "chirp_id")?;
    state.chirps.delete(auth.user_id, chirp_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// 처프 라우터 (`/api/chirps`에 마운트).
pub fn chirps_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(list_chirps).post(create_chirp))
        .route("/{chirp_id}", get(get_chirp).delete(delete_chirp))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_copies_author() {
        let author = Uuid::new_v4();
        let chirp = Chirp::new(author, "hello");
        let payload = ChirpPayload::from(&chirp);

        assert_eq!(payload.user_id, author);
        assert_eq!(payload.id, chirp.id);
        assert_eq!(payload.created_at, format_timestamp(&chirp.created_at));
    }

    #[test]
    fn test_parse_uuid_failure_is_internal() {
        let err = parse_uuid("nope", "chirp_id").unwrap_err();
        assert_eq!(err.0, ChirpyError::internal());
        assert!(parse_uuid(&Uuid::new_v4().to_string(), "chirp_id").is_ok());
    }
}
