//! 로그인 및 세션 endpoint.
//!
//! - `POST /api/login` - Access Token + 리프레시 토큰 발급
//! - `POST /api/refresh` - 리프레시 토큰으로 Access Token 재발급
//! - `POST /api/revoke` - 리프레시 토큰 폐기

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use serde::{Deserialize, Serialize};
use tracing::debug;
use utoipa::ToSchema;

use super::users::UserPayload;
use crate::auth::RefreshBearer;
use crate::error::{ApiResult, JsonBody};
use crate::state::AppState;

/// 로그인 요청.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
    /// 구 클라이언트 호환용. Access Token 수명은 항상 1시간입니다.
    pub expires_in_seconds: Option<i64>,
}

/// 재발급된 Access Token.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct TokenResponse {
    pub token: String,
}

/// 로그인.
#[utoipa::path(
    post,
    path = "/api/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "로그인 성공", body = UserPayload),
        (status = 400, description = "잘못된 요청"),
        (status = 401, description = "이메일 또는 비밀번호 불일치")
    ),
    tag = "sessions"
)]
pub async fn login(
    State(state): State<Arc<AppState>>,
    JsonBody(request): JsonBody<LoginRequest>,
) -> ApiResult<Json<UserPayload>> {
    if let Some(requested) = request.expires_in_seconds {
        debug!(requested, "Ignoring requested access token lifetime");
    }

    let session = state.auth.login(&request.email, &request.password).await?;

    let mut payload = UserPayload::from(&session.user);
    payload.token = Some(session.token);
    payload.refresh_token = Some(session.refresh_token);
    Ok(Json(payload))
}

/// Access Token 재발급. 리프레시 토큰은 그대로 유지됩니다.
#[utoipa::path(
    post,
    path = "/api/refresh",
    responses(
        (status = 200, description = "재발급 성공", body = TokenResponse),
        (status = 401, description = "알 수 없거나 만료/폐기된 토큰"),
        (status = 500, description = "Bearer 헤더 누락")
    ),
    security(("bearer_auth" = [])),
    tag = "sessions"
)]
pub async fn refresh(
    State(state): State<Arc<AppState>>,
    RefreshBearer(refresh_token): RefreshBearer,
) -> ApiResult<Json<TokenResponse>> {
    let token = state.auth.refresh(&refresh_token).await?;
    Ok(Json(TokenResponse { token }))
}

/// 리프레시 토큰 폐기. 알 수 없는 토큰도 204입니다.
#[utoipa::path(
    post,
    path = "/api/revoke",
    responses(
        (status = 204, description = "폐기 완료"),
        (status = 500, description = "Bearer 헤더 누락")
    ),
    security(("bearer_auth" = [])),
    tag = "sessions"
)]
pub async fn revoke(
    State(state): State<Arc<AppState>>,
    RefreshBearer(refresh_token): RefreshBearer,
) -> ApiResult<StatusCode> {
    state.auth.revoke(&refresh_token).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// 세션 라우터 (`/api`에 마운트).
pub fn sessions_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/login", post(login))
        .route("/refresh", post(refresh))
        .route("/revoke", post(revoke))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_request_tolerates_legacy_field() {
        let request: LoginRequest =
            serde_json::from_str(r#"{"email":"a@x","password":"pw","expires_in_seconds":60}"#)
                .unwrap();
        assert_eq!(request.expires_in_seconds, Some(60));

        let request: LoginRequest = serde_json::from_str("{}").unwrap();
        assert!(request.email.is_empty() && request.password.is_empty());
        assert!(request.expires_in_seconds.is_none());
    }
}
