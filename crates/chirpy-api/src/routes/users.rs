//! 사용자 등록 및 프로필 변경 endpoint.
//!
//! - `POST /api/users` - 회원 가입
//! - `PUT /api/users` - 본인 이메일/비밀번호 변경 (Access Token 필요)

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use chirpy_core::{ChirpyError, User};
use serde::{Deserialize, Serialize};
use tracing::debug;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::auth::AuthUser;
use crate::error::{ApiResult, JsonBody};
use crate::state::AppState;
use crate::utils::format_timestamp;

/// 이메일/비밀번호 요청 본문.
///
/// 누락된 필드는 빈 문자열로 취급합니다.
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
#[serde(default)]
pub struct UserCredentials {
    #[validate(length(min = 1))]
    pub email: String,
    pub password: String,
}

impl UserCredentials {
    /// 검증 실패는 400 `Something went wrong`.
    pub(crate) fn validated(self) -> ApiResult<Self> {
        self.validate().map_err(|e| {
            debug!(error = %e, "Rejected credentials");
            ChirpyError::bad_request()
        })?;
        Ok(self)
    }
}

/// 사용자 응답. 비밀번호 해시는 포함하지 않습니다.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserPayload {
    pub id: Uuid,
    pub created_at: String,
    pub updated_at: String,
    pub email: String,
    pub is_chirpy_red: bool,
    /// 로그인 응답에만 포함
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    /// 로그인 응답에만 포함
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
}

impl From<&User> for UserPayload {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            created_at: format_timestamp(&user.created_at),
            updated_at: format_timestamp(&user.updated_at),
            email: user.email.clone(),
            is_chirpy_red: user.is_chirpy_red,
            token: None,
            refresh_token: None,
        }
    }
}

/// 회원 가입.
#[utoipa::path(
    post,
    path = "/api/users",
    request_body = UserCredentials,
    responses(
        (status = 201, description = "가입 성공", body = UserPayload),
        (status = 400, description = "잘못된 요청"),
        (status = 500, description = "중복 이메일 또는 서버 오류")
    ),
    tag = "users"
)]
pub async fn create_user(
    State(state): State<Arc<AppState>>,
    JsonBody(credentials): JsonBody<UserCredentials>,
) -> ApiResult<(StatusCode, Json<UserPayload>)> {
    let credentials = credentials.validated()?;
    let user = state
        .auth
        .register(&credentials.email, &credentials.password)
        .await?;

    Ok((StatusCode::CREATED, Json(UserPayload::from(&user))))
}

/// 본인 이메일과 비밀번호 변경.
#[utoipa::path(
    put,
    path = "/api/users",
    request_body = UserCredentials,
    responses(
        (status = 200, description = "변경 성공 (제시한 Access Token 포함)", body = UserPayload),
        (status = 400, description = "잘못된 요청"),
        (status = 401, description = "인증 실패")
    ),
    security(("bearer_auth" = [])),
    tag = "users"
)]
pub async fn update_user(
    State(state): State<Arc<AppState>>,
    auth: AuthUser,
    JsonBody(credentials): JsonBody<UserCredentials>,
) -> ApiResult<Json<UserPayload>> {
    let credentials = credentials.validated()?;
    let user = state
        .auth
        .update_profile(auth.user_id, &credentials.email, &credentials.password)
        .await?;

    let mut payload = UserPayload::from(&user);
    payload.token = Some(auth.token);
    Ok(Json(payload))
}

/// 사용자 라우터 (`/api/users`에 마운트).
pub fn users_router() -> Router<Arc<AppState>> {
    Router::new().route("/", post(create_user).put(update_user))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_default_to_empty() {
        let credentials: UserCredentials = serde_json::from_str(r#"{"password":"pw"}"#).unwrap();
        assert_eq!(credentials.email, "");
        assert!(credentials.validated().is_err());

        let credentials: UserCredentials =
            serde_json::from_str(r#"{"email":"a@x","password":""}"#).unwrap();
        assert!(credentials.validated().is_ok());
    }

    #[test]
    fn test_payload_omits_absent_tokens() {
        let user = User::new("a@x", "hash");
        let json = serde_json::to_value(UserPayload::from(&user)).unwrap();

        assert_eq!(json["email"], "a@x");
        assert_eq!(json["is_chirpy_red"], false);
        assert!(json.get("token").is_none());
        assert!(json.get("refresh_token").is_none());
        assert!(json.get("hashed_password").is_none());
        assert_eq!(json["id"], user.id.to_string());
    }
}
