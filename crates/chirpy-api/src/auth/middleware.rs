//! Axum용 인증 추출기.
//!
//! 핸들러 인자에서 사용하며, 본문 추출기보다 앞에 두어 인증이 JSON 파싱보다 먼저 검사되도록 합니다.

use std::sync::Arc;

use axum::{extract::FromRequestParts, http::request::Parts};
use chirpy_core::ChirpyError;
use secrecy::ExposeSecret;
use uuid::Uuid;

use super::{api_key, api_key_matches, bearer_token};
use crate::error::ApiError;
use crate::state::AppState;

/// Access Token 인증 추출기.
///
/// # 사용 예시
///
/// ```rust,ignore
/// async fn protected_handler(auth: AuthUser) -> impl IntoResponse {
///     format!("Authenticated user: {}", auth.user_id)
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// 토큰 subject
    pub user_id: Uuid,
    /// 제시된 원본 토큰
    pub token: String,
}

impl FromRequestParts<Arc<AppState>> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        let token = bearer_token(&parts.headers).map_err(|_| ChirpyError::unauthorized())?;

        let user_id = state.auth.authenticate(token)?;

        Ok(AuthUser {
            user_id,
            token: token.to_string(),
        })
    }
}

/// `Bearer` 헤더로 전달된 리프레시 토큰.
///
/// 헤더가 없으면 500을 반환합니다 (기존 클라이언트와의 호환 동작).
#[derive(Debug, Clone)]
pub struct RefreshBearer(pub String);

impl<S> FromRequestParts<S> for RefreshBearer
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        bearer_token(&parts.headers)
            .map(|token| RefreshBearer(token.to_string()))
            .map_err(|e| ApiError::from(ChirpyError::Internal(e.to_string())))
    }
}

/// 결제 제공자 웹훅 인증 추출기.
///
/// `Authorization: ApiKey <key>`를 설정된 키와 상수 시간으로 비교합니다.
#[derive(Debug, Clone, Copy)]
pub struct PolkaAuth;

impl FromRequestParts<Arc<AppState>> for PolkaAuth {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        let presented = api_key(&parts.headers).map_err(|_| ChirpyError::unauthorized())?;

        if api_key_matches(presented, state.polka_api_key.expose_secret()) {
            Ok(PolkaAuth)
        } else {
            tracing::warn!("Webhook rejected: API key mismatch");
            Err(ChirpyError::unauthorized().into())
        }
    }
}
