//! API 에러 응답.
//!
//! 서비스 에러([`ChirpyError`])를 HTTP 응답으로 변환합니다.
//! 응답 본문은 짧은 평문 메시지입니다.
//!
//! ```text
//! HTTP/1.1 401 Unauthorized
//! Content-Type: text/plain; charset=utf-8
//!
//! Unauthorized
//! ```

use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    http::{header::CONTENT_TYPE, StatusCode},
    response::{IntoResponse, Response},
};
use chirpy_core::{ChirpyError, StoreError};
use serde::de::DeserializeOwned;

/// HTTP 계층 에러.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError(pub ChirpyError);

impl ApiError {
    /// 응답 상태 코드.
    pub fn status(&self) -> StatusCode {
        StatusCode::from_u16(self.0.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.status().as_u16(), self.0)
    }
}

impl std::error::Error for ApiError {}

impl From<ChirpyError> for ApiError {
    fn from(err: ChirpyError) -> Self {
        Self(err)
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        Self(err.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status(),
            [(CONTENT_TYPE, "text/plain; charset=utf-8")],
            self.0.public_message().to_string(),
        )
            .into_response()
    }
}

/// API 핸들러 Result 타입 별칭.
pub type ApiResult<T> = Result<T, ApiError>;

/// JSON 본문 추출기.
///
/// `axum::Json`과 달리 Content-Type을 검사하지 않으며,
/// 본문을 읽지 못하거나 JSON으로 해석할 수 없으면 400 `Something went wrong`으로 응답합니다.
#[derive(Debug, Clone)]
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state).await.map_err(|rejection| {
            tracing::debug!(error = %rejection.body_text(), "Failed to read request body");
            ApiError::from(ChirpyError::bad_request())
        })?;

        serde_json::from_slice(&bytes).map(JsonBody).map_err(|e| {
            tracing::debug!(error = %e, "Rejected JSON body");
            ChirpyError::bad_request().into()
        })
    }
}
