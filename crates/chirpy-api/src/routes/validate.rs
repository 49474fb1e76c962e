//! 처프 본문 검증 endpoint.
//!
//! `POST /api/validate_chirp` - 길이 검증 후 비속어를 마스킹한 본문을 돌려줍니다.
//! 검증 에러는 다른 endpoint와 달리 JSON `{error}`로 응답합니다.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chirpy_core::{clean_profanity, validate_chirp_body};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::chirps::ChirpRequest;
use crate::error::JsonBody;
use crate::services::body_error_message;

/// 마스킹된 본문.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CleanedBody {
    pub cleaned_body: String,
}

/// 검증 실패 응답.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ValidationError {
    pub error: String,
}

/// 처프 본문 검증.
#[utoipa::path(
    post,
    path = "/api/validate_chirp",
    request_body = ChirpRequest,
    responses(
        (status = 200, description = "검증 통과", body = CleanedBody),
        (status = 400, description = "빈 본문 또는 140자 초과", body = ValidationError)
    ),
    tag = "chirps"
)]
pub async fn validate_chirp(JsonBody(request): JsonBody<ChirpRequest>) -> Response {
    match validate_chirp_body(&request.body) {
        Ok(()) => Json(CleanedBody {
            cleaned_body: clean_profanity(&request.body),
        })
        .into_response(),
        Err(e) => (
            StatusCode::BAD_REQUEST,
            Json(ValidationError {
                error: body_error_message(e).to_string(),
            }),
        )
            .into_response(),
    }
}
