//! 결제 제공자(Polka) 웹훅 endpoint.
//!
//! `POST /api/polka/webhooks` - `Authorization: ApiKey <key>` 필요.

use std::sync::Arc;

use axum::{body::Bytes, extract::State, http::StatusCode};
use chirpy_core::ChirpyError;
use serde::{Deserialize, Serialize};
use tracing::warn;
use utoipa::ToSchema;

use crate::auth::PolkaAuth;
use crate::error::ApiResult;
use crate::state::AppState;

/// 웹훅 이벤트.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(default)]
pub struct PolkaWebhook {
    pub event: String,
    pub data: PolkaWebhookData,
}

#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(default)]
pub struct PolkaWebhookData {
    pub user_id: String,
}

/// 업그레이드 웹훅.
///
/// 본문을 해석할 수 없으면 500입니다.
#[utoipa::path(
    post,
    path = "/api/polka/webhooks",
    request_body = PolkaWebhook,
    responses(
        (status = 204, description = "처리 완료 또는 무시된 이벤트"),
        (status = 401, description = "API 키 불일치"),
        (status = 404, description = "사용자 없음"),
        (status = 500, description = "잘못된 본문 또는 사용자 ID")
    ),
    security(("api_key" = [])),
    tag = "webhooks"
)]
pub async fn polka_webhook(
    State(state): State<Arc<AppState>>,
    _auth: PolkaAuth,
    body: Bytes,
) -> ApiResult<StatusCode> {
    let webhook: PolkaWebhook = serde_json::from_slice(&body).map_err(|e| {
        warn!(error = %e, "Undecodable webhook body");
        ChirpyError::internal()
    })?;

    state
        .upgrades
        .handle(&webhook.event, &webhook.data.user_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_data_defaults_to_empty() {
        let webhook: PolkaWebhook = serde_json::from_str(r#"{"event":"user.upgraded"}"#).unwrap();
        assert_eq!(webhook.event, "user.upgraded");
        assert!(webhook.data.user_id.is_empty());
    }

    #[test]
    fn test_webhook_schema_carries_defaults() {
        use utoipa::PartialSchema;

        let schema = serde_json::to_value(PolkaWebhook::schema()).unwrap();
        assert!(schema.to_string().contains("event"));
        assert_eq!(
            serde_json::to_value(PolkaWebhook::default()).unwrap(),
            serde_json::json!({ "event": "", "data": { "user_id": "" } })
        );
    }
}
