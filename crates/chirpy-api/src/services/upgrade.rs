//! 결제 제공자(Polka) 업그레이드 웹훅 처리.

use std::sync::Arc;

use chirpy_core::{ChirpyError, ChirpyResult, StoreError, UserStore};
use tracing::{info, warn};
use uuid::Uuid;

use super::store_failure;
use crate::metrics::record_webhook;

/// 처리 대상 이벤트. 그 외 이벤트는 무시합니다.
pub const UPGRADE_EVENT: &str = "user.upgraded";

/// 웹훅 처리 결과 (둘 다 204로 응답).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WebhookOutcome {
    Upgraded,
    Ignored,
}

/// 프리미엄 업그레이드 서비스.
pub struct UpgradeService {
    users: Arc<dyn UserStore>,
}

impl UpgradeService {
    pub fn new(users: Arc<dyn UserStore>) -> Self {
        Self { users }
    }

    /// 웹훅 이벤트 처리.
    ///
    /// - 다른 이벤트 → `Ignored`
    /// - UUID가 아닌 `user_id` → 500
    /// - 없는 사용자 → 404
    pub async fn handle(&self, event: &str, user_id: &str) -> ChirpyResult<WebhookOutcome> {
        if event != UPGRADE_EVENT {
            info!(event, "Webhook event ignored");
            record_webhook("ignored");
            return Ok(WebhookOutcome::Ignored);
        }

        let user_id = Uuid::parse_str(user_id).map_err(|e| {
            warn!(error = %e, "Webhook carried an invalid user id");
            ChirpyError::internal()
        })?;

        match self.users.upgrade_user(user_id).await {
            Ok(_) => {
                info!(event, user_id = %user_id, "User upgraded to Chirpy Red");
                record_webhook("upgraded");
                Ok(WebhookOutcome::Upgraded)
            }
            Err(StoreError::NotFound) => {
                warn!(event, user_id = %user_id, "Webhook for unknown user");
                Err(ChirpyError::not_found())
            }
            Err(e) => Err(store_failure("upgrade_user", e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MemoryStore;

    #[tokio::test]
    async fn test_upgrade_event() {
        let store = Arc::new(MemoryStore::new());
        let user = store.create_user("a@x", "hash").await.unwrap();
        let service = UpgradeService::new(store.clone());

        let outcome = service
            .handle("user.upgraded", &user.id.to_string())
            .await
            .unwrap();
        assert_eq!(outcome, WebhookOutcome::Upgraded);
        assert!(store.get_user(user.id).await.unwrap().unwrap().is_chirpy_red);
    }

    #[tokio::test]
    async fn test_other_events_are_ignored() {
        let store = Arc::new(MemoryStore::new());
        let user = store.create_user("a@x", "hash").await.unwrap();
        let service = UpgradeService::new(store.clone());

        let outcome = service
            .handle("user.downgraded", &user.id.to_string())
            .await
            .unwrap();
        assert_eq!(outcome, WebhookOutcome::Ignored);
        assert!(!store.get_user(user.id).await.unwrap().unwrap().is_chirpy_red);

        // 무시되는 이벤트는 user_id를 해석하지 않음
        assert_eq!(
            service.handle("user.deleted", "garbage").await.unwrap(),
            WebhookOutcome::Ignored
        );
    }

    #[tokio::test]
    async fn test_upgrade_errors() {
        let service = UpgradeService::new(Arc::new(MemoryStore::new()));

        assert_eq!(
            service
                .handle(UPGRADE_EVENT, &Uuid::new_v4().to_string())
                .await
                .unwrap_err(),
            ChirpyError::not_found()
        );
        assert_eq!(
            service.handle(UPGRADE_EVENT, "not-a-uuid").await.unwrap_err(),
            ChirpyError::internal()
        );
    }
}
