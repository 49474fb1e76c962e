//! 처프 서비스.
//!
//! 작성/조회/삭제와 소유권 규칙을 담당합니다.

use std::sync::Arc;

use chirpy_core::{
    sort_chirps, validate_chirp_body, Chirp, ChirpBodyError, ChirpStore, ChirpyError,
    ChirpyResult, SortOrder, MSG_CHIRP_TOO_LONG, MSG_SOMETHING_WENT_WRONG,
};
use tracing::{debug, info};
use uuid::Uuid;

use super::store_failure;
use crate::metrics::record_chirp_created;

/// 본문 검증 에러를 400 응답 메시지로 변환합니다.
pub fn body_error_message(err: ChirpBodyError) -> &'static str {
    match err {
        ChirpBodyError::Empty => MSG_SOMETHING_WENT_WRONG,
        ChirpBodyError::TooLong { .. } => MSG_CHIRP_TOO_LONG,
    }
}

/// 처프 서비스.
pub struct ChirpService {
    chirps: Arc<dyn ChirpStore>,
}

impl ChirpService {
    pub fn new(chirps: Arc<dyn ChirpStore>) -> Self {
        Self { chirps }
    }

    /// 인증된 작성자의 처프 생성.
    pub async fn create(&self, author_id: Uuid, body: &str) -> ChirpyResult<Chirp> {
        validate_chirp_body(body)
            .map_err(|e| ChirpyError::BadRequest(body_error_message(e).to_string()))?;

        let chirp = self
            .chirps
            .create_chirp(author_id, body)
            .await
            .map_err(|e| store_failure("create_chirp", e))?;

        info!(chirp_id = %chirp.id, user_id = %author_id, "Chirp created");
        record_chirp_created();
        Ok(chirp)
    }

    /// 처프 목록.
    ///
    /// `author_id`가 있으면 해당 작성자만, 정렬은 `created_at` 기준입니다.
    pub async fn list(&self, author_id: Option<Uuid>, order: SortOrder) -> ChirpyResult<Vec<Chirp>> {
        let mut chirps = match author_id {
            Some(user_id) => self.chirps.list_chirps_by_author(user_id).await,
            None => self.chirps.list_chirps().await,
        }
        .map_err(|e| store_failure("list_chirps", e))?;

        sort_chirps(&mut chirps, order);
        Ok(chirps)
    }

    /// 단일 처프 조회.
    pub async fn get(&self, id: Uuid) -> ChirpyResult<Chirp> {
        self.chirps
            .get_chirp(id)
            .await
            .map_err(|e| store_failure("get_chirp", e))?
            .ok_or_else(ChirpyError::not_found)
    }

    /// 작성자 본인만 삭제할 수 있습니다.
    ///
    /// 조건부 삭제가 0행이면 존재 여부로 404/403을 구분합니다.
    pub async fn delete(&self, caller_id: Uuid, chirp_id: Uuid) -> ChirpyResult<()> {
        let deleted = self
            .chirps
            .delete_chirp(chirp_id, caller_id)
            .await
            .map_err(|e| store_failure("delete_chirp", e))?;

        if deleted > 0 {
            info!(chirp_id = %chirp_id, user_id = %caller_id, "Chirp deleted");
            return Ok(());
        }

        match self.chirps.get_chirp(chirp_id).await {
            Ok(Some(_)) => {
                debug!(chirp_id = %chirp_id, user_id = %caller_id, "Delete denied: not the author");
                Err(ChirpyError::forbidden())
            }
            Ok(None) => Err(ChirpyError::not_found()),
            Err(e) => Err(store_failure("get_chirp", e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MemoryStore;
    use chirpy_core::UserStore;

    async fn setup() -> (ChirpService, Uuid, Uuid) {
        let store = Arc::new(MemoryStore::new());
        let a = store.create_user("a@x", "hash").await.unwrap();
        let b = store.create_user("b@x", "hash").await.unwrap();
        (ChirpService::new(store), a.id, b.id)
    }

    #[tokio::test]
    async fn test_body_length_limits() {
        let (service, a, _) = setup().await;

        assert_eq!(
            service.create(a, "").await.unwrap_err(),
            ChirpyError::BadRequest("Something went wrong".to_string())
        );
        assert_eq!(
            service.create(a, &"x".repeat(141)).await.unwrap_err(),
            ChirpyError::BadRequest("Chirp is too long".to_string())
        );
        assert!(service.create(a, "x").await.is_ok());
        assert!(service.create(a, &"x".repeat(140)).await.is_ok());
    }

    #[tokio::test]
    async fn test_list_filter_and_order() {
        let (service, a, b) = setup().await;
        service.create(a, "first").await.unwrap();
        service.create(b, "second").await.unwrap();
        service.create(a, "third").await.unwrap();

        let all = service.list(None, SortOrder::Asc).await.unwrap();
        assert_eq!(all.len(), 3);
        assert!(all.windows(2).all(|w| w[0].created_at <= w[1].created_at));

        let desc = service.list(None, SortOrder::Desc).await.unwrap();
        assert!(desc.windows(2).all(|w| w[0].created_at >= w[1].created_at));

        let by_a = service.list(Some(a), SortOrder::Asc).await.unwrap();
        assert_eq!(by_a.len(), 2);
        assert!(by_a.iter().all(|c| c.user_id == a));

        assert!(service.list(Some(Uuid::new_v4()), SortOrder::Asc).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_ownership() {
        let (service, a, b) = setup().await;
        let chirp = service.create(a, "mine").await.unwrap();

        assert_eq!(service.delete(b, chirp.id).await.unwrap_err(), ChirpyError::forbidden());
        assert_eq!(
            service.delete(b, Uuid::new_v4()).await.unwrap_err(),
            ChirpyError::not_found()
        );

        service.delete(a, chirp.id).await.unwrap();
        assert_eq!(service.get(chirp.id).await.unwrap_err(), ChirpyError::not_found());
        assert_eq!(service.delete(a, chirp.id).await.unwrap_err(), ChirpyError::not_found());
    }

    #[tokio::test]
    async fn test_get_keeps_author() {
        let (service, a, _) = setup().await;
        let chirp = service.create(a, "hello").await.unwrap();

        let fetched = service.get(chirp.id).await.unwrap();
        assert_eq!(fetched.user_id, a);
        assert_eq!(fetched.body, "hello");
    }
}
