//! 모든 핸들러에서 공유되는 애플리케이션 상태.
//!
//! AppState는 `Arc`로 래핑되어 요청 간에 공유됩니다.
//! 요청 사이에 공유되는 가변 상태는 방문 카운터 하나뿐입니다.

use std::sync::atomic::{AtomicI32, Ordering};
use std::sync::Arc;

use chirpy_core::{AppConfig, ChirpStore, RefreshTokenStore, UserStore, DEV_PLATFORM};
use secrecy::SecretString;

use crate::services::{AuthService, ChirpService, UpgradeService};

/// 애플리케이션 공유 상태.
pub struct AppState {
    /// 등록/로그인/세션 관리
    pub auth: AuthService,

    /// 처프 작성/조회/삭제
    pub chirps: ChirpService,

    /// 결제 제공자 웹훅
    pub upgrades: UpgradeService,

    /// 관리자 리셋용 사용자 저장소
    pub users: Arc<dyn UserStore>,

    /// 배포 플랫폼 ("dev"이면 리셋 허용)
    pub platform: String,

    /// 웹훅 공유 비밀
    pub polka_api_key: SecretString,

    /// 데이터베이스 연결 풀 (인메모리 저장소 사용 시 None)
    pub db_pool: Option<sqlx::PgPool>,

    /// `/app` 방문 카운터
    hits: AtomicI32,

    /// 서버 시작 시간 (업타임 계산용)
    pub started_at: chrono::DateTime<chrono::Utc>,

    /// API 버전
    pub version: String,
}

impl AppState {
    /// 새로운 AppState 생성.
    ///
    /// # 인자
    /// * `store` - 사용자/세션/처프 저장소를 모두 구현한 저장소
    /// * `platform` - 배포 플랫폼
    /// * `token_secret` - Access Token 서명 키
    /// * `polka_api_key` - 웹훅 API 키
    pub fn new<S>(
        store: Arc<S>,
        platform: impl Into<String>,
        token_secret: SecretString,
        polka_api_key: SecretString,
    ) -> Self
    where
        S: UserStore + RefreshTokenStore + ChirpStore + 'static,
    {
        Self {
            auth: AuthService::new(store.clone(), store.clone(), token_secret),
            chirps: ChirpService::new(store.clone()),
            upgrades: UpgradeService::new(store.clone()),
            users: store,
            platform: platform.into(),
            polka_api_key,
            db_pool: None,
            hits: AtomicI32::new(0),
            started_at: chrono::Utc::now(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }

    /// 설정에서 AppState 생성.
    pub fn from_config<S>(config: &AppConfig, store: Arc<S>) -> Self
    where
        S: UserStore + RefreshTokenStore + ChirpStore + 'static,
    {
        Self::new(
            store,
            config.platform.clone(),
            SecretString::from(config.token_secret.clone()),
            SecretString::from(config.polka_api_key.clone()),
        )
    }

    /// 데이터베이스 연결 설정.
    pub fn with_db_pool(mut self, pool: sqlx::PgPool) -> Self {
        self.db_pool = Some(pool);
        self
    }

    /// 개발 플랫폼 여부.
    pub fn is_dev(&self) -> bool {
        self.platform == DEV_PLATFORM
    }

    /// 방문 1회 기록.
    pub fn record_hit(&self) {
        self.hits.fetch_add(1, Ordering::Relaxed);
    }

    /// 현재 방문 수.
    pub fn hits(&self) -> i32 {
        self.hits.load(Ordering::Relaxed)
    }

    /// 방문 수 초기화.
    pub fn reset_hits(&self) {
        self.hits.store(0, Ordering::Relaxed);
    }

    /// 서버 업타임 (초).
    pub fn uptime_secs(&self) -> i64 {
        (chrono::Utc::now() - self.started_at).num_seconds()
    }

    /// DB 연결 상태 확인. 인메모리 저장소면 항상 true.
    pub async fn is_db_healthy(&self) -> bool {
        match &self.db_pool {
            Some(pool) => sqlx::query("SELECT 1").execute(pool).await.is_ok(),
            None => true,
        }
    }
}

/// 테스트용 AppState 생성 (인메모리 저장소).
#[cfg(test)]
pub fn create_test_state(platform: &str) -> AppState {
    AppState::new(
        Arc::new(crate::repository::MemoryStore::new()),
        platform,
        SecretString::from("test-secret-key-for-state".to_string()),
        SecretString::from("f271c81ff7084ee5b99a5091b42d486e".to_string()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hit_counter() {
        let state = create_test_state("dev");
        assert_eq!(state.hits(), 0);

        state.record_hit();
        state.record_hit();
        assert_eq!(state.hits(), 2);

        state.reset_hits();
        assert_eq!(state.hits(), 0);
    }

    #[test]
    fn test_is_dev() {
        assert!(create_test_state("dev").is_dev());
        assert!(!create_test_state("prod").is_dev());
        assert!(!create_test_state("").is_dev());
    }

    #[tokio::test]
    async fn test_in_memory_db_is_healthy() {
        let state = create_test_state("dev");
        assert!(state.db_pool.is_none());
        assert!(state.is_db_healthy().await);
    }
}
