//! PostgreSQL 저장소.
//!
//! 각 trait 메서드는 해당 Repository의 단일 SQL 문으로 위임됩니다.

use async_trait::async_trait;
use chirpy_core::{
    Chirp, ChirpStore, RefreshToken, RefreshTokenStore, StoreResult, User, UserStore,
};
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use super::{ChirpRepository, RefreshTokenRepository, UserRepository};

/// sqlx 연결 풀 기반 저장소.
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// 내부 연결 풀을 반환합니다.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// 데이터베이스 마이그레이션을 실행합니다.
    pub async fn migrate(&self) -> Result<(), sqlx::migrate::MigrateError> {
        info!("Running database migrations...");
        sqlx::migrate!("../../migrations").run(&self.pool).await?;
        info!("Migrations completed successfully");
        Ok(())
    }
}

#[async_trait]
impl UserStore for PgStore {
    async fn create_user(&self, email: &str, hashed_password: &str) -> StoreResult<User> {
        Ok(UserRepository::create(&self.pool, email, hashed_password).await?)
    }

    async fn get_user_by_email(&self, email: &str) -> StoreResult<Option<User>> {
        Ok(UserRepository::get_by_email(&self.pool, email).await?)
    }

    async fn get_user(&self, id: Uuid) -> StoreResult<Option<User>> {
        Ok(UserRepository::get_by_id(&self.pool, id).await?)
    }

    async fn update_user(&self, id: Uuid, email: &str, hashed_password: &str) -> StoreResult<User> {
        Ok(UserRepository::update(&self.pool, id, email, hashed_password).await?)
    }

    async fn upgrade_user(&self, id: Uuid) -> StoreResult<User> {
        Ok(UserRepository::upgrade(&self.pool, id).await?)
    }

    async fn delete_users(&self) -> StoreResult<()> {
        let deleted = UserRepository::delete_all(&self.pool).await?;
        info!(deleted, "All users deleted");
        Ok(())
    }
}

#[async_trait]
impl RefreshTokenStore for PgStore {
    async fn create_refresh_token(
        &self,
        token: &str,
        user_id: Uuid,
        expires_at: DateTime<Utc>,
    ) -> StoreResult<RefreshToken> {
        Ok(RefreshTokenRepository::create(&self.pool, token, user_id, expires_at).await?)
    }

    async fn get_refresh_token(&self, token: &str) -> StoreResult<Option<RefreshToken>> {
        Ok(RefreshTokenRepository::get(&self.pool, token).await?)
    }

    async fn revoke_refresh_token(&self, token: &str, now: DateTime<Utc>) -> StoreResult<()> {
        RefreshTokenRepository::revoke(&self.pool, token, now).await?;
        Ok(())
    }
}

#[async_trait]
impl ChirpStore for PgStore {
    async fn create_chirp(&self, user_id: Uuid, body: &str) -> StoreResult<Chirp> {
        Ok(ChirpRepository::create(&self.pool, user_id, body).await?)
    }

    async fn list_chirps(&self) -> StoreResult<Vec<Chirp>> {
        Ok(ChirpRepository::get_all(&self.pool).await?)
    }

    async fn list_chirps_by_author(&self, user_id: Uuid) -> StoreResult<Vec<Chirp>> {
        Ok(ChirpRepository::get_by_author(&self.pool, user_id).await?)
    }

    async fn get_chirp(&self, id: Uuid) -> StoreResult<Option<Chirp>> {
        Ok(ChirpRepository::get_by_id(&self.pool, id).await?)
    }

    async fn delete_chirp(&self, id: Uuid, user_id: Uuid) -> StoreResult<u64> {
        Ok(ChirpRepository::delete_owned(&self.pool, id, user_id).await?)
    }
}
