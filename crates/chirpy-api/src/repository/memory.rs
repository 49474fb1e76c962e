//! 인메모리 저장소.
//!
//! `DB_URL`이 없을 때와 테스트에서 사용합니다.
//! PostgreSQL 스키마와 같은 제약(고유 이메일, 외래 키, 연쇄 삭제)을 직접 적용합니다.

use std::collections::HashMap;

use async_trait::async_trait;
use chirpy_core::{
    Chirp, ChirpStore, RefreshToken, RefreshTokenStore, StoreError, StoreResult, User, UserStore,
};
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use uuid::Uuid;

#[derive(Default)]
struct Tables {
    users: HashMap<Uuid, User>,
    refresh_tokens: HashMap<String, RefreshToken>,
    /// 삽입 순서 유지
    chirps: Vec<Chirp>,
}

impl Tables {
    fn ensure_user(&self, user_id: Uuid) -> StoreResult<()> {
        if self.users.contains_key(&user_id) {
            Ok(())
        } else {
            Err(StoreError::Database(format!(
                "foreign key violation: user {} does not exist",
                user_id
            )))
        }
    }

    fn email_taken(&self, email: &str, except: Option<Uuid>) -> bool {
        self.users
            .values()
            .any(|u| u.email == email && Some(u.id) != except)
    }
}

/// `tokio::sync::RwLock` 기반 인메모리 저장소.
#[derive(Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn sorted_by_creation(mut chirps: Vec<Chirp>) -> Vec<Chirp> {
    chirps.sort_by(|a, b| a.created_at.cmp(&b.created_at));
    chirps
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn create_user(&self, email: &str, hashed_password: &str) -> StoreResult<User> {
        let mut tables = self.tables.write().await;
        if tables.email_taken(email, None) {
            return Err(StoreError::UniqueViolation("users_email_key".to_string()));
        }

        let user = User::new(email, hashed_password);
        tables.users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn get_user_by_email(&self, email: &str) -> StoreResult<Option<User>> {
        let tables = self.tables.read().await;
        Ok(tables.users.values().find(|u| u.email == email).cloned())
    }

    async fn get_user(&self, id: Uuid) -> StoreResult<Option<User>> {
        Ok(self.tables.read().await.users.get(&id).cloned())
    }

    async fn update_user(&self, id: Uuid, email: &str, hashed_password: &str) -> StoreResult<User> {
        let mut tables = self.tables.write().await;
        if tables.email_taken(email, Some(id)) {
            return Err(StoreError::UniqueViolation("users_email_key".to_string()));
        }

        let user = tables.users.get_mut(&id).ok_or(StoreError::NotFound)?;
        user.email = email.to_string();
        user.hashed_password = hashed_password.to_string();
        user.updated_at = Utc::now();
        Ok(user.clone())
    }

    async fn upgrade_user(&self, id: Uuid) -> StoreResult<User> {
        let mut tables = self.tables.write().await;
        let user = tables.users.get_mut(&id).ok_or(StoreError::NotFound)?;
        user.is_chirpy_red = true;
        user.updated_at = Utc::now();
        Ok(user.clone())
    }

    async fn delete_users(&self) -> StoreResult<()> {
        let mut tables = self.tables.write().await;
        // 연쇄 삭제
        tables.chirps.clear();
        tables.refresh_tokens.clear();
        tables.users.clear();
        Ok(())
    }
}

#[async_trait]
impl RefreshTokenStore for MemoryStore {
    async fn create_refresh_token(
        &self,
        token: &str,
        user_id: Uuid,
        expires_at: DateTime<Utc>,
    ) -> StoreResult<RefreshToken> {
        let mut tables = self.tables.write().await;
        tables.ensure_user(user_id)?;
        if tables.refresh_tokens.contains_key(token) {
            return Err(StoreError::UniqueViolation("refresh_tokens_pkey".to_string()));
        }

        let record = RefreshToken::with_expiry(token, user_id, Utc::now(), expires_at);
        tables
            .refresh_tokens
            .insert(record.token.clone(), record.clone());
        Ok(record)
    }

    async fn get_refresh_token(&self, token: &str) -> StoreResult<Option<RefreshToken>> {
        Ok(self.tables.read().await.refresh_tokens.get(token).cloned())
    }

    async fn revoke_refresh_token(&self, token: &str, now: DateTime<Utc>) -> StoreResult<()> {
        if let Some(record) = self.tables.write().await.refresh_tokens.get_mut(token) {
            record.revoke(now);
        }
        Ok(())
    }
}

#[async_trait]
impl ChirpStore for MemoryStore {
    async fn create_chirp(&self, user_id: Uuid, body: &str) -> StoreResult<Chirp> {
        let mut tables = self.tables.write().await;
        tables.ensure_user(user_id)?;

        let chirp = Chirp::new(user_id, body);
        tables.chirps.push(chirp.clone());
        Ok(chirp)
    }

    async fn list_chirps(&self) -> StoreResult<Vec<Chirp>> {
        Ok(sorted_by_creation(self.tables.read().await.chirps.clone()))
    }

    async fn list_chirps_by_author(&self, user_id: Uuid) -> StoreResult<Vec<Chirp>> {
        let tables = self.tables.read().await;
        let chirps = tables
            .chirps
            .iter()
            .filter(|c| c.user_id == user_id)
            .cloned()
            .collect();
        Ok(sorted_by_creation(chirps))
    }

    async fn get_chirp(&self, id: Uuid) -> StoreResult<Option<Chirp>> {
        let tables = self.tables.read().await;
        Ok(tables.chirps.iter().find(|c| c.id == id).cloned())
    }

    async fn delete_chirp(&self, id: Uuid, user_id: Uuid) -> StoreResult<u64> {
        let mut tables = self.tables.write().await;
        let before = tables.chirps.len();
        tables
            .chirps
            .retain(|c| !(c.id == id && c.user_id == user_id));
        Ok((before - tables.chirps.len()) as u64)
    }
}
