//! 저장소 계약.
//!
//! 사용자, 세션(리프레시 토큰), 처프 저장소에 대한 저장소 중립적인 인터페이스입니다.
//! 각 메서드는 단일 SQL 문에 대응하며, 다중 문 트랜잭션은 사용하지 않습니다.
//!
//! 구현체는 `chirpy-api`의 `PgStore`(PostgreSQL)와 `MemoryStore`(인메모리)입니다.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use thiserror::Error;
use uuid::Uuid;

use crate::domain::{Chirp, RefreshToken, User};

// =============================================================================
// 에러 타입
// =============================================================================

/// 저장소 에러.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// 대상 레코드 없음
    #[error("레코드를 찾을 수 없음")]
    NotFound,

    /// 고유 제약 조건 위반 (예: 중복 이메일)
    #[error("고유 제약 조건 위반: {0}")]
    UniqueViolation(String),

    /// 기타 데이터베이스 에러
    #[error("데이터베이스 에러: {0}")]
    Database(String),
}

/// 저장소 작업을 위한 Result 타입.
pub type StoreResult<T> = Result<T, StoreError>;

#[cfg(feature = "sqlx-support")]
impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => StoreError::NotFound,
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                StoreError::UniqueViolation(db.message().to_string())
            }
            other => StoreError::Database(other.to_string()),
        }
    }
}

// =============================================================================
// Store Traits
// =============================================================================

/// 사용자 저장소.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// 사용자 생성. 이메일 중복 시 `UniqueViolation`.
    async fn create_user(&self, email: &str, hashed_password: &str) -> StoreResult<User>;

    /// 이메일로 사용자 조회.
    async fn get_user_by_email(&self, email: &str) -> StoreResult<Option<User>>;

    /// ID로 사용자 조회.
    async fn get_user(&self, id: Uuid) -> StoreResult<Option<User>>;

    /// 이메일과 비밀번호 해시 갱신. 사용자가 없으면 `NotFound`.
    async fn update_user(&self, id: Uuid, email: &str, hashed_password: &str) -> StoreResult<User>;

    /// 프리미엄(Chirpy Red) 플래그 설정. 사용자가 없으면 `NotFound`.
    async fn upgrade_user(&self, id: Uuid) -> StoreResult<User>;

    /// 모든 사용자 삭제 (세션과 처프까지 연쇄 삭제).
    async fn delete_users(&self) -> StoreResult<()>;
}

/// 리프레시 토큰(세션) 저장소.
#[async_trait]
pub trait RefreshTokenStore: Send + Sync {
    /// 리프레시 토큰 저장.
    async fn create_refresh_token(
        &self,
        token: &str,
        user_id: Uuid,
        expires_at: DateTime<Utc>,
    ) -> StoreResult<RefreshToken>;

    /// 토큰 문자열로 조회.
    async fn get_refresh_token(&self, token: &str) -> StoreResult<Option<RefreshToken>>;

    /// `revoked_at`이 비어 있을 때만 `now`로 설정합니다.
    ///
    /// 이미 폐기되었거나 존재하지 않는 토큰은 아무 것도 하지 않습니다.
    async fn revoke_refresh_token(&self, token: &str, now: DateTime<Utc>) -> StoreResult<()>;
}

/// 처프 저장소.
#[async_trait]
pub trait ChirpStore: Send + Sync {
    /// 처프 생성.
    async fn create_chirp(&self, user_id: Uuid, body: &str) -> StoreResult<Chirp>;

    /// 전체 처프 조회 (`created_at` 오름차순).
    async fn list_chirps(&self) -> StoreResult<Vec<Chirp>>;

    /// 작성자별 처프 조회 (`created_at` 오름차순).
    async fn list_chirps_by_author(&self, user_id: Uuid) -> StoreResult<Vec<Chirp>>;

    /// ID로 처프 조회.
    async fn get_chirp(&self, id: Uuid) -> StoreResult<Option<Chirp>>;

    /// `id`와 `user_id`가 모두 일치할 때만 삭제하고 영향받은 행 수를 반환합니다.
    async fn delete_chirp(&self, id: Uuid, user_id: Uuid) -> StoreResult<u64>;
}
