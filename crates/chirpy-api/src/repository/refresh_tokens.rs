//! 리프레시 토큰(세션) 저장소.

use chirpy_core::RefreshToken;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

/// 리프레시 토큰 데이터베이스 작업을 위한 저장소.
pub struct RefreshTokenRepository;

impl RefreshTokenRepository {
    /// 새로 발급한 토큰 저장.
    pub async fn create(
        pool: &PgPool,
        token: &str,
        user_id: Uuid,
        expires_at: DateTime<Utc>,
    ) -> Result<RefreshToken, sqlx::Error> {
        sqlx::query_as::<_, RefreshToken>(
            r#"
            INSERT INTO refresh_tokens (token, created_at, updated_at, user_id, expires_at, revoked_at)
            VALUES ($1, NOW(), NOW(), $2, $3, NULL)
            RETURNING *
            "#,
        )
        .bind(token)
        .bind(user_id)
        .bind(expires_at)
        .fetch_one(pool)
        .await
    }

    /// 토큰 문자열로 조회.
    pub async fn get(pool: &PgPool, token: &str) -> Result<Option<RefreshToken>, sqlx::Error> {
        sqlx::query_as::<_, RefreshToken>("SELECT * FROM refresh_tokens WHERE token = $1")
            .bind(token)
            .fetch_optional(pool)
            .await
    }

    /// `revoked_at`이 비어 있을 때만 기록합니다.
    pub async fn revoke(pool: &PgPool, token: &str, now: DateTime<Utc>) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            r#"
            UPDATE refresh_tokens
            SET revoked_at = $2, updated_at = $2
            WHERE token = $1 AND revoked_at IS NULL
            "#,
        )
        .bind(token)
        .bind(now)
        .execute(pool)
        .await?;

        Ok(result.rows_affected())
    }
}
