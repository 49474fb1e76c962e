//! 처프 저장소.
//!
//! 처프 작성, 조회, 작성자 조건부 삭제를 위한 데이터베이스 작업을 처리합니다.

use chirpy_core::Chirp;
use sqlx::PgPool;
use uuid::Uuid;

/// 처프 데이터베이스 작업을 위한 저장소.
pub struct ChirpRepository;

impl ChirpRepository {
    /// `user_id` 소유의 처프 생성.
    pub async fn create(pool: &PgPool, user_id: Uuid, body: &str) -> Result<Chirp, sqlx::Error> {
        sqlx::query_as::<_, Chirp>(
            r#"
            INSERT INTO chirps (id, created_at, updated_at, body, user_id)
            VALUES ($1, NOW(), NOW(), $2, $3)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(body)
        .bind(user_id)
        .fetch_one(pool)
        .await
    }

    /// 전체 처프 (오래된 순).
    pub async fn get_all(pool: &PgPool) -> Result<Vec<Chirp>, sqlx::Error> {
        sqlx::query_as::<_, Chirp>("SELECT * FROM chirps ORDER BY created_at ASC")
            .fetch_all(pool)
            .await
    }

    /// 특정 작성자의 처프 (오래된 순).
    pub async fn get_by_author(pool: &PgPool, user_id: Uuid) -> Result<Vec<Chirp>, sqlx::Error> {
        sqlx::query_as::<_, Chirp>(
            "SELECT * FROM chirps WHERE user_id = $1 ORDER BY created_at ASC",
        )
        .bind(user_id)
        .fetch_all(pool)
        .await
    }

    /// ID로 처프 조회.
    pub async fn get_by_id(pool: &PgPool, id: Uuid) -> Result<Option<Chirp>, sqlx::Error> {
        sqlx::query_as::<_, Chirp>("SELECT * FROM chirps WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// `user_id`가 소유한 경우에만 처프 삭제. 삭제된 행 수를 반환합니다.
    pub async fn delete_owned(pool: &PgPool, id: Uuid, user_id: Uuid) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM chirps WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected())
    }
}
