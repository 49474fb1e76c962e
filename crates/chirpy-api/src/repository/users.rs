//! 사용자 저장소.
//!
//! 사용자 생성, 조회, 수정, 전체 삭제를 위한 데이터베이스 작업을 처리합니다.

use chirpy_core::User;
use sqlx::PgPool;
use uuid::Uuid;

/// 사용자 데이터베이스 작업을 위한 저장소.
pub struct UserRepository;

impl UserRepository {
    /// 새 사용자 생성. 이메일이 중복되면 unique 위반으로 실패합니다.
    pub async fn create(
        pool: &PgPool,
        email: &str,
        hashed_password: &str,
    ) -> Result<User, sqlx::Error> {
        sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (id, created_at, updated_at, email, hashed_password)
            VALUES ($1, NOW(), NOW(), $2, $3)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(email)
        .bind(hashed_password)
        .fetch_one(pool)
        .await
    }

    /// 이메일로 사용자 조회 (대소문자 구분).
    pub async fn get_by_email(pool: &PgPool, email: &str) -> Result<Option<User>, sqlx::Error> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE email = $1")
            .bind(email)
            .fetch_optional(pool)
            .await
    }

    /// ID로 사용자 조회.
    pub async fn get_by_id(pool: &PgPool, id: Uuid) -> Result<Option<User>, sqlx::Error> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// 이메일과 비밀번호 해시 교체.
    pub async fn update(
        pool: &PgPool,
        id: Uuid,
        email: &str,
        hashed_password: &str,
    ) -> Result<User, sqlx::Error> {
        sqlx::query_as::<_, User>(
            r#"
            UPDATE users
            SET email = $2, hashed_password = $3, updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(email)
        .bind(hashed_password)
        .fetch_one(pool)
        .await
    }

    /// Chirpy Red 플래그 설정.
    pub async fn upgrade(pool: &PgPool, id: Uuid) -> Result<User, sqlx::Error> {
        sqlx::query_as::<_, User>(
            r#"
            UPDATE users
            SET is_chirpy_red = TRUE, updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .fetch_one(pool)
        .await
    }

    /// 모든 사용자 삭제. 세션과 처프는 FK cascade로 함께 삭제됩니다.
    pub async fn delete_all(pool: &PgPool) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM users").execute(pool).await?;
        Ok(result.rows_affected())
    }
}
