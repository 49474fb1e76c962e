//! 처프 도메인 모델 및 본문 규칙.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// 처프 본문 최대 길이 (문자 수).
pub const MAX_CHIRP_LEN: usize = 140;

/// 작성자가 만든 짧은 게시글.
///
/// 내용은 생성 후 변경되지 않으며 `user_id`도 바뀌지 않습니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx-support", derive(sqlx::FromRow))]
pub struct Chirp {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub body: String,
    pub user_id: Uuid,
}

impl Chirp {
    pub fn new(user_id: Uuid, body: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            created_at: now,
            updated_at: now,
            body: body.into(),
            user_id,
        }
    }
}

/// 본문 검증 에러.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ChirpBodyError {
    #[error("본문이 비어 있습니다")]
    Empty,
    #[error("본문이 너무 깁니다: {len}자 (최대 {MAX_CHIRP_LEN}자)")]
    TooLong { len: usize },
}

/// 본문 길이 검증 (1..=140 문자).
///
/// 길이는 바이트가 아닌 유니코드 스칼라 값 개수로 셉니다.
pub fn validate_chirp_body(body: &str) -> Result<(), ChirpBodyError> {
    let len = body.chars().count();
    if len == 0 {
        Err(ChirpBodyError::Empty)
    } else if len > MAX_CHIRP_LEN {
        Err(ChirpBodyError::TooLong { len })
    } else {
        Ok(())
    }
}

/// 목록 정렬 순서.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    /// `sort` 쿼리 파라미터 해석. `"desc"` 외의 값은 모두 기본값(오름차순)입니다.
    pub fn from_query(value: Option<&str>) -> Self {
        match value {
            Some("desc") => Self::Desc,
            _ => Self::Asc,
        }
    }
}

/// `created_at` 기준 안정 정렬.
pub fn sort_chirps(chirps: &mut [Chirp], order: SortOrder) {
    match order {
        SortOrder::Asc => chirps.sort_by(|a, b| a.created_at.cmp(&b.created_at)),
        SortOrder::Desc => chirps.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
    }
}
