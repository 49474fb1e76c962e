//! 사용자 도메인 모델.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 등록된 사용자.
///
/// 이메일과 비밀번호는 본인만 변경할 수 있고, 삭제는 개발용 리셋에서만 일어납니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx-support", derive(sqlx::FromRow))]
pub struct User {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// 저장된 그대로 대소문자를 구분하는 고유 이메일
    pub email: String,
    /// PHC 형식 비밀번호 해시
    #[serde(skip_serializing)]
    pub hashed_password: String,
    /// 프리미엄(Chirpy Red) 여부
    pub is_chirpy_red: bool,
}

impl User {
    /// 새 사용자 생성 (기본값: 프리미엄 아님).
    pub fn new(email: impl Into<String>, hashed_password: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            created_at: now,
            updated_at: now,
            email: email.into(),
            hashed_password: hashed_password.into(),
            is_chirpy_red: false,
        }
    }
}
