//! 리프레시 토큰(세션) 도메인 모델.
//!
//! # 상태 전이
//!
//! ```text
//!         (login)            (revoke)
//!         ─────▶ ACTIVE ───────────────▶ REVOKED (terminal)
//!                  │
//!                  │ now ≥ expires_at
//!                  ▼
//!               EXPIRED (terminal)
//! ```
//!
//! REVOKED, EXPIRED에서 ACTIVE로 돌아갈 수 없으며 ACTIVE 토큰만 Access Token을 발급할 수 있습니다.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 리프레시 토큰 기본 수명 (일).
pub const REFRESH_TOKEN_TTL_DAYS: i64 = 60;

/// 저장된 리프레시 토큰.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx-support", derive(sqlx::FromRow))]
pub struct RefreshToken {
    /// 64자리 16진수 문자열 (기본 키)
    pub token: String,
    pub user_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    pub revoked_at: Option<DateTime<Utc>>,
}

/// 리프레시 토큰 상태.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshTokenState {
    Active,
    Revoked,
    Expired,
}

impl RefreshToken {
    /// 기본 수명(60일)으로 새 토큰 생성.
    pub fn new(token: impl Into<String>, user_id: Uuid, now: DateTime<Utc>) -> Self {
        Self::with_expiry(token, user_id, now, now + Self::default_ttl())
    }

    /// 만료 시각을 지정하여 새 토큰 생성.
    pub fn with_expiry(
        token: impl Into<String>,
        user_id: Uuid,
        now: DateTime<Utc>,
        expires_at: DateTime<Utc>,
    ) -> Self {
        Self {
            token: token.into(),
            user_id,
            created_at: now,
            updated_at: now,
            expires_at,
            revoked_at: None,
        }
    }

    pub fn default_ttl() -> Duration {
        Duration::days(REFRESH_TOKEN_TTL_DAYS)
    }

    /// 주어진 시각의 상태.
    ///
    /// 폐기가 만료보다 우선합니다 (둘 다 종료 상태).
    pub fn state_at(&self, now: DateTime<Utc>) -> RefreshTokenState {
        if self.revoked_at.is_some() {
            RefreshTokenState::Revoked
        } else if now >= self.expires_at {
            RefreshTokenState::Expired
        } else {
            RefreshTokenState::Active
        }
    }

    /// Access Token 발급 가능 여부.
    pub fn is_active_at(&self, now: DateTime<Utc>) -> bool {
        self.state_at(now) == RefreshTokenState::Active
    }

    /// 폐기 처리. 이미 폐기된 토큰의 `revoked_at`은 바뀌지 않습니다.
    pub fn revoke(&mut self, now: DateTime<Utc>) {
        if self.revoked_at.is_none() {
            self.revoked_at = Some(now);
            self.updated_at = now;
        }
    }
}
