//! API 라우트.
//!
//! # 라우트 구조
//!
//! - `/api/healthz` - 헬스 체크 (liveness), `/api/healthz/ready` (readiness)
//! - `/api/users` - 회원 가입, 프로필 변경
//! - `/api/login`, `/api/refresh`, `/api/revoke` - 세션
//! - `/api/chirps` - 처프 작성/조회/삭제
//! - `/api/validate_chirp` - 본문 검증 및 비속어 마스킹
//! - `/api/polka/webhooks` - 결제 제공자 웹훅
//! - `/admin/metrics`, `/admin/reset` - 관리자

pub mod admin;
pub mod chirps;
pub mod health;
pub mod sessions;
pub mod users;
pub mod validate;
pub mod webhooks;

pub use admin::admin_router;
pub use chirps::{chirps_router, ChirpPayload, ChirpRequest, ListChirpsQuery};
pub use health::{health_router, ComponentHealth, ComponentStatus, HealthResponse};
pub use sessions::{sessions_router, LoginRequest, TokenResponse};
pub use users::{users_router, UserCredentials, UserPayload};
pub use validate::{validate_chirp, CleanedBody, ValidationError};
pub use webhooks::{polka_webhook, PolkaWebhook, PolkaWebhookData};

use axum::{routing::post, Router};
use std::sync::Arc;

use crate::state::AppState;

/// 전체 API 라우터 생성.
///
/// 정적 파일(`/app`)과 `/metrics`는 [`crate::create_router`]에서 조합합니다.
pub fn create_api_router() -> Router<Arc<AppState>> {
    Router::new()
        .nest("/api/healthz", health_router())
        .nest("/api/users", users_router())
        .nest("/api", sessions_router())
        .nest("/api/chirps", chirps_router())
        .route("/api/validate_chirp", post(validate_chirp))
        .route("/api/polka/webhooks", post(polka_webhook))
        .nest("/admin", admin_router())
}
