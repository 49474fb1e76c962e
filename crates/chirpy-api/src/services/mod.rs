//! 요청 단위 서비스 모듈.
//!
//! 핸들러는 요청을 해석한 뒤 이 모듈의 서비스를 호출합니다.
//! 서비스는 [`ChirpyError`] 집합으로만 실패합니다.

pub mod auth;
pub mod chirps;
pub mod upgrade;

pub use auth::{AuthService, LoginSession};
pub use chirps::{body_error_message, ChirpService};
pub use upgrade::{UpgradeService, WebhookOutcome, UPGRADE_EVENT};

use chirpy_core::{ChirpyError, StoreError};

/// 저장소 실패를 기록하고 500으로 변환합니다.
pub(crate) fn store_failure(operation: &'static str, err: StoreError) -> ChirpyError {
    tracing::error!(operation, error = %err, "Store operation failed");
    ChirpyError::internal()
}
