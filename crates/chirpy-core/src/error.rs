//! 서비스 계층 에러 타입.
//!
//! 클라이언트에 노출되는 에러 종류는 이 모듈의 [`ChirpyError`]로 한정됩니다.
//! 각 변형은 응답 본문으로 사용되는 짧은 메시지를 담습니다.

use thiserror::Error;

use crate::store::StoreError;

/// 잘못된 JSON 또는 빈 본문.
pub const MSG_SOMETHING_WENT_WRONG: &str = "Something went wrong";
/// 140자를 넘는 처프.
pub const MSG_CHIRP_TOO_LONG: &str = "Chirp is too long";
pub const MSG_UNAUTHORIZED: &str = "Unauthorized";
pub const MSG_FORBIDDEN: &str = "Forbidden";
pub const MSG_NOT_FOUND: &str = "NotFound";
pub const MSG_INTERNAL: &str = "Internal Server Error";

/// 서비스 에러.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ChirpyError {
    /// 잘못된 요청 (400)
    #[error("잘못된 요청: {0}")]
    BadRequest(String),

    /// 인증 실패 (401)
    #[error("인증 실패: {0}")]
    Unauthorized(String),

    /// 권한 없음 (403)
    #[error("권한 없음: {0}")]
    Forbidden(String),

    /// 찾을 수 없음 (404)
    #[error("찾을 수 없음: {0}")]
    NotFound(String),

    /// 내부 에러 (500)
    #[error("내부 에러: {0}")]
    Internal(String),
}

/// 서비스 작업을 위한 Result 타입.
pub type ChirpyResult<T> = Result<T, ChirpyError>;

impl ChirpyError {
    pub fn bad_request() -> Self {
        Self::BadRequest(MSG_SOMETHING_WENT_WRONG.to_string())
    }

    pub fn unauthorized() -> Self {
        Self::Unauthorized(MSG_UNAUTHORIZED.to_string())
    }

    pub fn forbidden() -> Self {
        Self::Forbidden(MSG_FORBIDDEN.to_string())
    }

    pub fn not_found() -> Self {
        Self::NotFound(MSG_NOT_FOUND.to_string())
    }

    pub fn internal() -> Self {
        Self::Internal(MSG_INTERNAL.to_string())
    }

    /// HTTP 상태 코드.
    pub fn status_code(&self) -> u16 {
        match self {
            Self::BadRequest(_) => 400,
            Self::Unauthorized(_) => 401,
            Self::Forbidden(_) => 403,
            Self::NotFound(_) => 404,
            Self::Internal(_) => 500,
        }
    }

    /// 클라이언트에 반환할 메시지.
    pub fn public_message(&self) -> &str {
        match self {
            Self::BadRequest(msg)
            | Self::Unauthorized(msg)
            | Self::Forbidden(msg)
            | Self::NotFound(msg)
            | Self::Internal(msg) => msg,
        }
    }
}

impl From<StoreError> for ChirpyError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound => ChirpyError::not_found(),
            // 중복 이메일도 구분하지 않고 500으로 노출
            StoreError::UniqueViolation(_) | StoreError::Database(_) => ChirpyError::internal(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(ChirpyError::bad_request().status_code(), 400);
        assert_eq!(ChirpyError::unauthorized().status_code(), 401);
        assert_eq!(ChirpyError::forbidden().status_code(), 403);
        assert_eq!(ChirpyError::not_found().status_code(), 404);
        assert_eq!(ChirpyError::internal().status_code(), 500);
    }

    #[test]
    fn test_store_error_mapping() {
        assert_eq!(
            ChirpyError::from(StoreError::NotFound),
            ChirpyError::not_found()
        );
        assert_eq!(
            ChirpyError::from(StoreError::UniqueViolation("users_email_key".into())),
            ChirpyError::internal()
        );
        assert_eq!(
            ChirpyError::from(StoreError::Database("connection reset".into())),
            ChirpyError::internal()
        );
    }

    #[test]
    fn test_public_message() {
        let err = ChirpyError::BadRequest(MSG_CHIRP_TOO_LONG.to_string());
        assert_eq!(err.public_message(), "Chirp is too long");
        assert_eq!(ChirpyError::not_found().public_message(), "NotFound");
    }
}
