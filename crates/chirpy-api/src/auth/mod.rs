//! 인증 기본 요소.
//!
//! # 구성 요소
//!
//! - [`hash_password`] / [`verify_password`]: Argon2 비밀번호 해싱
//! - [`issue_access_token`] / [`validate_access_token`]: HS256 Access Token
//! - [`make_refresh_token`]: 64자리 16진수 리프레시 토큰
//! - [`bearer_token`] / [`api_key`]: `Authorization` 헤더 파싱
//! - [`AuthUser`], [`RefreshBearer`], [`PolkaAuth`]: Axum 추출기

mod bearer;
mod jwt;
mod middleware;
mod password;
mod refresh;

pub use bearer::{api_key, api_key_matches, bearer_token, BearerError, API_KEY_PREFIX, BEARER_PREFIX};
pub use jwt::{
    access_token_ttl, encode_claims, issue_access_token, validate_access_token, Claims, TokenError,
    ACCESS_TOKEN_TTL_SECS, TOKEN_ISSUER,
};
pub use middleware::{AuthUser, PolkaAuth, RefreshBearer};
pub use password::{hash_password, verify_password, PasswordError};
pub use refresh::{make_refresh_token, REFRESH_TOKEN_BYTES};
