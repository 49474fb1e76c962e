//! 도메인 모델.
//!
//! - [`User`]: 등록된 사용자
//! - [`RefreshToken`]: 로그인 세션 (불투명 리프레시 토큰)
//! - [`Chirp`]: 최대 140자의 짧은 게시글
//! - [`profanity`]: 비속어 마스킹 필터

pub mod chirp;
pub mod profanity;
pub mod refresh_token;
pub mod user;

pub use chirp::{sort_chirps, validate_chirp_body, Chirp, ChirpBodyError, SortOrder, MAX_CHIRP_LEN};
pub use profanity::{clean_profanity, PROFANE_MASK, PROFANE_WORDS};
pub use refresh_token::{RefreshToken, RefreshTokenState, REFRESH_TOKEN_TTL_DAYS};
pub use user::User;
