//! Access Token 처리.
//!
//! HS256으로 서명된 단기 Access Token 발급/검증 로직.
//!
//! # 검증 순서
//!
//! 1. 형식 오류 → [`TokenError::Malformed`]
//! 2. 서명 불일치 → [`TokenError::SignatureInvalid`]
//! 3. `now >= exp` → [`TokenError::Expired`]
//! 4. `sub`가 UUID가 아님 → [`TokenError::SubjectInvalid`]
//! 5. 클레임 구조 불일치 → [`TokenError::UnknownClaims`]
//!
//! 시계 오차(leeway)는 허용하지 않습니다.

use chrono::{Duration, Utc};
use jsonwebtoken::{
    decode, decode_header, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header,
    Validation,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 토큰 발급자.
pub const TOKEN_ISSUER: &str = "chirpy";

/// Access Token 수명 (초).
pub const ACCESS_TOKEN_TTL_SECS: i64 = 60 * 60;

/// Access Token 페이로드.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Issuer - 항상 "chirpy"
    pub iss: String,
    /// Subject - 사용자 ID (하이픈 포함 소문자 UUID)
    pub sub: String,
    /// Issued At (Unix timestamp)
    pub iat: i64,
    /// Expiration (Unix timestamp)
    pub exp: i64,
}

impl Claims {
    /// 현재 시각 기준으로 새로운 Claims 생성.
    pub fn new(user_id: Uuid, ttl: Duration) -> Self {
        let now = Utc::now();
        Self {
            iss: TOKEN_ISSUER.to_string(),
            sub: user_id.to_string(),
            iat: now.timestamp(),
            exp: (now + ttl).timestamp(),
        }
    }
}

/// Access Token 기본 수명.
pub fn access_token_ttl() -> Duration {
    Duration::seconds(ACCESS_TOKEN_TTL_SECS)
}

/// Access Token 에러.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TokenError {
    #[error("잘못된 토큰 형식")]
    Malformed,
    #[error("토큰 서명이 유효하지 않습니다")]
    SignatureInvalid,
    #[error("토큰이 만료되었습니다")]
    Expired,
    #[error("failed to parse user UUID from subject")]
    SubjectInvalid,
    #[error("unknown claims type, cannot proceed")]
    UnknownClaims,
    #[error("토큰 인코딩 실패: {0}")]
    Encoding(String),
}

/// Access Token 발급.
///
/// # Arguments
///
/// * `user_id` - 사용자 ID
/// * `ttl` - 토큰 수명 (음수이면 이미 만료된 토큰)
/// * `secret` - HMAC 비밀 키
pub fn issue_access_token(user_id: Uuid, ttl: Duration, secret: &str) -> Result<String, TokenError> {
    encode_claims(&Claims::new(user_id, ttl), secret)
}

/// 임의의 Claims 인코딩.
pub fn encode_claims(claims: &Claims, secret: &str) -> Result<String, TokenError> {
    encode(
        &Header::new(Algorithm::HS256),
        claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| TokenError::Encoding(e.to_string()))
}

/// Access Token 검증 후 사용자 ID 반환.
pub fn validate_access_token(token: &str, secret: &str) -> Result<Uuid, TokenError> {
    // 헤더조차 읽을 수 없으면 형식 오류
    decode_header(token).map_err(|_| TokenError::Malformed)?;

    let mut validation = Validation::new(Algorithm::HS256);
    validation.leeway = 0;
    // 만료는 서명 검증 뒤 직접 확인
    validation.validate_exp = false;
    validation.set_issuer(&[TOKEN_ISSUER]);
    validation.set_required_spec_claims(&["exp", "iss", "sub"]);

    let data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .map_err(|e| match e.kind() {
        ErrorKind::InvalidSignature | ErrorKind::InvalidAlgorithm => TokenError::SignatureInvalid,
        ErrorKind::Json(_) | ErrorKind::InvalidIssuer | ErrorKind::MissingRequiredClaim(_) => {
            TokenError::UnknownClaims
        }
        _ => TokenError::Malformed,
    })?;

    if Utc::now().timestamp() >= data.claims.exp {
        return Err(TokenError::Expired);
    }

    Uuid::parse_str(&data.claims.sub).map_err(|_| TokenError::SubjectInvalid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const TEST_SECRET: &str = "test-secret-key-for-jwt-testing-minimum-32-chars";

    #[test]
    fn test_issue_and_validate() {
        let user_id = Uuid::new_v4();
        let token = issue_access_token(user_id, access_token_ttl(), TEST_SECRET).unwrap();

        assert_eq!(token.split('.').count(), 3);
        assert_eq!(validate_access_token(&token, TEST_SECRET).unwrap(), user_id);
    }

    #[test]
    fn test_wrong_secret() {
        let token = issue_access_token(Uuid::new_v4(), access_token_ttl(), TEST_SECRET).unwrap();
        let result = validate_access_token(&token, "wrong-secret-key-for-testing-minimum-32-chars");
        assert_eq!(result, Err(TokenError::SignatureInvalid));
    }

    #[test]
    fn test_expired_token() {
        let token = issue_access_token(Uuid::new_v4(), Duration::seconds(-1), TEST_SECRET).unwrap();
        assert_eq!(
            validate_access_token(&token, TEST_SECRET),
            Err(TokenError::Expired)
        );
    }

    #[test]
    fn test_expired_with_wrong_secret_reports_signature() {
        // 서명 검증이 만료 검사보다 먼저
        let token = issue_access_token(Uuid::new_v4(), Duration::seconds(-60), TEST_SECRET).unwrap();
        assert_eq!(
            validate_access_token(&token, "another-secret"),
            Err(TokenError::SignatureInvalid)
        );
    }

    #[test]
    fn test_malformed_token() {
        assert_eq!(
            validate_access_token("invalid.token.here", TEST_SECRET),
            Err(TokenError::Malformed)
        );
        assert_eq!(
            validate_access_token("not-a-jwt", TEST_SECRET),
            Err(TokenError::Malformed)
        );
        assert_eq!(validate_access_token("", TEST_SECRET), Err(TokenError::Malformed));
    }

    #[test]
    fn test_subject_must_be_uuid() {
        let mut claims = Claims::new(Uuid::new_v4(), access_token_ttl());
        claims.sub = "user123".to_string();
        let token = encode_claims(&claims, TEST_SECRET).unwrap();

        assert_eq!(
            validate_access_token(&token, TEST_SECRET),
            Err(TokenError::SubjectInvalid)
        );
    }

    #[test]
    fn test_wrong_issuer() {
        let mut claims = Claims::new(Uuid::new_v4(), access_token_ttl());
        claims.iss = "someone-else".to_string();
        let token = encode_claims(&claims, TEST_SECRET).unwrap();

        assert_eq!(
            validate_access_token(&token, TEST_SECRET),
            Err(TokenError::UnknownClaims)
        );
    }

    #[test]
    fn test_foreign_claims_shape() {
        #[derive(Serialize)]
        struct Foreign {
            iss: &'static str,
            sub: u64,
            exp: String,
        }

        let token = encode(
            &Header::new(Algorithm::HS256),
            &Foreign {
                iss: TOKEN_ISSUER,
                sub: 42,
                exp: "tomorrow".to_string(),
            },
            &EncodingKey::from_secret(TEST_SECRET.as_bytes()),
        )
        .unwrap();

        assert_eq!(
            validate_access_token(&token, TEST_SECRET),
            Err(TokenError::UnknownClaims)
        );
    }

    #[test]
    fn test_claims_lifetime() {
        let claims = Claims::new(Uuid::new_v4(), access_token_ttl());
        assert_eq!(claims.exp - claims.iat, 3600);
        assert_eq!(claims.iss, "chirpy");
    }

    proptest! {
        #[test]
        fn prop_validate_returns_issued_subject(
            bytes in any::<[u8; 16]>(),
            ttl_secs in 10i64..86_400,
            secret in "[a-zA-Z0-9]{1,64}",
        ) {
            let user_id = Uuid::from_bytes(bytes);
            let token = issue_access_token(user_id, Duration::seconds(ttl_secs), &secret).unwrap();
            prop_assert_eq!(validate_access_token(&token, &secret), Ok(user_id));
        }

        #[test]
        fn prop_other_secret_is_rejected(
            bytes in any::<[u8; 16]>(),
            secret in "[a-z]{8,32}",
            other in "[A-Z]{8,32}",
        ) {
            let token = issue_access_token(Uuid::from_bytes(bytes), access_token_ttl(), &secret).unwrap();
            prop_assert_eq!(
                validate_access_token(&token, &other),
                Err(TokenError::SignatureInvalid)
            );
        }
    }
}
