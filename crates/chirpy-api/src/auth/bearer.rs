//! `Authorization` 헤더 파싱.
//!
//! - `Authorization: Bearer <token>`: Access Token 또는 Refresh Token
//! - `Authorization: ApiKey <key>`: 결제 제공자 웹훅

use axum::http::{header::AUTHORIZATION, HeaderMap};
use hmac::{Hmac, Mac};
use sha2::Sha256;

/// 사용자 토큰 접두사.
pub const BEARER_PREFIX: &str = "Bearer ";

/// 웹훅 API 키 접두사.
pub const API_KEY_PREFIX: &str = "ApiKey ";

/// 헤더 추출 에러.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BearerError {
    #[error("missing bearer in header")]
    MissingBearer,
}

/// `Bearer ` 뒤의 토큰을 반환합니다.
pub fn bearer_token(headers: &HeaderMap) -> Result<&str, BearerError> {
    scheme_suffix(headers, BEARER_PREFIX)
}

/// `ApiKey ` 뒤의 키를 반환합니다.
pub fn api_key(headers: &HeaderMap) -> Result<&str, BearerError> {
    scheme_suffix(headers, API_KEY_PREFIX)
}

/// 헤더가 없거나, 접두사가 다르거나, 접미사가 비어 있으면 `MissingBearer`.
fn scheme_suffix<'a>(headers: &'a HeaderMap, prefix: &str) -> Result<&'a str, BearerError> {
    headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix(prefix))
        .filter(|suffix| !suffix.is_empty())
        .ok_or(BearerError::MissingBearer)
}

type HmacSha256 = Hmac<Sha256>;

/// 제시된 API 키와 설정된 키를 상수 시간으로 비교합니다.
///
/// 두 값을 같은 키로 HMAC한 뒤 태그를 비교하므로 길이 차이도 드러나지 않습니다.
/// 설정된 키가 비어 있으면 항상 `false`입니다.
pub fn api_key_matches(presented: &str, expected: &str) -> bool {
    if expected.is_empty() {
        return false;
    }

    let Ok(mut expected_mac) = HmacSha256::new_from_slice(expected.as_bytes()) else {
        return false;
    };
    expected_mac.update(expected.as_bytes());
    let expected_tag = expected_mac.finalize().into_bytes();

    let Ok(mut presented_mac) = HmacSha256::new_from_slice(expected.as_bytes()) else {
        return false;
    };
    presented_mac.update(presented.as_bytes());
    presented_mac.verify_slice(&expected_tag).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn test_bearer_token() {
        assert_eq!(bearer_token(&headers("Bearer abc.def.ghi")), Ok("abc.def.ghi"));
        assert_eq!(bearer_token(&HeaderMap::new()), Err(BearerError::MissingBearer));
        assert_eq!(bearer_token(&headers("")), Err(BearerError::MissingBearer));
        assert_eq!(bearer_token(&headers("Bearer ")), Err(BearerError::MissingBearer));
        assert_eq!(bearer_token(&headers("ApiKey abc")), Err(BearerError::MissingBearer));
        // 접두사는 대소문자를 구분
        assert_eq!(bearer_token(&headers("bearer abc")), Err(BearerError::MissingBearer));
    }

    #[test]
    fn test_api_key() {
        assert_eq!(api_key(&headers("ApiKey f271c81ff7084")), Ok("f271c81ff7084"));
        assert_eq!(api_key(&headers("Bearer f271c81ff7084")), Err(BearerError::MissingBearer));
        assert_eq!(api_key(&HeaderMap::new()), Err(BearerError::MissingBearer));
    }

    #[test]
    fn test_api_key_matches() {
        assert!(api_key_matches("f271c81ff7084", "f271c81ff7084"));
        assert!(!api_key_matches("f271c81ff7085", "f271c81ff7084"));
        assert!(!api_key_matches("f271c81ff708", "f271c81ff7084"));
        assert!(!api_key_matches("", "f271c81ff7084"));
        // 키가 설정되지 않았으면 모두 거부
        assert!(!api_key_matches("", ""));
        assert!(!api_key_matches("anything", ""));
    }
}
