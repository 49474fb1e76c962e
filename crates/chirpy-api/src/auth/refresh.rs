//! 불투명 리프레시 토큰 생성.

use rand::{rngs::OsRng, RngCore};

/// 토큰 엔트로피 (바이트). 16진수로 인코딩하면 64자.
pub const REFRESH_TOKEN_BYTES: usize = 32;

/// OS 난수 생성기로 256비트 리프레시 토큰을 만듭니다.
pub fn make_refresh_token() -> String {
    let mut key = [0u8; REFRESH_TOKEN_BYTES];
    OsRng.fill_bytes(&mut key);
    hex::encode(key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_refresh_token_is_64_lowercase_hex() {
        for _ in 0..100 {
            let token = make_refresh_token();
            assert_eq!(token.len(), 64);
            assert!(token
                .chars()
                .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
            assert_eq!(hex::decode(&token).unwrap().len(), REFRESH_TOKEN_BYTES);
        }
    }

    #[test]
    fn test_refresh_tokens_are_unique() {
        let tokens: HashSet<String> = (0..1000).map(|_| make_refresh_token()).collect();
        assert_eq!(tokens.len(), 1000);
    }
}
