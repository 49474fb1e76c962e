//! 비밀번호 해싱 유틸리티.
//!
//! Argon2 기반 비밀번호 해싱 및 검증.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

/// 비밀번호 처리 에러.
#[derive(Debug, thiserror::Error)]
pub enum PasswordError {
    #[error("비밀번호 해싱 실패")]
    HashingFailed,
    #[error("비밀번호 불일치")]
    Mismatch,
    #[error("잘못된 해시 형식")]
    InvalidHashFormat,
}

/// 비밀번호 해싱.
///
/// Argon2id 알고리즘을 사용하며 해시마다 새 솔트를 생성합니다.
///
/// # Returns
///
/// PHC 형식의 해시 문자열 (솔트 포함)
///
/// # Example
///
/// ```rust,ignore
/// let hash = hash_password("pw1").unwrap();
/// // "$argon2id$v=19$m=19456,t=2,p=1$..."
/// ```
pub fn hash_password(password: &str) -> Result<String, PasswordError> {
    let salt = SaltString::generate(&mut OsRng);

    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|_| PasswordError::HashingFailed)?;

    Ok(hash.to_string())
}

/// 비밀번호 검증.
///
/// 저장된 해시와 입력된 비밀번호를 상수 시간으로 비교합니다.
///
/// # Returns
///
/// 비밀번호가 일치하면 Ok(()), 불일치하면 [`PasswordError::Mismatch`]
pub fn verify_password(password: &str, hash: &str) -> Result<(), PasswordError> {
    let parsed_hash = PasswordHash::new(hash).map_err(|_| PasswordError::InvalidHashFormat)?;

    Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .map_err(|_| PasswordError::Mismatch)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_hash_and_verify_password() {
        let password = "TestPassword123!";
        let hash = hash_password(password).unwrap();

        // 해시 형식 확인 (argon2id)
        assert!(hash.starts_with("$argon2id$"));

        assert!(verify_password(password, &hash).is_ok());
        assert!(matches!(
            verify_password("WrongPassword123!", &hash),
            Err(PasswordError::Mismatch)
        ));
    }

    #[test]
    fn test_different_salts() {
        let hash1 = hash_password("pw1").unwrap();
        let hash2 = hash_password("pw1").unwrap();

        // 같은 비밀번호라도 솔트가 다르므로 해시가 다름
        assert_ne!(hash1, hash2);
        assert!(verify_password("pw1", &hash1).is_ok());
        assert!(verify_password("pw1", &hash2).is_ok());
    }

    #[test]
    fn test_invalid_hash_format() {
        let result = verify_password("password", "not-a-valid-hash");
        assert!(matches!(result, Err(PasswordError::InvalidHashFormat)));
    }

    #[test]
    fn test_empty_and_unicode_password() {
        let hash = hash_password("").unwrap();
        assert!(verify_password("", &hash).is_ok());
        assert!(verify_password(" ", &hash).is_err());

        let password = "한글패스워드123";
        let hash = hash_password(password).unwrap();
        assert!(verify_password(password, &hash).is_ok());
    }

    proptest! {
        // Argon2는 느리므로 케이스 수를 줄임
        #![proptest_config(ProptestConfig::with_cases(8))]

        #[test]
        fn prop_hash_verifies_only_original(password in ".{0,32}", other in ".{0,32}") {
            let hash = hash_password(&password).unwrap();
            prop_assert!(verify_password(&password, &hash).is_ok());
            if other != password {
                prop_assert!(verify_password(&other, &hash).is_err());
            }
        }
    }
}
