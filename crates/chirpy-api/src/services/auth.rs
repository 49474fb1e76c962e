//! 인증 및 세션 수명 주기 서비스.
//!
//! 사용자와 리프레시 토큰의 생성/변경은 이 서비스만 수행합니다.

use std::sync::Arc;

use chirpy_core::{
    ChirpyError, ChirpyResult, RefreshToken, RefreshTokenState, RefreshTokenStore, StoreError, User,
    UserStore,
};
use chrono::Utc;
use secrecy::{ExposeSecret, SecretString};
use tracing::{debug, info, warn};
use uuid::Uuid;

use super::store_failure;
use crate::auth::{
    access_token_ttl, hash_password, issue_access_token, make_refresh_token,
    validate_access_token, verify_password,
};
use crate::metrics::record_login;

/// 로그인 결과.
#[derive(Debug, Clone)]
pub struct LoginSession {
    pub user: User,
    /// 1시간짜리 Access Token
    pub token: String,
    /// 60일짜리 리프레시 토큰
    pub refresh_token: String,
}

/// 인증 서비스.
pub struct AuthService {
    users: Arc<dyn UserStore>,
    refresh_tokens: Arc<dyn RefreshTokenStore>,
    token_secret: SecretString,
}

impl AuthService {
    pub fn new(
        users: Arc<dyn UserStore>,
        refresh_tokens: Arc<dyn RefreshTokenStore>,
        token_secret: SecretString,
    ) -> Self {
        Self {
            users,
            refresh_tokens,
            token_secret,
        }
    }

    /// 사용자 등록.
    ///
    /// 중복 이메일은 구분하지 않고 500으로 응답합니다.
    pub async fn register(&self, email: &str, password: &str) -> ChirpyResult<User> {
        let hashed = hash_blocking(password.to_string()).await?;

        let user = self
            .users
            .create_user(email, &hashed)
            .await
            .map_err(|e| store_failure("create_user", e))?;

        info!(user_id = %user.id, "User registered");
        Ok(user)
    }

    /// 로그인: Access Token 발급 및 리프레시 토큰 저장.
    pub async fn login(&self, email: &str, password: &str) -> ChirpyResult<LoginSession> {
        let user = self
            .users
            .get_user_by_email(email)
            .await
            .map_err(|e| store_failure("get_user_by_email", e))?
            .ok_or_else(|| {
                warn!("Login failed: unknown email");
                record_login("failure");
                ChirpyError::unauthorized()
            })?;

        if let Err(e) = verify_blocking(password.to_string(), user.hashed_password.clone()).await? {
            warn!(user_id = %user.id, error = %e, "Login failed");
            record_login("failure");
            return Err(ChirpyError::unauthorized());
        }

        let token = self.issue_token(user.id)?;

        let expires_at = Utc::now() + RefreshToken::default_ttl();
        let session = self
            .refresh_tokens
            .create_refresh_token(&make_refresh_token(), user.id, expires_at)
            .await
            .map_err(|e| store_failure("create_refresh_token", e))?;

        info!(user_id = %user.id, "User logged in");
        record_login("success");
        Ok(LoginSession {
            user,
            token,
            refresh_token: session.token,
        })
    }

    /// 활성 리프레시 토큰으로 새 Access Token 발급.
    ///
    /// 리프레시 토큰은 교체되지 않습니다.
    pub async fn refresh(&self, refresh_token: &str) -> ChirpyResult<String> {
        let Some(session) = self
            .refresh_tokens
            .get_refresh_token(refresh_token)
            .await
            .map_err(|e| store_failure("get_refresh_token", e))?
        else {
            debug!("Refresh denied: unknown token");
            return Err(ChirpyError::unauthorized());
        };

        let state = session.state_at(Utc::now());
        if state != RefreshTokenState::Active {
            debug!(user_id = %session.user_id, ?state, "Refresh denied");
            return Err(ChirpyError::unauthorized());
        }

        self.issue_token(session.user_id)
    }

    /// 리프레시 토큰 폐기 (멱등).
    pub async fn revoke(&self, refresh_token: &str) -> ChirpyResult<()> {
        self.refresh_tokens
            .revoke_refresh_token(refresh_token, Utc::now())
            .await
            .map_err(|e| store_failure("revoke_refresh_token", e))?;

        info!("Refresh token revoked");
        Ok(())
    }

    /// Access Token 검증 후 사용자 ID 반환.
    pub fn authenticate(&self, access_token: &str) -> ChirpyResult<Uuid> {
        validate_access_token(access_token, self.token_secret.expose_secret()).map_err(|e| {
            debug!(error = %e, "Access token rejected");
            ChirpyError::unauthorized()
        })
    }

    /// 이메일과 비밀번호 변경.
    ///
    /// 토큰의 사용자가 더 이상 존재하지 않으면 401입니다.
    pub async fn update_profile(
        &self,
        user_id: Uuid,
        email: &str,
        password: &str,
    ) -> ChirpyResult<User> {
        let hashed = hash_blocking(password.to_string()).await?;

        let user = self
            .users
            .update_user(user_id, email, &hashed)
            .await
            .map_err(|e| match e {
                StoreError::NotFound => ChirpyError::unauthorized(),
                other => store_failure("update_user", other),
            })?;

        info!(user_id = %user.id, "User profile updated");
        Ok(user)
    }

    fn issue_token(&self, user_id: Uuid) -> ChirpyResult<String> {
        issue_access_token(user_id, access_token_ttl(), self.token_secret.expose_secret()).map_err(
            |e| {
                tracing::error!(error = %e, "Failed to issue access token");
                ChirpyError::internal()
            },
        )
    }
}

/// Argon2 해싱은 CPU 집약적이므로 blocking thread pool에서 실행합니다.
async fn hash_blocking(password: String) -> ChirpyResult<String> {
    tokio::task::spawn_blocking(move || hash_password(&password))
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Password hashing task failed");
            ChirpyError::internal()
        })?
        .map_err(|e| {
            tracing::error!(error = %e, "Password hashing failed");
            ChirpyError::internal()
        })
}

async fn verify_blocking(
    password: String,
    hash: String,
) -> ChirpyResult<Result<(), crate::auth::PasswordError>> {
    tokio::task::spawn_blocking(move || verify_password(&password, &hash))
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Password verification task failed");
            ChirpyError::internal()
        })
}
