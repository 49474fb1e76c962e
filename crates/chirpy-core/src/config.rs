//! 설정 관리.
//!
//! 기본값 → `config/default.toml`(선택) → 환경 변수 순서로 설정을 병합합니다.
//!
//! # 환경 변수
//!
//! - `DB_URL`: PostgreSQL 연결 문자열 (없으면 인메모리 저장소 사용)
//! - `PLATFORM`: `dev`일 때만 관리자 리셋 허용
//! - `TOKEN_SECRET`: Access Token 서명용 HMAC 키
//! - `POLKA_API_KEY`: 결제 제공자 웹훅 공유 비밀
//! - `CHIRPY__SERVER__PORT` 등: 그 밖의 중첩 키 오버라이드

use serde::{Deserialize, Serialize};
use std::path::Path;

/// 관리자 리셋을 허용하는 플랫폼 값.
pub const DEV_PLATFORM: &str = "dev";

/// `PLATFORM=dev`에서 `TOKEN_SECRET`이 비어 있을 때 사용하는 시크릿.
const DEV_TOKEN_SECRET: &str = "chirpy-dev-secret-change-in-production";

/// 애플리케이션 설정.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// 데이터베이스 연결 문자열
    #[serde(default)]
    pub db_url: Option<String>,
    /// 배포 플랫폼 ("dev"이면 개발 환경)
    #[serde(default)]
    pub platform: String,
    /// Access Token 서명 키
    #[serde(default)]
    pub token_secret: String,
    /// 웹훅 API 키
    #[serde(default)]
    pub polka_api_key: String,
    /// 서버 설정
    pub server: ServerConfig,
    /// 데이터베이스 풀 설정
    pub database: DatabaseConfig,
    /// 로깅 설정
    pub log: LoggingConfig,
    /// 검증 중 발견된 경고 (로깅 초기화 후 출력)
    #[serde(skip)]
    warnings: Vec<String>,
}

/// 서버 설정.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// 바인딩할 호스트
    pub host: String,
    /// 리스닝할 포트
    pub port: u16,
    /// `/app/` 아래에 마운트할 정적 파일 루트
    pub static_root: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            static_root: "./app".to_string(),
        }
    }
}

/// 데이터베이스 풀 설정.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    /// 최대 연결 수
    pub max_connections: u32,
    /// 연결 획득 타임아웃 (초)
    pub acquire_timeout_secs: u64,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            max_connections: 10,
            acquire_timeout_secs: 10,
        }
    }
}

/// 로깅 설정.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// 로그 레벨
    pub level: String,
    /// 로그 형식 (pretty, json, compact)
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

impl AppConfig {
    /// 파일과 프로세스 환경 변수에서 설정을 로드합니다.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, config::ConfigError> {
        Self::load_with(path, |key| std::env::var(key).ok())
    }

    /// 기본 경로에서 설정을 로드합니다.
    pub fn load_default() -> Result<Self, config::ConfigError> {
        Self::load("config/default")
    }

    /// 최상위 환경 변수 조회 함수를 주입하여 설정을 로드합니다.
    pub fn load_with<P, F>(path: P, lookup: F) -> Result<Self, config::ConfigError>
    where
        P: AsRef<Path>,
        F: Fn(&str) -> Option<String>,
    {
        let server = ServerConfig::default();
        let database = DatabaseConfig::default();
        let log = LoggingConfig::default();

        let builder = config::Config::builder()
            // 기본값으로 시작
            .set_default("platform", "")?
            .set_default("token_secret", "")?
            .set_default("polka_api_key", "")?
            .set_default("server.host", server.host)?
            .set_default("server.port", server.port as i64)?
            .set_default("server.static_root", server.static_root)?
            .set_default("database.max_connections", database.max_connections as i64)?
            .set_default(
                "database.acquire_timeout_secs",
                database.acquire_timeout_secs as i64,
            )?
            .set_default("log.level", log.level)?
            .set_default("log.format", log.format)?
            // 파일에서 로드 (없어도 됨)
            .add_source(config::File::with_name(&path.as_ref().to_string_lossy()).required(false))
            // 중첩 키 오버라이드
            .add_source(config::Environment::with_prefix("CHIRPY").separator("__"))
            // 배포 환경에서 쓰는 최상위 변수
            .set_override_option("db_url", lookup("DB_URL").filter(|v| !v.is_empty()))?
            .set_override_option("platform", lookup("PLATFORM"))?
            .set_override_option("token_secret", lookup("TOKEN_SECRET"))?
            .set_override_option("polka_api_key", lookup("POLKA_API_KEY"))?;

        let config: AppConfig = builder.build()?.try_deserialize()?;
        config.validate()
    }

    /// 로드 중 발견된 설정 경고.
    ///
    /// 로깅은 설정을 읽은 뒤에 초기화되므로 호출자가 출력합니다.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// 개발 플랫폼 여부.
    pub fn is_dev(&self) -> bool {
        self.platform == DEV_PLATFORM
    }

    /// 설정 검증.
    ///
    /// 운영 환경에서 `TOKEN_SECRET`이 비어 있으면 에러를 반환합니다.
    /// 개발 환경에서는 경고를 남기고 개발용 시크릿을 사용합니다.
    fn validate(mut self) -> Result<Self, config::ConfigError> {
        if self.token_secret.is_empty() {
            if !self.is_dev() {
                return Err(config::ConfigError::Message(
                    "TOKEN_SECRET must be set outside the dev platform".to_string(),
                ));
            }
            self.warnings.push(
                "TOKEN_SECRET not set, using default (INSECURE for development only)".to_string(),
            );
            self.token_secret = DEV_TOKEN_SECRET.to_string();
        }

        if self.polka_api_key.is_empty() {
            self.warnings
                .push("POLKA_API_KEY not set, upgrade webhook will reject every call".to_string());
        }

        Ok(self)
    }
}
