//! OpenAPI 문서화 설정.
//!
//! utoipa를 사용하여 REST API의 OpenAPI 3.0 스펙을 생성합니다.
//! Swagger UI는 `/swagger-ui` 경로에서 사용 가능합니다.
//!
//! 새로운 엔드포인트를 추가할 때:
//!
//! 1. 응답/요청 타입에 `#[derive(ToSchema)]` 추가
//! 2. 핸들러에 `#[utoipa::path(...)]` 어노테이션 추가
//! 3. 이 파일의 `components(schemas(...))` 및 `paths(...)` 섹션에 추가

use axum::Router;
use utoipa::openapi::security::{ApiKey, ApiKeyValue, HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};
use utoipa_swagger_ui::SwaggerUi;

use crate::routes::{
    ChirpPayload, ChirpRequest, CleanedBody, ComponentHealth, ComponentStatus, HealthResponse,
    LoginRequest, PolkaWebhook, PolkaWebhookData, TokenResponse, UserCredentials, UserPayload,
    ValidationError,
};

// ==================== OpenAPI 문서 정의 ====================

/// Chirpy API 문서.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Chirpy API",
        description = r#"
# Chirpy 마이크로블로그 REST API

## 인증

- 사용자 endpoint: `Authorization: Bearer <access token>` (1시간 유효)
- `/api/refresh`, `/api/revoke`: `Authorization: Bearer <refresh token>` (60일 유효)
- `/api/polka/webhooks`: `Authorization: ApiKey <key>`

에러 응답 본문은 짧은 평문 메시지입니다.
"#,
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:8080", description = "로컬 개발 서버"),
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "health", description = "헬스 체크"),
        (name = "users", description = "회원 가입 및 프로필"),
        (name = "sessions", description = "로그인, 토큰 재발급/폐기"),
        (name = "chirps", description = "처프 작성/조회/삭제"),
        (name = "webhooks", description = "결제 제공자 웹훅"),
        (name = "admin", description = "방문 수 및 개발용 리셋")
    ),
    // ==================== 스키마 등록 ====================
    components(
        schemas(
            // ===== Health =====
            HealthResponse,
            ComponentHealth,
            ComponentStatus,

            // ===== Users / Sessions =====
            UserCredentials,
            UserPayload,
            LoginRequest,
            TokenResponse,

            // ===== Chirps =====
            ChirpRequest,
            ChirpPayload,
            CleanedBody,
            ValidationError,

            // ===== Webhooks =====
            PolkaWebhook,
            PolkaWebhookData,
        )
    ),
    // ==================== 경로 등록 ====================
    paths(
        crate::routes::health::health_check,
        crate::routes::health::health_ready,

        crate::routes::users::create_user,
        crate::routes::users::update_user,

        crate::routes::sessions::login,
        crate::routes::sessions::refresh,
        crate::routes::sessions::revoke,

        crate::routes::chirps::create_chirp,
        crate::routes::chirps::list_chirps,
        crate::routes::chirps::get_chirp,
        crate::routes::chirps::delete_chirp,
        crate::routes::validate::validate_chirp,

        crate::routes::webhooks::polka_webhook,

        crate::routes::admin::metrics_page,
        crate::routes::admin::reset,
    )
)]
pub struct ApiDoc;

/// `bearer_auth`, `api_key` 보안 스킴 등록.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(HttpBuilder::new().scheme(HttpAuthScheme::Bearer).build()),
        );
        components.add_security_scheme(
            "api_key",
            SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::with_description(
                "Authorization",
                "ApiKey <key>",
            ))),
        );
    }
}

// ==================== Swagger UI 라우터 ====================

/// Swagger UI 라우터 생성.
///
/// - `/swagger-ui` - Swagger UI 대화형 문서
/// - `/api-docs/openapi.json` - OpenAPI JSON 스펙
pub fn swagger_ui_router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    SwaggerUi::new("/swagger-ui")
        .url("/api-docs/openapi.json", ApiDoc::openapi())
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_spec_lists_every_route() {
        let spec = ApiDoc::openapi();
        let json = serde_json::to_string_pretty(&spec).unwrap();

        assert!(json.contains("Chirpy API"));
        for path in [
            "/api/healthz",
            "/api/users",
            "/api/login",
            "/api/refresh",
            "/api/revoke",
            "/api/chirps/{chirp_id}",
            "/api/validate_chirp",
            "/api/polka/webhooks",
            "/admin/metrics",
            "/admin/reset",
        ] {
            assert!(json.contains(path), "missing {path}");
        }
    }

    #[test]
    fn test_openapi_contains_schemas_and_security() {
        let spec = ApiDoc::openapi();
        let json = serde_json::to_string(&spec).unwrap();

        assert!(json.contains("UserPayload"));
        assert!(json.contains("ChirpPayload"));
        assert!(json.contains("bearer_auth"));
        assert!(json.contains("api_key"));
    }

    #[test]
    fn test_swagger_ui_router_creates() {
        let _router: Router<()> = swagger_ui_router();
    }
}
