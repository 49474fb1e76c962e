//! HTTP 요청 metrics middleware.

use axum::{
    extract::{MatchedPath, Request},
    middleware::Next,
    response::Response,
};
use std::time::Instant;

use crate::metrics::{
    normalize_path, record_http_duration, record_http_request, record_http_response,
};

/// HTTP 메트릭을 수집하는 미들웨어 레이어.
///
/// 라우트 템플릿(`/api/chirps/{chirp_id}`)이 있으면 그대로 라벨로 쓰고,
/// 정적 파일처럼 매칭된 라우트가 없으면 경로의 UUID 세그먼트를 `{id}`로 바꿉니다.
pub async fn metrics_layer(request: Request, next: Next) -> Response {
    let start = Instant::now();

    let method = request.method().to_string();
    let path = match request.extensions().get::<MatchedPath>() {
        Some(matched) => matched.as_str().to_string(),
        None => normalize_path(request.uri().path()),
    };

    record_http_request(&method, &path);

    let response = next.run(request).await;

    record_http_response(&method, &path, response.status().as_u16());
    record_http_duration(&method, &path, start.elapsed().as_secs_f64());

    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Method, Request, StatusCode},
        middleware,
        routing::get,
        Router,
    };
    use tower::ServiceExt;

    async fn test_handler() -> &'static str {
        "OK"
    }

    #[tokio::test]
    async fn test_metrics_middleware_passes_response_through() {
        let app = Router::new()
            .route("/api/healthz", get(test_handler))
            .layer(middleware::from_fn(metrics_layer));

        let request = Request::builder()
            .method(Method::DELETE)
            .uri("/api/healthz")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }

    #[tokio::test]
    async fn test_metrics_middleware_with_uuid_segment() {
        let app = Router::new()
            .route("/api/chirps/{chirp_id}", get(test_handler))
            .layer(middleware::from_fn(metrics_layer));

        let request = Request::builder()
            .method(Method::GET)
            .uri("/api/chirps/123e4567-e89b-12d3-a456-426614174000")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }
}
