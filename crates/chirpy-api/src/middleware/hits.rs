//! `/app` 방문 카운터 middleware.

use std::sync::Arc;

use axum::{extract::Request, extract::State, middleware::Next, response::Response};

use crate::state::AppState;

/// 요청마다 방문 수를 1 증가시킨 뒤 다음 서비스로 넘깁니다.
///
/// 응답 상태와 무관하게 기록합니다.
pub async fn hits_layer(
    State(state): State<Arc<AppState>>,
    request: Request,
    next: Next,
) -> Response {
    state.record_hit();
    next.run(request).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
        middleware,
        routing::get,
        Router,
    };
    use tower::ServiceExt;

    use crate::state::create_test_state;

    #[tokio::test]
    async fn test_every_request_is_counted() {
        let state = Arc::new(create_test_state("dev"));
        let app = Router::new()
            .route("/", get(|| async { "Welcome" }))
            .layer(middleware::from_fn_with_state(state.clone(), hits_layer));

        for uri in ["/", "/", "/missing"] {
            let response = app
                .clone()
                .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
                .await
                .unwrap();
            assert_ne!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        }

        assert_eq!(state.hits(), 3);
    }
}
