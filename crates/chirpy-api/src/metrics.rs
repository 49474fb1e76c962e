//! Prometheus 메트릭 설정 및 유틸리티.
//!
//! HTTP 요청 메트릭과 인증/처프/웹훅 이벤트 카운터를 수집하고 `/metrics`로 노출합니다.
//! `/admin/metrics`의 방문 카운터와는 별개입니다.

use metrics::{counter, histogram};
use metrics_exporter_prometheus::{BuildError, Matcher, PrometheusBuilder, PrometheusHandle};
use uuid::Uuid;

/// Prometheus 메트릭 레코더를 설치하고 핸들을 반환합니다.
///
/// # Errors
///
/// 레코더가 이미 설치되어 있으면 에러를 반환합니다.
pub fn setup_metrics_recorder() -> Result<PrometheusHandle, BuildError> {
    PrometheusBuilder::new()
        .set_buckets_for_metric(
            Matcher::Full("http_request_duration_seconds".to_string()),
            &[0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0],
        )?
        .install_recorder()
}

// ============================================================================
// HTTP 메트릭
// ============================================================================

/// HTTP 요청 카운터 증가.
pub fn record_http_request(method: &str, path: &str) {
    counter!("http_requests_total", "method" => method.to_string(), "path" => path.to_string())
        .increment(1);
}

/// HTTP 응답 카운터 증가.
pub fn record_http_response(method: &str, path: &str, status: u16) {
    counter!(
        "http_responses_total",
        "method" => method.to_string(),
        "path" => path.to_string(),
        "status" => status.to_string()
    )
    .increment(1);
}

/// HTTP 요청 지속 시간 기록.
pub fn record_http_duration(method: &str, path: &str, duration_secs: f64) {
    histogram!(
        "http_request_duration_seconds",
        "method" => method.to_string(),
        "path" => path.to_string()
    )
    .record(duration_secs);
}

// ============================================================================
// 도메인 이벤트
// ============================================================================

/// 로그인 시도 (`outcome`: "success" | "failure").
pub fn record_login(outcome: &'static str) {
    counter!("chirpy_logins_total", "outcome" => outcome).increment(1);
}

/// 처프 생성.
pub fn record_chirp_created() {
    counter!("chirpy_chirps_created_total").increment(1);
}

/// 웹훅 처리 결과 (`outcome`: "upgraded" | "ignored").
pub fn record_webhook(outcome: &'static str) {
    counter!("chirpy_webhooks_total", "outcome" => outcome).increment(1);
}

// ============================================================================
// 경로 정규화
// ============================================================================

/// UUID 세그먼트를 `{id}`로 바꿔 라벨 카디널리티를 제한합니다.
///
/// 예: `/api/chirps/123e4567-e89b-12d3-a456-426614174000` → `/api/chirps/{id}`
pub fn normalize_path(path: &str) -> String {
    path.split('/')
        .map(|segment| {
            if Uuid::parse_str(segment).is_ok() {
                "{id}"
            } else {
                segment
            }
        })
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_path_uuid() {
        let path = "/api/chirps/123e4567-e89b-12d3-a456-426614174000";
        assert_eq!(normalize_path(path), "/api/chirps/{id}");
    }

    #[test]
    fn test_normalize_path_keeps_plain_segments() {
        assert_eq!(normalize_path("/api/chirps"), "/api/chirps");
        assert_eq!(normalize_path("/app/assets/logo.png"), "/app/assets/logo.png");
        assert_eq!(normalize_path("/app/12345"), "/app/12345");
    }
}
