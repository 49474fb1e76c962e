//! API 서버용 HTTP middleware.
//!
//! 요청 처리 파이프라인에 적용되는 middleware 모듈.

mod hits;
mod metrics;

pub use hits::hits_layer;
pub use metrics::metrics_layer;
