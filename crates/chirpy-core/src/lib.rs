//! # Chirpy Core
//!
//! Chirpy 마이크로블로그 백엔드의 핵심 도메인 모델 및 계약을 제공합니다.
//!
//! 이 크레이트는 HTTP 계층과 무관한 기본 타입을 제공합니다:
//! - 사용자, 리프레시 토큰, 처프(chirp) 도메인 모델
//! - 처프 본문 규칙 및 비속어 필터
//! - 저장소(Store) trait 계약
//! - 설정 관리
//! - 로깅 인프라

pub mod config;
pub mod domain;
pub mod error;
pub mod logging;
pub mod store;

pub use config::*;
pub use domain::*;
pub use error::*;
pub use logging::*;
pub use store::*;
