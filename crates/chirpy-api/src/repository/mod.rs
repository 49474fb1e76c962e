//! Repository pattern for database operations.
//!
//! 데이터베이스 접근 로직을 라우트 핸들러에서 분리하여 관리합니다.
//! 모든 Repository는 static methods 패턴을 사용하며,
//! [`PgStore`]가 이를 `chirpy_core`의 Store trait으로 노출합니다.

pub mod chirps;
pub mod memory;
pub mod postgres;
pub mod refresh_tokens;
pub mod users;

pub use chirps::ChirpRepository;
pub use memory::MemoryStore;
pub use postgres::PgStore;
pub use refresh_tokens::RefreshTokenRepository;
pub use users::UserRepository;
