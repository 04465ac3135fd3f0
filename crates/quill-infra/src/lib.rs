//! # Quill Infrastructure
//!
//! Concrete implementations of the ports defined in `quill-core`:
//! the post store adapters and the session-token service.
//!
//! ## Feature Flags
//!
//! - `postgres` (default) - PostgreSQL store adapter via SeaORM
//!
//! Without `postgres` only the in-memory adapter is available.

pub mod auth;
pub mod database;

pub use auth::JwtTokenService;
pub use database::InMemoryPostRepository;

#[cfg(feature = "postgres")]
pub use database::{DatabaseConnections, PostgresPostRepository};
