//! Ports - trait definitions for external dependencies.
//! These are the "interfaces" that infrastructure must implement.

mod auth;
mod repository;

pub use auth::{ADMIN_ROLE, AuthError, TokenClaims, TokenService};
pub use repository::PostRepository;
