//! Session-token ports.

use uuid::Uuid;

/// Role tag that bypasses the ownership check.
pub const ADMIN_ROLE: &str = "admin";

/// Claims carried by a session token: the session provider's
/// `{ user: { id, name, role } }` plus expiry.
#[derive(Debug, Clone)]
pub struct TokenClaims {
    pub user_id: Uuid,
    pub name: String,
    pub role: String,
    pub exp: i64,
}

/// Session-token service.
///
/// The external session provider issues these tokens; this port validates
/// them. Generation exists for that provider's benefit (shared secret) and
/// for tests - request handling never mints tokens.
pub trait TokenService: Send + Sync {
    /// Mint a session token for a user.
    fn generate_token(&self, user_id: Uuid, name: &str, role: &str) -> Result<String, AuthError>;

    /// Validate and decode a token.
    fn validate_token(&self, token: &str) -> Result<TokenClaims, AuthError>;
}

/// Session resolution errors. All of them mean "no session" to the API
/// surface; the variants exist for logging.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("Token expired")]
    TokenExpired,

    #[error("Invalid token: {0}")]
    InvalidToken(String),

    #[error("Missing session credential")]
    MissingAuth,
}
