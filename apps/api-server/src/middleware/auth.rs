//! Session resolution - the identity extractor.

use actix_web::{FromRequest, HttpRequest, dev::Payload, http::header, web};
use std::future::{Ready, ready};
use std::sync::Arc;

use quill_core::ports::{ADMIN_ROLE, TokenClaims, TokenService};

use super::error::AppError;

/// Name of the cookie carrying the session token when no Authorization
/// header is present.
const SESSION_COOKIE: &str = "quill_session";

/// Authenticated caller identity.
///
/// Use this in handlers to require a session:
/// ```ignore
/// async fn protected_route(identity: Identity) -> impl Responder {
///     format!("Hello, {}!", identity.name)
/// }
/// ```
/// Failed extraction answers 401 `{"success":false,"error":"Please sign in"}`;
/// handlers that need a different 401 message take `Result<Identity, AppError>`
/// and remap.
#[derive(Debug, Clone)]
pub struct Identity {
    pub user_id: uuid::Uuid,
    pub name: String,
    pub role: String,
}

impl Identity {
    /// Whether this caller bypasses the ownership check.
    pub fn is_admin(&self) -> bool {
        self.role == ADMIN_ROLE
    }
}

impl From<TokenClaims> for Identity {
    fn from(claims: TokenClaims) -> Self {
        Self {
            user_id: claims.user_id,
            name: claims.name,
            role: claims.role,
        }
    }
}

fn unauthorized() -> AppError {
    AppError::Unauthorized("Please sign in".to_string())
}

impl FromRequest for Identity {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        // Get token service from app data
        let token_service = match req.app_data::<web::Data<Arc<dyn TokenService>>>() {
            Some(service) => service,
            None => {
                tracing::error!("TokenService not found in app data");
                return ready(Err(AppError::Internal(
                    "TokenService not configured".to_string(),
                )));
            }
        };

        // Bearer token from the Authorization header, falling back to the
        // session cookie.
        let token = match bearer_token(req) {
            Some(t) => t,
            None => return ready(Err(unauthorized())),
        };

        match token_service.validate_token(&token) {
            Ok(claims) => ready(Ok(Identity::from(claims))),
            Err(e) => {
                tracing::debug!("Session resolution failed: {}", e);
                ready(Err(unauthorized()))
            }
        }
    }
}

fn bearer_token(req: &HttpRequest) -> Option<String> {
    if let Some(value) = req.headers().get(header::AUTHORIZATION) {
        let auth_str = value.to_str().ok()?;
        return auth_str.strip_prefix("Bearer ").map(str::to_string);
    }

    req.cookie(SESSION_COOKIE).map(|c| c.value().to_string())
}
