//! Static bearer-token gate.
//!
//! There is exactly one valid credential. A match grants a fixed principal
//! with read and write scopes and no expiry.

use axum::{
    Json,
    extract::{Request, State},
    http::{StatusCode, header},
    middleware::Next,
    response::{IntoResponse, Response},
};
use serde_json::json;
use tracing::{debug, warn};

use super::state::AppState;

/// Principal granted to holders of the static token.
pub const ADMIN_CLIENT_ID: &str = "admin-user";

/// Scopes every tool call requires.
pub const REQUIRED_SCOPES: &[&str] = &["read", "write"];

const BEARER_PREFIX: &str = "bearer ";

/// Capabilities granted to a verified caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessGrant {
    pub token: String,
    pub client_id: String,
    pub scopes: Vec<String>,
    /// Unix timestamp; `None` means the grant never expires.
    pub expires_at: Option<u64>,
}

impl AccessGrant {
    pub fn has_scopes(&self, required: &[&str]) -> bool {
        required
            .iter()
            .all(|scope| self.scopes.iter().any(|s| s == scope))
    }
}

/// Verifies presented credentials against the configured secret.
#[derive(Clone)]
pub struct StaticTokenVerifier {
    secret: String,
}

impl std::fmt::Debug for StaticTokenVerifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StaticTokenVerifier")
            .field("secret", &"<redacted>")
            .finish()
    }
}

impl StaticTokenVerifier {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
        }
    }

    /// Check a presented credential, with or without its `Bearer` scheme.
    ///
    /// Returns `None` on mismatch; the transport turns that into a rejection.
    pub fn verify(&self, presented: &str) -> Option<AccessGrant> {
        let token = strip_scheme(presented);
        if token != self.secret {
            return None;
        }

        Some(AccessGrant {
            token: token.to_string(),
            client_id: ADMIN_CLIENT_ID.to_string(),
            scopes: REQUIRED_SCOPES.iter().map(|s| s.to_string()).collect(),
            expires_at: None,
        })
    }
}

/// Trim whitespace and a leading case-insensitive `Bearer ` scheme.
fn strip_scheme(presented: &str) -> &str {
    let trimmed = presented.trim();
    match trimmed.get(..BEARER_PREFIX.len()) {
        Some(prefix) if prefix.eq_ignore_ascii_case(BEARER_PREFIX) => {
            trimmed[BEARER_PREFIX.len()..].trim()
        }
        _ => trimmed,
    }
}

/// Axum middleware guarding the MCP endpoint.
///
/// On success the [`AccessGrant`] is stored in the request extensions.
pub async fn require_bearer(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    let grant = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| state.verifier().verify(value))
        .filter(|grant| grant.has_scopes(REQUIRED_SCOPES));

    match grant {
        Some(grant) => {
            debug!(client_id = %grant.client_id, "bearer token accepted");
            request.extensions_mut().insert(grant);
            next.run(request).await
        }
        None => {
            warn!(path = %request.uri().path(), "rejected request with missing or invalid bearer token");
            unauthorized()
        }
    }
}

fn unauthorized() -> Response {
    (
        StatusCode::UNAUTHORIZED,
        [(header::WWW_AUTHENTICATE, "Bearer error=\"invalid_token\"")],
        Json(json!({"error": "invalid_token"})),
    )
        .into_response()
}
