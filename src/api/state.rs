//! Application state for the HTTP server.

use std::sync::Arc;

use super::auth::StaticTokenVerifier;

/// Shared state for HTTP handlers and middleware.
///
/// The store lives inside the MCP service, not here: handlers in this
/// layer only need the service identity and the token verifier.
#[derive(Clone)]
pub struct AppState {
    service_name: Arc<str>,
    verifier: Arc<StaticTokenVerifier>,
}

impl AppState {
    pub fn new(service_name: impl Into<Arc<str>>, verifier: StaticTokenVerifier) -> Self {
        Self {
            service_name: service_name.into(),
            verifier: Arc::new(verifier),
        }
    }

    /// Get the advertised service name.
    pub fn service_name(&self) -> &str {
        &self.service_name
    }

    /// Get the bearer-token verifier.
    pub fn verifier(&self) -> &StaticTokenVerifier {
        &self.verifier
    }
}
