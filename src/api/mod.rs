//! HTTP server: health endpoint plus the authenticated MCP endpoint.

pub mod auth;
mod handlers;
mod routes;
pub mod state;


use std::sync::Arc;

use miette::Diagnostic;
use thiserror::Error;
use tokio_util::sync::CancellationToken;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;
use crate::db::Database;
use crate::mcp::create_mcp_service;

pub use auth::{AccessGrant, StaticTokenVerifier};
pub use routes::create_router;
pub use state::AppState;

/// HTTP server errors.
#[derive(Error, Diagnostic, Debug)]
pub enum ApiError {
    #[error("Failed to bind {addr}: {source}")]
    #[diagnostic(
        code(estate::api::bind),
        help("Is another process listening on this port? Set PORT or --port.")
    )]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Server error: {0}")]
    #[diagnostic(code(estate::api::serve))]
    Serve(#[source] std::io::Error),
}

/// Initialize tracing subscriber with env filter
///
/// `RUST_LOG` takes precedence over the configured level. Call once per
/// process.
pub fn init_tracing(config: &Config) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.tracing_directive().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Run the HTTP server until Ctrl-C.
pub async fn run<D: Database>(config: Config, db: D) -> Result<(), ApiError> {
    let ct = CancellationToken::new();
    let mcp_service = create_mcp_service(Arc::new(db), &config.service_name, ct.clone());
    let state = AppState::new(
        config.service_name.clone(),
        StaticTokenVerifier::new(config.api_token.clone()),
    );

    let app = create_router(state, mcp_service).layer(TraceLayer::new_for_http());

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| ApiError::Bind {
            addr: addr.to_string(),
            source,
        })?;
    info!(service = %config.service_name, "MCP endpoint listening on http://{}/mcp", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(ct))
        .await
        .map_err(ApiError::Serve)?;

    info!("server stopped");
    Ok(())
}

/// Resolve on Ctrl-C and cancel open MCP sessions.
async fn shutdown_signal(ct: CancellationToken) {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
    ct.cancel();
}
