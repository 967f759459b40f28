//! API route configuration.

use axum::Router;
use axum::middleware;
use axum::routing::get;
use rmcp::transport::streamable_http_server::{
    StreamableHttpService, session::local::LocalSessionManager,
};

use super::auth::require_bearer;
use super::handlers;
use super::state::AppState;
use crate::db::Database;
use crate::mcp::McpServer;

/// Create the HTTP router.
///
/// `/health` is public; `/mcp` sits behind the bearer-token gate.
pub fn create_router<D: Database>(
    state: AppState,
    mcp_service: StreamableHttpService<McpServer<D>, LocalSessionManager>,
) -> Router {
    let mcp_routes = Router::new()
        .nest_service("/mcp", mcp_service)
        .layer(middleware::from_fn_with_state(state.clone(), require_bearer));

    Router::new()
        .route("/health", get(handlers::health))
        .merge(mcp_routes)
        .with_state(state)
}
