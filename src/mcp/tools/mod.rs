//! MCP tool implementations
//!
//! Tool bodies are free functions generic over `D: Database`; the
//! [`McpServer`](super::McpServer) router only forwards to them.

pub mod properties;

#[cfg(test)]
mod mod_test;

use std::future::Future;

use rmcp::{
    ErrorData as McpError,
    model::{CallToolResult, Content},
};
use serde::Serialize;

use crate::db::DbError;

/// Map a database error to an MCP protocol error.
pub(crate) fn map_db_error(err: DbError) -> McpError {
    match err {
        DbError::Validation { message } => McpError::invalid_params(message, None),
        DbError::UnknownStatus { .. } => McpError::invalid_params(err.to_string(), None),
        DbError::AlreadyExists { .. } => McpError::invalid_params(err.to_string(), None),
        DbError::InvalidData { .. } | DbError::Database { .. } | DbError::Connection { .. } => {
            McpError::internal_error(err.to_string(), None)
        }
    }
}

/// Run store work on a spawned task so the session loop stays responsive.
///
/// A panicking or cancelled task surfaces as an internal error.
pub(crate) async fn offload<T, F>(work: F) -> Result<T, McpError>
where
    F: Future<Output = Result<T, McpError>> + Send + 'static,
    T: Send + 'static,
{
    tokio::spawn(work).await.map_err(|e| {
        tracing::error!(error = %e, "tool worker failed");
        McpError::internal_error(format!("Tool worker failed: {}", e), None)
    })?
}

/// Serialize a payload into a pretty-printed text result.
pub(crate) fn json_result<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let content = serde_json::to_string_pretty(value)
        .map_err(|e| McpError::internal_error(format!("Serialization error: {}", e), None))?;
    Ok(CallToolResult::success(vec![Content::text(content)]))
}
