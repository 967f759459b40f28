//! Model Context Protocol (MCP) server implementation
//!
//! This module provides an MCP server using the Streamable HTTP transport.
//! The server exposes the property catalog tools.
//!
//! - **server**: `McpServer`, the rmcp tool router and `ServerHandler`
//! - **service**: the per-session `StreamableHttpService` factory
//! - **tools**: tool bodies, generic over `D: Database`

pub mod server;
mod service;
pub mod tools;


pub use server::McpServer;
pub use service::create_mcp_service;
