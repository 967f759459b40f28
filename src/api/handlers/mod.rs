//! HTTP handlers outside the MCP endpoint.

mod system;

pub use system::health;
