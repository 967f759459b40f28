pub mod api;
pub mod cli;
pub mod config;
pub mod content;
pub mod db;
pub mod mcp;
