//! Database abstraction layer.
//!
//! This module provides trait-based abstractions for data access so the
//! tool layer never depends on a concrete storage backend.
//!
//! # Architecture
//!
//! - `error`: Storage-agnostic error types
//! - `models`: Domain entities (Property, PropertyStatus) and their inputs
//! - `repository`: Trait definitions for the unit of work and property access
//! - `sqlite`: SQLx-backed implementation

mod error;
mod models;
mod repository;
pub mod sqlite;

#[cfg(test)]
mod error_test;

pub use error::{DbError, DbResult};
pub use models::*;
pub use repository::*;
pub use sqlite::{SqliteDatabase, SqliteUnitOfWork};
