//! SQLite implementation of the database traits.
//!
//! This module provides a SQLx-backed implementation of the repository
//! traits defined in the parent module.

mod connection;
mod property;

#[cfg(test)]
mod property_test;

pub use connection::{SqliteDatabase, SqliteUnitOfWork};
