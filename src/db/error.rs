//! Database error types.
//!
//! This module provides abstracted error types for database operations.
//! It uses miette for fancy diagnostic output and thiserror for derive macros.
//! The error types are storage-backend agnostic.

use miette::Diagnostic;
use thiserror::Error;

/// Database operation errors.
///
/// "No such id" is never an error here: lookups return `Option` and
/// deletes return `bool`.
#[derive(Error, Diagnostic, Debug)]
pub enum DbError {
    #[error("Entity already exists: {entity_type} with id '{id}'")]
    #[diagnostic(code(estate::db::already_exists))]
    AlreadyExists { entity_type: String, id: String },

    #[error("Validation error: {message}")]
    #[diagnostic(code(estate::db::validation_error))]
    Validation { message: String },

    #[error("Unknown status '{value}': status can only be 'available' or 'sold'")]
    #[diagnostic(
        code(estate::db::unknown_status),
        help("Use 'available' or 'sold' (case-insensitive)")
    )]
    UnknownStatus { value: String },

    #[error("Invalid data: {message}")]
    #[diagnostic(code(estate::db::invalid_data))]
    InvalidData { message: String },

    #[error("Database error: {message}")]
    #[diagnostic(code(estate::db::database_error))]
    Database { message: String },

    #[error("Connection error: {message}")]
    #[diagnostic(code(estate::db::connection_error))]
    Connection { message: String },
}

impl From<sqlx::Error> for DbError {
    fn from(e: sqlx::Error) -> Self {
        DbError::Database {
            message: e.to_string(),
        }
    }
}

/// Result type for database operations.
pub type DbResult<T> = Result<T, DbError>;
