//! Tests for database error types.

use crate::db::DbError;

#[test]
fn already_exists_error_displays_correctly() {
    let err = DbError::AlreadyExists {
        entity_type: "Property".to_string(),
        id: "prop_001".to_string(),
    };
    assert_eq!(
        err.to_string(),
        "Entity already exists: Property with id 'prop_001'"
    );
}

#[test]
fn validation_error_displays_correctly() {
    let err = DbError::Validation {
        message: "The property_id cannot be empty.".to_string(),
    };
    assert_eq!(
        err.to_string(),
        "Validation error: The property_id cannot be empty."
    );
}

#[test]
fn unknown_status_error_names_the_value() {
    let err = DbError::UnknownStatus {
        value: "rented".to_string(),
    };
    assert_eq!(
        err.to_string(),
        "Unknown status 'rented': status can only be 'available' or 'sold'"
    );
}

#[test]
fn database_error_displays_correctly() {
    let err = DbError::Database {
        message: "disk I/O error".to_string(),
    };
    assert_eq!(err.to_string(), "Database error: disk I/O error");
}

#[test]
fn sqlx_errors_become_database_errors() {
    let err: DbError = sqlx::Error::RowNotFound.into();
    assert!(matches!(err, DbError::Database { .. }));
}

#[test]
fn errors_carry_diagnostic_codes() {
    use miette::Diagnostic;

    let err = DbError::Connection {
        message: "unable to open database file".to_string(),
    };
    let code = err.code().map(|c| c.to_string());
    assert_eq!(code.as_deref(), Some("estate::db::connection_error"));
}
