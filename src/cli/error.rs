use miette::Diagnostic;
use thiserror::Error;

use crate::api::ApiError;
use crate::db::DbError;

#[derive(Error, Diagnostic, Debug)]
pub enum CliError {
    #[error("Database error: {0}")]
    #[diagnostic(
        code(estate::cli::database),
        help("Check DATABASE_URL (or --database-url); it should look like sqlite://data/real_estate.db")
    )]
    Database(#[from] DbError),

    #[error("API server error: {0}")]
    #[diagnostic(code(estate::cli::api))]
    Api(#[from] ApiError),
}

pub type CliResult<T> = Result<T, CliError>;
