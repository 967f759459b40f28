use crate::cli::error::CliResult;
use crate::config::Config;
use crate::db::{Database, PropertyRepository, settle};

use super::open_store;

/// Seed the sample listings and describe what happened.
pub async fn run(config: &Config) -> CliResult<String> {
    let db = open_store(config).await?;

    let mut uow = db.begin().await?;
    let outcome = uow.seed().await;
    let seeded = settle(uow, outcome).await?;

    Ok(if seeded {
        "Data seeded successfully".to_string()
    } else {
        "Database already had data.".to_string()
    })
}
