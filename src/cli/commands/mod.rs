pub mod seed;
pub mod serve;

use tracing::info;

use crate::cli::error::CliResult;
use crate::config::Config;
use crate::db::{Database, SqliteDatabase};

/// Open the configured store and make sure the schema exists.
pub(crate) async fn open_store(config: &Config) -> CliResult<SqliteDatabase> {
    info!(url = %config.database_url, "opening database");
    let db = SqliteDatabase::open(&config.database_url).await?;
    db.init_schema().await?;
    Ok(db)
}
