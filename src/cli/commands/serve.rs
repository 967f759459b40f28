use crate::api;
use crate::cli::error::CliResult;
use crate::config::Config;

use super::open_store;

/// Open the store and serve until Ctrl-C.
pub async fn run(config: Config) -> CliResult<()> {
    let db = open_store(&config).await?;
    api::run(config, db).await?;
    Ok(())
}
