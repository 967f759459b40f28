mod commands;
pub mod error;

use clap::{CommandFactory, FromArgMatches, Parser, Subcommand};

use crate::api::init_tracing;
use crate::config::Config;

#[derive(Parser)]
#[command(name = "estate")]
#[command(author, version, about = "Real-estate listings MCP server", long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub config: Config,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
enum Commands {
    /// Start the HTTP server (default)
    Serve,
    /// Insert the sample listings into an empty catalog and exit
    Seed,
}

pub async fn run() -> miette::Result<()> {
    let matches = Cli::command().get_matches();
    let mut cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());
    cli.config.apply_legacy_env(&matches, |key| std::env::var(key).ok());
    init_tracing(&cli.config);

    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => commands::serve::run(cli.config).await?,
        Commands::Seed => {
            let output = commands::seed::run(&cli.config).await?;
            println!("{}", output);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_parses() {
        let cli = Cli::try_parse_from(["estate", "--port", "9000"]).unwrap();
        assert_eq!(cli.command, None);
        assert_eq!(cli.config.port, 9000);
    }

    #[test]
    fn test_seed_subcommand_parses() {
        let cli = Cli::try_parse_from(["estate", "seed"]).unwrap();
        assert_eq!(cli.command, Some(Commands::Seed));
    }

    #[test]
    fn test_unknown_subcommand_fails() {
        assert!(Cli::try_parse_from(["estate", "migrate"]).is_err());
    }
}
