//! Process configuration.
//!
//! Every setting can come from a CLI flag, an environment variable or a
//! built-in default, in that order of precedence.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use clap::{ArgMatches, Args, parser::ValueSource};

pub const DEFAULT_SERVICE_NAME: &str = "Real Estate MCP Server";
pub const DEFAULT_API_TOKEN: &str = "secret_token_2026";
pub const DEFAULT_DATABASE_URL: &str = "sqlite://data/real_estate.db";
pub const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Older deployments set these instead of `APP_LOG_LEVEL` / `APP_DEBUG`.
pub const LEGACY_LOG_LEVEL_ENV: &str = "FASTMCP_LOG_LEVEL";
pub const LEGACY_DEBUG_ENV: &str = "FASTMCP_DEBUG";

/// Server configuration.
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Name advertised to MCP clients
    #[arg(long, env = "APP_NAME", default_value = DEFAULT_SERVICE_NAME)]
    pub service_name: String,

    /// Bearer token callers must present
    #[arg(long, env = "APP_API_TOKEN", default_value = DEFAULT_API_TOKEN, hide_env_values = true)]
    pub api_token: String,

    /// SQLite connection URL
    #[arg(long, env = "DATABASE_URL", default_value = DEFAULT_DATABASE_URL)]
    pub database_url: String,

    /// Host address to bind to
    #[arg(long, env = "HOST", default_value_t = DEFAULT_HOST)]
    pub host: IpAddr,

    /// Port to listen on
    #[arg(short, long, env = "PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, env = "APP_LOG_LEVEL", default_value = DEFAULT_LOG_LEVEL)]
    pub log_level: String,

    /// Enable debug logging regardless of the log level
    #[arg(long, env = "APP_DEBUG")]
    pub debug: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            service_name: DEFAULT_SERVICE_NAME.to_string(),
            api_token: DEFAULT_API_TOKEN.to_string(),
            database_url: DEFAULT_DATABASE_URL.to_string(),
            host: DEFAULT_HOST,
            port: DEFAULT_PORT,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            debug: false,
        }
    }
}

impl Config {
    /// Fill logging settings still at their defaults from the legacy
    /// `FASTMCP_*` variables.
    ///
    /// Flags and the `APP_*` variables keep precedence over the legacy names.
    pub fn apply_legacy_env<F>(&mut self, matches: &ArgMatches, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if is_default(matches, "log_level")
            && let Some(level) = lookup(LEGACY_LOG_LEVEL_ENV)
        {
            self.log_level = level;
        }
        if is_default(matches, "debug")
            && let Some(debug) = lookup(LEGACY_DEBUG_ENV)
        {
            self.debug = is_truthy(&debug);
        }
    }

    /// Address the HTTP listener binds to.
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Effective log level; `debug` wins over the configured level.
    pub fn effective_log_level(&self) -> String {
        if self.debug {
            "debug".to_string()
        } else {
            self.log_level.to_lowercase()
        }
    }

    /// Default `EnvFilter` directive used when `RUST_LOG` is unset.
    pub fn tracing_directive(&self) -> String {
        let level = self.effective_log_level();
        format!("estate={level},tower_http={level},rmcp={level}")
    }
}

fn is_default(matches: &ArgMatches, id: &str) -> bool {
    matches!(
        matches.value_source(id),
        None | Some(ValueSource::DefaultValue)
    )
}

fn is_truthy(value: &str) -> bool {
    !matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "" | "0" | "false" | "f" | "no" | "n" | "off"
    )
}
