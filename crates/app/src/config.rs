//! Application configuration

use std::{path::PathBuf, time::Duration};

use clap::Args;

/// Settings shared by every CLI command.
#[derive(Debug, Clone, Args)]
pub struct AppConfig {
    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, global = true, env = "RUST_LOG", default_value = "warn")]
    pub log_level: String,

    /// Directory holding `catalog.yml` and `locations.yml`; embedded data when omitted
    #[arg(long, global = true, env = "SALESDESK_FIXTURES_DIR")]
    pub fixtures_dir: Option<PathBuf>,

    /// Directory for the signed-in user session file
    #[arg(long, global = true, env = "SALESDESK_SESSION_DIR", default_value = ".salesdesk")]
    pub session_dir: PathBuf,

    /// Simulated auth latency in milliseconds
    #[arg(long, global = true, env = "SALESDESK_AUTH_LATENCY_MS", default_value_t = 1000)]
    pub auth_latency_ms: u64,
}

impl AppConfig {
    #[must_use]
    pub fn auth_latency(&self) -> Duration {
        Duration::from_millis(self.auth_latency_ms)
    }
}
