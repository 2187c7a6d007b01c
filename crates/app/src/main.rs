//! Salesdesk Application CLI

use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;

mod cli;

#[tokio::main]
pub async fn main() {
    _ = dotenvy::dotenv();

    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&cli.config.log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(error) = cli.run().await {
        #[expect(
            clippy::print_stderr,
            reason = "command failures are reported on stderr as a single line"
        )]
        {
            eprintln!("{error}");
        }

        process::exit(1);
    }
}
