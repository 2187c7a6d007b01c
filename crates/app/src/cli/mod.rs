use std::io;

use clap::{Parser, Subcommand};
use salesdesk_app::{config::AppConfig, context::AppContext};

mod auth;
mod locations;
mod order;
mod products;

#[derive(Debug, Parser)]
#[command(name = "salesdesk-app", about = "Salesdesk CLI", long_about = None)]
pub(crate) struct Cli {
    #[command(flatten)]
    pub(crate) config: AppConfig,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Sign in, register or sign out
    Auth(auth::AuthCommand),

    /// Browse the product list
    Products(products::ProductsCommand),

    /// List countries, states of a country, or cities of a state
    Locations(locations::LocationsArgs),

    /// Replay a scripted order session and store the result
    Order(order::OrderArgs),
}

impl Cli {
    pub(crate) async fn run(self) -> Result<(), String> {
        let app = AppContext::from_config(&self.config)
            .map_err(|error| format!("failed to initialize: {error}"))?;

        let mut out = io::stdout().lock();

        match self.command {
            Commands::Auth(command) => auth::run(command, &app, &mut out).await,
            Commands::Products(command) => products::run(command, &app, &mut out).await,
            Commands::Locations(args) => locations::run(&args, &app, &mut out),
            Commands::Order(args) => order::run(args, &app, &mut out).await,
        }
    }
}

pub(crate) fn write_line(out: &mut impl io::Write, line: &str) -> Result<(), String> {
    writeln!(out, "{line}").map_err(|error| format!("failed to write output: {error}"))
}
