//! rCheckin library root.
//! Exposes the CLI parser, the high-level run() function and the check-in
//! flow with its provider seam.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod models;
pub mod providers;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::{AppError, AppResult};

/// Env variable read for tracing directives (e.g. `RCHECKIN_LOG=debug`).
pub const LOG_ENV: &str = "RCHECKIN_LOG";

/// Central command dispatcher
pub async fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Home(_) => cli::commands::home::handle(&cli.command, cfg).await,
        Commands::Checkin(_) => cli::commands::checkin::handle(&cli.command, cfg).await,
        Commands::Log { .. } => cli::commands::log::handle(&cli.command, cfg),
    }
}

/// Diagnostics go to stderr; by default only errors, so a failed street
/// lookup stays invisible unless `-v` or `RCHECKIN_LOG` asks for it.
fn init_tracing(quiet: bool, verbose: bool) -> AppResult<()> {
    let level = if quiet {
        "off"
    } else if verbose {
        "debug"
    } else {
        "error"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| AppError::Other(format!("failed to initialize tracing subscriber: {e}")))
}

/// Entry point used by main.rs
pub async fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;
    if cli.no_color {
        ui::messages::set_color(false);
    }

    // 2️⃣ load config once
    let mut cfg = Config::load()?;

    // 3️⃣ command line overrides
    if let Some(custom_db) = &cli.db {
        cfg.database = custom_db.clone();
    }
    if cli.no_color {
        cfg.color = false;
    }
    ui::messages::set_color(cfg.color);

    // 4️⃣ hand everything to the dispatcher
    dispatch(&cli, &cfg).await
}
