//! hourgrid library root.
//! Exposes the CLI parser, the high-level run() function and the slot
//! model, aggregation and export modules for embedding and tests.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod export;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Profile { .. } => cli::commands::profile::handle(cli, cfg),
        Commands::Check { .. }
        | Commands::Task { .. }
        | Commands::Duration { .. }
        | Commands::Touch { .. } => cli::commands::slot::handle(cli, cfg),
        Commands::Show | Commands::Summary => cli::commands::show::handle(cli, cfg),
        Commands::Export { .. } => cli::commands::export::handle(cli, cfg),
        Commands::Import { .. } => cli::commands::import::handle(cli, cfg),
        Commands::Log { .. } => cli::commands::log::handle(&cli.command, cfg),
        Commands::Drive => cli::commands::drive::handle(),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // Config is loaded once and shared by every command.
    let mut cfg = Config::load()?;

    if let Some(custom_db) = &cli.db {
        cfg.database = custom_db.clone();
    }

    dispatch(&cli, &cfg)
}
