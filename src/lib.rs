//! rClockInOut library root.
//! Exposes the session log store, the clock-in controller, the CLI parser
//! and the high-level run() function.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod models;
pub mod store;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        None | Some(Commands::Gui) => cli::commands::gui::handle(cfg),
        Some(Commands::Init) => cli::commands::init::handle(cli),
        Some(cmd @ Commands::List { .. }) => cli::commands::list::handle(cmd, cfg),
        Some(cmd @ Commands::Config { .. }) => cli::commands::config::handle(cmd, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    utils::logging::enable_logging(None);

    let mut cfg = Config::load()?;

    // --file wins over the configured log for this run only
    if let Some(file) = &cli.file {
        cfg.log_file = file.clone();
    }

    dispatch(&cli, &cfg)
}
