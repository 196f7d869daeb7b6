//! timeshortcuts library root.
//! Exposes the time code model, the activation core, and the CLI dispatcher.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
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
        Commands::Config { .. } => cli::commands::config::handle(cli, cfg),
        Commands::List { .. } => cli::commands::list::handle(&cli.command, cfg),
        Commands::Decode { .. } => cli::commands::decode::handle(&cli.command),
        Commands::Encode { .. } => cli::commands::encode::handle(&cli.command),
        Commands::Pick { .. } => cli::commands::pick::handle(cli, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // config is loaded once; `init` rewrites it
    let path = Config::resolve_path(cli.config.as_deref());
    let cfg = match &cli.command {
        Commands::Init => Config::default(),
        _ => Config::load_from(&path)?,
    };

    dispatch(&cli, &cfg)
}
