//! CamelCube library root.
//! Exposes the CLI parser, the high-level run() function and the record
//! store / timer modules it is built on.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod store;
pub mod timer;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use ui::app::Screen;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match cli.command.clone().unwrap_or(Commands::Menu) {
        Commands::Menu => cli::commands::menu::handle(cfg, Screen::Menu),
        Commands::Timer => cli::commands::menu::handle(cfg, Screen::Timer),
        Commands::Solver => cli::commands::solver::handle(),
        Commands::Best => cli::commands::best::handle(cfg),
        cmd @ Commands::Submit { .. } => cli::commands::submit::handle(&cmd, cfg),
        Commands::Init => cli::commands::init::handle(cli, cfg),
        cmd @ Commands::Config { .. } => cli::commands::config::handle(&cmd, cfg),
        cmd @ Commands::Log { .. } => cli::commands::log::handle(&cmd, cfg),
        cmd @ Commands::Backup { .. } => cli::commands::backup::handle(&cmd, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    let mut cfg = Config::load()?;

    // the command line wins over the configured record file
    if let Some(custom) = &cli.file {
        cfg.record_file = custom.clone();
    }

    dispatch(&cli, &cfg)
}
