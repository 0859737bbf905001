//! rPresence library root.
//! Exposes the CLI parser, the high-level run() function and the attendance
//! and authentication stores.

pub mod api;
pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod geo;
pub mod logging;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use models::clock_type::ClockType;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Login => cli::commands::login::handle(cli, cfg),
        Commands::Status => cli::commands::status::handle(cli, cfg),
        Commands::In => cli::commands::punch::handle(cli, cfg, ClockType::ClockIn),
        Commands::Out => cli::commands::punch::handle(cli, cfg, ClockType::ClockOut),
    }
}

/// Apply the one-run overrides given on the command line.
pub fn apply_overrides(cli: &Cli, cfg: &mut Config) {
    if let Some(url) = &cli.login_url {
        cfg.login_url = url.clone();
    }
    if let Some(url) = &cli.attendance_url {
        cfg.attendance_url = url.clone();
    }
    if cli.latitude.is_some() {
        cfg.latitude = cli.latitude;
    }
    if cli.longitude.is_some() {
        cfg.longitude = cli.longitude;
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let mut cfg = Config::load()?;
    apply_overrides(&cli, &mut cfg);

    dispatch(&cli, &cfg)
}
