// SPDX-FileCopyrightText: 2026 Depot Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Depot - an interactive warehouse record keeper.
//!
//! This is the binary entry point. Records live in memory for the length of
//! one console session.

#[cfg(not(target_env = "msvc"))]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

mod console;
mod input;
mod logging;
mod menu;
mod shell;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use colored::Colorize;
use depot_config::DepotConfig;
use depot_core::DepotError;

/// Depot - an interactive warehouse record keeper.
#[derive(Parser, Debug)]
#[command(name = "depot", version, about, long_about = None)]
struct Cli {
    /// Read configuration from this file instead of the standard locations.
    #[arg(short, long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Disable colored output.
    #[arg(long, global = true)]
    plain: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
enum Commands {
    /// Launch the interactive warehouse console (the default).
    Shell,
    /// Print the effective configuration as TOML.
    Config,
}

fn main() {
    let cli = Cli::parse();

    let loaded = match &cli.config {
        Some(path) => depot_config::load_and_validate_path(path),
        None => depot_config::load_and_validate(),
    };
    let config = match loaded {
        Ok(config) => config,
        Err(errors) => {
            depot_config::render_errors(&errors);
            std::process::exit(1);
        }
    };

    logging::init_tracing(&config.app.log_level);

    let result = match cli.command.unwrap_or(Commands::Shell) {
        Commands::Shell => shell::run_shell(&config, cli.plain),
        Commands::Config => print_config(&config),
    };

    if let Err(e) = result {
        eprintln!("{}: {e}", "error".red());
        std::process::exit(1);
    }
}

/// Renders the merged configuration the way it would appear in `depot.toml`.
fn render_config(config: &DepotConfig) -> Result<String, DepotError> {
    toml::to_string_pretty(config)
        .map_err(|e| DepotError::Config(format!("failed to render configuration: {e}")))
}

fn print_config(config: &DepotConfig) -> Result<(), DepotError> {
    print!("{}", render_config(config)?);
    Ok(())
}
