// SPDX-FileCopyrightText: 2026 Depot Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `depot shell` command implementation.
//!
//! Builds an empty warehouse and runs the menu console on the terminal.
//! Records are discarded when the session ends.

use std::io::IsTerminal;

use colored::Colorize;
use depot_config::DepotConfig;
use depot_core::DepotError;
use depot_records::Warehouse;
use tracing::{debug, info};

use crate::console::{Console, ConsoleSettings};
use crate::input::ReadlineSource;

/// Whether menus and messages are colorized.
pub fn use_color(config: &DepotConfig, plain: bool, stdout_is_terminal: bool) -> bool {
    config.console.color && !plain && stdout_is_terminal
}

/// Runs the interactive console until the user exits or closes input.
pub fn run_shell(config: &DepotConfig, plain: bool) -> Result<(), DepotError> {
    colored::control::set_override(use_color(config, plain, std::io::stdout().is_terminal()));

    let source = ReadlineSource::new(config.console.history_size)?;
    let warehouse = Warehouse::with_system_clock();

    println!("{}", config.app.name.bold().green());
    println!("Enter {} to go back, Ctrl-D to quit.", "0".yellow());

    info!(name = %config.app.name, "console session started");
    let mut console = Console::new(source, std::io::stdout(), warehouse, ConsoleSettings::from(config));
    console.run()?;

    let (_, _, warehouse) = console.into_parts();
    for (kind, count) in warehouse.counts() {
        debug!(%kind, count, "discarding records");
    }

    println!("{}", "goodbye".dimmed());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_needs_config_terminal_and_no_plain_flag() {
        let mut config = DepotConfig::default();
        assert!(use_color(&config, false, true));
        assert!(!use_color(&config, true, true));
        assert!(!use_color(&config, false, false));

        config.console.color = false;
        assert!(!use_color(&config, false, true));
    }
}
