// SPDX-FileCopyrightText: 2026 Depot Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The interactive console: prompting, input parsing and message output.
//!
//! [`Console`] owns the session's [`Warehouse`]. Input comes from any
//! [`LineSource`] and output goes to any [`Write`] sink, so sessions can be
//! scripted end to end. The menus themselves live in [`crate::menu`].

use std::fmt::Display;
use std::io::{self, Write};
use std::str::FromStr;

use colored::Colorize;
use depot_config::DepotConfig;
use depot_core::{DepotError, Record, RecordId, Timestamp};
use depot_records::{days_after, describe, format_timestamp, Describe, Warehouse, DEFAULT_TIMESTAMP_FORMAT};
use thiserror::Error;
use tracing::info;

use crate::input::LineSource;

/// Printed after every record.
const SEPARATOR: &str = "-------------------------";

/// Why a console loop stopped early.
#[derive(Debug, Error)]
pub enum ConsoleError {
    /// The user closed input (Ctrl-D, Ctrl-C or end of a script).
    #[error("input closed")]
    Closed,

    #[error(transparent)]
    Depot(#[from] DepotError),
}

impl From<io::Error> for ConsoleError {
    fn from(source: io::Error) -> Self {
        ConsoleError::Depot(DepotError::from(source))
    }
}

pub type ConsoleResult<T> = Result<T, ConsoleError>;

/// Display and default settings taken from configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsoleSettings {
    pub timestamp_format: String,
    /// Expected delivery offset offered when receiving a shipment.
    pub delivery_days: u32,
}

impl Default for ConsoleSettings {
    fn default() -> Self {
        Self {
            timestamp_format: DEFAULT_TIMESTAMP_FORMAT.to_string(),
            delivery_days: 7,
        }
    }
}

impl From<&DepotConfig> for ConsoleSettings {
    fn from(config: &DepotConfig) -> Self {
        Self {
            timestamp_format: config.display.timestamp_format.clone(),
            delivery_days: config.shipment.default_delivery_days,
        }
    }
}

/// A menu-driven session over one [`Warehouse`].
pub struct Console<S, W> {
    source: S,
    out: W,
    warehouse: Warehouse,
    settings: ConsoleSettings,
}

impl<S: LineSource, W: Write> Console<S, W> {
    pub fn new(source: S, out: W, warehouse: Warehouse, settings: ConsoleSettings) -> Self {
        Self {
            source,
            out,
            warehouse,
            settings,
        }
    }

    /// Runs the main menu until the user exits or input closes.
    ///
    /// Only I/O failures are errors; closing input is a normal exit.
    pub fn run(&mut self) -> Result<(), DepotError> {
        match self.main_menu() {
            Ok(()) => Ok(()),
            Err(ConsoleError::Closed) => {
                info!("input closed, leaving console");
                writeln!(self.out)?;
                Ok(())
            }
            Err(ConsoleError::Depot(e)) => Err(e),
        }
    }

    pub fn warehouse(&self) -> &Warehouse {
        &self.warehouse
    }

    pub(crate) fn warehouse_mut(&mut self) -> &mut Warehouse {
        &mut self.warehouse
    }

    pub(crate) fn settings(&self) -> &ConsoleSettings {
        &self.settings
    }

    /// Splits the console back into its input, output and records.
    pub fn into_parts(self) -> (S, W, Warehouse) {
        (self.source, self.out, self.warehouse)
    }

    // --- input ---

    /// Reads one trimmed line. Closed input unwinds the whole session.
    pub(crate) fn ask(&mut self, prompt: &str) -> ConsoleResult<String> {
        self.out.flush()?;
        match self.source.read_line(prompt)? {
            Some(line) => Ok(line.trim().to_string()),
            None => Err(ConsoleError::Closed),
        }
    }

    /// Reads and parses a number. `None` means the input was rejected and
    /// the caller should abandon the current operation.
    pub(crate) fn ask_number<T: FromStr>(&mut self, prompt: &str, what: &str) -> ConsoleResult<Option<T>> {
        let line = self.ask(prompt)?;
        self.parse_or_reject(&line, what)
    }

    pub(crate) fn ask_id(&mut self, prompt: &str) -> ConsoleResult<Option<RecordId>> {
        Ok(self.ask_number::<u64>(prompt, "ID")?.map(RecordId))
    }

    /// Edit prompt for text: blank keeps `current`.
    pub(crate) fn ask_text_or(&mut self, label: &str, current: &str) -> ConsoleResult<String> {
        let line = self.ask(&format!("Enter new {label} ({current}): "))?;
        if line.is_empty() {
            Ok(current.to_string())
        } else {
            Ok(line)
        }
    }

    /// Edit prompt for numbers: blank keeps `current`, junk is rejected.
    pub(crate) fn ask_number_or<T>(&mut self, label: &str, current: T, what: &str) -> ConsoleResult<Option<T>>
    where
        T: FromStr + Display + Copy,
    {
        let line = self.ask(&format!("Enter new {label} ({current}): "))?;
        if line.is_empty() {
            return Ok(Some(current));
        }
        self.parse_or_reject(&line, what)
    }

    /// Reads a whole number of days and turns it into a timestamp that far
    /// from now. Blank input uses `default_days`.
    pub(crate) fn ask_days(&mut self, prompt: &str, default_days: u32) -> ConsoleResult<Option<Timestamp>> {
        let line = self.ask(prompt)?;
        let days = if line.is_empty() {
            default_days
        } else {
            match self.parse_or_reject::<u32>(&line, "day count")? {
                Some(days) => days,
                None => return Ok(None),
            }
        };
        self.days_from_now(days)
    }

    /// Edit prompt for timestamps, entered as days from now. Blank keeps `current`.
    pub(crate) fn ask_days_or(&mut self, label: &str, current: Timestamp) -> ConsoleResult<Option<Timestamp>> {
        let shown = format_timestamp(current, &self.settings.timestamp_format);
        let line = self.ask(&format!("Enter days from now for new {label} ({shown}): "))?;
        if line.is_empty() {
            return Ok(Some(current));
        }
        match self.parse_or_reject::<u32>(&line, "day count")? {
            Some(days) => self.days_from_now(days),
            None => Ok(None),
        }
    }

    fn days_from_now(&mut self, days: u32) -> ConsoleResult<Option<Timestamp>> {
        match days_after(self.warehouse.now(), days) {
            Some(ts) => Ok(Some(ts)),
            None => {
                info!(days, "rejected out-of-range day count");
                self.error("Day count is out of range.")?;
                Ok(None)
            }
        }
    }

    fn parse_or_reject<T: FromStr>(&mut self, line: &str, what: &str) -> ConsoleResult<Option<T>> {
        match line.parse::<T>() {
            Ok(value) => Ok(Some(value)),
            Err(_) => {
                info!(input = %line, field = what, "rejected non-numeric input");
                self.error(&format!("Invalid {what} input."))?;
                Ok(None)
            }
        }
    }

    /// Prints a numbered menu and reads the selection.
    ///
    /// Non-numeric input is reported here and yields `None` so the caller
    /// shows the menu again.
    pub(crate) fn choose(&mut self, title: &str, entries: &[&str], back: &str) -> ConsoleResult<Option<u32>> {
        self.heading(title)?;
        for (n, entry) in entries.iter().enumerate() {
            writeln!(self.out, "{}. {entry}", n + 1)?;
        }
        writeln!(self.out, "0. {back}")?;

        let line = self.ask("Enter your choice: ")?;
        match line.parse::<u32>() {
            Ok(choice) => Ok(Some(choice)),
            Err(_) => {
                info!(input = %line, "non-numeric menu selection");
                self.error("Invalid input. Please enter a number.")?;
                Ok(None)
            }
        }
    }

    // --- output ---

    pub(crate) fn say(&mut self, message: &str) -> ConsoleResult<()> {
        writeln!(self.out, "{message}")?;
        Ok(())
    }

    pub(crate) fn heading(&mut self, title: &str) -> ConsoleResult<()> {
        writeln!(self.out, "\n{}", format!("--- {title} ---").bold().cyan())?;
        Ok(())
    }

    pub(crate) fn success(&mut self, message: &str) -> ConsoleResult<()> {
        writeln!(self.out, "{}", message.green())?;
        Ok(())
    }

    /// Not-found and empty-listing messages.
    pub(crate) fn notice(&mut self, message: &str) -> ConsoleResult<()> {
        writeln!(self.out, "{}", message.yellow())?;
        Ok(())
    }

    pub(crate) fn error(&mut self, message: &str) -> ConsoleResult<()> {
        writeln!(self.out, "{}", message.red())?;
        Ok(())
    }

    pub(crate) fn invalid_choice(&mut self) -> ConsoleResult<()> {
        self.error("Invalid choice. Please try again.")
    }

    /// Prints a record as `Label: value` lines, then any `extra` lines,
    /// then the separator.
    pub(crate) fn print_record<T: Describe>(
        &mut self,
        record: &Record<T>,
        extra: &[(&'static str, String)],
    ) -> ConsoleResult<()> {
        let lines = describe(record, &self.settings.timestamp_format);
        for (label, value) in lines.iter().chain(extra) {
            writeln!(self.out, "{}: {value}", label.bold())?;
        }
        writeln!(self.out, "{SEPARATOR}")?;
        Ok(())
    }
}


#[cfg(test)]
mod tests {
    use super::testing::{console, start};
    use super::*;
    use chrono::Duration;

    fn output(console: Console<crate::input::ScriptedSource, Vec<u8>>) -> String {
        let (_, out, _) = console.into_parts();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn settings_follow_config() {
        let mut config = DepotConfig::default();
        config.display.timestamp_format = "%d/%m/%Y".to_string();
        config.shipment.default_delivery_days = 3;

        let settings = ConsoleSettings::from(&config);
        assert_eq!(settings.timestamp_format, "%d/%m/%Y");
        assert_eq!(settings.delivery_days, 3);
        assert_eq!(ConsoleSettings::from(&DepotConfig::default()), ConsoleSettings::default());
    }

    #[test]
    fn ask_trims_and_closed_input_unwinds() {
        let mut c = console(&["  Crate  "]);
        assert_eq!(c.ask("Name: ").unwrap(), "Crate");
        assert!(matches!(c.ask("Name: "), Err(ConsoleError::Closed)));
    }

    #[test]
    fn ask_number_rejects_junk_with_message() {
        let mut c = console(&["12", "twelve", "-4"]);
        assert_eq!(c.ask_number::<u32>("Qty: ", "quantity").unwrap(), Some(12));
        assert_eq!(c.ask_number::<u32>("Qty: ", "quantity").unwrap(), None);
        assert_eq!(c.ask_number::<u32>("Qty: ", "quantity").unwrap(), None);

        let out = output(c);
        assert_eq!(out.matches("Invalid quantity input.").count(), 2);
    }

    #[test]
    fn edit_prompts_keep_current_on_blank() {
        let mut c = console(&["", "Bay 9", "", "x"]);
        assert_eq!(c.ask_text_or("Location", "Bay 1").unwrap(), "Bay 1");
        assert_eq!(c.ask_text_or("Location", "Bay 1").unwrap(), "Bay 9");
        assert_eq!(c.ask_number_or("Quantity", 5u32, "quantity").unwrap(), Some(5));
        assert_eq!(c.ask_number_or("Quantity", 5u32, "quantity").unwrap(), None);

        let (source, _, _) = c.into_parts();
        assert_eq!(source.prompts[0], "Enter new Location (Bay 1): ");
        assert_eq!(source.prompts[2], "Enter new Quantity (5): ");
    }

    #[test]
    fn ask_days_offsets_from_clock() {
        let mut c = console(&["", "3", "soon", "4000000000"]);
        assert_eq!(c.ask_days("Days: ", 7).unwrap(), Some(start() + Duration::days(7)));
        assert_eq!(c.ask_days("Days: ", 7).unwrap(), Some(start() + Duration::days(3)));
        assert_eq!(c.ask_days("Days: ", 7).unwrap(), None);
        assert_eq!(c.ask_days("Days: ", 7).unwrap(), None);

        let out = output(c);
        assert!(out.contains("Invalid day count input."));
        assert!(out.contains("Day count is out of range."));
    }

    #[test]
    fn ask_days_or_keeps_stored_timestamp() {
        let stored = start() - Duration::days(2);
        let mut c = console(&["", "1"]);
        assert_eq!(c.ask_days_or("Scheduled Date", stored).unwrap(), Some(stored));
        assert_eq!(
            c.ask_days_or("Scheduled Date", stored).unwrap(),
            Some(start() + Duration::days(1))
        );
    }

    #[test]
    fn choose_lists_entries_and_rejects_text() {
        let mut c = console(&["2", "abc"]);
        assert_eq!(c.choose("Menu", &["One", "Two"], "Back").unwrap(), Some(2));
        assert_eq!(c.choose("Menu", &["One", "Two"], "Back").unwrap(), None);

        let out = output(c);
        assert!(out.contains("--- Menu ---\n1. One\n2. Two\n0. Back\n"));
        assert!(out.contains("Invalid input. Please enter a number."));
    }

    #[test]
    fn run_treats_closed_input_as_exit() {
        let mut c = console(&[]);
        assert!(c.run().is_ok());
    }
}
