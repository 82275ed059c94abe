// SPDX-FileCopyrightText: 2026 Depot Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Reporting menu. Reports are generated and read back, never edited here.

use std::io::Write;

use depot_core::Repository;
use depot_records::{Report, Warehouse};

use super::{Action, Entry, Form, Menu};
use crate::console::{Console, ConsoleResult};
use crate::input::LineSource;

pub const MENU: Menu = Menu {
    title: "Report Management",
    entries: &[
        Entry {
            label: "Generate Report",
            action: Action::Create { done: "Report generated successfully with ID: {id}" },
        },
        Entry { label: "View All Reports", action: Action::List },
        Entry {
            label: "Download Report",
            action: Action::Show { prompt: "Enter Report ID to download: ", heading: None },
        },
    ],
};

impl Form for Report {
    const NOUN: &'static str = "Report";
    const EMPTY: &'static str = "No reports recorded.";
    const LIST_TITLE: &'static str = "All Reports";

    fn repository(warehouse: &Warehouse) -> &Repository<Self> {
        &warehouse.reports
    }

    fn repository_mut(warehouse: &mut Warehouse) -> &mut Repository<Self> {
        &mut warehouse.reports
    }

    fn read_new<S: LineSource, W: Write>(console: &mut Console<S, W>) -> ConsoleResult<Option<Self>> {
        let report_type = console.ask("Enter Report Type: ")?;
        let details = console.ask("Enter Report Details: ")?;
        Ok(Some(Report::new(report_type, details)))
    }
}
