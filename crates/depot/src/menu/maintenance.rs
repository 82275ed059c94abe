// SPDX-FileCopyrightText: 2026 Depot Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Maintenance scheduling menu.

use std::io::Write;

use depot_core::Repository;
use depot_records::{MaintenanceSchedule, Warehouse};

use super::{Action, Edit, Entry, Form, Menu};
use crate::console::{Console, ConsoleResult};
use crate::input::LineSource;

pub const MENU: Menu = Menu {
    title: "Maintenance Management",
    entries: &[
        Entry {
            label: "Schedule Maintenance",
            action: Action::Create { done: "Maintenance scheduled successfully with ID: {id}" },
        },
        Entry { label: "View All Schedules", action: Action::List },
        Entry {
            label: "View Schedule Details",
            action: Action::Show { prompt: "Enter Schedule ID to view: ", heading: None },
        },
        Entry {
            label: "Update Schedule",
            action: Action::Update {
                prompt: "Enter Schedule ID to update: ",
                done: "Schedule updated successfully.",
            },
        },
        Entry {
            label: "Remove Schedule",
            action: Action::Delete {
                prompt: "Enter Schedule ID to remove: ",
                done: "Schedule removed successfully.",
            },
        },
    ],
};

impl Form for MaintenanceSchedule {
    const NOUN: &'static str = "Schedule";
    const EMPTY: &'static str = "No maintenance schedules recorded.";
    const LIST_TITLE: &'static str = "Maintenance Schedules";

    fn repository(warehouse: &Warehouse) -> &Repository<Self> {
        &warehouse.maintenance
    }

    fn repository_mut(warehouse: &mut Warehouse) -> &mut Repository<Self> {
        &mut warehouse.maintenance
    }

    fn read_new<S: LineSource, W: Write>(console: &mut Console<S, W>) -> ConsoleResult<Option<Self>> {
        let Some(equipment_id) = console.ask_number("Enter Equipment ID: ", "equipment ID")? else {
            return Ok(None);
        };
        let description = console.ask("Enter Description: ")?;
        let status = console.ask("Enter Completion Status: ")?;
        let Some(scheduled) = console.ask_days("Enter days until scheduled date [0]: ", 0)? else {
            return Ok(None);
        };
        Ok(Some(MaintenanceSchedule::new(equipment_id, description, scheduled, status)))
    }
}

impl Edit for MaintenanceSchedule {
    fn read_edit<S: LineSource, W: Write>(
        console: &mut Console<S, W>,
        current: &Self,
    ) -> ConsoleResult<Option<Self>> {
        let Some(equipment_id) =
            console.ask_number_or("Equipment ID", current.equipment_id, "equipment ID")?
        else {
            return Ok(None);
        };
        let description = console.ask_text_or("Description", &current.description)?;
        let status = console.ask_text_or("Completion Status", &current.completion_status)?;
        let Some(scheduled) = console.ask_days_or("Scheduled Date", current.scheduled_date)? else {
            return Ok(None);
        };
        Ok(Some(MaintenanceSchedule::new(equipment_id, description, scheduled, status)))
    }
}

#[cfg(test)]
mod tests {
    use crate::console::testing::{run, start};
    use chrono::Duration;

    #[test]
    fn schedule_defaults_to_now() {
        let (out, warehouse) = run(&["2", "1", "42", "Replace belt", "Pending", "", "0", "0"]);

        assert!(out.contains("Maintenance scheduled successfully with ID: 1"));
        let schedule = &warehouse.maintenance.list_all()[0].fields;
        assert_eq!(schedule.equipment_id, 42);
        assert_eq!(schedule.description, "Replace belt");
        assert_eq!(schedule.completion_status, "Pending");
        assert_eq!(schedule.scheduled_date, start());
    }

    #[test]
    fn update_replaces_every_field() {
        let (out, warehouse) = run(&[
            "2",
            "1", "42", "Replace belt", "Pending", "2",
            "4", "1", "43", "", "Done", "5",
            "3", "1",
            "0", "0",
        ]);

        assert!(out.contains("Schedule updated successfully."));
        assert!(out.contains("Completion Status: Done"));
        let schedule = &warehouse.maintenance.list_all()[0].fields;
        assert_eq!(schedule.equipment_id, 43);
        assert_eq!(schedule.description, "Replace belt");
        assert_eq!(schedule.scheduled_date, start() + Duration::days(5));
    }

    #[test]
    fn non_numeric_equipment_id_aborts() {
        let (out, warehouse) = run(&["2", "1", "press", "0", "0"]);
        assert!(out.contains("Invalid equipment ID input."));
        assert!(warehouse.maintenance.is_empty());
    }

    #[test]
    fn empty_listing_message() {
        let (out, _) = run(&["2", "2", "0", "0"]);
        assert!(out.contains("No maintenance schedules recorded."));
    }

    #[test]
    fn remove_schedule() {
        let (out, warehouse) = run(&["2", "1", "1", "Oil", "Pending", "", "5", "1", "0", "0"]);
        assert!(out.contains("Schedule removed successfully."));
        assert!(warehouse.maintenance.is_empty());
    }
}
