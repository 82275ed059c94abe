// SPDX-FileCopyrightText: 2026 Depot Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Space management menu.

use std::io::Write;

use depot_core::Repository;
use depot_records::{SpaceAllocation, Warehouse};

use super::{Action, Edit, Entry, Form, Menu};
use crate::console::{Console, ConsoleResult};
use crate::input::LineSource;

pub const MENU: Menu = Menu {
    title: "Space Management",
    entries: &[
        Entry {
            label: "Allocate Space",
            action: Action::Create { done: "Space allocated successfully with ID: {id}" },
        },
        Entry { label: "View Space Usage", action: Action::List },
        Entry {
            label: "Search Space",
            action: Action::Show { prompt: "Enter Space ID to search: ", heading: None },
        },
        Entry {
            label: "Update Space",
            action: Action::Update {
                prompt: "Enter Space ID to update: ",
                done: "Space updated successfully.",
            },
        },
        Entry {
            label: "Free Space",
            action: Action::Delete {
                prompt: "Enter Space ID to free: ",
                done: "Space freed successfully.",
            },
        },
    ],
};

impl Form for SpaceAllocation {
    const NOUN: &'static str = "Space";
    const EMPTY: &'static str = "No space allocations recorded.";
    const LIST_TITLE: &'static str = "Space Usage";

    fn repository(warehouse: &Warehouse) -> &Repository<Self> {
        &warehouse.spaces
    }

    fn repository_mut(warehouse: &mut Warehouse) -> &mut Repository<Self> {
        &mut warehouse.spaces
    }

    fn read_new<S: LineSource, W: Write>(console: &mut Console<S, W>) -> ConsoleResult<Option<Self>> {
        let Some(total) = console.ask_number("Enter Total Capacity: ", "capacity")? else {
            return Ok(None);
        };
        let Some(used) = console.ask_number("Enter Used Capacity: ", "capacity")? else {
            return Ok(None);
        };
        let zone = console.ask("Enter Zone: ")?;
        Ok(Some(SpaceAllocation::new(total, used, zone)))
    }
}

impl Edit for SpaceAllocation {
    fn read_edit<S: LineSource, W: Write>(
        console: &mut Console<S, W>,
        current: &Self,
    ) -> ConsoleResult<Option<Self>> {
        let Some(total) = console.ask_number_or("Total Capacity", current.total_capacity, "capacity")? else {
            return Ok(None);
        };
        let Some(used) = console.ask_number_or("Used Capacity", current.used_capacity, "capacity")? else {
            return Ok(None);
        };
        let zone = console.ask_text_or("Zone", &current.zone)?;
        Ok(Some(SpaceAllocation::new(total, used, zone)))
    }
}
