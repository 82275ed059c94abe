// SPDX-FileCopyrightText: 2026 Depot Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Inventory management menu.

use std::io::Write;

use depot_core::Repository;
use depot_records::{InventoryItem, Warehouse};

use super::{Action, Edit, Entry, Form, Menu};
use crate::console::{Console, ConsoleResult};
use crate::input::LineSource;

pub const MENU: Menu = Menu {
    title: "Inventory Management",
    entries: &[
        Entry {
            label: "Add Item",
            action: Action::Create { done: "Inventory item added successfully with ID: {id}" },
        },
        Entry { label: "View Items", action: Action::List },
        Entry {
            label: "Search Item",
            action: Action::Show { prompt: "Enter Item ID to search: ", heading: Some("Item Found") },
        },
        Entry {
            label: "Edit Item",
            action: Action::Update {
                prompt: "Enter Item ID to edit: ",
                done: "Inventory item with ID {id} updated.",
            },
        },
        Entry {
            label: "Delete Item",
            action: Action::Delete {
                prompt: "Enter Item ID to delete: ",
                done: "Inventory item with ID {id} deleted.",
            },
        },
    ],
};

impl Form for InventoryItem {
    const NOUN: &'static str = "Inventory item";
    const EMPTY: &'static str = "Inventory is empty.";
    const LIST_TITLE: &'static str = "Inventory List";

    fn repository(warehouse: &Warehouse) -> &Repository<Self> {
        &warehouse.inventory
    }

    fn repository_mut(warehouse: &mut Warehouse) -> &mut Repository<Self> {
        &mut warehouse.inventory
    }

    fn read_new<S: LineSource, W: Write>(console: &mut Console<S, W>) -> ConsoleResult<Option<Self>> {
        let name = console.ask("Enter Item Name: ")?;
        let category = console.ask("Enter Category: ")?;
        let Some(quantity) = console.ask_number("Enter Quantity: ", "quantity")? else {
            return Ok(None);
        };
        let location = console.ask("Enter Location: ")?;
        Ok(Some(InventoryItem::new(name, category, quantity, location)))
    }
}

impl Edit for InventoryItem {
    fn read_edit<S: LineSource, W: Write>(
        console: &mut Console<S, W>,
        current: &Self,
    ) -> ConsoleResult<Option<Self>> {
        let name = console.ask_text_or("Item Name", &current.name)?;
        let category = console.ask_text_or("Category", &current.category)?;
        let Some(quantity) = console.ask_number_or("Quantity", current.quantity, "quantity")? else {
            return Ok(None);
        };
        let location = console.ask_text_or("Location", &current.location)?;
        Ok(Some(InventoryItem {
            name,
            category,
            quantity,
            location,
            last_updated: current.last_updated,
        }))
    }
}
