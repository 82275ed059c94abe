// SPDX-FileCopyrightText: 2026 Depot Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Shipment management menu.

use std::io::Write;

use depot_core::{Record, RecordId, Repository};
use depot_records::{Shipment, Warehouse};

use super::{Action, Edit, Entry, Form, Menu};
use crate::console::{Console, ConsoleResult};
use crate::input::LineSource;

pub const MENU: Menu = Menu {
    title: "Shipment Management",
    entries: &[
        Entry {
            label: "Receive Shipment",
            action: Action::Create { done: "Shipment received successfully with ID: {id}" },
        },
        Entry { label: "View All Shipments", action: Action::List },
        Entry {
            label: "Track Shipment",
            action: Action::Show { prompt: "Enter Shipment ID to track: ", heading: None },
        },
        Entry {
            label: "Dispatch Shipment",
            action: Action::Update {
                prompt: "Enter Shipment ID to dispatch: ",
                done: "Shipment dispatched successfully.",
            },
        },
        Entry {
            label: "Remove Shipment",
            action: Action::Delete {
                prompt: "Enter Shipment ID to remove: ",
                done: "Shipment removed successfully.",
            },
        },
    ],
};

impl Form for Shipment {
    const NOUN: &'static str = "Shipment";
    const EMPTY: &'static str = "No shipments recorded.";
    const LIST_TITLE: &'static str = "All Shipments";

    fn repository(warehouse: &Warehouse) -> &Repository<Self> {
        &warehouse.shipments
    }

    fn repository_mut(warehouse: &mut Warehouse) -> &mut Repository<Self> {
        &mut warehouse.shipments
    }

    fn read_new<S: LineSource, W: Write>(console: &mut Console<S, W>) -> ConsoleResult<Option<Self>> {
        let Some(item_id) = console.ask_number::<u64>("Enter Item ID: ", "item ID")? else {
            return Ok(None);
        };
        let origin = console.ask("Enter Origin: ")?;
        let destination = console.ask("Enter Destination: ")?;
        let status = console.ask("Enter Status: ")?;
        let days = console.settings().delivery_days;
        let prompt = format!("Enter days until expected delivery [{days}]: ");
        let Some(expected) = console.ask_days(&prompt, days)? else {
            return Ok(None);
        };
        Ok(Some(Shipment::new(RecordId(item_id), origin, destination, status, expected)))
    }

    fn lookup_lines(warehouse: &Warehouse, record: &Record<Self>) -> Vec<(&'static str, String)> {
        let item = match warehouse.shipment_item(record.id()) {
            Ok(Some(item)) => item.fields.name.clone(),
            Ok(None) | Err(_) => "not in inventory".to_string(),
        };
        vec![("Inventory Item", item)]
    }
}

impl Edit for Shipment {
    fn read_edit<S: LineSource, W: Write>(
        console: &mut Console<S, W>,
        current: &Self,
    ) -> ConsoleResult<Option<Self>> {
        let Some(item_id) = console.ask_number_or("Item ID", current.item_id.get(), "item ID")? else {
            return Ok(None);
        };
        let origin = console.ask_text_or("Origin", &current.origin)?;
        let destination = console.ask_text_or("Destination", &current.destination)?;
        let status = console.ask_text_or("Status", &current.status)?;
        let Some(expected) = console.ask_days_or("Expected Delivery", current.expected_delivery)? else {
            return Ok(None);
        };
        Ok(Some(Shipment::new(RecordId(item_id), origin, destination, status, expected)))
    }
}
