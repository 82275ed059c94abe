// SPDX-FileCopyrightText: 2026 Depot Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Inventory items: what is on the shelves and where.

use depot_core::{EntityKind, Fields, Timestamp};

use crate::display::{format_timestamp, Describe};

/// A stocked item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryItem {
    pub name: String,
    pub category: String,
    pub quantity: u32,
    pub location: String,
    /// Stamped by the repository on create and on every update.
    pub last_updated: Timestamp,
}

impl InventoryItem {
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        quantity: u32,
        location: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            quantity,
            location: location.into(),
            last_updated: Timestamp::default(),
        }
    }
}

impl Fields for InventoryItem {
    const KIND: EntityKind = EntityKind::Inventory;

    fn on_create(&mut self, now: Timestamp) {
        self.last_updated = now;
    }

    fn on_replace(&mut self, _previous: &Self, now: Timestamp) {
        self.last_updated = now;
    }
}

impl Describe for InventoryItem {
    const ID_LABEL: &'static str = "Item ID";

    fn field_lines(&self, timestamp_format: &str) -> Vec<(&'static str, String)> {
        vec![
            ("Name", self.name.clone()),
            ("Category", self.category.clone()),
            ("Quantity", self.quantity.to_string()),
            ("Location", self.location.clone()),
            ("Last Updated", format_timestamp(self.last_updated, timestamp_format)),
        ]
    }
}
