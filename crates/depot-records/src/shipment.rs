// SPDX-FileCopyrightText: 2026 Depot Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Inbound and outbound shipments.

use depot_core::{EntityKind, Fields, RecordId, Timestamp};

use crate::display::{format_timestamp, Describe};

/// A shipment of one inventory item.
///
/// `item_id` is a plain reference into the inventory repository. It is not
/// validated and nothing cascades when the item is deleted; resolve it with
/// [`crate::Warehouse::shipment_item`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shipment {
    pub item_id: RecordId,
    pub origin: String,
    pub destination: String,
    pub status: String,
    pub expected_delivery: Timestamp,
}

impl Shipment {
    pub fn new(
        item_id: RecordId,
        origin: impl Into<String>,
        destination: impl Into<String>,
        status: impl Into<String>,
        expected_delivery: Timestamp,
    ) -> Self {
        Self {
            item_id,
            origin: origin.into(),
            destination: destination.into(),
            status: status.into(),
            expected_delivery,
        }
    }
}

impl Fields for Shipment {
    const KIND: EntityKind = EntityKind::Shipment;
}

impl Describe for Shipment {
    const ID_LABEL: &'static str = "Shipment ID";

    fn field_lines(&self, timestamp_format: &str) -> Vec<(&'static str, String)> {
        vec![
            ("Item ID", self.item_id.to_string()),
            ("Origin", self.origin.clone()),
            ("Destination", self.destination.clone()),
            ("Status", self.status.clone()),
            ("Expected Delivery", format_timestamp(self.expected_delivery, timestamp_format)),
        ]
    }
}
