// SPDX-FileCopyrightText: 2026 Depot Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The warehouse: one repository per record kind, built explicitly at startup.

use std::sync::Arc;

use depot_core::{Clock, DepotError, EntityKind, Record, RecordId, Repository, SystemClock, Timestamp};
use tracing::debug;

use crate::{InventoryItem, MaintenanceSchedule, Report, Shipment, SpaceAllocation};

/// All record repositories of a running session.
///
/// The repositories are independent: deleting an inventory item leaves
/// shipments that reference it untouched.
#[derive(Debug)]
pub struct Warehouse {
    pub inventory: Repository<InventoryItem>,
    pub maintenance: Repository<MaintenanceSchedule>,
    pub reports: Repository<Report>,
    pub shipments: Repository<Shipment>,
    pub spaces: Repository<SpaceAllocation>,
    clock: Arc<dyn Clock>,
}

impl Warehouse {
    /// Builds empty repositories sharing one clock.
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        debug!("warehouse repositories initialized");
        Self {
            inventory: Repository::new(clock.clone()),
            maintenance: Repository::new(clock.clone()),
            reports: Repository::new(clock.clone()),
            shipments: Repository::new(clock.clone()),
            spaces: Repository::new(clock.clone()),
            clock,
        }
    }

    /// Builds empty repositories on wall-clock time.
    pub fn with_system_clock() -> Self {
        Self::new(Arc::new(SystemClock))
    }

    /// The current time on the shared clock.
    pub fn now(&self) -> Timestamp {
        self.clock.now()
    }

    /// Resolves a shipment's item reference through the inventory repository.
    ///
    /// Errors only if the shipment itself is unknown. `Ok(None)` means the
    /// referenced item is not (or no longer) in inventory.
    pub fn shipment_item(
        &self,
        shipment_id: RecordId,
    ) -> Result<Option<&Record<InventoryItem>>, DepotError> {
        let shipment = self.shipments.find_by_id(shipment_id)?;
        Ok(self.inventory.find_by_id(shipment.fields.item_id).ok())
    }

    /// Record count per kind, in menu order.
    pub fn counts(&self) -> [(EntityKind, usize); 5] {
        [
            (EntityKind::Inventory, self.inventory.len()),
            (EntityKind::Maintenance, self.maintenance.len()),
            (EntityKind::Report, self.reports.len()),
            (EntityKind::Shipment, self.shipments.len()),
            (EntityKind::Space, self.spaces.len()),
        ]
    }
}

impl Default for Warehouse {
    fn default() -> Self {
        Self::with_system_clock()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use depot_core::ManualClock;

    fn warehouse() -> Warehouse {
        let clock = ManualClock::new(Utc.with_ymd_and_hms(2026, 4, 2, 6, 0, 0).unwrap());
        Warehouse::new(Arc::new(clock))
    }

    #[test]
    fn repositories_number_independently() {
        let mut wh = warehouse();
        let item = wh.inventory.create(InventoryItem::new("Crate", "Packaging", 5, "Bay 1"));
        let space = wh.spaces.create(SpaceAllocation::new(10, 0, "North"));
        assert_eq!(item, RecordId(1));
        assert_eq!(space, RecordId(1));
    }

    #[test]
    fn shipment_item_resolves_through_inventory() {
        let mut wh = warehouse();
        let item = wh.inventory.create(InventoryItem::new("Crate", "Packaging", 5, "Bay 1"));
        let now = wh.now();
        let shipment = wh
            .shipments
            .create(Shipment::new(item, "Plant", "Store 9", "In Transit", now));

        let resolved = wh.shipment_item(shipment).unwrap().unwrap();
        assert_eq!(resolved.fields.name, "Crate");
    }

    #[test]
    fn deleting_item_does_not_cascade_to_shipments() {
        let mut wh = warehouse();
        let item = wh.inventory.create(InventoryItem::new("Crate", "Packaging", 5, "Bay 1"));
        let now = wh.now();
        let shipment = wh
            .shipments
            .create(Shipment::new(item, "Plant", "Store 9", "In Transit", now));

        wh.inventory.delete(item).unwrap();

        assert_eq!(wh.shipments.len(), 1);
        assert_eq!(wh.shipments.find_by_id(shipment).unwrap().fields.item_id, item);
        assert!(wh.shipment_item(shipment).unwrap().is_none());
    }

    #[test]
    fn shipment_item_for_unknown_shipment_is_not_found() {
        let wh = warehouse();
        assert!(wh.shipment_item(RecordId(3)).unwrap_err().is_not_found());
    }

    #[test]
    fn counts_reflect_each_repository() {
        let mut wh = warehouse();
        wh.reports.create(Report::new("Audit", "Q1"));
        wh.reports.create(Report::new("Audit", "Q2"));
        wh.spaces.create(SpaceAllocation::new(1, 1, "S"));

        let counts = wh.counts();
        assert_eq!(counts[0], (EntityKind::Inventory, 0));
        assert_eq!(counts[2], (EntityKind::Report, 2));
        assert_eq!(counts[4], (EntityKind::Space, 1));
    }
}
