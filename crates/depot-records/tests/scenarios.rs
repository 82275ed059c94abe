// SPDX-FileCopyrightText: 2026 Depot Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! End-to-end record scenarios against a warehouse on a manual clock.

use std::sync::Arc;

use chrono::{Duration, TimeZone, Utc};
use depot_core::{ManualClock, RecordId};
use depot_records::{
    describe, InventoryItem, MaintenanceSchedule, Report, SpaceAllocation, Warehouse,
    DEFAULT_TIMESTAMP_FORMAT,
};

fn warehouse() -> (Warehouse, Arc<ManualClock>) {
    let clock = Arc::new(ManualClock::new(
        Utc.with_ymd_and_hms(2026, 10, 1, 8, 0, 0).unwrap(),
    ));
    (Warehouse::new(clock.clone()), clock)
}

#[test]
fn inventory_add_edit_delete_lifecycle() {
    let (mut wh, clock) = warehouse();

    let id = wh
        .inventory
        .create(InventoryItem::new("Pallet Jack", "Equipment", 4, "Dock A"));
    assert_eq!(id, RecordId(1));
    let created = wh.inventory.find_by_id(id).unwrap().fields.clone();
    assert_eq!(created.quantity, 4);

    clock.advance(Duration::seconds(30));
    let mut edited = created.clone();
    edited.quantity = 10;
    wh.inventory.update(id, edited).unwrap();

    let after = &wh.inventory.find_by_id(id).unwrap().fields;
    assert_eq!(after.quantity, 10);
    assert!(after.last_updated > created.last_updated);

    wh.inventory.delete(id).unwrap();
    assert!(wh.inventory.find_by_id(id).unwrap_err().is_not_found());
    assert!(wh.inventory.list_all().is_empty());
}

#[test]
fn space_available_capacity_is_derived() {
    let (mut wh, _) = warehouse();
    let a = wh.spaces.create(SpaceAllocation::new(100, 30, "North"));
    let b = wh.spaces.create(SpaceAllocation::new(50, 50, "South"));

    assert_eq!(wh.spaces.find_by_id(a).unwrap().fields.available_capacity(), 70);
    assert_eq!(wh.spaces.find_by_id(b).unwrap().fields.available_capacity(), 0);

    wh.spaces
        .update(a, SpaceAllocation::new(100, 130, "North"))
        .unwrap();
    assert_eq!(wh.spaces.find_by_id(a).unwrap().fields.available_capacity(), -30);
}

#[test]
fn update_on_empty_maintenance_repository_is_not_found() {
    let (mut wh, _) = warehouse();
    let now = wh.now();
    let err = wh
        .maintenance
        .update(RecordId(99), MaintenanceSchedule::new(3, "Forklift service", now, "Pending"))
        .unwrap_err();
    assert!(err.is_not_found());
    assert!(wh.maintenance.is_empty());
}

#[test]
fn maintenance_update_is_full_replace() {
    let (mut wh, clock) = warehouse();
    let now = wh.now();
    let id = wh
        .maintenance
        .create(MaintenanceSchedule::new(3, "Forklift service", now, "Pending"));

    clock.advance(Duration::days(2));
    let replacement = MaintenanceSchedule::new(4, "Conveyor belt", wh.now(), "Done");
    wh.maintenance.update(id, replacement.clone()).unwrap();

    assert_eq!(wh.maintenance.find_by_id(id).unwrap().fields, replacement);
}

#[test]
fn report_generated_on_is_creation_time() {
    let (mut wh, clock) = warehouse();
    let created_at = wh.now();
    let id = wh.reports.create(Report::new("Stock", "Initial count"));

    clock.advance(Duration::hours(5));
    wh.reports
        .update(id, Report::new("Stock", "Recount"))
        .unwrap();

    let report = &wh.reports.find_by_id(id).unwrap().fields;
    assert_eq!(report.generated_on, created_at);
    assert_eq!(report.details, "Recount");
}

#[test]
fn describe_puts_identifier_first() {
    let (mut wh, _) = warehouse();
    let id = wh.spaces.create(SpaceAllocation::new(100, 30, "North"));
    let lines = describe(wh.spaces.find_by_id(id).unwrap(), DEFAULT_TIMESTAMP_FORMAT);

    assert_eq!(lines[0], ("Space ID", "1".to_string()));
    assert_eq!(lines[3], ("Available Capacity", "70".to_string()));
    assert_eq!(lines[4], ("Zone", "North".to_string()));
}

#[test]
fn in_place_inventory_edit_refreshes_last_updated() {
    let (mut wh, clock) = warehouse();
    let id = wh
        .inventory
        .create(InventoryItem::new("Shrink Wrap", "Packaging", 4, "Bay 3"));
    let created = wh.inventory.find_by_id(id).unwrap().fields.last_updated;

    clock.advance(Duration::hours(1));
    wh.inventory.modify(id, |item| item.quantity = 10).unwrap();

    let item = &wh.inventory.find_by_id(id).unwrap().fields;
    assert_eq!(item.quantity, 10);
    assert_eq!(item.last_updated, created + Duration::hours(1));
}
