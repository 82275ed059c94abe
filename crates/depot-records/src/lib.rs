// SPDX-FileCopyrightText: 2026 Depot Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Record schemas for the five warehouse record kinds.
//!
//! Each schema implements [`depot_core::Fields`] for its timestamp rules and
//! [`Describe`] for console display. [`Warehouse`] owns one repository per kind.

pub mod display;
pub mod inventory;
pub mod maintenance;
pub mod report;
pub mod shipment;
pub mod space;
pub mod time;
pub mod warehouse;

pub use display::{describe, format_timestamp, Describe, DEFAULT_TIMESTAMP_FORMAT};
pub use inventory::InventoryItem;
pub use maintenance::MaintenanceSchedule;
pub use report::Report;
pub use shipment::Shipment;
pub use space::SpaceAllocation;
pub use time::days_after;
pub use warehouse::Warehouse;
