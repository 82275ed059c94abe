// SPDX-FileCopyrightText: 2026 Depot Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Maintenance schedules for warehouse equipment.

use depot_core::{EntityKind, Fields, Timestamp};

use crate::display::{format_timestamp, Describe};

/// A scheduled maintenance job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaintenanceSchedule {
    /// Free-standing equipment number; not checked against any repository.
    pub equipment_id: u64,
    pub description: String,
    pub scheduled_date: Timestamp,
    pub completion_status: String,
}

impl MaintenanceSchedule {
    pub fn new(
        equipment_id: u64,
        description: impl Into<String>,
        scheduled_date: Timestamp,
        completion_status: impl Into<String>,
    ) -> Self {
        Self {
            equipment_id,
            description: description.into(),
            scheduled_date,
            completion_status: completion_status.into(),
        }
    }
}

impl Fields for MaintenanceSchedule {
    const KIND: EntityKind = EntityKind::Maintenance;
}

impl Describe for MaintenanceSchedule {
    const ID_LABEL: &'static str = "Schedule ID";

    fn field_lines(&self, timestamp_format: &str) -> Vec<(&'static str, String)> {
        vec![
            ("Equipment ID", self.equipment_id.to_string()),
            ("Description", self.description.clone()),
            ("Scheduled Date", format_timestamp(self.scheduled_date, timestamp_format)),
            ("Completion Status", self.completion_status.clone()),
        ]
    }
}
