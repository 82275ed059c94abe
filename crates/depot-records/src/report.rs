// SPDX-FileCopyrightText: 2026 Depot Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Generated warehouse reports.

use depot_core::{EntityKind, Fields, Timestamp};

use crate::display::{format_timestamp, Describe};

/// A report. `generated_on` is stamped at creation and never changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub report_type: String,
    pub generated_on: Timestamp,
    pub details: String,
}

impl Report {
    pub fn new(report_type: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            report_type: report_type.into(),
            generated_on: Timestamp::default(),
            details: details.into(),
        }
    }
}

impl Fields for Report {
    const KIND: EntityKind = EntityKind::Report;

    fn on_create(&mut self, now: Timestamp) {
        self.generated_on = now;
    }

    fn on_replace(&mut self, previous: &Self, _now: Timestamp) {
        self.generated_on = previous.generated_on;
    }
}

impl Describe for Report {
    const ID_LABEL: &'static str = "Report ID";

    fn field_lines(&self, timestamp_format: &str) -> Vec<(&'static str, String)> {
        vec![
            ("Report Type", self.report_type.clone()),
            ("Generated On", format_timestamp(self.generated_on, timestamp_format)),
            ("Details", self.details.clone()),
        ]
    }
}
