// SPDX-FileCopyrightText: 2026 Depot Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Label/value rendering of records for the console.

use std::fmt::Write;

use chrono::Local;
use depot_core::{Fields, Record, Timestamp};

/// Display pattern for timestamps: `YYYY-MM-DD HH:MM:SS`.
pub const DEFAULT_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A record schema that knows how to present itself.
pub trait Describe: Fields {
    /// Label shown next to the record identifier, e.g. `Item ID`.
    const ID_LABEL: &'static str;

    /// The non-identifier fields as label/value pairs, in display order.
    fn field_lines(&self, timestamp_format: &str) -> Vec<(&'static str, String)>;
}

/// Full label/value listing for a record, identifier first.
pub fn describe<T: Describe>(record: &Record<T>, timestamp_format: &str) -> Vec<(&'static str, String)> {
    let mut lines = vec![(T::ID_LABEL, record.id().to_string())];
    lines.extend(record.fields.field_lines(timestamp_format));
    lines
}

/// Formats `ts` in local time using a strftime `pattern`.
///
/// Falls back to [`DEFAULT_TIMESTAMP_FORMAT`] if the pattern cannot be rendered.
pub fn format_timestamp(ts: Timestamp, pattern: &str) -> String {
    let local = ts.with_timezone(&Local);
    let mut out = String::new();
    if write!(out, "{}", local.format(pattern)).is_ok() {
        return out;
    }
    local.format(DEFAULT_TIMESTAMP_FORMAT).to_string()
}
