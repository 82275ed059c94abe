// SPDX-FileCopyrightText: 2026 Depot Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Day-offset arithmetic for scheduled and expected dates.

use chrono::Duration;
use depot_core::Timestamp;

/// `now` plus `days` whole days, or `None` past the representable range.
pub fn days_after(now: Timestamp, days: u32) -> Option<Timestamp> {
    now.checked_add_signed(Duration::days(i64::from(days)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn adds_whole_days() {
        let now = Utc.with_ymd_and_hms(2026, 9, 1, 12, 0, 0).unwrap();
        assert_eq!(
            days_after(now, 7),
            Some(Utc.with_ymd_and_hms(2026, 9, 8, 12, 0, 0).unwrap())
        );
        assert_eq!(days_after(now, 0), Some(now));
    }

    #[test]
    fn out_of_range_is_none() {
        let now = Utc.with_ymd_and_hms(2026, 9, 1, 12, 0, 0).unwrap();
        assert_eq!(days_after(now, u32::MAX), None);
    }
}
