// SPDX-FileCopyrightText: 2026 Depot Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Storage space allocations per zone.

use depot_core::{EntityKind, Fields};

use crate::display::Describe;

/// A block of storage capacity in one zone.
///
/// Available capacity is derived on every read and never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpaceAllocation {
    pub total_capacity: i64,
    pub used_capacity: i64,
    pub zone: String,
}

impl SpaceAllocation {
    pub fn new(total_capacity: i64, used_capacity: i64, zone: impl Into<String>) -> Self {
        Self {
            total_capacity,
            used_capacity,
            zone: zone.into(),
        }
    }

    /// `total - used`, unclamped: negative when the zone is over-committed.
    ///
    /// The subtraction saturates at `i64::MIN`/`i64::MAX` instead of
    /// overflowing. That is the only bound applied, and it is reachable only
    /// from capacities near the `i64` limits.
    pub fn available_capacity(&self) -> i64 {
        self.total_capacity.saturating_sub(self.used_capacity)
    }
}

impl Fields for SpaceAllocation {
    const KIND: EntityKind = EntityKind::Space;
}

impl Describe for SpaceAllocation {
    const ID_LABEL: &'static str = "Space ID";

    fn field_lines(&self, _timestamp_format: &str) -> Vec<(&'static str, String)> {
        vec![
            ("Total Capacity", self.total_capacity.to_string()),
            ("Used Capacity", self.used_capacity.to_string()),
            ("Available Capacity", self.available_capacity().to_string()),
            ("Zone", self.zone.clone()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn available_is_total_minus_used() {
        assert_eq!(SpaceAllocation::new(100, 30, "A").available_capacity(), 70);
        assert_eq!(SpaceAllocation::new(50, 50, "B").available_capacity(), 0);
    }

    #[test]
    fn over_committed_space_goes_negative() {
        assert_eq!(SpaceAllocation::new(10, 25, "C").available_capacity(), -15);
    }

    #[test]
    fn extreme_capacities_saturate_instead_of_overflowing() {
        assert_eq!(SpaceAllocation::new(i64::MIN, 1, "D").available_capacity(), i64::MIN);
        assert_eq!(SpaceAllocation::new(i64::MAX, -1, "E").available_capacity(), i64::MAX);
    }

    #[test]
    fn available_line_tracks_current_values() {
        let mut space = SpaceAllocation::new(100, 30, "A");
        space.used_capacity = 90;
        let lines = space.field_lines(crate::DEFAULT_TIMESTAMP_FORMAT);
        assert!(lines.contains(&("Available Capacity", "10".to_string())));
    }

    proptest! {
        #[test]
        fn available_matches_subtraction(total in -1_000_000i64..1_000_000, used in -1_000_000i64..1_000_000) {
            prop_assert_eq!(SpaceAllocation::new(total, used, "Z").available_capacity(), total - used);
        }
    }
}
