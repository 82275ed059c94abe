// SPDX-FileCopyrightText: 2026 Depot Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Trait implemented by every record schema stored in a repository.

use std::fmt;

use crate::types::{EntityKind, Timestamp};

/// The non-identifier fields of one record kind.
///
/// The hooks let a schema own its timestamp rules while the repository
/// owns identity and ordering.
pub trait Fields: Clone + fmt::Debug {
    /// The kind this schema belongs to, used in logs and not-found errors.
    const KIND: EntityKind;

    /// Called once before the record is appended. Stamps creation-time fields.
    fn on_create(&mut self, _now: Timestamp) {}

    /// Called on the incoming fields of a full-replace update, before they
    /// overwrite `previous`. Carries forward fields an update must not change
    /// and refreshes last-updated stamps.
    fn on_replace(&mut self, _previous: &Self, _now: Timestamp) {}
}
