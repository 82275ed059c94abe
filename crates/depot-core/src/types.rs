// SPDX-FileCopyrightText: 2026 Depot Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Common types shared by repositories and record schemas.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Point in time stored on records. Rendered in local time for display.
pub type Timestamp = DateTime<Utc>;

/// Identifier assigned by a repository.
///
/// Unique within one repository, assigned from 1 upwards and never reused.
/// Serializes as the bare integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(pub u64);

impl RecordId {
    /// The first identifier a fresh repository hands out.
    pub const FIRST: RecordId = RecordId(1);

    /// Returns the raw integer value.
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for RecordId {
    fn from(raw: u64) -> Self {
        RecordId(raw)
    }
}

/// The five kinds of record the warehouse keeps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
pub enum EntityKind {
    Inventory,
    Maintenance,
    Report,
    Shipment,
    Space,
}

/// A stored record: the repository-assigned identifier plus caller-supplied fields.
///
/// The identifier is private so that nothing outside the repository can
/// change it after assignment.
#[derive(Debug, Clone, PartialEq)]
pub struct Record<T> {
    id: RecordId,
    /// Entity-specific fields.
    pub fields: T,
}

impl<T> Record<T> {
    pub(crate) fn new(id: RecordId, fields: T) -> Self {
        Self { id, fields }
    }

    /// The identifier assigned at creation.
    pub fn id(&self) -> RecordId {
        self.id
    }
}
