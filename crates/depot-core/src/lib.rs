// SPDX-FileCopyrightText: 2026 Depot Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the Depot warehouse record keeper.
//!
//! Provides the generic [`Repository`] that every record kind is stored in,
//! the identifier and kind types it hands out, the [`Fields`] and [`Clock`]
//! seams that record schemas and tests plug into, and the shared error type.

pub mod error;
pub mod repository;
pub mod traits;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::DepotError;
pub use repository::Repository;
pub use traits::{Clock, Fields, ManualClock, SystemClock};
pub use types::{EntityKind, Record, RecordId, Timestamp};
