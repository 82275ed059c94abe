// SPDX-FileCopyrightText: 2026 Depot Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Extension seams for the generic repository.
//!
//! Record schemas implement [`Fields`]; time comes from a [`Clock`].

pub mod clock;
pub mod fields;

pub use clock::{Clock, ManualClock, SystemClock};
pub use fields::Fields;
