// SPDX-FileCopyrightText: 2026 Depot Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the Depot record keeper.

use thiserror::Error;

use crate::types::{EntityKind, RecordId};

/// The primary error type used across repositories and the console.
#[derive(Debug, Error)]
pub enum DepotError {
    /// A lookup, update or delete named an identifier the repository does not hold.
    ///
    /// This is an expected outcome rather than a failure; callers branch on it.
    #[error("{kind} with ID {id} not found")]
    NotFound { kind: EntityKind, id: RecordId },

    /// Configuration errors surfaced outside the config crate's diagnostics.
    #[error("configuration error: {0}")]
    Config(String),

    /// Console input or output failed.
    #[error("console I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}

impl DepotError {
    /// Returns `true` for the not-found outcome.
    pub fn is_not_found(&self) -> bool {
        matches!(self, DepotError::NotFound { .. })
    }
}
