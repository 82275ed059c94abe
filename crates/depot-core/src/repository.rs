// SPDX-FileCopyrightText: 2026 Depot Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Generic in-memory repository shared by every record kind.
//!
//! Records live in a `Vec` in insertion order and are found by linear scan.
//! Identifiers come from a per-repository counter that starts at 1 and only
//! ever increments, so a deleted identifier is never handed out again.

use std::sync::Arc;

use tracing::debug;

use crate::error::DepotError;
use crate::traits::{Clock, Fields, SystemClock};
use crate::types::{Record, RecordId, Timestamp};

/// Owning collection for one record kind.
pub struct Repository<T: Fields> {
    records: Vec<Record<T>>,
    next_id: u64,
    clock: Arc<dyn Clock>,
}

impl<T: Fields> Repository<T> {
    /// Creates an empty repository that stamps records using `clock`.
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            records: Vec::new(),
            next_id: RecordId::FIRST.get(),
            clock,
        }
    }

    /// Creates an empty repository on wall-clock time.
    pub fn with_system_clock() -> Self {
        Self::new(Arc::new(SystemClock))
    }

    /// Assigns the next identifier, appends the record and returns the identifier.
    pub fn create(&mut self, mut fields: T) -> RecordId {
        let id = RecordId(self.next_id);
        self.next_id += 1;

        fields.on_create(self.clock.now());
        self.records.push(Record::new(id, fields));

        debug!(kind = %T::KIND, id = %id, total = self.records.len(), "record created");
        id
    }

    /// Looks up a record by exact identifier.
    pub fn find_by_id(&self, id: RecordId) -> Result<&Record<T>, DepotError> {
        self.records
            .iter()
            .find(|record| record.id() == id)
            .ok_or(DepotError::NotFound { kind: T::KIND, id })
    }

    /// In-place edit: `edit` runs on a copy of the stored fields, which is
    /// then committed through [`Repository::update`] so that
    /// [`Fields::on_replace`] stamps it like any other replace.
    pub fn modify<F>(&mut self, id: RecordId, edit: F) -> Result<(), DepotError>
    where
        F: FnOnce(&mut T),
    {
        let mut fields = self.find_by_id(id)?.fields.clone();
        edit(&mut fields);
        self.update(id, fields)
    }

    /// All records in insertion order. Empty is a valid state.
    pub fn list_all(&self) -> &[Record<T>] {
        &self.records
    }

    /// Full-replace update: every non-identifier field takes the value in `fields`,
    /// subject to the schema's [`Fields::on_replace`] rules.
    ///
    /// Leaves the collection untouched when `id` is unknown.
    pub fn update(&mut self, id: RecordId, mut fields: T) -> Result<(), DepotError> {
        let now = self.clock.now();
        let Some(record) = self.records.iter_mut().find(|record| record.id() == id) else {
            debug!(kind = %T::KIND, id = %id, "update skipped, record not found");
            return Err(DepotError::NotFound { kind: T::KIND, id });
        };

        fields.on_replace(&record.fields, now);
        record.fields = fields;

        debug!(kind = %T::KIND, id = %id, "record updated");
        Ok(())
    }

    /// Removes the record with `id`, preserving the order of the rest.
    ///
    /// Returns the removed record.
    pub fn delete(&mut self, id: RecordId) -> Result<Record<T>, DepotError> {
        let Some(index) = self.records.iter().position(|record| record.id() == id) else {
            debug!(kind = %T::KIND, id = %id, "delete skipped, record not found");
            return Err(DepotError::NotFound { kind: T::KIND, id });
        };

        let removed = self.records.remove(index);
        debug!(kind = %T::KIND, id = %id, total = self.records.len(), "record deleted");
        Ok(removed)
    }

    /// Number of records currently held.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if the repository holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The identifier the next `create` will assign.
    pub fn next_id(&self) -> RecordId {
        RecordId(self.next_id)
    }

    /// The current time according to this repository's clock.
    pub fn now(&self) -> Timestamp {
        self.clock.now()
    }
}

impl<T: Fields> Default for Repository<T> {
    fn default() -> Self {
        Self::with_system_clock()
    }
}

impl<T: Fields> std::fmt::Debug for Repository<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Repository")
            .field("kind", &T::KIND)
            .field("records", &self.records)
            .field("next_id", &self.next_id)
            .finish_non_exhaustive()
    }
}
