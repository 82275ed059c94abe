// SPDX-FileCopyrightText: 2026 Depot Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Main menu and the record actions shared by every sub-menu.
//!
//! Each record kind implements [`Form`] to say how its fields are prompted
//! for and which repository holds it, and declares a [`Menu`] table mapping
//! menu entries to [`Action`]s. Kinds whose menu offers an update also
//! implement [`Edit`]. The actions themselves are generic.

pub mod inventory;
pub mod maintenance;
pub mod report;
pub mod shipment;
pub mod space;

use std::io::Write;

use depot_core::{DepotError, Record, RecordId, Repository};
use depot_records::{Describe, InventoryItem, MaintenanceSchedule, Report, Shipment, SpaceAllocation, Warehouse};
use tracing::{debug, info};

use crate::console::{Console, ConsoleResult};
use crate::input::LineSource;

const MAIN_TITLE: &str = "Logistics Warehouse CLI";

const MAIN_ENTRIES: [&str; 5] = [
    "Inventory Management",
    "Maintenance Management",
    "Report Management",
    "Shipment Management",
    "Space Management",
];

/// How the console reads and locates one record kind.
pub trait Form: Describe {
    /// Singular noun for messages, e.g. `Inventory item`.
    const NOUN: &'static str;
    /// Printed instead of an empty listing.
    const EMPTY: &'static str;
    const LIST_TITLE: &'static str;

    fn repository(warehouse: &Warehouse) -> &Repository<Self>;

    fn repository_mut(warehouse: &mut Warehouse) -> &mut Repository<Self>;

    /// Prompts for a new record. `None` abandons the operation.
    fn read_new<S: LineSource, W: Write>(console: &mut Console<S, W>) -> ConsoleResult<Option<Self>>;

    /// Additional lines shown when a single record is looked up.
    fn lookup_lines(_warehouse: &Warehouse, _record: &Record<Self>) -> Vec<(&'static str, String)> {
        Vec::new()
    }
}

/// A record kind the console can update in place.
pub trait Edit: Form {
    /// Prompts for replacement fields, offering `current` as the default for each.
    fn read_edit<S: LineSource, W: Write>(
        console: &mut Console<S, W>,
        current: &Self,
    ) -> ConsoleResult<Option<Self>>;
}

/// A sub-menu: a title and its numbered entries. `0` always goes back.
pub struct Menu {
    pub title: &'static str,
    pub entries: &'static [Entry],
}

pub struct Entry {
    pub label: &'static str,
    pub action: Action,
}

/// What a menu entry does with its record kind.
///
/// `done` messages may contain `{id}`, replaced by the affected record's ID.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Create { done: &'static str },
    List,
    /// Look one record up by ID, optionally under a heading.
    Show {
        prompt: &'static str,
        heading: Option<&'static str>,
    },
    /// Pre-filled edit followed by a full replace. Needs an [`Edit`] kind.
    Update { prompt: &'static str, done: &'static str },
    Delete { prompt: &'static str, done: &'static str },
}

fn fill_id(template: &str, id: RecordId) -> String {
    template.replace("{id}", &id.to_string())
}

impl<S: LineSource, W: Write> Console<S, W> {
    pub(crate) fn main_menu(&mut self) -> ConsoleResult<()> {
        loop {
            let Some(choice) = self.choose(MAIN_TITLE, &MAIN_ENTRIES, "Exit Application")? else {
                continue;
            };
            match choice {
                0 => {
                    self.say("Exiting application.")?;
                    return Ok(());
                }
                1 => self.menu_loop(&inventory::MENU, Self::perform_edit::<InventoryItem>)?,
                2 => self.menu_loop(&maintenance::MENU, Self::perform_edit::<MaintenanceSchedule>)?,
                3 => self.menu_loop(&report::MENU, Self::perform::<Report>)?,
                4 => self.menu_loop(&shipment::MENU, Self::perform_edit::<Shipment>)?,
                5 => self.menu_loop(&space::MENU, Self::perform_edit::<SpaceAllocation>)?,
                _ => self.invalid_choice()?,
            }
        }
    }

    fn menu_loop<F>(&mut self, menu: &Menu, mut perform: F) -> ConsoleResult<()>
    where
        F: FnMut(&mut Self, Action) -> ConsoleResult<()>,
    {
        let labels: Vec<&str> = menu.entries.iter().map(|entry| entry.label).collect();
        loop {
            let Some(choice) = self.choose(menu.title, &labels, "Back to Main Menu")? else {
                continue;
            };
            if choice == 0 {
                self.say("Returning to Main Menu.")?;
                return Ok(());
            }
            let entry = usize::try_from(choice - 1)
                .ok()
                .and_then(|index| menu.entries.get(index));
            match entry {
                Some(entry) => perform(self, entry.action)?,
                None => self.invalid_choice()?,
            }
        }
    }

    /// Runs `action` for a kind without an edit form. An `Update` entry in
    /// such a kind's table is treated as an invalid choice.
    fn perform<T: Form>(&mut self, action: Action) -> ConsoleResult<()> {
        match action {
            Action::Create { done } => self.create_record::<T>(done),
            Action::List => self.list_records::<T>(),
            Action::Show { prompt, heading } => self.show_record::<T>(prompt, heading),
            Action::Update { .. } => {
                debug!(kind = %T::KIND, "update offered for a kind without an edit form");
                self.invalid_choice()
            }
            Action::Delete { prompt, done } => self.delete_record::<T>(prompt, done),
        }
    }

    fn perform_edit<T: Edit>(&mut self, action: Action) -> ConsoleResult<()> {
        match action {
            Action::Update { prompt, done } => self.update_record::<T>(prompt, done),
            other => self.perform::<T>(other),
        }
    }

    fn create_record<T: Form>(&mut self, done: &str) -> ConsoleResult<()> {
        let Some(fields) = T::read_new(self)? else {
            return Ok(());
        };
        let id = T::repository_mut(self.warehouse_mut()).create(fields);
        self.success(&fill_id(done, id))
    }

    fn list_records<T: Form>(&mut self) -> ConsoleResult<()> {
        let records = T::repository(self.warehouse()).list_all().to_vec();
        if records.is_empty() {
            return self.notice(T::EMPTY);
        }
        self.heading(T::LIST_TITLE)?;
        for record in &records {
            self.print_record(record, &[])?;
        }
        Ok(())
    }

    fn show_record<T: Form>(&mut self, prompt: &str, heading: Option<&str>) -> ConsoleResult<()> {
        let Some(id) = self.ask_id(prompt)? else {
            return Ok(());
        };
        let found = T::repository(self.warehouse()).find_by_id(id).cloned();
        match found {
            Ok(record) => {
                let extra = T::lookup_lines(self.warehouse(), &record);
                if let Some(heading) = heading {
                    self.heading(heading)?;
                }
                self.print_record(&record, &extra)
            }
            Err(e) => self.report_missing::<T>(e),
        }
    }

    fn update_record<T: Edit>(&mut self, prompt: &str, done: &str) -> ConsoleResult<()> {
        let Some(id) = self.ask_id(prompt)? else {
            return Ok(());
        };
        let current = match T::repository(self.warehouse()).find_by_id(id) {
            Ok(record) => record.fields.clone(),
            Err(e) => return self.report_missing::<T>(e),
        };

        self.heading(&format!("Editing {}: {id}", T::ID_LABEL))?;
        let Some(fields) = T::read_edit(self, &current)? else {
            return Ok(());
        };
        match T::repository_mut(self.warehouse_mut()).update(id, fields) {
            Ok(()) => self.success(&fill_id(done, id)),
            Err(e) => self.report_missing::<T>(e),
        }
    }

    fn delete_record<T: Form>(&mut self, prompt: &str, done: &str) -> ConsoleResult<()> {
        let Some(id) = self.ask_id(prompt)? else {
            return Ok(());
        };
        match T::repository_mut(self.warehouse_mut()).delete(id) {
            Ok(_) => self.success(&fill_id(done, id)),
            Err(e) => self.report_missing::<T>(e),
        }
    }

    /// Prints the not-found message for `NotFound`; anything else propagates.
    fn report_missing<T: Form>(&mut self, err: DepotError) -> ConsoleResult<()> {
        match err {
            DepotError::NotFound { kind, id } => {
                info!(%kind, %id, "record not found");
                self.notice(&format!("{} with ID {id} not found.", T::NOUN))
            }
            other => Err(other.into()),
        }
    }
}
