//! In-memory address book.

use crate::domain::ValidationError;
use crate::models::Record;
use crate::services::birthday_service::{upcoming_birthdays, UpcomingBirthday};
use chrono::NaiveDate;
use std::fmt;

/// In-memory directory of contact records, keyed by name.
///
/// Records are kept in insertion order. Adding a record whose name is
/// already present replaces the stored record in place, so the enumeration
/// order of a name never changes once it has been added.
#[derive(Debug, Clone, Default)]
pub struct AddressBook {
    records: Vec<Record>,
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `record`, overwriting any record stored under the same name.
    pub fn add_record(&mut self, record: Record) {
        match self.position(record.name().as_str()) {
            Some(index) => {
                tracing::trace!(name = %record.name(), "Replacing contact record");
                self.records[index] = record;
            }
            None => {
                tracing::trace!(name = %record.name(), "Inserting contact record");
                self.records.push(record);
            }
        }
    }

    /// Look up a record by exact name.
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.iter().find(|r| r.name().as_str() == name)
    }

    /// Look up a record by exact name for in-place changes.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.iter_mut().find(|r| r.name().as_str() == name)
    }

    /// Look up a record by name, inserting an empty one when it is missing.
    ///
    /// The flag is `true` when a new record was created.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyName` if a record has to be created
    /// and `name` is empty.
    pub fn find_or_insert(
        &mut self,
        name: &str,
    ) -> Result<(&mut Record, bool), ValidationError> {
        let (index, created) = match self.position(name) {
            Some(index) => (index, false),
            None => {
                self.add_record(Record::new(name)?);
                (self.records.len() - 1, true)
            }
        };
        Ok((&mut self.records[index], created))
    }

    /// Remove the record stored under `name`, if any.
    pub fn delete(&mut self, name: &str) {
        if let Some(index) = self.position(name) {
            self.records.remove(index);
        }
    }

    /// Iterate over records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Birthdays observed within `window_days` days starting at `today`.
    ///
    /// See [`upcoming_birthdays`] for the scheduling rules. Results are in
    /// insertion order.
    pub fn get_upcoming_birthdays(
        &self,
        window_days: u32,
        today: NaiveDate,
    ) -> Vec<UpcomingBirthday> {
        upcoming_birthdays(&self.records, today, window_days)
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.records.iter().position(|r| r.name().as_str() == name)
    }
}

impl<'a> IntoIterator for &'a AddressBook {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

impl fmt::Display for AddressBook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, record) in self.records.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", record)?;
        }
        Ok(())
    }
}
