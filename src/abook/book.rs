use crate::birthdays::{self, UpcomingBirthday};
use crate::model::Record;
use chrono::NaiveDate;
use std::fmt;

/// The keyed collection of contacts.
///
/// Records are kept in insertion order and looked up by exact name. Callers
/// only get the operations below; there is no access to the backing storage.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressBook {
    records: Vec<Record>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a book from stored records. A later record replaces an earlier
    /// one with the same name, exactly as repeated `add_record` calls would.
    pub fn from_records(records: impl IntoIterator<Item = Record>) -> Self {
        let mut book = Self::new();
        for record in records {
            book.add_record(record);
        }
        book
    }

    /// Store `record` under its name, replacing (not merging with) any record
    /// already there. The replaced record keeps its position and is returned.
    pub fn add_record(&mut self, record: Record) -> Option<Record> {
        match self.position(record.name().as_str()) {
            Some(idx) => Some(std::mem::replace(&mut self.records[idx], record)),
            None => {
                self.records.push(record);
                None
            }
        }
    }

    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.iter().find(|r| r.name().as_str() == name)
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.iter_mut().find(|r| r.name().as_str() == name)
    }

    /// Remove the named record. Missing names are not an error.
    pub fn delete(&mut self, name: &str) -> Option<Record> {
        self.position(name).map(|idx| self.records.remove(idx))
    }

    pub fn upcoming_birthdays(&self, today: NaiveDate, window: i64) -> Vec<UpcomingBirthday<'_>> {
        birthdays::upcoming(&self.records, today, window)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|r| r.name().as_str())
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
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
