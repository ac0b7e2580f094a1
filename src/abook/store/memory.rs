use super::DataStore;
use crate::book::AddressBook;
use crate::error::Result;

/// In-memory storage for testing. Does NOT persist across processes.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    snapshot: Option<AddressBook>,
    saves: usize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_book(book: AddressBook) -> Self {
        Self {
            snapshot: Some(book),
            saves: 0,
        }
    }

    pub fn snapshot(&self) -> Option<&AddressBook> {
        self.snapshot.as_ref()
    }

    pub fn save_count(&self) -> usize {
        self.saves
    }
}

impl DataStore for InMemoryStore {
    fn load(&self) -> Result<AddressBook> {
        Ok(self.snapshot.clone().unwrap_or_default())
    }

    fn save(&mut self, book: &AddressBook) -> Result<()> {
        self.snapshot = Some(book.clone());
        self.saves += 1;
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::Record;

    pub struct BookFixture {
        pub book: AddressBook,
    }

    impl Default for BookFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl BookFixture {
        pub fn new() -> Self {
            Self {
                book: AddressBook::new(),
            }
        }

        pub fn with_contact(mut self, name: &str, phones: &[&str]) -> Self {
            let mut record = Record::new(name).unwrap();
            for phone in phones {
                record.add_phone(phone).unwrap();
            }
            self.book.add_record(record);
            self
        }

        pub fn with_birthday(mut self, name: &str, birthday: &str) -> Self {
            if self.book.find(name).is_none() {
                self.book.add_record(Record::new(name).unwrap());
            }
            self.book
                .find_mut(name)
                .unwrap()
                .add_birthday(birthday)
                .unwrap();
            self
        }

        pub fn into_store(self) -> InMemoryStore {
            InMemoryStore::with_book(self.book)
        }
    }
}
