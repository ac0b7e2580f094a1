//! # Storage Layer
//!
//! The [`DataStore`] trait hides where the address book lives between runs.
//! It is deliberately coarse: the whole book is read once when a session
//! opens and written once when it closes.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: a single JSON document on disk.
//! - [`memory::InMemoryStore`]: keeps the last saved snapshot in memory, for tests.
//!
//! ## Storage Format
//!
//! ```text
//! {
//!   "version": 1,
//!   "contacts": [
//!     { "name": "alex", "phones": ["0503333333"], "birthday": "03.03.2020" }
//!   ]
//! }
//! ```
//!
//! Field values are re-validated on load. A file that fails validation is an
//! error, never an empty book.

use crate::book::AddressBook;
use crate::error::Result;
use crate::model::Record;
use serde::{Deserialize, Serialize};

pub mod fs;
pub mod memory;

pub const FORMAT_VERSION: u32 = 1;

pub trait DataStore {
    /// Read the persisted book, or an empty one if nothing was saved yet.
    fn load(&self) -> Result<AddressBook>;

    /// Replace the persisted book with `book`.
    fn save(&mut self, book: &AddressBook) -> Result<()>;
}

/// On-disk snapshot of an [`AddressBook`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredBook {
    pub version: u32,
    #[serde(default)]
    pub contacts: Vec<Record>,
}

impl From<&AddressBook> for StoredBook {
    fn from(book: &AddressBook) -> Self {
        Self {
            version: FORMAT_VERSION,
            contacts: book.iter().cloned().collect(),
        }
    }
}

impl From<StoredBook> for AddressBook {
    fn from(stored: StoredBook) -> Self {
        AddressBook::from_records(stored.contacts)
    }
}
