//! # API Facade
//!
//! [`AbookApi`] is the single entry point for every address-book operation,
//! whatever the front end. It owns the in-memory [`AddressBook`] for the
//! length of a session:
//!
//! - [`AbookApi::open`] reads the persisted book once,
//! - each method dispatches to a `commands::*` function,
//! - [`AbookApi::save`] writes the book back once, at clean shutdown.
//!
//! The facade holds no business logic and produces no output. Methods return
//! `Result<CmdResult>` and leave presentation to the caller.
//!
//! `AbookApi<S: DataStore>` is generic over storage: `FileStore` in the
//! binary, `InMemoryStore` in tests.

use crate::book::AddressBook;
use crate::commands;
use crate::config::AbookConfig;
use crate::error::Result;
use crate::store::DataStore;
use chrono::{Local, NaiveDate};
use tracing::debug;

pub struct AbookApi<S: DataStore> {
    store: S,
    book: AddressBook,
    window_days: i64,
}

impl<S: DataStore> AbookApi<S> {
    /// Load the book from `store` and start a session.
    pub fn open(store: S, config: &AbookConfig) -> Result<Self> {
        let book = store.load()?;
        debug!(contacts = book.len(), "session opened");
        Ok(Self {
            store,
            book,
            window_days: config.birthday_window_days,
        })
    }

    pub fn add_contact(&mut self, name: &str, phone: &str) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.book, name, phone)
    }

    pub fn change_phone(
        &mut self,
        name: &str,
        old: Option<&str>,
        new: &str,
    ) -> Result<commands::CmdResult> {
        commands::change::run(&mut self.book, name, old, new)
    }

    pub fn show_phone(&self, name: &str) -> Result<commands::CmdResult> {
        commands::phone::run(&self.book, name)
    }

    pub fn remove_phone(&mut self, name: &str, phone: &str) -> Result<commands::CmdResult> {
        commands::remove_phone::run(&mut self.book, name, phone)
    }

    pub fn all_contacts(&self) -> Result<commands::CmdResult> {
        commands::all::run(&self.book)
    }

    pub fn delete_contact(&mut self, name: &str) -> Result<commands::CmdResult> {
        commands::delete::run(&mut self.book, name)
    }

    pub fn add_birthday(&mut self, name: &str, date: &str) -> Result<commands::CmdResult> {
        commands::birthday::add(&mut self.book, name, date)
    }

    pub fn show_birthday(&self, name: &str) -> Result<commands::CmdResult> {
        commands::birthday::show(&self.book, name)
    }

    /// Upcoming birthdays as of the local calendar date.
    pub fn upcoming_birthdays(&self) -> Result<commands::CmdResult> {
        self.upcoming_birthdays_on(Local::now().date_naive())
    }

    pub fn upcoming_birthdays_on(&self, today: NaiveDate) -> Result<commands::CmdResult> {
        commands::birthdays::run(&self.book, today, self.window_days)
    }

    /// Persist the whole book.
    pub fn save(&mut self) -> Result<()> {
        self.store.save(&self.book)
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

pub use commands::{CmdMessage, CmdResult, MessageLevel, UpcomingEntry};
