//! # Command Layer
//!
//! One module per session verb. Each `run` takes the [`AddressBook`] and plain
//! string arguments and returns a [`CmdResult`]: messages for the user plus
//! any contacts or birthdays to list. Commands never print and never touch
//! storage; the caller decides how results are shown and when the book is
//! saved.
//!
//! Failures come back as [`crate::error::AbookError`]. Turning those into
//! something a person reads is the CLI's job.
//!
//! [`AddressBook`]: crate::book::AddressBook

use crate::birthdays::UpcomingBirthday;
use crate::model::{Birthday, Record};
use chrono::NaiveDate;

pub mod add;
pub mod all;
pub mod birthday;
pub mod birthdays;
pub mod change;
pub mod delete;
pub mod phone;
pub mod remove_phone;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// An upcoming birthday detached from the book it was found in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcomingEntry {
    pub name: String,
    pub birthday: Birthday,
    pub date: NaiveDate,
    pub congratulate_on: NaiveDate,
}

impl UpcomingEntry {
    pub fn is_shifted(&self) -> bool {
        self.date != self.congratulate_on
    }
}

impl From<&UpcomingBirthday<'_>> for UpcomingEntry {
    fn from(upcoming: &UpcomingBirthday<'_>) -> Self {
        Self {
            name: upcoming.record.name().to_string(),
            // upcoming() only yields records that have a birthday
            birthday: upcoming
                .record
                .birthday()
                .copied()
                .unwrap_or_else(|| Birthday::from(upcoming.date)),
            date: upcoming.date,
            congratulate_on: upcoming.congratulate_on,
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub listed_contacts: Vec<Record>,
    pub upcoming: Vec<UpcomingEntry>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.messages.push(message);
        self
    }

    pub fn with_listed_contacts(mut self, contacts: Vec<Record>) -> Self {
        self.listed_contacts = contacts;
        self
    }

    pub fn with_upcoming(mut self, upcoming: Vec<UpcomingEntry>) -> Self {
        self.upcoming = upcoming;
        self
    }
}
