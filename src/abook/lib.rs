//! # Abook Architecture
//!
//! Abook is a small address book: names, phone numbers and birthdays, kept in
//! one JSON file between runs. The library holds everything except the
//! terminal; the binary is a thin interactive client on top.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses process args and session lines                    │
//! │  - Maps errors to messages, prints results                  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the AddressBook for one session                     │
//! │  - Loads on open, saves on close                            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - One function per verb over &mut AddressBook              │
//! │  - Returns CmdResult, never prints                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Domain (model/, book.rs, birthdays.rs)                     │
//! │  - Validated fields, Record, AddressBook                    │
//! │  - Upcoming-birthday scan                                   │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Storage (`store/`) sits beside the API: a [`store::DataStore`] trait with a
//! JSON [`store::fs::FileStore`] and an [`store::memory::InMemoryStore`] for
//! tests.
//!
//! ## No I/O in the Core
//!
//! From `api.rs` inward nothing writes to stdout or stderr, exits the
//! process, or reads the clock implicitly (the birthday scan takes `today`
//! as an argument; only [`api::AbookApi::upcoming_birthdays`] asks the local
//! clock).
//!
//! ## Module Overview
//!
//! - [`api`]: the facade every front end talks to
//! - [`commands`]: business logic for each verb
//! - [`book`]: the [`book::AddressBook`] collection
//! - [`birthdays`]: upcoming-birthday computation
//! - [`model`]: `Name`, `Phone`, `Birthday`, `Record`
//! - [`store`]: persistence
//! - [`config`]: `config.json` handling
//! - [`init`]: path resolution and session setup for the binary
//! - [`error`]: error types

pub mod api;
pub mod birthdays;
pub mod book;
pub mod commands;
pub mod config;
pub mod error;
pub mod init;
pub mod model;
pub mod store;
