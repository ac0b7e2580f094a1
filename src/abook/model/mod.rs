//! Core data types: the validated field wrappers and the contact [`Record`].

pub mod fields;
pub mod record;

pub use fields::{Birthday, Name, Phone};
pub use record::Record;
