use crate::book::AddressBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Record;
use tracing::info;

/// Create the contact, or append the phone if it already exists.
pub fn run(book: &mut AddressBook, name: &str, phone: &str) -> Result<CmdResult> {
    if let Some(record) = book.find_mut(name) {
        record.add_phone(phone)?;
        info!(contact = name, "phone appended to existing contact");
        return Ok(CmdResult::default().with_message(CmdMessage::success(
            "Phone number added to the existing contact.",
        )));
    }

    let mut record = Record::new(name)?;
    record.add_phone(phone)?;
    book.add_record(record);
    info!(contact = name, "contact created");

    Ok(CmdResult::default().with_message(CmdMessage::success("Contact added.")))
}
