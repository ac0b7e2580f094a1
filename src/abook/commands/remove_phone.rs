use crate::book::AddressBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{AbookError, Result};
use tracing::info;

/// Remove every copy of `phone` from the contact.
pub fn run(book: &mut AddressBook, name: &str, phone: &str) -> Result<CmdResult> {
    let record = book
        .find_mut(name)
        .ok_or_else(|| AbookError::ContactNotFound(name.to_string()))?;

    let removed = record.remove_phone(phone);
    if removed == 0 {
        return Err(AbookError::PhoneNotFound {
            name: name.to_string(),
            phone: phone.to_string(),
        });
    }
    info!(contact = name, phone, removed, "phone removed");

    Ok(CmdResult::default().with_message(CmdMessage::success(format!(
        "Removed {} phone(s) from {}.",
        removed, name
    ))))
}
