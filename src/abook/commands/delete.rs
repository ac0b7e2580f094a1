use crate::book::AddressBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{AbookError, Result};
use tracing::info;

pub fn run(book: &mut AddressBook, name: &str) -> Result<CmdResult> {
    let removed = book
        .delete(name)
        .ok_or_else(|| AbookError::ContactNotFound(name.to_string()))?;
    info!(contact = name, phones = removed.phones().len(), "contact deleted");

    Ok(CmdResult::default().with_message(CmdMessage::success("Contact deleted.")))
}
