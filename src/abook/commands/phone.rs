use crate::book::AddressBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{AbookError, Result};

pub fn run(book: &AddressBook, name: &str) -> Result<CmdResult> {
    let record = book
        .find(name)
        .ok_or_else(|| AbookError::ContactNotFound(name.to_string()))?;

    let mut result = CmdResult::default().with_listed_contacts(vec![record.clone()]);
    if record.phones().is_empty() {
        result.add_message(CmdMessage::info(format!("{} has no phones.", name)));
    }
    Ok(result)
}
