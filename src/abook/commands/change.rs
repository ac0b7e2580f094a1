use crate::book::AddressBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{AbookError, Result};
use tracing::info;

/// Replace one of a contact's phones.
///
/// Without `old` the target is implied only when the contact has exactly one
/// phone. Any other count is refused rather than guessed.
pub fn run(book: &mut AddressBook, name: &str, old: Option<&str>, new: &str) -> Result<CmdResult> {
    let record = book
        .find_mut(name)
        .ok_or_else(|| AbookError::ContactNotFound(name.to_string()))?;

    let old = match old {
        Some(old) => old.to_string(),
        None => match record.phones() {
            [only] => only.as_str().to_string(),
            [] => {
                return Err(AbookError::Ambiguous(format!(
                    "{} has no phone to change. Use: add {} <phone>",
                    name, name
                )))
            }
            phones => {
                return Err(AbookError::Ambiguous(format!(
                    "{} has {} phones. Use: change {} <old phone> <new phone>",
                    name,
                    phones.len(),
                    name
                )))
            }
        },
    };

    record.edit_phone(&old, new)?;
    info!(contact = name, old = %old, new, "phone changed");

    Ok(CmdResult::default().with_message(CmdMessage::success("Contact updated.")))
}
