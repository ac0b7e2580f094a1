use crate::book::AddressBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{AbookError, Result};
use tracing::info;

pub fn add(book: &mut AddressBook, name: &str, date: &str) -> Result<CmdResult> {
    let record = book
        .find_mut(name)
        .ok_or_else(|| AbookError::ContactNotFound(name.to_string()))?;
    record.add_birthday(date)?;
    info!(contact = name, date, "birthday set");

    Ok(CmdResult::default().with_message(CmdMessage::success(format!(
        "Birthday added for {}.",
        name
    ))))
}

pub fn show(book: &AddressBook, name: &str) -> Result<CmdResult> {
    let record = book
        .find(name)
        .ok_or_else(|| AbookError::ContactNotFound(name.to_string()))?;

    let message = match record.birthday() {
        Some(birthday) => CmdMessage::info(format!("{}'s birthday is on {}", name, birthday)),
        None => CmdMessage::warning(format!("Birthday not set for {}.", name)),
    };
    Ok(CmdResult::default().with_message(message))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::add;
    use crate::commands::MessageLevel;
    use crate::error::ValidationError;

    #[test]
    fn add_then_show_round_trips_the_date() {
        let mut book = AddressBook::new();
        add::run(&mut book, "alex", "0503333333").unwrap();

        let added = add(&mut book, "alex", "03.03.2020").unwrap();
        assert_eq!(added.messages[0].content, "Birthday added for alex.");

        let shown = show(&book, "alex").unwrap();
        assert!(shown.messages[0].content.contains("03.03.2020"));
    }

    #[test]
    fn add_rejects_bad_date() {
        let mut book = AddressBook::new();
        add::run(&mut book, "alex", "0503333333").unwrap();

        let err = add(&mut book, "alex", "2020-03-03").unwrap_err();
        assert!(matches!(
            err,
            AbookError::Validation(ValidationError::InvalidBirthday(_))
        ));
        assert!(book.find("alex").unwrap().birthday().is_none());
    }

    #[test]
    fn add_to_missing_contact_is_not_found() {
        let mut book = AddressBook::new();
        assert!(matches!(
            add(&mut book, "ghost", "03.03.2020"),
            Err(AbookError::ContactNotFound(_))
        ));
    }

    #[test]
    fn show_without_birthday_warns() {
        let mut book = AddressBook::new();
        add::run(&mut book, "alex", "0503333333").unwrap();

        let shown = show(&book, "alex").unwrap();
        assert_eq!(shown.messages[0].level, MessageLevel::Warning);
        assert_eq!(shown.messages[0].content, "Birthday not set for alex.");
    }
}
