use crate::book::AddressBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;

pub fn run(book: &AddressBook) -> Result<CmdResult> {
    if book.is_empty() {
        return Ok(CmdResult::default().with_message(CmdMessage::info("No contacts saved.")));
    }
    Ok(CmdResult::default().with_listed_contacts(book.iter().cloned().collect()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::BookFixture;

    #[test]
    fn lists_contacts_in_insertion_order() {
        let book = BookFixture::new()
            .with_contact("zoe", &["0501111111"])
            .with_contact("adam", &["0502222222"])
            .book;

        let result = run(&book).unwrap();
        let names: Vec<_> = result
            .listed_contacts
            .iter()
            .map(|r| r.name().to_string())
            .collect();
        assert_eq!(names, vec!["zoe", "adam"]);
    }

    #[test]
    fn empty_book_says_so() {
        let result = run(&AddressBook::new()).unwrap();
        assert!(result.listed_contacts.is_empty());
        assert_eq!(result.messages[0].content, "No contacts saved.");
    }
}
