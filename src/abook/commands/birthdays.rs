use crate::book::AddressBook;
use crate::commands::{CmdMessage, CmdResult, UpcomingEntry};
use crate::error::Result;
use chrono::NaiveDate;

pub fn run(book: &AddressBook, today: NaiveDate, window: i64) -> Result<CmdResult> {
    let upcoming: Vec<UpcomingEntry> = book
        .upcoming_birthdays(today, window)
        .iter()
        .map(UpcomingEntry::from)
        .collect();

    if upcoming.is_empty() {
        return Ok(CmdResult::default().with_message(CmdMessage::info("No upcoming birthdays.")));
    }
    Ok(CmdResult::default().with_upcoming(upcoming))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::BookFixture;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn reports_upcoming_with_original_birth_date() {
        let book = BookFixture::new()
            .with_contact("mike", &["0502222222"])
            .with_birthday("mike", "21.05.1995")
            .with_contact("alex", &["0503333333"])
            .with_birthday("alex", "03.03.2020")
            .book;

        // 2024-03-01 is a Friday; alex's birthday falls on Sunday.
        let result = run(&book, ymd(2024, 3, 1), 7).unwrap();
        assert_eq!(result.upcoming.len(), 1);

        let entry = &result.upcoming[0];
        assert_eq!(entry.name, "alex");
        assert_eq!(entry.birthday.to_string(), "03.03.2020");
        assert_eq!(entry.date, ymd(2024, 3, 3));
        assert_eq!(entry.congratulate_on, ymd(2024, 3, 4));
        assert!(entry.is_shifted());
    }

    #[test]
    fn nothing_upcoming_says_so() {
        let book = BookFixture::new().with_birthday("mike", "21.05.1995").book;
        let result = run(&book, ymd(2024, 3, 1), 7).unwrap();
        assert!(result.upcoming.is_empty());
        assert_eq!(result.messages[0].content, "No upcoming birthdays.");
    }

    #[test]
    fn window_is_respected() {
        let book = BookFixture::new().with_birthday("mike", "05.03.1995").book;
        assert!(run(&book, ymd(2024, 3, 1), 3).unwrap().upcoming.is_empty());
        assert_eq!(run(&book, ymd(2024, 3, 1), 4).unwrap().upcoming.len(), 1);
    }
}
