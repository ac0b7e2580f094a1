//! Terminal output for command results.
//!
//! Lists come first, messages last. Columns are padded by display width so
//! names in any script line up.

use abook::api::{CmdMessage, CmdResult, MessageLevel, UpcomingEntry};
use abook::model::Record;
use colored::Colorize;
use std::io::{self, Write};
use unicode_width::UnicodeWidthStr;

const GAP: &str = "  ";
const DAY_FORMAT: &str = "%a %d.%m.%Y";

pub fn write_result<W: Write>(out: &mut W, result: &CmdResult) -> io::Result<()> {
    write_contacts(out, &result.listed_contacts)?;
    write_upcoming(out, &result.upcoming)?;
    write_messages(out, &result.messages)
}

pub fn write_messages<W: Write>(out: &mut W, messages: &[CmdMessage]) -> io::Result<()> {
    for message in messages {
        let line = match message.level {
            MessageLevel::Info => message.content.normal(),
            MessageLevel::Success => message.content.green(),
            MessageLevel::Warning => message.content.yellow(),
            MessageLevel::Error => message.content.red(),
        };
        writeln!(out, "{}", line)?;
    }
    Ok(())
}

fn write_contacts<W: Write>(out: &mut W, contacts: &[Record]) -> io::Result<()> {
    let name_width = column_width(contacts.iter().map(|r| r.name().as_str()));
    let phones: Vec<String> = contacts.iter().map(Record::phones_joined).collect();
    let phone_width = column_width(phones.iter().map(String::as_str));

    for (record, phones) in contacts.iter().zip(&phones) {
        let mut line = format!(
            "{}{}{}",
            pad(record.name().as_str(), name_width).bold(),
            GAP,
            pad(phones, phone_width)
        );
        if let Some(birthday) = record.birthday() {
            line.push_str(GAP);
            line.push_str(&birthday.to_string().dimmed().to_string());
        }
        writeln!(out, "{}", line.trim_end())?;
    }
    Ok(())
}

fn write_upcoming<W: Write>(out: &mut W, upcoming: &[UpcomingEntry]) -> io::Result<()> {
    let name_width = column_width(upcoming.iter().map(|u| u.name.as_str()));

    for entry in upcoming {
        let greet = entry.congratulate_on.format(DAY_FORMAT).to_string();
        let greet = if entry.is_shifted() {
            greet.yellow()
        } else {
            greet.normal()
        };
        writeln!(
            out,
            "{}{}born {}{}congratulate on {}",
            pad(&entry.name, name_width).bold(),
            GAP,
            entry.birthday,
            GAP,
            greet
        )?;
    }
    Ok(())
}

fn column_width<'a>(cells: impl Iterator<Item = &'a str>) -> usize {
    cells.map(UnicodeWidthStr::width).max().unwrap_or(0)
}

fn pad(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(s.width());
    format!("{}{}", s, " ".repeat(fill))
}

#[cfg(test)]
mod tests {
    use super::*;
    use abook::model::Birthday;
    use chrono::NaiveDate;

    fn render(result: &CmdResult) -> String {
        colored::control::set_override(false);
        let mut out = Vec::new();
        write_result(&mut out, result).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn record(name: &str, phones: &[&str]) -> Record {
        let mut record = Record::new(name).unwrap();
        for phone in phones {
            record.add_phone(phone).unwrap();
        }
        record
    }

    #[test]
    fn contacts_are_aligned_by_display_width() {
        let result = CmdResult::default().with_listed_contacts(vec![
            record("Олена", &["0501111111"]),
            record("bob", &["0502222222", "0503333333"]),
        ]);

        let output = render(&result);
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines[0], "Олена  0501111111");
        assert_eq!(lines[1], "bob    0502222222; 0503333333");
    }

    #[test]
    fn birthday_column_when_set() {
        let mut alex = record("alex", &["0503333333"]);
        alex.add_birthday("03.03.2020").unwrap();

        let output = render(&CmdResult::default().with_listed_contacts(vec![alex]));
        assert_eq!(output, "alex  0503333333  03.03.2020\n");
    }

    #[test]
    fn upcoming_shows_birth_date_and_greeting_day() {
        let entry = UpcomingEntry {
            name: "alex".into(),
            birthday: Birthday::new("03.03.2020").unwrap(),
            date: NaiveDate::from_ymd_opt(2024, 3, 3).unwrap(),
            congratulate_on: NaiveDate::from_ymd_opt(2024, 3, 4).unwrap(),
        };

        let output = render(&CmdResult::default().with_upcoming(vec![entry]));
        assert_eq!(
            output,
            "alex  born 03.03.2020  congratulate on Mon 04.03.2024\n"
        );
    }

    #[test]
    fn messages_follow_lists() {
        let result = CmdResult::default()
            .with_listed_contacts(vec![record("alex", &["0503333333"])])
            .with_message(CmdMessage::info("done"));

        let output = render(&result);
        assert!(output.ends_with("done\n"));
        assert!(output.starts_with("alex"));
    }
}
