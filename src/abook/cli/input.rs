//! Turning a line of session input into a verb and its arguments.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verb {
    Hello,
    Add,
    Change,
    Phone,
    RemovePhone,
    All,
    Delete,
    AddBirthday,
    ShowBirthday,
    Birthdays,
    Help,
    Exit,
}

impl Verb {
    /// Every verb in help order.
    pub fn all() -> &'static [Verb] {
        &[
            Verb::Hello,
            Verb::Add,
            Verb::Change,
            Verb::Phone,
            Verb::RemovePhone,
            Verb::All,
            Verb::Delete,
            Verb::AddBirthday,
            Verb::ShowBirthday,
            Verb::Birthdays,
            Verb::Help,
            Verb::Exit,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Verb::Hello => "hello",
            Verb::Add => "add",
            Verb::Change => "change",
            Verb::Phone => "phone",
            Verb::RemovePhone => "remove-phone",
            Verb::All => "all",
            Verb::Delete => "delete",
            Verb::AddBirthday => "add-birthday",
            Verb::ShowBirthday => "show-birthday",
            Verb::Birthdays => "birthdays",
            Verb::Help => "help",
            Verb::Exit => "exit",
        }
    }

    pub fn usage(&self) -> &'static str {
        match self {
            Verb::Add => "<name> <phone>",
            Verb::Change => "<name> [<old phone>] <new phone>",
            Verb::Phone | Verb::Delete | Verb::ShowBirthday => "<name>",
            Verb::RemovePhone => "<name> <phone>",
            Verb::AddBirthday => "<name> <DD.MM.YYYY>",
            Verb::Hello | Verb::All | Verb::Birthdays | Verb::Help | Verb::Exit => "",
        }
    }

    pub fn about(&self) -> &'static str {
        match self {
            Verb::Hello => "Say hello",
            Verb::Add => "Add a contact, or another phone to an existing one",
            Verb::Change => "Replace one of a contact's phones",
            Verb::Phone => "Show a contact's phones",
            Verb::RemovePhone => "Remove a phone from a contact",
            Verb::All => "List every contact",
            Verb::Delete => "Delete a contact",
            Verb::AddBirthday => "Set a contact's birthday",
            Verb::ShowBirthday => "Show a contact's birthday",
            Verb::Birthdays => "List birthdays in the coming days",
            Verb::Help => "Show this list",
            Verb::Exit => "Save and quit (also: close)",
        }
    }

    /// Whether running the verb can change the book.
    pub fn mutates(&self) -> bool {
        matches!(
            self,
            Verb::Add | Verb::Change | Verb::RemovePhone | Verb::Delete | Verb::AddBirthday
        )
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("Give me the correct command please.")]
    Empty,

    #[error("Invalid command.")]
    UnknownVerb(String),
}

impl FromStr for Verb {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let verb = match s.to_lowercase().as_str() {
            "hello" => Verb::Hello,
            "add" => Verb::Add,
            "change" => Verb::Change,
            "phone" => Verb::Phone,
            "remove-phone" => Verb::RemovePhone,
            "all" => Verb::All,
            "delete" => Verb::Delete,
            "add-birthday" => Verb::AddBirthday,
            "show-birthday" => Verb::ShowBirthday,
            "birthdays" => Verb::Birthdays,
            "help" => Verb::Help,
            "exit" | "close" => Verb::Exit,
            _ => return Err(InputError::UnknownVerb(s.to_string())),
        };
        Ok(verb)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Input {
    pub verb: Verb,
    pub args: Vec<String>,
}

impl Input {
    pub fn from_tokens<I, T>(tokens: I) -> Result<Self, InputError>
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let mut tokens = tokens.into_iter();
        let verb = tokens.next().ok_or(InputError::Empty)?.as_ref().parse::<Verb>()?;
        let args = tokens.map(|t| t.as_ref().to_string()).collect();
        Ok(Self { verb, args })
    }
}

/// Split on whitespace; the first word is the verb, case-insensitive.
pub fn parse_line(line: &str) -> Result<Input, InputError> {
    Input::from_tokens(line.split_whitespace())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verb_is_case_insensitive() {
        let input = parse_line("ADD alex 0503333333").unwrap();
        assert_eq!(input.verb, Verb::Add);
        assert_eq!(input.args, vec!["alex", "0503333333"]);

        assert_eq!(parse_line("Add-Birthday a 01.01.2000").unwrap().verb, Verb::AddBirthday);
    }

    #[test]
    fn arguments_keep_their_case() {
        let input = parse_line("phone Alex").unwrap();
        assert_eq!(input.args, vec!["Alex"]);
    }

    #[test]
    fn close_is_exit() {
        assert_eq!(parse_line("close").unwrap().verb, Verb::Exit);
        assert_eq!(parse_line("  exit  ").unwrap().verb, Verb::Exit);
    }

    #[test]
    fn blank_line_is_empty() {
        assert_eq!(parse_line(""), Err(InputError::Empty));
        assert_eq!(parse_line("   \t "), Err(InputError::Empty));
    }

    #[test]
    fn unknown_verb() {
        assert_eq!(
            parse_line("frobnicate x"),
            Err(InputError::UnknownVerb("frobnicate".into()))
        );
    }

    #[test]
    fn every_verb_parses_from_its_name() {
        for verb in Verb::all() {
            assert_eq!(verb.name().parse::<Verb>().unwrap(), *verb);
        }
    }
}
