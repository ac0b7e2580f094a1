use super::fields::{Birthday, Name, Phone};
use crate::error::{AbookError, Result, ValidationError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One contact: a name, any number of phones, and maybe a birthday.
///
/// Phones keep the order they were added in. The same number may appear
/// more than once; nothing here deduplicates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    name: Name,
    #[serde(default)]
    phones: Vec<Phone>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    birthday: Option<Birthday>,
}

impl Record {
    pub fn new(name: impl Into<String>) -> std::result::Result<Self, ValidationError> {
        Ok(Self {
            name: Name::new(name)?,
            phones: Vec::new(),
            birthday: None,
        })
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    pub fn add_phone(&mut self, value: &str) -> std::result::Result<(), ValidationError> {
        self.phones.push(Phone::new(value)?);
        Ok(())
    }

    pub fn find_phone(&self, value: &str) -> Option<&Phone> {
        self.phones.iter().find(|p| p.as_str() == value)
    }

    /// Drop every phone equal to `value`. Returns how many were removed.
    pub fn remove_phone(&mut self, value: &str) -> usize {
        let before = self.phones.len();
        self.phones.retain(|p| p.as_str() != value);
        before - self.phones.len()
    }

    /// Rewrite the first phone equal to `old`.
    ///
    /// `new` is validated before the lookup, so an invalid replacement is
    /// reported even when `old` is missing. Either way the phone list is left
    /// untouched on error.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> Result<()> {
        if !Phone::is_valid(new) {
            return Err(ValidationError::InvalidPhone(new.to_string()).into());
        }
        let slot = self
            .phones
            .iter_mut()
            .find(|p| p.as_str() == old)
            .ok_or_else(|| AbookError::PhoneNotFound {
                name: self.name.to_string(),
                phone: old.to_string(),
            })?;
        slot.set(new)?;
        Ok(())
    }

    pub fn add_birthday(&mut self, value: &str) -> std::result::Result<(), ValidationError> {
        self.birthday = Some(Birthday::new(value)?);
        Ok(())
    }

    pub fn phones_joined(&self) -> String {
        self.phones
            .iter()
            .map(Phone::as_str)
            .collect::<Vec<_>>()
            .join("; ")
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Contact name: {}, phones: {}",
            self.name,
            self.phones_joined()
        )?;
        if let Some(birthday) = &self.birthday {
            write!(f, ", birthday: {}", birthday)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record_with(phones: &[&str]) -> Record {
        let mut record = Record::new("mike").unwrap();
        for phone in phones {
            record.add_phone(phone).unwrap();
        }
        record
    }

    #[test]
    fn add_phone_allows_duplicates() {
        let record = record_with(&["0502222222", "0502222222"]);
        assert_eq!(record.phones().len(), 2);
        assert_eq!(record.phones()[0], record.phones()[1]);
    }

    #[test]
    fn add_phone_rejects_invalid_number() {
        let mut record = record_with(&[]);
        assert_eq!(
            record.add_phone("123"),
            Err(ValidationError::InvalidPhone("123".into()))
        );
        assert!(record.phones().is_empty());
    }

    #[test]
    fn find_phone_returns_first_match() {
        let record = record_with(&["0501111111", "0502222222"]);
        assert_eq!(
            record.find_phone("0502222222").map(Phone::as_str),
            Some("0502222222")
        );
        assert!(record.find_phone("0509999999").is_none());
    }

    #[test]
    fn remove_phone_drops_every_occurrence() {
        let mut record = record_with(&["0501111111", "0502222222", "0501111111"]);
        assert_eq!(record.remove_phone("0501111111"), 2);
        assert!(record.find_phone("0501111111").is_none());
        assert_eq!(record.phones_joined(), "0502222222");
        assert_eq!(record.remove_phone("0501111111"), 0);
    }

    #[test]
    fn edit_phone_changes_only_first_match() {
        let mut record = record_with(&["0501111111", "0501111111"]);
        record.edit_phone("0501111111", "0503333333").unwrap();
        assert_eq!(record.phones_joined(), "0503333333; 0501111111");
    }

    #[test]
    fn edit_phone_missing_old_leaves_phones_unchanged() {
        let mut record = record_with(&["0501111111"]);
        let err = record.edit_phone("0509999999", "0503333333").unwrap_err();
        assert!(matches!(err, AbookError::PhoneNotFound { .. }));
        assert_eq!(record.phones_joined(), "0501111111");
    }

    #[test]
    fn edit_phone_validates_new_value() {
        let mut record = record_with(&["0501111111"]);
        let err = record.edit_phone("0501111111", "05011").unwrap_err();
        assert!(matches!(
            err,
            AbookError::Validation(ValidationError::InvalidPhone(_))
        ));
        assert_eq!(record.phones_joined(), "0501111111");
    }

    #[test]
    fn add_birthday_overwrites() {
        let mut record = record_with(&[]);
        record.add_birthday("21.05.1995").unwrap();
        record.add_birthday("22.05.1995").unwrap();
        assert_eq!(record.birthday().unwrap().to_string(), "22.05.1995");
        assert!(record.add_birthday("1995-05-22").is_err());
        assert_eq!(record.birthday().unwrap().to_string(), "22.05.1995");
    }

    #[test]
    fn display_joins_phones_with_semicolons() {
        let mut record = record_with(&["0501111111", "0502222222"]);
        assert_eq!(
            record.to_string(),
            "Contact name: mike, phones: 0501111111; 0502222222"
        );
        record.add_birthday("21.05.1995").unwrap();
        assert_eq!(
            record.to_string(),
            "Contact name: mike, phones: 0501111111; 0502222222, birthday: 21.05.1995"
        );
    }
}
