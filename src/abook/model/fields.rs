//! Validated scalar wrappers for the values a contact is made of.
//!
//! Every type here is constructed through a checking constructor and
//! serializes as a plain string. Deserialization goes back through the same
//! constructor, so a hand-edited data file cannot smuggle in a bad value.

use crate::error::ValidationError;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

pub const PHONE_LEN: usize = 10;
pub const BIRTHDAY_FORMAT: &str = "%d.%m.%Y";

/// The key a contact is stored under.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Name(String);

impl Name {
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(ValidationError::InvalidName);
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A phone number: exactly ten ASCII digits, stored as typed.
///
/// No normalization happens. `050-222-2222` is rejected rather than
/// stripped down to digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Phone(String);

impl Phone {
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if !Self::is_valid(&value) {
            return Err(ValidationError::InvalidPhone(value));
        }
        Ok(Self(value))
    }

    pub fn is_valid(value: &str) -> bool {
        value.len() == PHONE_LEN && value.bytes().all(|b| b.is_ascii_digit())
    }

    /// Replace the number in place, keeping the old one if `value` is invalid.
    pub fn set(&mut self, value: &str) -> Result<(), ValidationError> {
        *self = Phone::new(value)?;
        Ok(())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A date of birth, entered and shown as `DD.MM.YYYY`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Birthday(NaiveDate);

impl Birthday {
    pub fn new(value: &str) -> Result<Self, ValidationError> {
        value.parse()
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }
}

impl From<NaiveDate> for Birthday {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl FromStr for Birthday {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // chrono accepts single-digit days and signed years; the format does not.
        let bytes = s.as_bytes();
        let shaped = bytes.len() == 10
            && bytes[2] == b'.'
            && bytes[5] == b'.'
            && bytes
                .iter()
                .enumerate()
                .all(|(i, b)| i == 2 || i == 5 || b.is_ascii_digit());
        if !shaped {
            return Err(ValidationError::InvalidBirthday(s.to_string()));
        }

        NaiveDate::parse_from_str(s, BIRTHDAY_FORMAT)
            .map(Self)
            .map_err(|_| ValidationError::InvalidBirthday(s.to_string()))
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(BIRTHDAY_FORMAT))
    }
}

impl Serialize for Name {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Name {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Name::new(s).map_err(serde::de::Error::custom)
    }
}

impl Serialize for Phone {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Phone {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Phone::new(s).map_err(serde::de::Error::custom)
    }
}

impl Serialize for Birthday {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Birthday::new(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phone_accepts_ten_digits() {
        let phone = Phone::new("0503333333").unwrap();
        assert_eq!(phone.as_str(), "0503333333");
        assert_eq!(phone.to_string(), "0503333333");
    }

    #[test]
    fn phone_rejects_wrong_length_or_non_digits() {
        for bad in [
            "",
            "050333333",
            "05033333333",
            "050333333a",
            "050-333-33",
            "+380503333",
            " 050333333",
            "０５０３３３３３３３",
        ] {
            assert_eq!(
                Phone::new(bad),
                Err(ValidationError::InvalidPhone(bad.to_string())),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn phone_set_keeps_old_value_on_error() {
        let mut phone = Phone::new("0501111111").unwrap();
        assert!(phone.set("12345").is_err());
        assert_eq!(phone.as_str(), "0501111111");

        phone.set("0502222222").unwrap();
        assert_eq!(phone.as_str(), "0502222222");
    }

    #[test]
    fn birthday_parses_and_renders_the_same_string() {
        let birthday = Birthday::new("03.03.2020").unwrap();
        assert_eq!(birthday.date(), NaiveDate::from_ymd_opt(2020, 3, 3).unwrap());
        assert_eq!(birthday.to_string(), "03.03.2020");
    }

    #[test]
    fn birthday_rejects_malformed_input() {
        for bad in [
            "",
            "3.3.2020",
            "03/03/2020",
            "2020.03.03",
            "03.03.20",
            "03.03.+2020",
            "32.01.2020",
            "29.02.2023",
            "00.01.2020",
            "01.13.2020",
            "aa.bb.cccc",
        ] {
            assert!(Birthday::new(bad).is_err(), "{bad:?} should be rejected");
        }
    }

    #[test]
    fn birthday_accepts_leap_day_in_leap_year() {
        let birthday = Birthday::new("29.02.2024").unwrap();
        assert_eq!((birthday.day(), birthday.month()), (29, 2));
    }

    #[test]
    fn name_rejects_blank() {
        assert_eq!(Name::new("  "), Err(ValidationError::InvalidName));
        assert_eq!(Name::new("alex").unwrap().as_str(), "alex");
    }

    #[test]
    fn deserialization_revalidates() {
        let phone: Result<Phone, _> = serde_json::from_str("\"12\"");
        assert!(phone.is_err());

        let birthday: Birthday = serde_json::from_str("\"21.05.1995\"").unwrap();
        assert_eq!(serde_json::to_string(&birthday).unwrap(), "\"21.05.1995\"");
    }
}
