//! # Upcoming Birthdays
//!
//! A birthday is "upcoming" when its occurrence in the current year falls
//! between today and `window` days from now, both ends inclusive. Only the
//! current year is considered: a January birthday seen from late December
//! is already in the past.
//!
//! Greetings are not sent on weekends. When the occurrence lands on a
//! Saturday or Sunday, [`UpcomingBirthday::congratulate_on`] moves to the
//! following Monday while [`UpcomingBirthday::date`] keeps the real day.
//!
//! February 29 birthdays are celebrated on March 1 in non-leap years.

use crate::model::{Birthday, Record};
use chrono::{Datelike, Duration, NaiveDate};
use tracing::warn;

pub const DEFAULT_WINDOW_DAYS: i64 = 7;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcomingBirthday<'a> {
    pub record: &'a Record,
    /// The birthday's occurrence in the current year.
    pub date: NaiveDate,
    /// `date`, or the Monday after it when it falls on a weekend.
    pub congratulate_on: NaiveDate,
}

impl UpcomingBirthday<'_> {
    pub fn is_shifted(&self) -> bool {
        self.date != self.congratulate_on
    }
}

/// The day `birthday` is celebrated in `year`.
pub fn occurrence_in(birthday: &Birthday, year: i32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, birthday.month(), birthday.day()).or_else(|| {
        if (birthday.month(), birthday.day()) == (2, 29) {
            NaiveDate::from_ymd_opt(year, 3, 1)
        } else {
            None
        }
    })
}

/// Move Saturday and Sunday to the next Monday.
pub fn congratulation_date(date: NaiveDate) -> NaiveDate {
    let weekday = date.weekday().num_days_from_monday();
    if weekday >= 5 {
        date + Duration::days(i64::from(7 - weekday))
    } else {
        date
    }
}

/// Scan `records` in order and keep those with a birthday in the window.
pub fn upcoming<'a, I>(records: I, today: NaiveDate, window: i64) -> Vec<UpcomingBirthday<'a>>
where
    I: IntoIterator<Item = &'a Record>,
{
    let mut result = Vec::new();

    for record in records {
        let Some(birthday) = record.birthday() else {
            continue;
        };
        let Some(date) = occurrence_in(birthday, today.year()) else {
            warn!(contact = %record.name(), %birthday, "birthday has no date this year, skipping");
            continue;
        };

        let days_until = (date - today).num_days();
        if (0..=window).contains(&days_until) {
            result.push(UpcomingBirthday {
                record,
                date,
                congratulate_on: congratulation_date(date),
            });
        }
    }

    result
}
