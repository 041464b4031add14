use crate::error::IntervalError;
use chrono::{Datelike, NaiveDate};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::fmt;

const MIN_YEAR: i32 = 1900;
const MAX_YEAR: i32 = 3000;

/// A calendar day between the years 1900 and 3000, ordered chronologically.
///
/// ```
/// use nested_interval_tree::Date;
///
/// let date = Date::new(2019, 4, 28).unwrap();
/// assert_eq!(date.to_string(), "2019-04-28");
/// assert!(Date::new(1899, 12, 31).is_err());
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "NaiveDate", into = "NaiveDate"))]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date(NaiveDate);

impl Date {
    pub fn new(year: i32, month: u32, day: u32) -> Result<Date, IntervalError> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(IntervalError::YearOutOfRange(year));
        }

        NaiveDate::from_ymd_opt(year, month, day)
            .map(Date)
            .ok_or(IntervalError::InvalidDate { year, month, day })
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }
}

impl TryFrom<NaiveDate> for Date {
    type Error = IntervalError;

    fn try_from(date: NaiveDate) -> Result<Self, Self::Error> {
        Date::new(date.year(), date.month(), date.day())
    }
}

impl From<Date> for NaiveDate {
    fn from(date: Date) -> NaiveDate {
        date.0
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}
