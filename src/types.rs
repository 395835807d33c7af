use crate::DateError;
use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_MONTH, FEBRUARY, FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE, LEAP_YEAR_CYCLE,
    MAX_MONTH, MIN_MONTH,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU8;

/// A non-negative year of the proleptic Gregorian calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "u64", into = "u64")]
pub struct Year(u64);

impl Year {
    /// Creates a new Year, validating that it's non-negative
    ///
    /// # Errors
    /// Returns `DateError::InvalidYear` if the value is negative.
    pub fn new(value: i64) -> Result<Self, DateError> {
        u64::try_from(value)
            .map(Self)
            .map_err(|_| DateError::InvalidYear(value))
    }

    /// Returns the year value as u64
    #[inline]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl From<u64> for Year {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl From<Year> for u64 {
    fn from(year: Year) -> Self {
        year.0
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A month value guaranteed to be in the range `1..=MAX_MONTH` (1..=12)
/// Uses `NonZeroU8` internally, so 0 is not a valid month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Month(NonZeroU8);

impl Month {
    /// Creates a new Month, validating that it's within `MIN_MONTH..=MAX_MONTH`
    ///
    /// # Errors
    /// Returns `DateError::InvalidMonth` if the value is outside 1..=12.
    pub fn new(value: i64) -> Result<Self, DateError> {
        u8::try_from(value)
            .ok()
            .filter(|m| (MIN_MONTH..=MAX_MONTH).contains(m))
            .and_then(NonZeroU8::new)
            .map(Self)
            .ok_or(DateError::InvalidMonth(value))
    }

    /// Returns the month value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl TryFrom<u8> for Month {
    type Error = DateError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(i64::from(value))
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.0.get()
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A day value guaranteed to be valid for the year and month it was built against.
///
/// Only serializes: a bare day number can't be validated without its month and year,
/// so deserialization goes through [`crate::Date`] instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(into = "u8")]
pub struct Day(NonZeroU8);

impl Day {
    /// Creates a new Day, validating it against the number of days in the given month
    ///
    /// # Errors
    /// Returns `DateError::InvalidDay` if the value is outside `1..=days_in_month(month, year)`.
    pub fn new(value: i64, year: u64, month: Month) -> Result<Self, DateError> {
        let max_day = days_in_month(month.get(), year);
        u8::try_from(value)
            .ok()
            .filter(|d| *d <= max_day)
            .and_then(NonZeroU8::new)
            .map(Self)
            .ok_or(DateError::InvalidDay {
                day: value,
                month: month.get(),
                year,
            })
    }

    /// Returns the day value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl From<Day> for u8 {
    fn from(day: Day) -> Self {
        day.0.get()
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Returns `true` for leap years under the proleptic Gregorian rule.
pub const fn is_leap_year(year: u64) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

/// Returns the number of days in `month` of `year`.
///
/// # Panics
/// `month` must already be in `1..=12`; this function does no validation of its own
/// and indexes out of bounds otherwise.
pub const fn days_in_month(month: u8, year: u64) -> u8 {
    debug_assert!(month != 0 && month <= MAX_MONTH);

    if month == FEBRUARY && is_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month as usize]
    }
}
