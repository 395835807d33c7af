mod chronological;
mod consts;
mod error;
mod prelude;
mod types;

pub use chronological::Chronological;
pub use consts::*;
pub use error::DateError;
pub use types::{Day, Month, Year, days_in_month, is_leap_year};

use crate::prelude::*;
use std::cmp::Ordering;
use std::ops::Sub;
use std::str::FromStr;

/// A single day of the proleptic Gregorian calendar.
///
/// Built only through [`Date::new`] (or the conversions that call it), so every
/// value names a real calendar day. Displays as `DD-MM-YYYY`; see
/// [`Date::iso_format`] for `YYYY-MM-DD`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display(fmt = "{:02}-{:02}-{:04}", "day.get()", "month.get()", "year.get()")]
pub struct Date {
    year: Year,
    month: Month,
    day: Day,
}

impl Date {
    /// Creates a new date, validating year, month and day in that order.
    ///
    /// # Errors
    /// Returns `DateError::InvalidYear` for a negative year,
    /// `DateError::InvalidMonth` for a month outside 1..=12, and
    /// `DateError::InvalidDay` for a day outside the month's length.
    pub fn new(year: i64, month: i64, day: i64) -> Result<Self, DateError> {
        let year = Year::new(year)?;
        let month = Month::new(month)?;
        let day = Day::new(day, year.get(), month)?;
        Ok(Self { year, month, day })
    }

    /// Number of days in `month` of `year`. `month` must be in 1..=12.
    pub const fn days_in_month(month: u8, year: u64) -> u8 {
        days_in_month(month, year)
    }

    /// Leap-year check without a `Date` instance.
    pub const fn is_leap_year_for(year: u64) -> bool {
        is_leap_year(year)
    }

    /// Returns `true` if this date falls in a leap year
    pub const fn is_leap_year(&self) -> bool {
        is_leap_year(self.year.get())
    }

    pub const fn year(&self) -> u64 {
        self.year.get()
    }

    pub const fn month(&self) -> u8 {
        self.month.get()
    }

    pub const fn day(&self) -> u8 {
        self.day.get()
    }

    pub const fn year_typed(&self) -> Year {
        self.year
    }

    pub const fn month_typed(&self) -> Month {
        self.month
    }

    pub const fn day_typed(&self) -> Day {
        self.day
    }

    /// Formats as `YYYY-MM-DD`, zero padded.
    pub fn iso_format(&self) -> String {
        format!(
            "{:04}{sep}{:02}{sep}{:02}",
            self.year.get(),
            self.month.get(),
            self.day.get(),
            sep = DATE_SEPARATOR
        )
    }

    /// Formats as `DD-MM-YYYY`, zero padded. Same as `to_string()`.
    pub fn to_display_string(&self) -> String {
        self.to_string()
    }

    /// 1-based ordinal of this date within its year (1..=365, or 1..=366 in leap years).
    pub fn day_of_year(&self) -> u16 {
        let year = self.year.get();
        let preceding: u16 = (MIN_MONTH..self.month.get())
            .map(|m| u16::from(days_in_month(m, year)))
            .sum();
        preceding + u16::from(self.day.get())
    }

    /// Signed count of days since 1970-01-01.
    pub fn day_number(&self) -> i128 {
        // ref: http://howardhinnant.github.io/date_algorithms.html
        let month = i128::from(self.month.get());
        let day = i128::from(self.day.get());
        // Years start in March so the leap day lands at the end.
        let year = i128::from(self.year.get()) - i128::from(month <= i128::from(FEBRUARY));
        let shifted_month = if month > 2 { month - 3 } else { month + 9 };

        let era = year.div_euclid(400);
        let year_of_era = year.rem_euclid(400);
        let day_of_year = (153 * shifted_month + 2) / 5 + day - 1;
        let day_of_era = year_of_era * 365 + year_of_era / 4 - year_of_era / 100 + day_of_year;

        era * DAYS_IN_ERA + day_of_era - DAYS_FROM_ERA_START_TO_UNIX_EPOCH
    }

    /// Absolute number of calendar days between two dates.
    ///
    /// Always chronological, unlike the `<`/`>` operators.
    pub fn difference_in_days(&self, other: &Self) -> u128 {
        self.day_number().abs_diff(other.day_number())
    }

    /// Compares by calendar position: year, then month, then day.
    pub fn cmp_chronological(&self, other: &Self) -> Ordering {
        (self.year, self.month, self.day).cmp(&(other.year, other.month, other.day))
    }

    #[inline]
    const fn field_order_key(&self) -> (Day, Month, Year) {
        (self.day, self.month, self.year)
    }
}

/// Compares `(day, month, year)` lexicographically, so `2001-09-11 < 2000-02-29`.
/// Use [`Date::cmp_chronological`] or [`Chronological`] for calendar order.
impl PartialOrd for Date {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.field_order_key().cmp(&other.field_order_key()))
    }
}

impl Sub for Date {
    type Output = u128;

    fn sub(self, rhs: Self) -> Self::Output {
        self.difference_in_days(&rhs)
    }
}

impl FromStr for Date {
    type Err = DateError;

    /// Parses exactly the `iso_format` shape: `YYYY-MM-DD`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(DateError::EmptyInput);
        }

        let parts: Vec<&str> = trimmed.split(DATE_SEPARATOR).collect();
        let [year, month, day] = parts.as_slice() else {
            return Err(DateError::InvalidFormat(format!(
                "expected YYYY{sep}MM{sep}DD, found {} components",
                parts.len(),
                sep = DATE_SEPARATOR
            )));
        };

        let year = Self::parse_component(year, 4..=usize::MAX)?;
        let month = Self::parse_component(month, 2..=2)?;
        let day = Self::parse_component(day, 2..=2)?;
        Self::new(year, month, day)
    }
}

impl Date {
    /// Parses an all-digit component whose width falls in `width`
    fn parse_component(
        s: &str,
        width: std::ops::RangeInclusive<usize>,
    ) -> Result<i64, DateError> {
        if !width.contains(&s.len()) || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(DateError::InvalidFormat(s.to_owned()));
        }
        s.parse::<i64>()
            .map_err(|_| DateError::InvalidFormat(s.to_owned()))
    }
}

impl TryFrom<(i64, i64, i64)> for Date {
    type Error = DateError;

    fn try_from(value: (i64, i64, i64)) -> Result<Self, Self::Error> {
        Self::new(value.0, value.1, value.2)
    }
}

impl From<Date> for (u64, u8, u8) {
    fn from(date: Date) -> Self {
        (date.year(), date.month(), date.day())
    }
}

impl serde::Serialize for Date {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.iso_format())
    }
}

impl<'de> serde::Deserialize<'de> for Date {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = <String as serde::Deserialize>::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
