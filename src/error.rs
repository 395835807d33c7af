/// Error type for date construction and parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateError {
    /// Year is negative.
    #[error("year cannot be negative: {0}")]
    InvalidYear(i64),

    /// Month is outside `1..=12`.
    #[error("month must be between 1 and 12, got {0}")]
    InvalidMonth(i64),

    /// Day is outside `1..=days_in_month(month, year)`.
    #[error("invalid day {day} for month {month} of year {year}")]
    InvalidDay { day: i64, month: u8, year: u64 },

    /// Text is not shaped like `YYYY-MM-DD`.
    #[error("invalid date format: {0}")]
    InvalidFormat(String),

    #[error("empty date string")]
    EmptyInput,
}
