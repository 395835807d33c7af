/// Lowest valid month (January)
pub const MIN_MONTH: u8 = 1;

/// Highest valid month (December)
pub const MAX_MONTH: u8 = 12;

/// Month number for February
pub const FEBRUARY: u8 = 2;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Days in a common year
pub const DAYS_IN_YEAR: u16 = 365;

/// Days in a leap year
pub const DAYS_IN_LEAP_YEAR: u16 = 366;

/// Maximum days in each month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: u64 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: u64 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: u64 = 400;

/// Days in one full 400-year Gregorian cycle
pub(crate) const DAYS_IN_ERA: i128 = 146_097;
/// Days from 0000-03-01 to 1970-01-01, the offset of the March-based epoch
pub(crate) const DAYS_FROM_ERA_START_TO_UNIX_EPOCH: i128 = 719_468;

/// Date component separator (ISO 8601 format)
pub const DATE_SEPARATOR: char = '-';
