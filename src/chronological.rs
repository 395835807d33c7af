use std::cmp::Ordering;

use crate::Date;

/// Wraps a [`Date`] so that it orders by calendar position.
///
/// `Date`'s own `<`/`>` compare `(day, month, year)`, which is not chronological.
/// Use this wrapper as a sort or map key when calendar order is wanted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Chronological(pub Date);

impl Chronological {
    /// Returns the wrapped date
    pub const fn into_inner(self) -> Date {
        self.0
    }
}

impl From<Date> for Chronological {
    fn from(date: Date) -> Self {
        Self(date)
    }
}

impl PartialOrd for Chronological {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Chronological {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp_chronological(&other.0)
    }
}
