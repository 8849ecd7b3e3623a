use chrono::NaiveDate;
use serde::Serialize;

use crate::LectorClientError;

/// Closed calendar range `[after, before]` used by the aggregate queries.
///
/// Distinct from [`Cursor`](super::Cursor) on purpose: the aggregate
/// operations reuse the `after`/`before` argument names but filter by time,
/// they do not paginate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DateRange {
    after: NaiveDate,
    before: NaiveDate,
}

impl DateRange {
    /// Builds a range, rejecting one that ends before it starts
    pub fn new(after: NaiveDate, before: NaiveDate) -> Result<DateRange, LectorClientError> {
        if after > before {
            return Err(LectorClientError::InvalidDateRange {
                after: after.to_string(),
                before: before.to_string(),
            });
        }
        Ok(DateRange { after, before })
    }

    /// First day of the range
    pub const fn after(&self) -> NaiveDate {
        self.after
    }

    /// Last day of the range
    pub const fn before(&self) -> NaiveDate {
        self.before
    }

    /// Whether `day` falls inside the range, both ends included
    pub fn contains(&self, day: NaiveDate) -> bool {
        self.after <= day && day <= self.before
    }
}
