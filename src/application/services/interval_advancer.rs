use chrono::{Datelike, Days, Months, NaiveDate};

use crate::domain::value_objects::calendar::{first_of_next_month, with_day_clamped};

/// Fixed step rules. `None` only when the step leaves the representable calendar.
pub fn add_days(anchor: NaiveDate, days: u32) -> Option<NaiveDate> {
    anchor.checked_add_days(Days::new(u64::from(days)))
}

/// Same month and day one year later; Feb 29 lands on Feb 28 in common years
pub fn add_year(anchor: NaiveDate) -> Option<NaiveDate> {
    anchor.checked_add_months(Months::new(12))
}

/// Next month on `day_of_month` (or the anchor's own day), clamped to the month's length.
///
/// A day past the end of the target month lands on its last day; it never
/// spills over into the month after.
pub fn add_month(anchor: NaiveDate, day_of_month: Option<u8>) -> Option<NaiveDate> {
    let day = day_of_month.map_or(anchor.day(), u32::from);
    let next_month = first_of_next_month(anchor)?;
    with_day_clamped(next_month, day)
}
