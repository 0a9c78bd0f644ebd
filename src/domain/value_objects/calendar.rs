//! Month arithmetic on plain calendar dates.
//!
//! Every helper returns `None` instead of panicking when the result would
//! leave chrono's representable date range.

use chrono::{Datelike, NaiveDate};

/// Number of days in the given month, leap-year aware
pub fn days_in_month(year: i32, month: u32) -> Option<u32> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next_first = first_of_next_month(first)?;
    u32::try_from(next_first.signed_duration_since(first).num_days()).ok()
}

/// First day of the month after `date`'s month
pub fn first_of_next_month(date: NaiveDate) -> Option<NaiveDate> {
    let (year, month) = if date.month() == 12 {
        (date.year().checked_add(1)?, 1)
    } else {
        (date.year(), date.month() + 1)
    };
    NaiveDate::from_ymd_opt(year, month, 1)
}

/// Last day of `date`'s month
pub fn last_of_month(date: NaiveDate) -> Option<NaiveDate> {
    let len = days_in_month(date.year(), date.month())?;
    date.with_day(len)
}

/// `day` within `date`'s month, clamped to the month's last day
pub fn with_day_clamped(date: NaiveDate, day: u32) -> Option<NaiveDate> {
    let len = days_in_month(date.year(), date.month())?;
    date.with_day(day.clamp(1, len))
}
