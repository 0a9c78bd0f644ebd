use thiserror::Error;

/// Reasons a recurrence rule is rejected at creation/edit time
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Interval must be at least 1 day, got {interval_days}")]
    InvalidInterval { interval_days: u32 },

    #[error("Nth weekday position must be -1 (last) or 1 to 5, got {n}")]
    InvalidNthRange { n: i8 },

    #[error("Weekday must be between 0 (Sunday) and 6 (Saturday), got {weekday}")]
    InvalidWeekday { weekday: u8 },

    #[error("At least one weekday must be selected")]
    EmptyWeekdaySet,

    #[error("Day of month must be between 1 and 31, got {day_of_month}")]
    InvalidDayOfMonth { day_of_month: u8 },
}

/// Failures of `compute_next`; termination signals are not errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("Malformed recurrence rule: {0}")]
    MalformedRule(#[from] ValidationError),
}

pub type EngineResult<T> = std::result::Result<T, EngineError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WeekdayParseError {
    #[error("No weekdays given. Use e.g.: mon,wed,fri")]
    Empty,

    #[error("Invalid weekday: {0}")]
    UnknownWeekday(String),
}
