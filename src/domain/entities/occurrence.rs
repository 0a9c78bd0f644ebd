use chrono::NaiveDate;
use std::fmt;

/// Outcome of asking a rule for its next date
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OccurrenceResult {
    /// The task is due again on this date
    Occurrence(NaiveDate),
    /// The rule is exhausted: end date reached, or no valid date this cycle
    NoMoreOccurrences,
    /// The rule kind is `none`
    NotRecurring,
}

impl OccurrenceResult {
    pub fn date(&self) -> Option<NaiveDate> {
        match self {
            OccurrenceResult::Occurrence(date) => Some(*date),
            _ => None,
        }
    }

    /// True for both termination signals
    pub fn is_terminal(&self) -> bool {
        !matches!(self, OccurrenceResult::Occurrence(_))
    }
}

impl fmt::Display for OccurrenceResult {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            OccurrenceResult::Occurrence(date) => write!(f, "{}", date.format("%Y-%m-%d")),
            OccurrenceResult::NoMoreOccurrences => write!(f, "No more occurrences"),
            OccurrenceResult::NotRecurring => write!(f, "Not recurring"),
        }
    }
}
