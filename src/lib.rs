//! Recurrence rule engine for recurring tasks.
//!
//! Given a [`RecurrenceRule`] and an anchor date, [`compute_next`] finds the
//! date the task is due next, [`describe`] renders the rule for people and
//! [`validate`] checks it at creation time. Everything in the engine is a pure
//! function of its inputs; the only I/O lives in `infrastructure` and is used
//! by the preview binary.
//!
//! ```
//! use chrono::{NaiveDate, Weekday};
//! use recurrence_engine::{OccurrenceResult, RecurrenceRule, compute_next, describe};
//!
//! let rule = RecurrenceRule::nth_weekday_of_month(2, Weekday::Tue);
//! let anchor = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
//!
//! assert_eq!(describe(&rule), "Every 2nd Tuesday of the month");
//! assert_eq!(
//!     compute_next(anchor, &rule).unwrap(),
//!     OccurrenceResult::Occurrence(NaiveDate::from_ymd_opt(2024, 2, 13).unwrap())
//! );
//! ```

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod utils;

pub use application::parsers::parse_weekday_list;
pub use application::services::{
    Occurrences, RuleEvaluator, TaskService, compute_next, describe, validate,
};
pub use domain::{
    EngineError, EngineResult, OccurrenceResult, RecurrencePattern, RecurrenceRule, RecurringTask,
    RollOutcome, RuleKind, TaskStatus, ValidationError, WeekdayParseError,
};
