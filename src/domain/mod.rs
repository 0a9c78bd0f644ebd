pub mod entities;
pub mod errors;
pub mod value_objects;

pub use entities::{
    OccurrenceResult, RecurrencePattern, RecurrenceRule, RecurringTask, RollOutcome, RuleKind,
    TaskStatus,
};
pub use errors::{EngineError, EngineResult, ValidationError, WeekdayParseError};
