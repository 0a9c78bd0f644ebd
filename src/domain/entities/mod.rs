pub mod occurrence;
pub mod recurrence_rule;
pub mod task;

pub use occurrence::OccurrenceResult;
pub use recurrence_rule::{RecurrencePattern, RecurrenceRule, RuleKind};
pub use task::{RecurringTask, RollOutcome, TaskStatus};
