use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::entities::occurrence::OccurrenceResult;
use crate::domain::entities::recurrence_rule::RecurrenceRule;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecurringTask {
    pub id: u64,
    pub title: String,
    pub due_date: NaiveDate, // anchor for the next occurrence
    pub rule: RecurrenceRule,
    pub status: TaskStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskStatus {
    Active,
    /// One-off task that has been done
    Completed,
    /// Recurring task whose rule ran out of occurrences
    Finished,
}

/// What happened to a task when it was rolled forward
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RollOutcome {
    Rescheduled(NaiveDate),
    Completed,
    Finished,
    /// The task was not active, nothing changed
    Inactive,
}

impl RecurringTask {
    pub fn new(id: u64, title: String, due_date: NaiveDate, rule: RecurrenceRule) -> Self {
        Self {
            id,
            title,
            due_date,
            rule,
            status: TaskStatus::Active,
        }
    }

    pub fn is_active(&self) -> bool {
        self.status == TaskStatus::Active
    }

    /// Applies a freshly computed occurrence to the task
    pub fn apply_occurrence(&mut self, result: OccurrenceResult) -> RollOutcome {
        if !self.is_active() {
            return RollOutcome::Inactive;
        }

        match result {
            OccurrenceResult::Occurrence(next) => {
                self.due_date = next;
                RollOutcome::Rescheduled(next)
            }
            OccurrenceResult::NoMoreOccurrences => {
                self.status = TaskStatus::Finished;
                RollOutcome::Finished
            }
            OccurrenceResult::NotRecurring => {
                self.status = TaskStatus::Completed;
                RollOutcome::Completed
            }
        }
    }
}
