use tracing::info;

use crate::application::services::rule_evaluator::RuleEvaluator;
use crate::domain::entities::recurrence_rule::RecurrenceRule;
use crate::domain::entities::task::{RecurringTask, RollOutcome};
use crate::domain::errors::{EngineResult, ValidationError};
use chrono::NaiveDate;

/// Caller-side glue: creates tasks with validated rules and rolls them forward
#[derive(Debug, Clone, Default)]
pub struct TaskService {
    evaluator: RuleEvaluator,
}

impl TaskService {
    pub fn new(evaluator: RuleEvaluator) -> Self {
        Self { evaluator }
    }

    // === TASK CREATION BUSINESS LOGIC ===

    pub fn create_task(
        &self,
        id: u64,
        title: String,
        due_date: NaiveDate,
        rule: RecurrenceRule,
    ) -> Result<RecurringTask, ValidationError> {
        self.evaluator.validate(&rule)?;
        Ok(RecurringTask::new(id, title, due_date, rule))
    }

    // === ROLL FORWARD ===

    /// Moves a completed or elapsed task to its next due date, or closes it
    pub fn roll_forward(&self, task: &mut RecurringTask) -> EngineResult<RollOutcome> {
        if !task.is_active() {
            return Ok(RollOutcome::Inactive);
        }

        let result = self.evaluator.compute_next(task.due_date, &task.rule)?;
        let outcome = task.apply_occurrence(result);

        info!(task_id = task.id, ?outcome, "Rolled task forward");
        Ok(outcome)
    }
}
