use chrono::{NaiveDate, Weekday};
use tracing::{debug, trace};

use crate::application::services::rule_describer;
use crate::application::services::rule_validator;
use crate::application::services::{interval_advancer, nth_weekday_resolver, weekday_set_scanner};
use crate::domain::entities::occurrence::OccurrenceResult;
use crate::domain::entities::recurrence_rule::{RecurrencePattern, RecurrenceRule};
use crate::domain::errors::{EngineError, EngineResult, ValidationError};
use crate::domain::value_objects::weekday_format::WeekdayFormat;

/// Stateless entry point for next-date calculation, validation and descriptions.
///
/// Holds nothing between calls; one instance can be shared freely across threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleEvaluator;

impl RuleEvaluator {
    pub fn new() -> Self {
        Self
    }

    /// Next date after `anchor`, or the signal that there is none.
    ///
    /// The rule is re-validated on every call; a malformed rule is reported as
    /// [`EngineError::MalformedRule`] and never produces a date.
    pub fn compute_next(
        &self,
        anchor: NaiveDate,
        rule: &RecurrenceRule,
    ) -> EngineResult<OccurrenceResult> {
        rule_validator::validate(rule).map_err(EngineError::MalformedRule)?;

        if !rule.is_recurring() {
            return Ok(OccurrenceResult::NotRecurring);
        }

        trace!(kind = %rule.kind(), %anchor, "Computing next occurrence");

        let Some(candidate) = candidate_after(anchor, &rule.pattern) else {
            debug!(kind = %rule.kind(), %anchor, "No candidate date in this cycle");
            return Ok(OccurrenceResult::NoMoreOccurrences);
        };

        if let Some(end_date) = rule.end_date
            && candidate >= end_date
        {
            debug!(%candidate, %end_date, "Candidate reaches the rule's end date");
            return Ok(OccurrenceResult::NoMoreOccurrences);
        }

        Ok(OccurrenceResult::Occurrence(candidate))
    }

    pub fn validate(&self, rule: &RecurrenceRule) -> Result<(), ValidationError> {
        rule_validator::validate(rule)
    }

    pub fn describe(&self, rule: &RecurrenceRule) -> String {
        rule_describer::describe(rule)
    }

    /// Successive occurrences after `anchor`, each one anchoring the next.
    ///
    /// Ends after the first termination signal or error, which is yielded once.
    pub fn occurrences<'a>(&self, anchor: NaiveDate, rule: &'a RecurrenceRule) -> Occurrences<'a> {
        Occurrences {
            evaluator: *self,
            rule,
            anchor,
            done: false,
        }
    }
}

/// Picks the algorithm for the pattern. Expects an already validated rule.
fn candidate_after(anchor: NaiveDate, pattern: &RecurrencePattern) -> Option<NaiveDate> {
    match pattern {
        RecurrencePattern::None => None,
        RecurrencePattern::Daily => interval_advancer::add_days(anchor, 1),
        RecurrencePattern::Weekly => interval_advancer::add_days(anchor, 7),
        RecurrencePattern::CustomIntervalDays { interval_days } => {
            interval_advancer::add_days(anchor, *interval_days)
        }
        RecurrencePattern::Yearly => interval_advancer::add_year(anchor),
        RecurrencePattern::Monthly { day_of_month } => {
            interval_advancer::add_month(anchor, *day_of_month)
        }
        RecurrencePattern::SpecificWeekdays { weekdays } => {
            weekday_set_scanner::next_matching_weekday(anchor, weekdays)
        }
        RecurrencePattern::NthWeekday { n, weekday } => {
            let weekday = Weekday::from_index(*weekday)?;
            nth_weekday_resolver::resolve(anchor, *n, weekday)
        }
    }
}

/// Iterator returned by [`RuleEvaluator::occurrences`]
#[derive(Debug, Clone)]
pub struct Occurrences<'a> {
    evaluator: RuleEvaluator,
    rule: &'a RecurrenceRule,
    anchor: NaiveDate,
    done: bool,
}

impl Iterator for Occurrences<'_> {
    type Item = EngineResult<OccurrenceResult>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let result = self.evaluator.compute_next(self.anchor, self.rule);
        match &result {
            Ok(occurrence) if !occurrence.is_terminal() => {
                if let Some(next) = occurrence.date() {
                    self.anchor = next;
                }
            }
            _ => self.done = true,
        }
        Some(result)
    }
}

/// Shorthand for [`RuleEvaluator::compute_next`]
pub fn compute_next(anchor: NaiveDate, rule: &RecurrenceRule) -> EngineResult<OccurrenceResult> {
    RuleEvaluator::new().compute_next(anchor, rule)
}
