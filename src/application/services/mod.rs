pub mod interval_advancer;
pub mod nth_weekday_resolver;
pub mod rule_describer;
pub mod rule_evaluator;
pub mod rule_validator;
pub mod task_service;
pub mod weekday_set_scanner;

pub use rule_describer::describe;
pub use rule_evaluator::{Occurrences, RuleEvaluator, compute_next};
pub use rule_validator::validate;
pub use task_service::TaskService;
