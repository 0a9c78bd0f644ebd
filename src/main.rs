use std::process::ExitCode;

use chrono::{Datelike, Local};
use recurrence_engine::infrastructure::config::PreviewConfig;
use recurrence_engine::domain::value_objects::WeekdayFormat;
use recurrence_engine::{OccurrenceResult, RuleEvaluator, utils};
use tracing::{error, info};

fn main() -> ExitCode {
    let config = match PreviewConfig::from_env(Local::now().date_naive()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Invalid configuration: {:#}", e);
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = utils::setup_logging(&config.log_level) {
        eprintln!("Failed to set up logging: {:#}", e);
        return ExitCode::FAILURE;
    }

    match run_preview(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Error running preview: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

/// Prints the rule's description and its upcoming occurrences
fn run_preview(config: &PreviewConfig) -> anyhow::Result<()> {
    let evaluator = RuleEvaluator::new();
    evaluator.validate(&config.rule)?;

    info!(kind = %config.rule.kind(), anchor = %config.anchor, "Previewing recurrence");
    println!("{}", evaluator.describe(&config.rule));

    for result in evaluator.occurrences(config.anchor, &config.rule).take(config.count) {
        match result? {
            OccurrenceResult::Occurrence(date) => {
                println!("  {} {}", date.weekday().to_short_en(), date.format("%Y-%m-%d"))
            }
            signal => {
                println!("  ({})", signal);
                break;
            }
        }
    }
    Ok(())
}
