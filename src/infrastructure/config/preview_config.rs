use anyhow::{Context, bail};
use chrono::NaiveDate;

use crate::domain::entities::recurrence_rule::RecurrenceRule;

pub const RULE_VAR: &str = "RECURRENCE_RULE";
pub const ANCHOR_VAR: &str = "RECURRENCE_ANCHOR";
pub const COUNT_VAR: &str = "RECURRENCE_COUNT";
pub const LOG_LEVEL_VAR: &str = "LOG_LEVEL";

const DEFAULT_COUNT: usize = 5;
const MAX_COUNT: usize = 366;

/// Settings for the `recurrence-preview` binary
#[derive(Debug, Clone, PartialEq)]
pub struct PreviewConfig {
    pub rule: RecurrenceRule,
    pub anchor: NaiveDate,
    pub count: usize,
    pub log_level: String,
}

impl PreviewConfig {
    /// Reads `.env` (if present) and then the process environment
    pub fn from_env(today: NaiveDate) -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok(), today)
    }

    /// Builds the config from any key lookup; `today` is the anchor fallback
    pub fn from_lookup<F>(lookup: F, today: NaiveDate) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let raw_rule = lookup(RULE_VAR).with_context(|| format!("{} is not set", RULE_VAR))?;
        let rule: RecurrenceRule = serde_json::from_str(&raw_rule)
            .with_context(|| format!("{} is not a valid rule: {}", RULE_VAR, raw_rule))?;

        let anchor = match lookup(ANCHOR_VAR) {
            Some(raw) => NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
                .with_context(|| format!("{} must be YYYY-MM-DD, got {}", ANCHOR_VAR, raw))?,
            None => today,
        };

        let count = match lookup(COUNT_VAR) {
            Some(raw) => raw
                .trim()
                .parse::<usize>()
                .with_context(|| format!("{} must be a number, got {}", COUNT_VAR, raw))?,
            None => DEFAULT_COUNT,
        };
        if count == 0 || count > MAX_COUNT {
            bail!("{} must be between 1 and {}, got {}", COUNT_VAR, MAX_COUNT, count);
        }

        let log_level = lookup(LOG_LEVEL_VAR).unwrap_or_else(|| "info".to_string());

        Ok(Self {
            rule,
            anchor,
            count,
            log_level,
        })
    }
}
