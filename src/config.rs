//! Scheduler configuration.
//!
//! Centralizes the tunables for the default priority metric. Values
//! resolve with priority: config.toml > environment > compiled default.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::path::Path;

use crate::domain::Card;
use crate::scheduling::PriorityMetric;

// ==================== Defaults ====================

/// Priority gained per recorded incorrect answer
pub const DEFAULT_INCORRECT_WEIGHT: i64 = 10;

/// Priority gained per whole day since the last review
pub const DEFAULT_STALE_DAY_WEIGHT: i64 = 1;

/// Flat score for cards that have never been reviewed
pub const DEFAULT_NEVER_REVIEWED_BONUS: i64 = 30;

/// Environment variable for the queue-builder cutoff
pub const MIN_PRIORITY_ENV: &str = "SCHEDULER_MIN_PRIORITY";

// ==================== config.toml structure ====================

/// Configuration file structure for config.toml
#[derive(Debug, Deserialize)]
struct AppConfig {
    scheduler: Option<SchedulerSection>,
}

#[derive(Debug, Deserialize)]
struct SchedulerSection {
    incorrect_weight: Option<i64>,
    stale_day_weight: Option<i64>,
    never_reviewed_bonus: Option<i64>,
    min_priority: Option<i64>,
}

// ==================== Weighted metric ====================

/// Linear priority metric: incorrect answers weigh heaviest, staleness
/// accrues per day, never-reviewed cards get a flat bonus.
///
/// Pure in `(incorrect_count, last_reviewed, now)` - the clock is an
/// argument, so repeated calls with the same inputs agree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeightedMetric {
    pub incorrect_weight: i64,
    pub stale_day_weight: i64,
    pub never_reviewed_bonus: i64,
}

impl Default for WeightedMetric {
    fn default() -> Self {
        Self {
            incorrect_weight: DEFAULT_INCORRECT_WEIGHT,
            stale_day_weight: DEFAULT_STALE_DAY_WEIGHT,
            never_reviewed_bonus: DEFAULT_NEVER_REVIEWED_BONUS,
        }
    }
}

impl PriorityMetric for WeightedMetric {
    fn score(&self, card: &Card, now: DateTime<Utc>) -> i64 {
        let staleness = match card.last_reviewed {
            // Clamp at zero so a clock skewed into the future cannot
            // subtract from the incorrect-answer term
            Some(reviewed) => (now - reviewed).num_days().max(0) * self.stale_day_weight,
            None => self.never_reviewed_bonus,
        };
        card.incorrect_count * self.incorrect_weight + staleness
    }
}

// ==================== Loading ====================

/// Scheduler settings resolved from config.toml, environment and defaults
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SchedulerConfig {
    pub metric: WeightedMetric,
    /// Default cutoff handed to `build_test_queue`; None keeps every card
    pub min_priority: Option<i64>,
}

/// Load scheduler settings from `config.toml` in the working directory.
pub fn load_scheduler_config() -> SchedulerConfig {
    load_scheduler_config_from(Path::new("config.toml"))
}

/// Load scheduler settings with priority: config.toml > env > default
pub fn load_scheduler_config_from(path: &Path) -> SchedulerConfig {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    let mut config = SchedulerConfig::default();

    if let Ok(contents) = std::fs::read_to_string(path) {
        if let Ok(parsed) = toml::from_str::<AppConfig>(&contents) {
            if let Some(section) = parsed.scheduler {
                if let Some(weight) = section.incorrect_weight {
                    config.metric.incorrect_weight = weight;
                }
                if let Some(weight) = section.stale_day_weight {
                    config.metric.stale_day_weight = weight;
                }
                if let Some(bonus) = section.never_reviewed_bonus {
                    config.metric.never_reviewed_bonus = bonus;
                }
                if let Some(min) = section.min_priority {
                    config.min_priority = Some(min);
                }
                tracing::info!("Using scheduler settings from {}", path.display());
            }
        }
    }

    if config.min_priority.is_none() {
        if let Ok(value) = std::env::var(MIN_PRIORITY_ENV) {
            if let Ok(min) = value.parse::<i64>() {
                tracing::info!("Using min priority from {} env: {}", MIN_PRIORITY_ENV, min);
                config.min_priority = Some(min);
            }
        }
    }

    config
}
