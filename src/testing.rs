//! Shared card fixtures for scheduling tests.
//!
//! Kept out of `#[cfg(test)]` so downstream crates can opt in via the
//! `testing` feature.

use chrono::{DateTime, Utc};

use crate::domain::{Card, Difficulty};

/// Card with a fixed priority and no review history.
pub fn card(id: i64, priority: i64) -> Card {
  Card {
    id,
    front: format!("front {}", id),
    back: format!("back {}", id),
    difficulty: Difficulty::Medium,
    priority,
    incorrect_count: 0,
    last_reviewed: None,
  }
}

/// Card with review history, for metric tests. Priority starts at 0.
pub fn reviewed_card(id: i64, incorrect_count: i64, last_reviewed: Option<DateTime<Utc>>) -> Card {
  Card {
    incorrect_count,
    last_reviewed,
    ..card(id, 0)
  }
}

/// Install a fmt subscriber once so RUST_LOG shows scheduler events
/// during test runs. Safe to call from every test; later calls no-op.
#[cfg(test)]
pub fn init_tracing() {
  use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

  let _ = tracing_subscriber::registry()
    .with(
      tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "deck_scheduler=debug".into()),
    )
    .with(tracing_subscriber::fmt::layer())
    .try_init();
}
