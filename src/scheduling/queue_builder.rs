//! Priority recomputation and review-queue construction.
//!
//! The metric is pluggable: the scheduler fixes only its signature and
//! purity, not the formula. The surrounding application supplies the
//! concrete curve, typically `config::WeightedMetric` or a closure.

use chrono::{DateTime, Utc};

use crate::domain::Card;
use crate::scheduling::PriorityQueue;

/// Scores a card from its review history.
///
/// Implementations must be pure: equal `(incorrect_count, last_reviewed,
/// now)` inputs must produce equal scores. `now` is threaded in as an
/// argument so the caller controls the clock.
pub trait PriorityMetric {
  fn score(&self, card: &Card, now: DateTime<Utc>) -> i64;
}

impl<F> PriorityMetric for F
where
  F: Fn(&Card, DateTime<Utc>) -> i64,
{
  fn score(&self, card: &Card, now: DateTime<Utc>) -> i64 {
    self(card, now)
  }
}

/// Rewrite every card's priority in place from the metric.
pub fn refresh_priorities(cards: &mut [Card], metric: &impl PriorityMetric, now: DateTime<Utc>) {
  for card in cards.iter_mut() {
    card.priority = metric.score(card, now);
  }
}

/// Build a review queue for a test session.
///
/// Every card's priority is recomputed first, then cards scoring below
/// `min_priority` are dropped (None keeps everything). The surviving cards
/// land in a queue keyed by their fresh scores. Empty input is not an
/// error - it just yields an empty queue.
pub fn build_test_queue(
  cards: Vec<Card>,
  min_priority: Option<i64>,
  metric: &impl PriorityMetric,
  now: DateTime<Utc>,
) -> PriorityQueue<Card> {
  let total = cards.len();
  let mut queue = PriorityQueue::new();

  for mut card in cards {
    card.priority = metric.score(&card, now);

    if min_priority.map_or(true, |min| card.priority >= min) {
      let priority = card.priority;
      queue.push(card, priority);
    }
  }

  tracing::debug!("Test queue built: {} of {} cards kept", queue.len(), total);
  queue
}

#[cfg(test)]
mod tests {
  use super::*;
  use chrono::Duration;
  use crate::testing::{card, reviewed_card};

  /// Metric used throughout: ten points per incorrect answer
  fn per_incorrect(card: &Card, _now: DateTime<Utc>) -> i64 {
    card.incorrect_count * 10
  }

  fn drain_ids(mut queue: PriorityQueue<Card>) -> Vec<i64> {
    let mut ids = Vec::new();
    while let Ok(card) = queue.pop() {
      ids.push(card.id);
    }
    ids
  }

  #[test]
  fn test_empty_input_yields_empty_queue() {
    crate::testing::init_tracing();

    let queue = build_test_queue(Vec::new(), None, &per_incorrect, Utc::now());
    assert!(queue.is_empty());
  }

  #[test]
  fn test_priorities_recomputed_before_queueing() {
    // Stale stored priority must be overwritten by the metric
    let mut stale = reviewed_card(1, 3, None);
    stale.priority = 999;

    let queue = build_test_queue(vec![stale], None, &per_incorrect, Utc::now());
    let card = queue.peek().unwrap();
    assert_eq!(card.priority, 30);
  }

  #[test]
  fn test_queue_orders_by_fresh_score() {
    let cards = vec![
      reviewed_card(1, 1, None),
      reviewed_card(2, 5, None),
      reviewed_card(3, 3, None),
    ];

    let queue = build_test_queue(cards, None, &per_incorrect, Utc::now());
    assert_eq!(drain_ids(queue), vec![2, 3, 1]);
  }

  #[test]
  fn test_min_priority_filters_low_scores() {
    let cards = vec![
      reviewed_card(1, 0, None),
      reviewed_card(2, 2, None),
      reviewed_card(3, 4, None),
    ];

    let queue = build_test_queue(cards, Some(20), &per_incorrect, Utc::now());
    assert_eq!(drain_ids(queue), vec![3, 2]);
  }

  #[test]
  fn test_min_priority_boundary_is_inclusive() {
    let cards = vec![reviewed_card(1, 2, None)];

    let queue = build_test_queue(cards, Some(20), &per_incorrect, Utc::now());
    assert_eq!(queue.len(), 1);
  }

  #[test]
  fn test_all_filtered_yields_empty_queue() {
    let cards = vec![reviewed_card(1, 0, None), reviewed_card(2, 1, None)];

    let queue = build_test_queue(cards, Some(100), &per_incorrect, Utc::now());
    assert!(queue.is_empty());
  }

  #[test]
  fn test_metric_sees_fixed_clock() {
    // A metric using `now` is deterministic when the clock is pinned
    let days_stale = |card: &Card, now: DateTime<Utc>| match card.last_reviewed {
      Some(reviewed) => (now - reviewed).num_days(),
      None => 0,
    };

    let now = Utc::now();
    let reviewed = now - Duration::days(4);
    let cards = vec![reviewed_card(1, 0, Some(reviewed))];

    let first = build_test_queue(cards.clone(), None, &days_stale, now);
    let second = build_test_queue(cards, None, &days_stale, now);

    assert_eq!(first.peek().unwrap().priority, 4);
    assert_eq!(second.peek().unwrap().priority, 4);
  }

  #[test]
  fn test_refresh_priorities_in_place() {
    let mut cards = vec![reviewed_card(1, 2, None), reviewed_card(2, 0, None)];

    refresh_priorities(&mut cards, &per_incorrect, Utc::now());

    assert_eq!(cards[0].priority, 20);
    assert_eq!(cards[1].priority, 0);
  }

  #[test]
  fn test_refresh_is_deterministic() {
    let now = Utc::now();
    let mut first = vec![reviewed_card(1, 7, Some(now - Duration::days(2)))];
    let mut second = first.clone();

    refresh_priorities(&mut first, &per_incorrect, now);
    refresh_priorities(&mut second, &per_incorrect, now);

    assert_eq!(first[0].priority, second[0].priority);
  }

  #[test]
  fn test_closure_metric_over_plain_cards() {
    // Fixed-priority passthrough for callers that score elsewhere
    let passthrough = |card: &Card, _now: DateTime<Utc>| card.priority;

    let cards = vec![card(1, 5), card(2, 9)];
    let queue = build_test_queue(cards, None, &passthrough, Utc::now());

    assert_eq!(drain_ids(queue), vec![2, 1]);
  }
}
