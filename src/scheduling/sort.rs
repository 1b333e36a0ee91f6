//! Stable merge sort over cards, highest priority first.

use crate::domain::Card;

/// Sort cards by descending priority.
///
/// Equal-priority cards keep their input order: the merge step takes from
/// the left half on ties, which is where stability comes from. Priorities
/// are read, never recomputed - run the metric first if scores are stale.
pub fn sort_by_priority(cards: Vec<Card>) -> Vec<Card> {
  if cards.len() <= 1 {
    return cards;
  }

  let mid = cards.len() / 2;
  let mut left = cards;
  let right = left.split_off(mid);

  merge(sort_by_priority(left), sort_by_priority(right))
}

fn merge(left: Vec<Card>, right: Vec<Card>) -> Vec<Card> {
  let mut merged = Vec::with_capacity(left.len() + right.len());
  let mut left = left.into_iter().peekable();
  let mut right = right.into_iter().peekable();

  loop {
    // >= keeps the left element on equal priority
    let take_left = match (left.peek(), right.peek()) {
      (Some(l), Some(r)) => l.priority >= r.priority,
      (Some(_), None) => true,
      (None, Some(_)) => false,
      (None, None) => break,
    };

    if take_left {
      merged.extend(left.next());
    } else {
      merged.extend(right.next());
    }
  }

  merged
}
