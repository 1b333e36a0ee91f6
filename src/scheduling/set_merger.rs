//! K-way merge of card sets into one globally ordered sequence.

use std::cmp::Reverse;

use crate::domain::Card;
use crate::scheduling::{PriorityQueue, sort_by_priority};

/// Merge several card sets into a single sequence of descending priority.
///
/// Each set is stable-sorted first, so equal-priority cards from the same
/// set keep their original order. Across sets, equal-priority heads are
/// taken lowest set index first: the heap key is `(priority,
/// Reverse(set_index))`, which pins the tie rule down deterministically.
///
/// Priorities are read as-is; callers wanting fresh scores run
/// `refresh_priorities` beforehand.
pub fn merge_card_sets(sets: Vec<Vec<Card>>) -> Vec<Card> {
  let set_count = sets.len();
  let total: usize = sets.iter().map(|set| set.len()).sum();

  let mut sources: Vec<_> = sets
    .into_iter()
    .map(|set| sort_by_priority(set).into_iter().peekable())
    .collect();

  // One live entry per non-empty set: payload is the set index, key is
  // that set's current head priority.
  let mut queue: PriorityQueue<usize, (i64, Reverse<usize>)> = PriorityQueue::new();
  for (index, source) in sources.iter_mut().enumerate() {
    if let Some(head) = source.peek() {
      queue.push(index, (head.priority, Reverse(index)));
    }
  }

  let mut merged = Vec::with_capacity(total);
  while let Ok(index) = queue.pop() {
    if let Some(card) = sources[index].next() {
      if let Some(next) = sources[index].peek() {
        queue.push(index, (next.priority, Reverse(index)));
      }
      merged.push(card);
    }
  }

  tracing::debug!("Merged {} sets into {} cards", set_count, merged.len());
  merged
}
