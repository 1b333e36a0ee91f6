pub mod priority_queue;
pub mod queue_builder;
pub mod set_merger;
pub mod sort;

pub use priority_queue::{EmptyQueueError, PriorityQueue};
pub use queue_builder::{PriorityMetric, build_test_queue, refresh_priorities};
pub use set_merger::merge_card_sets;
pub use sort::sort_by_priority;
