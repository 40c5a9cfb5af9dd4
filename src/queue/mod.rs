//! First-in first-out buffers: plain, monotonic, and ordered by priority.

mod fifo;
mod monotonic;
mod priority;

pub use self::fifo::Queue;
pub use self::monotonic::{sliding_window_max, MonotonicQueue};
pub use self::priority::{Prioritized, PriorityQueue};
