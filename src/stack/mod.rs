//! Last-in first-out buffers, and the monotonic stack used for next-greater queries.

mod lifo;
mod monotonic;

pub use self::lifo::Stack;
pub use self::monotonic::{next_greater_elements, next_smaller_elements, MonotonicStack, Order};
