//! Collections of unique members: insertion ordered, and weakly held arena entries.

mod assoc_set;
mod weak_set;

pub use self::assoc_set::{AssocSet, AssocSetIntoIter, AssocSetIter};
pub use self::weak_set::WeakSet;
