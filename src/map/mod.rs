//! Key-value associations: insertion ordered, and weakly keyed by arena entries.

mod assoc_map;
mod weak_map;

pub use self::assoc_map::{AssocMap, AssocMapIntoIter, AssocMapIter, AssocMapIterMut};
pub use self::weak_map::WeakMap;
