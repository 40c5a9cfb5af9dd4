#[macro_use]
extern crate log;
extern crate serde;
#[macro_use]
extern crate serde_derive;

mod error;
mod join;
pub mod arena;
pub mod deque;
pub mod hash_table;
pub mod identity;
pub mod map;
pub mod queue;
pub mod search;
pub mod set;
pub mod sort;
pub mod stack;

pub use self::error::{Error, Result};
