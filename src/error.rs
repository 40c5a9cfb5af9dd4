use std::error;
use std::fmt;
use std::result;

/// Errors reported by the validating variants of the algorithms in this crate.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Error {
    /// The input was expected to be sorted ascending, but `values[index] < values[index - 1]`.
    Unsorted { index: usize },
}

pub type Result<T> = result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::Unsorted { index } => {
                write!(f, "input is not sorted: element {} is less than its predecessor", index)
            },
        }
    }
}

impl error::Error for Error {}
