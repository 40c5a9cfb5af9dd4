//! Linear and binary search.
//!
//! A miss is reported as `None` rather than a sentinel index.

use crate::error::{Error, Result};
use std::cmp::Ordering;

fn first_unsorted_index<T: Ord>(values: &[T]) -> Option<usize> {
    values
        .windows(2)
        .position(|pair| pair[1] < pair[0])
        .map(|index| index + 1)
}

/// Returns the index of the first element equal to `target`, scanning in order. O(n).
///
/// # Examples
///
/// ```
/// use classic_collections::search::linear_search;
///
/// let values = [1, 2, 3, 4, 5, 6, 7, 8, 9];
/// assert_eq!(linear_search(&values, &5), Some(4));
/// assert_eq!(linear_search(&values, &10), None);
/// ```
pub fn linear_search<T: PartialEq>(values: &[T], target: &T) -> Option<usize> {
    values.iter().position(|value| value == target)
}

/// Returns the index of an element equal to `target` in a slice sorted ascending, halving the
/// search interval each step. O(log n).
///
/// If `values` is not sorted the result is unspecified; `binary_search_checked` validates the
/// input first. When several elements equal `target`, any one of their indices may be returned.
///
/// # Examples
///
/// ```
/// use classic_collections::search::binary_search;
///
/// let values = [1, 2, 3, 4, 5, 6, 7, 8, 9];
/// assert_eq!(binary_search(&values, &5), Some(4));
/// assert_eq!(binary_search(&values, &0), None);
/// ```
pub fn binary_search<T: Ord>(values: &[T], target: &T) -> Option<usize> {
    // half-open interval [low, high)
    let mut low = 0;
    let mut high = values.len();
    while low < high {
        let mid = low + (high - low) / 2;
        match values[mid].cmp(target) {
            Ordering::Equal => return Some(mid),
            Ordering::Less => low = mid + 1,
            Ordering::Greater => high = mid,
        }
    }
    None
}

/// Like `binary_search`, but first verifies that `values` is sorted ascending.
///
/// # Errors
///
/// Returns `Error::Unsorted` with the index of the first element that is less than its
/// predecessor.
///
/// # Examples
///
/// ```
/// use classic_collections::Error;
/// use classic_collections::search::binary_search_checked;
///
/// assert_eq!(binary_search_checked(&[1, 3, 5], &3), Ok(Some(1)));
/// assert_eq!(binary_search_checked(&[1, 5, 3], &3), Err(Error::Unsorted { index: 2 }));
/// ```
pub fn binary_search_checked<T: Ord>(values: &[T], target: &T) -> Result<Option<usize>> {
    if let Some(index) = first_unsorted_index(values) {
        return Err(Error::Unsorted { index });
    }
    Ok(binary_search(values, target))
}

#[cfg(test)]
mod tests {
    use super::{binary_search, binary_search_checked, first_unsorted_index, linear_search};
    use crate::error::Error;

    #[test]
    fn test_linear_search() {
        let values = [1, 2, 3, 4, 5, 6, 7, 8, 9];
        assert_eq!(linear_search(&values, &5), Some(4));
        assert_eq!(linear_search(&values, &1), Some(0));
        assert_eq!(linear_search(&values, &9), Some(8));
        assert_eq!(linear_search(&values, &10), None);
    }

    #[test]
    fn test_linear_search_unsorted_first_match() {
        let values = [7, 3, 7, 1];
        assert_eq!(linear_search(&values, &7), Some(0));
        assert_eq!(linear_search(&values, &1), Some(3));
    }

    #[test]
    fn test_binary_search() {
        let values = [1, 2, 3, 4, 5, 6, 7, 8, 9];
        for (index, value) in values.iter().enumerate() {
            assert_eq!(binary_search(&values, value), Some(index));
        }
        assert_eq!(binary_search(&values, &0), None);
        assert_eq!(binary_search(&values, &10), None);
    }

    #[test]
    fn test_binary_search_empty() {
        let values: [u32; 0] = [];
        assert_eq!(binary_search(&values, &1), None);
        assert_eq!(linear_search(&values, &1), None);
    }

    #[test]
    fn test_binary_search_gaps() {
        let values = [2, 4, 6, 8];
        assert_eq!(binary_search(&values, &5), None);
        assert_eq!(binary_search(&values, &8), Some(3));
    }

    #[test]
    fn test_first_unsorted_index() {
        assert_eq!(first_unsorted_index::<u32>(&[]), None);
        assert_eq!(first_unsorted_index(&[1, 1, 2]), None);
        assert_eq!(first_unsorted_index(&[1, 4, 3, 2]), Some(2));
    }

    #[test]
    fn test_binary_search_checked() {
        assert_eq!(binary_search_checked(&[1, 2, 3], &3), Ok(Some(2)));
        assert_eq!(binary_search_checked(&[1, 2, 3], &4), Ok(None));
        assert_eq!(
            binary_search_checked(&[3, 2, 1], &3),
            Err(Error::Unsorted { index: 1 }),
        );
    }
}
