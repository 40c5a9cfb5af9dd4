//! Comparison sorts: bubble, insertion, merge, and quick sort.
//!
//! Bubble and insertion sort rearrange a slice in place. Merge and quick sort take ownership of a
//! vector and return a new sorted one.

use std::vec::Vec;

/// Returns `true` if `values` is sorted ascending.
///
/// # Examples
///
/// ```
/// use classic_collections::sort::is_sorted;
///
/// assert!(is_sorted(&[1, 2, 2, 3]));
/// assert!(!is_sorted(&[2, 1]));
/// ```
pub fn is_sorted<T: Ord>(values: &[T]) -> bool {
    values.windows(2).all(|pair| pair[0] <= pair[1])
}

/// Sorts `values` ascending by repeatedly swapping adjacent out-of-order elements until a full
/// pass makes no swap. O(n^2).
///
/// # Examples
///
/// ```
/// use classic_collections::sort::bubble_sort;
///
/// let mut values = [7, 2, 5, 3, 6];
/// bubble_sort(&mut values);
/// assert_eq!(values, [2, 3, 5, 6, 7]);
/// ```
pub fn bubble_sort<T: Ord>(values: &mut [T]) {
    let mut unsorted_len = values.len();
    let mut swapped = true;
    while swapped {
        swapped = false;
        for index in 1..unsorted_len {
            if values[index - 1] > values[index] {
                values.swap(index - 1, index);
                swapped = true;
            }
        }
        // the largest remaining element has bubbled into place
        unsorted_len = unsorted_len.saturating_sub(1);
    }
}

/// Sorts `values` ascending by growing a sorted prefix and shifting each new element back into
/// place. O(n^2), stable.
///
/// # Examples
///
/// ```
/// use classic_collections::sort::insertion_sort;
///
/// let mut values = [4, 1, 5, 3, 2];
/// insertion_sort(&mut values);
/// assert_eq!(values, [1, 2, 3, 4, 5]);
/// ```
pub fn insertion_sort<T: Ord>(values: &mut [T]) {
    for index in 1..values.len() {
        let mut curr = index;
        while curr > 0 && values[curr - 1] > values[curr] {
            values.swap(curr - 1, curr);
            curr -= 1;
        }
    }
}

fn merge<T: Ord>(left: Vec<T>, right: Vec<T>) -> Vec<T> {
    let mut ret = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();
    loop {
        let take_left = match (left.peek(), right.peek()) {
            (Some(l), Some(r)) => l <= r,
            (Some(_), None) => true,
            (None, Some(_)) => false,
            (None, None) => break,
        };
        let next = if take_left { left.next() } else { right.next() };
        ret.extend(next);
    }
    ret
}

/// Sorts `values` ascending by recursively sorting each half and merging them. O(n log n),
/// stable.
///
/// # Examples
///
/// ```
/// use classic_collections::sort::merge_sort;
///
/// assert_eq!(merge_sort(vec![5, 2, 1, 6, 4]), vec![1, 2, 4, 5, 6]);
/// ```
pub fn merge_sort<T: Ord>(mut values: Vec<T>) -> Vec<T> {
    if values.len() <= 1 {
        return values;
    }
    let right = values.split_off(values.len() / 2);
    merge(merge_sort(values), merge_sort(right))
}

enum Pending<T> {
    Sort(Vec<T>),
    Emit(T),
}

/// Sorts `values` ascending by partitioning around the last element into the elements less than
/// it and the rest, sorting both partitions, and concatenating the results.
///
/// O(n log n) on average. With the last element as pivot, already sorted and reverse sorted
/// inputs degrade to O(n^2) time. Pending partitions are kept on a heap-allocated work list
/// rather than the call stack, so those inputs are slow but never exhaust the stack.
///
/// # Examples
///
/// ```
/// use classic_collections::sort::quick_sort;
///
/// assert_eq!(quick_sort(vec![5, 2, 1, 6, 4]), vec![1, 2, 4, 5, 6]);
/// ```
pub fn quick_sort<T: Ord>(values: Vec<T>) -> Vec<T> {
    let mut ret = Vec::with_capacity(values.len());
    // popped in output order: a partition's less bucket, then its pivot, then the rest
    let mut pending = vec![Pending::Sort(values)];
    while let Some(next) = pending.pop() {
        match next {
            Pending::Emit(pivot) => ret.push(pivot),
            Pending::Sort(mut values) => {
                let pivot = match values.pop() {
                    Some(pivot) => pivot,
                    None => continue,
                };
                let (less, rest): (Vec<T>, Vec<T>) =
                    values.into_iter().partition(|value| *value < pivot);
                if !rest.is_empty() {
                    pending.push(Pending::Sort(rest));
                }
                pending.push(Pending::Emit(pivot));
                if !less.is_empty() {
                    pending.push(Pending::Sort(less));
                }
            },
        }
    }
    ret
}
