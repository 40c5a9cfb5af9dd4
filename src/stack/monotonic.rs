use std::vec::Vec;

/// The direction a `MonotonicStack` keeps its values in, from bottom to top.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Order {
    /// Values never increase towards the top. A pushed value resolves every smaller value, which
    /// answers next-greater queries.
    Decreasing,
    /// Values never decrease towards the top. A pushed value resolves every greater value, which
    /// answers next-smaller queries.
    Increasing,
}

/// A stack of indexed values kept monotonic by popping every entry a new value dominates.
///
/// Each pushed entry stays on the stack until a later value is strictly greater
/// (`Order::Decreasing`) or strictly smaller (`Order::Increasing`) than it, and is then returned
/// from `push` as resolved. Every index is pushed and popped at most once, so scanning a sequence
/// costs O(n) in total.
///
/// # Examples
///
/// ```
/// use classic_collections::stack::{MonotonicStack, Order};
///
/// let mut s = MonotonicStack::new(Order::Decreasing);
/// assert!(s.push(0, 4).is_empty());
/// assert_eq!(s.push(1, 5), vec![(0, 4)]);
/// assert!(s.push(2, 2).is_empty());
/// assert_eq!(s.push(3, 10), vec![(2, 2), (1, 5)]);
/// assert_eq!(s.peek(), Some(&(3, 10)));
/// ```
#[derive(Clone, Debug)]
pub struct MonotonicStack<T: Ord> {
    entries: Vec<(usize, T)>,
    order: Order,
}

impl<T: Ord> MonotonicStack<T> {
    /// Constructs a new, empty `MonotonicStack<T>` that keeps values in `order`.
    pub fn new(order: Order) -> Self {
        MonotonicStack {
            entries: Vec::new(),
            order,
        }
    }

    fn dominates(&self, value: &T, top: &T) -> bool {
        match self.order {
            Order::Decreasing => value > top,
            Order::Increasing => value < top,
        }
    }

    /// Pushes `value` found at `index`, returning the entries it resolved from the top of the
    /// stack downwards.
    pub fn push(&mut self, index: usize, value: T) -> Vec<(usize, T)> {
        let mut resolved = Vec::new();
        while self
            .entries
            .last()
            .map_or(false, |top| self.dominates(&value, &top.1))
        {
            if let Some(entry) = self.entries.pop() {
                resolved.push(entry);
            }
        }
        self.entries.push((index, value));
        resolved
    }

    /// Returns the top entry, or `None` if the stack is empty.
    pub fn peek(&self) -> Option<&(usize, T)> {
        self.entries.last()
    }

    /// Returns the number of entries that are still unresolved.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no entries are unresolved.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn resolve_next<T: Ord + Clone>(values: &[T], order: Order) -> Vec<Option<T>> {
    let mut ret = vec![None; values.len()];
    let mut stack = MonotonicStack::new(order);
    for (index, value) in values.iter().enumerate() {
        for (resolved, _) in stack.push(index, value.clone()) {
            ret[resolved] = Some(value.clone());
        }
    }
    ret
}

/// Returns, for every position, the nearest following value that is strictly greater, or `None`
/// if there is none.
///
/// # Examples
///
/// ```
/// use classic_collections::stack::next_greater_elements;
///
/// assert_eq!(
///     next_greater_elements(&[4, 5, 2, 10, 8]),
///     vec![Some(5), Some(10), Some(10), None, None],
/// );
/// ```
pub fn next_greater_elements<T: Ord + Clone>(values: &[T]) -> Vec<Option<T>> {
    resolve_next(values, Order::Decreasing)
}

/// Returns, for every position, the nearest following value that is strictly smaller, or `None`
/// if there is none.
///
/// # Examples
///
/// ```
/// use classic_collections::stack::next_smaller_elements;
///
/// assert_eq!(
///     next_smaller_elements(&[4, 5, 2, 10, 8]),
///     vec![Some(2), Some(2), None, Some(8), None],
/// );
/// ```
pub fn next_smaller_elements<T: Ord + Clone>(values: &[T]) -> Vec<Option<T>> {
    resolve_next(values, Order::Increasing)
}
