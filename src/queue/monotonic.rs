use std::collections::VecDeque;

/// A queue whose elements are non-increasing from front to back.
///
/// Pushing a value first discards every trailing element strictly smaller than it, so the front
/// of the queue is always the maximum of the values it represents. Each value is pushed and
/// discarded at most once, which makes the sliding window maximum linear overall.
///
/// # Examples
///
/// ```
/// use classic_collections::queue::MonotonicQueue;
///
/// let mut q = MonotonicQueue::new();
/// q.push(1);
/// q.push(3);
/// q.push(-1);
/// assert_eq!(q.max(), Some(&3));
///
/// q.pop();
/// assert_eq!(q.max(), Some(&-1));
/// ```
#[derive(Clone, Debug)]
pub struct MonotonicQueue<T: Ord> {
    items: VecDeque<T>,
}

impl<T: Ord> MonotonicQueue<T> {
    /// Constructs a new, empty `MonotonicQueue<T>`.
    pub fn new() -> Self {
        MonotonicQueue {
            items: VecDeque::new(),
        }
    }

    /// Appends `value` after discarding every trailing element smaller than it.
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_collections::queue::MonotonicQueue;
    ///
    /// let mut q = MonotonicQueue::new();
    /// q.push(3);
    /// q.push(1);
    /// q.push(2);
    /// assert_eq!(q.len(), 2);
    /// ```
    pub fn push(&mut self, value: T) {
        while self.items.back().map_or(false, |last| *last < value) {
            self.items.pop_back();
        }
        self.items.push_back(value);
    }

    /// Removes and returns the front element, which is the current maximum. Returns `None` if the
    /// queue is empty.
    pub fn pop(&mut self) -> Option<T> {
        self.items.pop_front()
    }

    /// Returns the current maximum, or `None` if the queue is empty.
    pub fn max(&self) -> Option<&T> {
        self.items.front()
    }

    /// Returns the number of elements retained by the queue.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the queue retains no elements.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T: Ord> Default for MonotonicQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Returns the maximum of every contiguous window of `window_size` values, in order.
///
/// Returns an empty vector if `window_size` is zero or exceeds the number of values.
///
/// # Examples
///
/// ```
/// use classic_collections::queue::sliding_window_max;
///
/// let nums = [1, 3, -1, -3, 5, 3, 6, 7];
/// assert_eq!(sliding_window_max(&nums, 3), vec![3, 3, 5, 5, 6, 7]);
/// ```
pub fn sliding_window_max<T: Ord + Clone>(values: &[T], window_size: usize) -> Vec<T> {
    if window_size == 0 || window_size > values.len() {
        return Vec::new();
    }

    let mut queue = MonotonicQueue::new();
    let mut ret = Vec::with_capacity(values.len() - window_size + 1);
    for (index, value) in values.iter().enumerate() {
        if index >= window_size && queue.max() == Some(&values[index - window_size]) {
            queue.pop();
        }
        queue.push(value.clone());
        if index + 1 >= window_size {
            if let Some(max) = queue.max() {
                ret.push(max.clone());
            }
        }
    }
    ret
}
