use crate::join::write_joined;
use std::collections::vec_deque::{self, VecDeque};
use std::fmt;
use std::iter::FromIterator;

/// A first-in first-out queue.
///
/// # Examples
///
/// ```
/// use classic_collections::queue::Queue;
///
/// let mut q = Queue::new();
/// assert!(q.is_empty());
///
/// q.enqueue(20);
/// q.enqueue(10);
/// q.enqueue(30);
/// assert_eq!(q.len(), 3);
/// assert_eq!(q.to_string(), "20,10,30");
///
/// assert_eq!(q.dequeue(), Some(20));
/// assert_eq!(q.peek(), Some(&10));
/// ```
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Queue<T> {
    items: VecDeque<T>,
}

impl<T> Queue<T> {
    /// Constructs a new, empty `Queue<T>`.
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_collections::queue::Queue;
    ///
    /// let q: Queue<u32> = Queue::new();
    /// ```
    pub fn new() -> Self {
        Queue {
            items: VecDeque::new(),
        }
    }

    /// Appends an element to the back of the queue.
    pub fn enqueue(&mut self, value: T) {
        self.items.push_back(value);
    }

    /// Removes and returns the element at the front of the queue. Returns `None` if the queue is
    /// empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_collections::queue::Queue;
    ///
    /// let mut q = Queue::new();
    /// q.enqueue(1);
    /// q.enqueue(2);
    /// assert_eq!(q.dequeue(), Some(1));
    /// assert_eq!(q.dequeue(), Some(2));
    /// assert_eq!(q.dequeue(), None);
    /// ```
    pub fn dequeue(&mut self) -> Option<T> {
        self.items.pop_front()
    }

    /// Returns a reference to the element at the front of the queue, or `None` if the queue is
    /// empty.
    pub fn peek(&self) -> Option<&T> {
        self.items.front()
    }

    /// Returns the number of elements in the queue.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the queue contains no elements.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Removes every element from the queue.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Returns an iterator over the queue from front to back.
    pub fn iter(&self) -> vec_deque::Iter<T> {
        self.items.iter()
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for Queue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Queue {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for Queue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<T> IntoIterator for Queue<T> {
    type Item = T;
    type IntoIter = vec_deque::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T: 'a> IntoIterator for &'a Queue<T> {
    type Item = &'a T;
    type IntoIter = vec_deque::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: fmt::Display> fmt::Display for Queue<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write_joined(f, &self.items)
    }
}
