//! Double-ended queue.

use std::collections::vec_deque::{self, VecDeque};
use std::iter::FromIterator;

/// A buffer that supports insertion and removal at both the front and the rear.
///
/// A deque combines the behaviour of a stack and a queue. It is backed by a ring buffer, so all
/// operations at either end run in amortized constant time. Removing or peeking at an empty
/// deque returns `None`.
///
/// # Examples
///
/// ```
/// use classic_collections::deque::Deque;
///
/// let mut d = Deque::new();
/// d.push_back(10);
/// d.push_back(20);
/// d.push_front(5);
///
/// assert_eq!(d.front(), Some(&5));
/// assert_eq!(d.back(), Some(&20));
///
/// assert_eq!(d.pop_front(), Some(5));
/// assert_eq!(d.len(), 2);
///
/// assert_eq!(d.pop_back(), Some(20));
/// assert!(!d.is_empty());
/// ```
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Deque<T> {
    items: VecDeque<T>,
}

impl<T> Deque<T> {
    /// Constructs a new, empty `Deque<T>`.
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_collections::deque::Deque;
    ///
    /// let d: Deque<u32> = Deque::new();
    /// ```
    pub fn new() -> Self {
        Deque {
            items: VecDeque::new(),
        }
    }

    /// Inserts an element at the front of the deque.
    pub fn push_front(&mut self, value: T) {
        self.items.push_front(value);
    }

    /// Inserts an element at the rear of the deque.
    pub fn push_back(&mut self, value: T) {
        self.items.push_back(value);
    }

    /// Removes and returns the front element. Returns `None` if the deque is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_collections::deque::Deque;
    ///
    /// let mut d = Deque::new();
    /// d.push_back(1);
    /// assert_eq!(d.pop_front(), Some(1));
    /// assert_eq!(d.pop_front(), None);
    /// ```
    pub fn pop_front(&mut self) -> Option<T> {
        self.items.pop_front()
    }

    /// Removes and returns the rear element. Returns `None` if the deque is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_collections::deque::Deque;
    ///
    /// let mut d = Deque::new();
    /// d.push_front(1);
    /// assert_eq!(d.pop_back(), Some(1));
    /// assert_eq!(d.pop_back(), None);
    /// ```
    pub fn pop_back(&mut self) -> Option<T> {
        self.items.pop_back()
    }

    /// Returns a reference to the front element, or `None` if the deque is empty.
    pub fn front(&self) -> Option<&T> {
        self.items.front()
    }

    /// Returns a reference to the rear element, or `None` if the deque is empty.
    pub fn back(&self) -> Option<&T> {
        self.items.back()
    }

    /// Returns the number of elements in the deque.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the deque contains no elements.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Removes every element from the deque.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Returns an iterator over the deque from front to rear.
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_collections::deque::Deque;
    ///
    /// let mut d = Deque::new();
    /// d.push_back(2);
    /// d.push_front(1);
    /// assert_eq!(d.iter().collect::<Vec<&u32>>(), vec![&1, &2]);
    /// ```
    pub fn iter(&self) -> vec_deque::Iter<T> {
        self.items.iter()
    }
}

impl<T> Default for Deque<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for Deque<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Deque {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for Deque<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<T> IntoIterator for Deque<T> {
    type Item = T;
    type IntoIter = vec_deque::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T: 'a> IntoIterator for &'a Deque<T> {
    type Item = &'a T;
    type IntoIter = vec_deque::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
