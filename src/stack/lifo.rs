use crate::join::write_joined;
use std::fmt;
use std::iter::FromIterator;
use std::slice;
use std::vec::{self, Vec};

/// A last-in first-out stack.
///
/// # Examples
///
/// ```
/// use classic_collections::stack::Stack;
///
/// let mut s = Stack::new();
/// assert!(s.is_empty());
///
/// s.push(20);
/// s.push(10);
/// s.push(30);
/// assert_eq!(s.len(), 3);
/// assert_eq!(s.to_string(), "20,10,30");
///
/// assert_eq!(s.pop(), Some(30));
/// assert_eq!(s.peek(), Some(&10));
/// ```
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Stack<T> {
    items: Vec<T>,
}

impl<T> Stack<T> {
    /// Constructs a new, empty `Stack<T>`.
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_collections::stack::Stack;
    ///
    /// let s: Stack<u32> = Stack::new();
    /// ```
    pub fn new() -> Self {
        Stack { items: Vec::new() }
    }

    /// Pushes an item onto the stack.
    pub fn push(&mut self, value: T) {
        self.items.push(value);
    }

    /// Removes and returns the top element of the stack. Returns `None` if the stack is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_collections::stack::Stack;
    ///
    /// let mut s = Stack::new();
    /// s.push(0);
    ///
    /// assert_eq!(s.pop(), Some(0));
    /// assert_eq!(s.pop(), None);
    /// ```
    pub fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    /// Returns a reference to the top element of the stack, or `None` if the stack is empty.
    pub fn peek(&self) -> Option<&T> {
        self.items.last()
    }

    /// Returns the number of elements in the stack.
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_collections::stack::Stack;
    ///
    /// let mut s = Stack::new();
    /// assert_eq!(s.len(), 0);
    ///
    /// s.push(0);
    /// assert_eq!(s.len(), 1);
    /// ```
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the stack contains no elements.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Removes every element from the stack.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Returns an iterator over the stack from bottom to top.
    pub fn iter(&self) -> slice::Iter<T> {
        self.items.iter()
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for Stack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Stack {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for Stack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<T> IntoIterator for Stack<T> {
    type Item = T;
    type IntoIter = vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T: 'a> IntoIterator for &'a Stack<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: fmt::Display> fmt::Display for Stack<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write_joined(f, &self.items)
    }
}
