use crate::map::{AssocMap, AssocMapIntoIter, AssocMapIter};
use std::hash::Hash;
use std::iter::FromIterator;

/// A set of unique members that remembers the order in which they were first added.
///
/// Members are compared with `Eq` and `Hash`, so plain values such as numbers and strings are
/// compared by value. Wrapping members in `Identity` compares them by identity instead, in which
/// case two structurally equal but separately allocated values are both members.
///
/// # Examples
///
/// ```
/// use classic_collections::set::AssocSet;
///
/// let mut s = AssocSet::new();
/// assert!(s.insert(1));
/// assert!(s.insert(5));
/// assert!(!s.insert(1));
///
/// assert_eq!(s.len(), 2);
/// assert!(s.contains(&5));
///
/// assert!(s.remove(&5));
/// assert!(!s.contains(&5));
/// ```
pub struct AssocSet<T> {
    map: AssocMap<T, ()>,
}

impl<T> AssocSet<T>
where
    T: Hash + Eq + Clone,
{
    /// Constructs a new, empty `AssocSet<T>`.
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_collections::set::AssocSet;
    ///
    /// let s: AssocSet<u32> = AssocSet::new();
    /// ```
    pub fn new() -> Self {
        AssocSet {
            map: AssocMap::new(),
        }
    }

    /// Adds a member to the set. Returns `true` if it was not already present; adding a present
    /// member leaves the set unchanged.
    pub fn insert(&mut self, value: T) -> bool {
        if self.map.contains_key(&value) {
            return false;
        }
        self.map.insert(value, ());
        true
    }

    /// Removes a member from the set. Returns `true` if it was present.
    pub fn remove(&mut self, value: &T) -> bool {
        self.map.remove(value).is_some()
    }

    /// Checks if a member is present in the set.
    pub fn contains(&self, value: &T) -> bool {
        self.map.contains_key(value)
    }

    /// Returns the number of members in the set.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Returns `true` if the set has no members.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Removes every member from the set.
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_collections::set::AssocSet;
    ///
    /// let mut s = AssocSet::new();
    /// s.insert("Hello");
    /// s.clear();
    /// assert!(s.is_empty());
    /// ```
    pub fn clear(&mut self) {
        self.map.clear();
    }

    /// Returns an iterator over the members in the order they were added.
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_collections::set::AssocSet;
    ///
    /// let mut s = AssocSet::new();
    /// s.insert(3);
    /// s.insert(1);
    ///
    /// let mut iterator = s.iter();
    /// assert_eq!(iterator.next(), Some(&3));
    /// assert_eq!(iterator.next(), Some(&1));
    /// assert_eq!(iterator.next(), None);
    /// ```
    pub fn iter(&self) -> AssocSetIter<T> {
        AssocSetIter {
            map_iter: self.map.iter(),
        }
    }
}

impl<T> Default for AssocSet<T>
where
    T: Hash + Eq + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for AssocSet<T>
where
    T: Hash + Eq + Clone,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = AssocSet::new();
        set.extend(iter);
        set
    }
}

impl<T> Extend<T> for AssocSet<T>
where
    T: Hash + Eq + Clone,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T> IntoIterator for AssocSet<T>
where
    T: Hash + Eq + Clone,
{
    type Item = T;
    type IntoIter = AssocSetIntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        AssocSetIntoIter {
            map_iter: self.map.into_iter(),
        }
    }
}

impl<'a, T> IntoIterator for &'a AssocSet<T>
where
    T: 'a + Hash + Eq + Clone,
{
    type Item = &'a T;
    type IntoIter = AssocSetIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An owning iterator for `AssocSet<T>`.
///
/// This iterator yields members in the order they were added.
pub struct AssocSetIntoIter<T> {
    map_iter: AssocMapIntoIter<T, ()>,
}

impl<T> Iterator for AssocSetIntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.map_iter.next().map(|pair| pair.0)
    }
}

/// An iterator for `AssocSet<T>`.
///
/// This iterator yields immutable references in the order members were added.
pub struct AssocSetIter<'a, T: 'a> {
    map_iter: AssocMapIter<'a, T, ()>,
}

impl<'a, T: 'a> Iterator for AssocSetIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.map_iter.next().map(|pair| pair.0)
    }
}
