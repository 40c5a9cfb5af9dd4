use std::collections::HashMap;
use std::hash::Hash;
use std::mem;
use std::slice;
use std::vec;

/// A map that remembers the order in which its keys were first inserted.
///
/// Entries live in a vector in insertion order, and a hash index maps every key to its slot.
/// Removing a key leaves a hole in the vector so the other slots stay put; once holes make up
/// more than half of the vector it is compacted and the index rebuilt, keeping removal O(1)
/// amortized. Replacing the value of an existing key keeps its original position.
///
/// Keys are compared with `Eq` and `Hash`. Wrap keys in `Identity` to compare them by identity
/// instead.
///
/// # Examples
///
/// ```
/// use classic_collections::map::AssocMap;
///
/// let mut map = AssocMap::new();
/// map.insert("name", "Alice");
/// map.insert("city", "Paris");
///
/// assert_eq!(map.get(&"name"), Some(&"Alice"));
/// assert!(!map.contains_key(&"age"));
///
/// assert_eq!(map.remove(&"name"), Some(("name", "Alice")));
/// map.insert("age", "30");
///
/// assert_eq!(
///     map.iter().collect::<Vec<(&&str, &&str)>>(),
///     vec![(&"city", &"Paris"), (&"age", &"30")],
/// );
/// ```
pub struct AssocMap<K, V> {
    entries: Vec<Option<(K, V)>>,
    index: HashMap<K, usize>,
}

impl<K, V> AssocMap<K, V>
where
    K: Hash + Eq + Clone,
{
    /// Constructs a new, empty `AssocMap<K, V>`.
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_collections::map::AssocMap;
    ///
    /// let map: AssocMap<u32, u32> = AssocMap::new();
    /// ```
    pub fn new() -> Self {
        AssocMap {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }

    fn compact(&mut self) {
        let entries = mem::replace(&mut self.entries, Vec::with_capacity(self.index.len()));
        self.entries.extend(entries.into_iter().filter(Option::is_some));
        for (slot, entry) in self.entries.iter().enumerate() {
            if let Some((ref key, _)) = *entry {
                if let Some(position) = self.index.get_mut(key) {
                    *position = slot;
                }
            }
        }
    }

    /// Inserts a key-value pair into the map. If the key already exists in the map, it will
    /// return and replace the old key-value pair without changing its position.
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_collections::map::AssocMap;
    ///
    /// let mut map = AssocMap::new();
    /// assert_eq!(map.insert(1, 1), None);
    /// assert_eq!(map.insert(1, 2), Some((1, 1)));
    /// assert_eq!(map.get(&1), Some(&2));
    /// ```
    pub fn insert(&mut self, key: K, value: V) -> Option<(K, V)> {
        if let Some(&slot) = self.index.get(&key) {
            return mem::replace(&mut self.entries[slot], Some((key, value)));
        }
        self.index.insert(key.clone(), self.entries.len());
        self.entries.push(Some((key, value)));
        None
    }

    /// Removes a key-value pair from the map. If the key exists in the map, it will return the
    /// associated key-value pair. Otherwise it will return `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_collections::map::AssocMap;
    ///
    /// let mut map = AssocMap::new();
    /// map.insert(1, 1);
    /// assert_eq!(map.remove(&1), Some((1, 1)));
    /// assert_eq!(map.remove(&1), None);
    /// ```
    pub fn remove(&mut self, key: &K) -> Option<(K, V)> {
        let slot = self.index.remove(key)?;
        let ret = self.entries[slot].take();
        if self.index.is_empty() {
            self.entries.clear();
        } else if self.entries.len() > 2 * self.index.len() {
            self.compact();
        }
        ret
    }

    /// Checks if a key exists in the map.
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_collections::map::AssocMap;
    ///
    /// let mut map = AssocMap::new();
    /// map.insert(1, 1);
    /// assert!(!map.contains_key(&0));
    /// assert!(map.contains_key(&1));
    /// ```
    pub fn contains_key(&self, key: &K) -> bool {
        self.index.contains_key(key)
    }

    /// Returns an immutable reference to the value associated with a particular key. It will
    /// return `None` if the key does not exist in the map.
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_collections::map::AssocMap;
    ///
    /// let mut map = AssocMap::new();
    /// map.insert(1, 1);
    /// assert_eq!(map.get(&0), None);
    /// assert_eq!(map.get(&1), Some(&1));
    /// ```
    pub fn get(&self, key: &K) -> Option<&V> {
        let slot = *self.index.get(key)?;
        self.entries[slot].as_ref().map(|pair| &pair.1)
    }

    /// Returns a mutable reference to the value associated with a particular key. Returns `None`
    /// if such a key does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_collections::map::AssocMap;
    ///
    /// let mut map = AssocMap::new();
    /// map.insert(1, 1);
    /// *map.get_mut(&1).unwrap() = 2;
    /// assert_eq!(map.get(&1), Some(&2));
    /// ```
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        let slot = *self.index.get(key)?;
        self.entries[slot].as_mut().map(|pair| &mut pair.1)
    }

    /// Returns the number of key-value pairs in the map.
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_collections::map::AssocMap;
    ///
    /// let mut map = AssocMap::new();
    /// map.insert(1, 1);
    /// assert_eq!(map.len(), 1);
    /// ```
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Returns `true` if the map contains no key-value pairs.
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Removes every key-value pair from the map.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.index.clear();
    }

    /// Returns an iterator over the map. The iterator will yield key-value pairs in insertion
    /// order.
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_collections::map::AssocMap;
    ///
    /// let mut map = AssocMap::new();
    /// map.insert(3, 3);
    /// map.insert(1, 1);
    ///
    /// let mut iterator = map.iter();
    /// assert_eq!(iterator.next(), Some((&3, &3)));
    /// assert_eq!(iterator.next(), Some((&1, &1)));
    /// assert_eq!(iterator.next(), None);
    /// ```
    pub fn iter(&self) -> AssocMapIter<K, V> {
        AssocMapIter {
            entries: self.entries.iter(),
        }
    }

    /// Returns a mutable iterator over the map. The iterator will yield key-value pairs in
    /// insertion order.
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_collections::map::AssocMap;
    ///
    /// let mut map = AssocMap::new();
    /// map.insert(3, 3);
    /// map.insert(1, 1);
    ///
    /// for (_, value) in &mut map {
    ///     *value += 1;
    /// }
    ///
    /// let mut iterator = map.iter_mut();
    /// assert_eq!(iterator.next(), Some((&3, &mut 4)));
    /// assert_eq!(iterator.next(), Some((&1, &mut 2)));
    /// assert_eq!(iterator.next(), None);
    /// ```
    pub fn iter_mut(&mut self) -> AssocMapIterMut<K, V> {
        AssocMapIterMut {
            entries: self.entries.iter_mut(),
        }
    }

    /// Returns an iterator over the keys of the map in insertion order.
    pub fn keys<'a>(&'a self) -> impl Iterator<Item = &'a K> + 'a {
        self.iter().map(|(key, _)| key)
    }

    /// Returns an iterator over the values of the map in insertion order.
    pub fn values<'a>(&'a self) -> impl Iterator<Item = &'a V> + 'a {
        self.iter().map(|(_, value)| value)
    }
}

impl<K, V> Default for AssocMap<K, V>
where
    K: Hash + Eq + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> IntoIterator for AssocMap<K, V>
where
    K: Hash + Eq + Clone,
{
    type Item = (K, V);
    type IntoIter = AssocMapIntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        AssocMapIntoIter {
            entries: self.entries.into_iter(),
        }
    }
}

impl<'a, K, V> IntoIterator for &'a AssocMap<K, V>
where
    K: 'a + Hash + Eq + Clone,
    V: 'a,
{
    type Item = (&'a K, &'a V);
    type IntoIter = AssocMapIter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, K, V> IntoIterator for &'a mut AssocMap<K, V>
where
    K: 'a + Hash + Eq + Clone,
    V: 'a,
{
    type Item = (&'a K, &'a mut V);
    type IntoIter = AssocMapIterMut<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

/// An owning iterator for `AssocMap<K, V>`.
///
/// This iterator yields key-value pairs in insertion order.
pub struct AssocMapIntoIter<K, V> {
    entries: vec::IntoIter<Option<(K, V)>>,
}

impl<K, V> Iterator for AssocMapIntoIter<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(entry) = self.entries.next() {
            if entry.is_some() {
                return entry;
            }
        }
        None
    }
}

/// An iterator for `AssocMap<K, V>`.
///
/// This iterator yields immutable references in insertion order.
pub struct AssocMapIter<'a, K: 'a, V: 'a> {
    entries: slice::Iter<'a, Option<(K, V)>>,
}

impl<'a, K: 'a, V: 'a> Iterator for AssocMapIter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(entry) = self.entries.next() {
            if let Some((ref key, ref value)) = *entry {
                return Some((key, value));
            }
        }
        None
    }
}

/// A mutable iterator for `AssocMap<K, V>`.
///
/// This iterator yields mutable references to values in insertion order.
pub struct AssocMapIterMut<'a, K: 'a, V: 'a> {
    entries: slice::IterMut<'a, Option<(K, V)>>,
}

impl<'a, K: 'a, V: 'a> Iterator for AssocMapIterMut<'a, K, V> {
    type Item = (&'a K, &'a mut V);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(entry) = self.entries.next() {
            if let Some((ref key, ref mut value)) = *entry {
                return Some((key, value));
            }
        }
        None
    }
}
