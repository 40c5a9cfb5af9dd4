use crate::arena::{Entry, TypedArena};
use std::collections::HashMap;
use std::marker::PhantomData;

/// A map keyed by objects that live in a `TypedArena<T>`, which does not keep its keys alive.
///
/// The map stores only the arena entry of each key. An entry whose object has been freed from
/// the arena is stale, and every lookup through the map treats it as absent, even if the arena
/// has since reused the slot for another object. Stale entries are not dropped on their own;
/// `purge` discards them explicitly. Because liveness depends on the arena, the map exposes
/// neither its size nor an iterator. A key looked up through any arena other than the one that
/// allocated it is absent.
///
/// # Examples
///
/// ```
/// use classic_collections::arena::TypedArena;
/// use classic_collections::map::WeakMap;
///
/// let mut objects = TypedArena::new(16);
/// let key_1 = objects.allocate(());
/// let key_2 = objects.allocate(());
///
/// let mut map = WeakMap::new();
/// map.insert(key_1, "Value for key1");
/// map.insert(key_2, "Value for key2");
///
/// assert_eq!(map.get(&objects, &key_1), Some(&"Value for key1"));
///
/// objects.free(&key_2);
/// assert!(!map.contains_key(&objects, &key_2));
/// ```
pub struct WeakMap<T, V> {
    entries: HashMap<Entry, V>,
    _marker: PhantomData<T>,
}

impl<T, V> WeakMap<T, V> {
    /// Constructs a new, empty `WeakMap<T, V>`.
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_collections::map::WeakMap;
    ///
    /// let map: WeakMap<String, u32> = WeakMap::new();
    /// ```
    pub fn new() -> Self {
        WeakMap {
            entries: HashMap::new(),
            _marker: PhantomData,
        }
    }

    /// Associates `value` with the object behind `key`. Returns the previous value if there was
    /// one.
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_collections::arena::TypedArena;
    /// use classic_collections::map::WeakMap;
    ///
    /// let mut objects = TypedArena::new(16);
    /// let key = objects.allocate(());
    ///
    /// let mut map: WeakMap<(), _> = WeakMap::new();
    /// assert_eq!(map.insert(key, 1), None);
    /// assert_eq!(map.insert(key, 2), Some(1));
    /// ```
    pub fn insert(&mut self, key: Entry, value: V) -> Option<V> {
        self.entries.insert(key, value)
    }

    /// Removes the association for `key`, returning its value if the map held one.
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_collections::arena::TypedArena;
    /// use classic_collections::map::WeakMap;
    ///
    /// let mut objects = TypedArena::new(16);
    /// let key = objects.allocate(());
    ///
    /// let mut map = WeakMap::new();
    /// map.insert(key, 1);
    /// assert_eq!(map.remove(&key), Some(1));
    /// assert!(!map.contains_key(&objects, &key));
    /// ```
    pub fn remove(&mut self, key: &Entry) -> Option<V> {
        self.entries.remove(key)
    }

    /// Returns the value associated with `key`, or `None` if there is none or the object behind
    /// `key` has been freed from `arena`.
    pub fn get(&self, arena: &TypedArena<T>, key: &Entry) -> Option<&V> {
        if !arena.contains(key) {
            return None;
        }
        self.entries.get(key)
    }

    /// Returns a mutable reference to the value associated with `key`, or `None` if there is none
    /// or the object behind `key` has been freed from `arena`.
    pub fn get_mut(&mut self, arena: &TypedArena<T>, key: &Entry) -> Option<&mut V> {
        if !arena.contains(key) {
            return None;
        }
        self.entries.get_mut(key)
    }

    /// Checks if the map holds a value for a live `key`.
    pub fn contains_key(&self, arena: &TypedArena<T>, key: &Entry) -> bool {
        self.get(arena, key).is_some()
    }

    /// Discards every association whose key has been freed from `arena`.
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_collections::arena::TypedArena;
    /// use classic_collections::map::WeakMap;
    ///
    /// let mut objects = TypedArena::new(16);
    /// let key = objects.allocate(());
    ///
    /// let mut map = WeakMap::new();
    /// map.insert(key, 1);
    /// objects.free(&key);
    /// map.purge(&objects);
    ///
    /// // the association is gone even if the same entry becomes valid again
    /// assert_eq!(map.remove(&key), None);
    /// ```
    pub fn purge(&mut self, arena: &TypedArena<T>) {
        let before = self.entries.len();
        self.entries.retain(|key, _| arena.contains(key));
        let purged = before - self.entries.len();
        if purged > 0 {
            debug!("purged {} stale weak map entries", purged);
        }
    }
}

impl<T, V> Default for WeakMap<T, V> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::WeakMap;
    use crate::arena::TypedArena;

    #[test]
    fn test_insert_get() {
        let mut arena = TypedArena::new(16);
        let key_1 = arena.allocate(String::from("key1"));
        let key_2 = arena.allocate(String::from("key2"));

        let mut map = WeakMap::new();
        map.insert(key_1, "Value for key1");
        map.insert(key_2, "Value for key2");

        assert_eq!(map.get(&arena, &key_1), Some(&"Value for key1"));
        assert!(map.contains_key(&arena, &key_2));
    }

    #[test]
    fn test_remove() {
        let mut arena = TypedArena::new(16);
        let key = arena.allocate(());
        let mut map = WeakMap::new();
        map.insert(key, 3);
        assert_eq!(map.remove(&key), Some(3));
        assert!(!map.contains_key(&arena, &key));
        assert_eq!(map.remove(&key), None);
    }

    #[test]
    fn test_key_absent_through_other_arena() {
        let mut a = TypedArena::new(16);
        let mut b = TypedArena::new(16);
        let key = a.allocate(());
        let other = b.allocate(());
        let mut map = WeakMap::new();
        map.insert(key, 1);

        a.free(&key);
        assert!(!map.contains_key(&a, &key));
        assert!(!map.contains_key(&b, &key));
        assert_eq!(map.get(&b, &key), None);
        assert!(b.contains(&other));
    }

    #[test]
    fn test_freed_key_is_absent() {
        let mut arena = TypedArena::new(16);
        let key = arena.allocate(());
        let mut map = WeakMap::new();
        map.insert(key, 1);

        arena.free(&key);
        assert_eq!(map.get(&arena, &key), None);

        let reused = arena.allocate(());
        assert!(!map.contains_key(&arena, &key));
        assert!(!map.contains_key(&arena, &reused));
    }

    #[test]
    fn test_distinct_objects_are_distinct_keys() {
        let mut arena = TypedArena::new(16);
        let key_1 = arena.allocate(());
        let key_2 = arena.allocate(());
        let mut map = WeakMap::new();
        map.insert(key_1, 1);
        assert_eq!(map.get(&arena, &key_2), None);
    }

    #[test]
    fn test_get_mut() {
        let mut arena = TypedArena::new(16);
        let key = arena.allocate(());
        let mut map = WeakMap::new();
        map.insert(key, 1);
        *map.get_mut(&arena, &key).unwrap() += 1;
        assert_eq!(map.get(&arena, &key), Some(&2));
    }

    #[test]
    fn test_purge() {
        let mut arena = TypedArena::new(16);
        let live = arena.allocate(());
        let dead = arena.allocate(());
        let mut map = WeakMap::new();
        map.insert(live, 1);
        map.insert(dead, 2);

        arena.free(&dead);
        map.purge(&arena);

        assert_eq!(map.remove(&dead), None);
        assert_eq!(map.get(&arena, &live), Some(&1));
    }
}
