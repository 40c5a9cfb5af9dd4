use crate::arena::{Entry, TypedArena};
use std::collections::HashSet;
use std::marker::PhantomData;

/// A set of objects living in a `TypedArena<T>`, which does not keep its members alive.
///
/// Membership is recorded by arena entry only, so a member is compared by identity. Once its
/// object is freed from the arena the entry is stale and the member is reported absent, even if
/// the arena reuses the slot. `purge` discards stale entries explicitly. The set exposes neither
/// its size nor an iterator. Membership is only ever reported against the arena that allocated
/// the object.
///
/// # Examples
///
/// ```
/// use classic_collections::arena::TypedArena;
/// use classic_collections::set::WeakSet;
///
/// let mut objects = TypedArena::new(16);
/// let obj_1 = objects.allocate("obj1");
/// let obj_2 = objects.allocate("obj2");
///
/// let mut set = WeakSet::new();
/// set.insert(obj_1);
/// set.insert(obj_2);
/// assert!(set.contains(&objects, &obj_1));
///
/// set.remove(&obj_2);
/// assert!(!set.contains(&objects, &obj_2));
///
/// objects.free(&obj_1);
/// assert!(!set.contains(&objects, &obj_1));
/// ```
pub struct WeakSet<T> {
    entries: HashSet<Entry>,
    _marker: PhantomData<T>,
}

impl<T> WeakSet<T> {
    /// Constructs a new, empty `WeakSet<T>`.
    pub fn new() -> Self {
        WeakSet {
            entries: HashSet::new(),
            _marker: PhantomData,
        }
    }

    /// Adds the object behind `entry`. Returns `true` if it was not already a member.
    pub fn insert(&mut self, entry: Entry) -> bool {
        self.entries.insert(entry)
    }

    /// Removes the object behind `entry`. Returns `true` if it was a member.
    pub fn remove(&mut self, entry: &Entry) -> bool {
        self.entries.remove(entry)
    }

    /// Checks if the object behind `entry` is a member and has not been freed from `arena`.
    pub fn contains(&self, arena: &TypedArena<T>, entry: &Entry) -> bool {
        arena.contains(entry) && self.entries.contains(entry)
    }

    /// Discards every member that has been freed from `arena`.
    pub fn purge(&mut self, arena: &TypedArena<T>) {
        let before = self.entries.len();
        self.entries.retain(|entry| arena.contains(entry));
        let purged = before - self.entries.len();
        if purged > 0 {
            debug!("purged {} stale weak set entries", purged);
        }
    }
}

impl<T> Default for WeakSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::WeakSet;
    use crate::arena::TypedArena;

    #[test]
    fn test_insert_contains() {
        let mut arena = TypedArena::new(16);
        let obj = arena.allocate("obj1");
        let mut set = WeakSet::new();
        assert!(set.insert(obj));
        assert!(!set.insert(obj));
        assert!(set.contains(&arena, &obj));
    }

    #[test]
    fn test_remove() {
        let mut arena = TypedArena::new(16);
        let obj = arena.allocate("obj2");
        let mut set = WeakSet::new();
        set.insert(obj);
        assert!(set.remove(&obj));
        assert!(!set.contains(&arena, &obj));
        assert!(!set.remove(&obj));
    }

    #[test]
    fn test_member_absent_through_other_arena() {
        let mut a = TypedArena::new(16);
        let mut b = TypedArena::new(16);
        let obj = a.allocate("obj");
        b.allocate("obj");
        let mut set = WeakSet::new();
        set.insert(obj);
        assert!(set.contains(&a, &obj));
        assert!(!set.contains(&b, &obj));

        a.free(&obj);
        assert!(!set.contains(&a, &obj));
        assert!(!set.contains(&b, &obj));
    }

    #[test]
    fn test_equal_objects_are_distinct_members() {
        let mut arena = TypedArena::new(16);
        let obj_1 = arena.allocate("same");
        let obj_2 = arena.allocate("same");
        let mut set = WeakSet::new();
        set.insert(obj_1);
        assert!(!set.contains(&arena, &obj_2));
    }

    #[test]
    fn test_freed_member_is_absent() {
        let mut arena = TypedArena::new(16);
        let obj = arena.allocate("obj3");
        let mut set = WeakSet::new();
        set.insert(obj);

        arena.free(&obj);
        let reused = arena.allocate("obj4");
        assert!(!set.contains(&arena, &obj));
        assert!(!set.contains(&arena, &reused));
    }

    #[test]
    fn test_purge() {
        let mut arena = TypedArena::new(16);
        let live = arena.allocate(1);
        let dead = arena.allocate(2);
        let mut set = WeakSet::new();
        set.insert(live);
        set.insert(dead);

        arena.free(&dead);
        set.purge(&arena);
        assert!(!set.remove(&dead));
        assert!(set.contains(&arena, &live));
    }
}
