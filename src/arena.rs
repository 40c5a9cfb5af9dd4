//! Owning allocator with generational handles.

use std::mem;
use std::ops::{Index, IndexMut};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::vec::Vec;

static NEXT_ARENA_ID: AtomicUsize = AtomicUsize::new(0);

/// A handle to an object allocated in a `TypedArena<T>`.
///
/// Every slot in the arena carries a generation that is bumped when its object is freed, so an
/// entry outlives the object it refers to without ever resolving to a different object that
/// later reuses the slot. An entry also records the arena that allocated it and never resolves
/// in any other arena.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    arena_id: usize,
    chunk_index: usize,
    block_index: usize,
    generation: u64,
}

impl Entry {
    /// Returns the generation of the slot at the time this entry was allocated.
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

#[derive(Clone, Copy)]
struct Slot {
    chunk_index: usize,
    block_index: usize,
}

enum Block<T> {
    Occupied { value: T, generation: u64 },
    Vacant { next: Option<Slot>, generation: u64 },
}

/// An allocator that owns objects of a single type and hands out generational entries.
///
/// All objects inside the arena will be destroyed when the typed arena is destroyed. Objects
/// can be freed individually once allocated, after which every entry pointing at them becomes
/// stale: `get` returns `None` and `contains` returns `false` for it, even after the slot is
/// reused by a later allocation. The weak collections in this crate rely on this to decide
/// whether their keys are still alive. When the typed arena is full, it will allocate another
/// chunk of objects so no memory is reallocated.
///
/// # Examples
///
/// ```
/// use classic_collections::arena::TypedArena;
///
/// let mut arena = TypedArena::new(1024);
///
/// let x = arena.allocate(1);
/// assert_eq!(arena[x], 1);
///
/// arena[x] += 1;
/// assert_eq!(arena[x], 2);
///
/// assert_eq!(arena.free(&x), 2);
/// assert!(!arena.contains(&x));
///
/// let y = arena.allocate(3);
/// assert_eq!(arena.get(&x), None);
/// assert_eq!(arena.get(&y), Some(&3));
/// ```
pub struct TypedArena<T> {
    id: usize,
    head: Option<Slot>,
    chunks: Vec<Vec<Block<T>>>,
    chunk_size: usize,
    len: usize,
    capacity: usize,
}

impl<T> TypedArena<T> {
    fn block(&self, entry: &Entry) -> Option<&Block<T>> {
        if entry.arena_id != self.id {
            return None;
        }
        self.chunks
            .get(entry.chunk_index)
            .and_then(|chunk| chunk.get(entry.block_index))
    }

    fn block_mut(&mut self, entry: &Entry) -> Option<&mut Block<T>> {
        if entry.arena_id != self.id {
            return None;
        }
        self.chunks
            .get_mut(entry.chunk_index)
            .and_then(|chunk| chunk.get_mut(entry.block_index))
    }

    /// Constructs a new, empty `TypedArena<T>` with a specific number of objects per chunk.
    ///
    /// # Panics
    ///
    /// Panics if `chunk_size` is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_collections::arena::TypedArena;
    ///
    /// // creates a new TypedArena<T> that contains a maximum of 1024 u32's per chunk
    /// let arena: TypedArena<u32> = TypedArena::new(1024);
    /// ```
    pub fn new(chunk_size: usize) -> Self {
        assert!(chunk_size > 0, "Error: chunk size must be positive.");
        TypedArena {
            id: NEXT_ARENA_ID.fetch_add(1, Ordering::Relaxed),
            head: None,
            chunks: Vec::new(),
            chunk_size,
            len: 0,
            capacity: 0,
        }
    }

    /// Allocates an object in the typed arena and returns an `Entry`. The entry can later be used
    /// to retrieve mutable and immutable references to the object, and to deallocate the object.
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_collections::arena::TypedArena;
    ///
    /// let mut arena = TypedArena::new(1024);
    /// let x = arena.allocate(0);
    /// assert_eq!(x.generation(), 0);
    /// ```
    pub fn allocate(&mut self, value: T) -> Entry {
        if self.len == self.capacity {
            self.chunks.push(Vec::with_capacity(self.chunk_size));
            self.capacity += self.chunk_size;
        }
        self.len += 1;

        match self.head.take() {
            None => {
                let chunk_index = self.chunks.len() - 1;
                let last_chunk = &mut self.chunks[chunk_index];
                last_chunk.push(Block::Occupied {
                    value,
                    generation: 0,
                });
                Entry {
                    arena_id: self.id,
                    chunk_index,
                    block_index: last_chunk.len() - 1,
                    generation: 0,
                }
            },
            Some(slot) => {
                let block = &mut self.chunks[slot.chunk_index][slot.block_index];
                let (next, generation) = match *block {
                    Block::Vacant { next, generation } => (next, generation),
                    Block::Occupied { .. } => unreachable!(),
                };
                *block = Block::Occupied { value, generation };
                self.head = next;
                Entry {
                    arena_id: self.id,
                    chunk_index: slot.chunk_index,
                    block_index: slot.block_index,
                    generation,
                }
            },
        }
    }

    /// Deallocates an object in the typed arena and returns the object. The slot's generation is
    /// bumped so that `entry`, and every copy of it, becomes stale.
    ///
    /// # Panics
    ///
    /// Panics if entry corresponds to an invalid, vacant, or stale value, or was allocated by a
    /// different arena.
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_collections::arena::TypedArena;
    ///
    /// let mut arena = TypedArena::new(1024);
    /// let x = arena.allocate(0);
    /// assert_eq!(arena.free(&x), 0);
    /// ```
    pub fn free(&mut self, entry: &Entry) -> T {
        if !self.contains(entry) {
            panic!("Error: attempting to free invalid, vacant, or stale block.");
        }
        let next = self.head.take();
        let generation = entry.generation + 1;
        let old_block = match self.block_mut(entry) {
            Some(block) => mem::replace(block, Block::Vacant { next, generation }),
            None => unreachable!(),
        };
        match old_block {
            Block::Occupied { value, .. } => {
                self.len -= 1;
                self.head = Some(Slot {
                    chunk_index: entry.chunk_index,
                    block_index: entry.block_index,
                });
                debug!(
                    "freed arena slot ({}, {}); generation is now {}",
                    entry.chunk_index, entry.block_index, generation
                );
                value
            },
            Block::Vacant { .. } => unreachable!(),
        }
    }

    /// Returns `true` if `entry` was allocated by this arena and its object is still allocated.
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_collections::arena::TypedArena;
    ///
    /// let mut arena = TypedArena::new(1024);
    /// let x = arena.allocate(0);
    /// assert!(arena.contains(&x));
    /// arena.free(&x);
    /// assert!(!arena.contains(&x));
    /// ```
    pub fn contains(&self, entry: &Entry) -> bool {
        self.get(entry).is_some()
    }

    /// Returns an immutable reference to an object in the typed arena. Returns `None` if the entry
    /// does not correspond to a live object.
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_collections::arena::TypedArena;
    ///
    /// let mut arena = TypedArena::new(1024);
    /// let x = arena.allocate(0);
    /// assert_eq!(arena.get(&x), Some(&0));
    /// ```
    pub fn get(&self, entry: &Entry) -> Option<&T> {
        match self.block(entry) {
            Some(&Block::Occupied {
                ref value,
                generation,
            }) if generation == entry.generation => Some(value),
            _ => None,
        }
    }

    /// Returns a mutable reference to an object in the typed arena. Returns `None` if the entry
    /// does not correspond to a live object.
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_collections::arena::TypedArena;
    ///
    /// let mut arena = TypedArena::new(1024);
    /// let x = arena.allocate(0);
    /// assert_eq!(arena.get_mut(&x), Some(&mut 0));
    /// ```
    pub fn get_mut(&mut self, entry: &Entry) -> Option<&mut T> {
        let expected = entry.generation;
        match self.block_mut(entry) {
            Some(&mut Block::Occupied {
                ref mut value,
                generation,
            }) if generation == expected => Some(value),
            _ => None,
        }
    }

    /// Returns the number of live objects in the typed arena.
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_collections::arena::TypedArena;
    ///
    /// let mut arena = TypedArena::new(1024);
    /// arena.allocate(0);
    /// assert_eq!(arena.len(), 1);
    /// ```
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the typed arena holds no live objects.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl<T> Index<Entry> for TypedArena<T> {
    type Output = T;

    fn index(&self, entry: Entry) -> &Self::Output {
        self.get(&entry).expect("Error: entry is stale or out of bounds.")
    }
}

impl<T> IndexMut<Entry> for TypedArena<T> {
    fn index_mut(&mut self, entry: Entry) -> &mut Self::Output {
        self.get_mut(&entry).expect("Error: entry is stale or out of bounds.")
    }
}

#[cfg(test)]
mod tests {
    use super::Entry;
    use super::TypedArena;

    fn entry<T>(
        arena: &TypedArena<T>,
        chunk_index: usize,
        block_index: usize,
        generation: u64,
    ) -> Entry {
        Entry {
            arena_id: arena.id,
            chunk_index,
            block_index,
            generation,
        }
    }

    #[test]
    #[should_panic]
    fn test_new_zero_chunk_size() {
        let _: TypedArena<u32> = TypedArena::new(0);
    }

    #[test]
    #[should_panic]
    fn test_free_invalid_block() {
        let mut arena: TypedArena<u32> = TypedArena::new(1024);
        arena.free(&entry(&arena, 0, 0, 0));
    }

    #[test]
    #[should_panic]
    fn test_free_vacant_block() {
        let mut arena = TypedArena::new(1024);
        arena.allocate(0);
        arena.free(&entry(&arena, 0, 1, 0));
    }

    #[test]
    #[should_panic]
    fn test_free_twice() {
        let mut arena = TypedArena::new(1024);
        let x = arena.allocate(0);
        arena.free(&x);
        arena.free(&x);
    }

    #[test]
    fn test_allocate() {
        let mut arena = TypedArena::new(1024);
        assert_eq!(arena.allocate(0), entry(&arena, 0, 0, 0));
        assert_eq!(arena.allocate(0), entry(&arena, 0, 1, 0));
        assert_eq!(arena.allocate(0), entry(&arena, 0, 2, 0));
        assert_eq!(arena.len(), 3);
    }

    #[test]
    fn test_allocate_multiple_chunks() {
        let mut arena = TypedArena::new(2);
        assert_eq!(arena.allocate(0), entry(&arena, 0, 0, 0));
        assert_eq!(arena.allocate(0), entry(&arena, 0, 1, 0));
        assert_eq!(arena.allocate(0), entry(&arena, 1, 0, 0));
    }

    #[test]
    fn test_free_reuses_slot_with_new_generation() {
        let mut arena = TypedArena::new(1024);
        let x = arena.allocate(0);
        assert_eq!(arena.free(&x), 0);
        assert!(arena.is_empty());

        let y = arena.allocate(1);
        assert_eq!(y, entry(&arena, 0, 0, 1));
        assert_ne!(x, y);
        assert_eq!(arena.get(&x), None);
        assert_eq!(arena.get(&y), Some(&1));
    }

    #[test]
    fn test_free_list_order() {
        let mut arena = TypedArena::new(1024);
        let x = arena.allocate(0);
        let y = arena.allocate(1);
        arena.free(&x);
        arena.free(&y);
        assert_eq!(arena.allocate(2), entry(&arena, 0, 1, 1));
        assert_eq!(arena.allocate(3), entry(&arena, 0, 0, 1));
    }

    #[test]
    fn test_get_invalid_block() {
        let arena: TypedArena<u32> = TypedArena::new(1024);
        assert_eq!(arena.get(&entry(&arena, 0, 0, 0)), None);
    }

    #[test]
    fn test_get_vacant_block() {
        let mut arena = TypedArena::new(1024);
        arena.allocate(0);
        assert_eq!(arena.get(&entry(&arena, 0, 1, 0)), None);
    }

    #[test]
    fn test_get_mut() {
        let mut arena = TypedArena::new(1024);
        let x = arena.allocate(0);
        *arena.get_mut(&x).unwrap() = 1;
        assert_eq!(arena.get(&x), Some(&1));
    }

    #[test]
    fn test_get_mut_stale() {
        let mut arena = TypedArena::new(1024);
        let x = arena.allocate(0);
        arena.free(&x);
        arena.allocate(1);
        assert_eq!(arena.get_mut(&x), None);
    }

    #[test]
    fn test_entry_from_other_arena() {
        let mut a = TypedArena::new(1024);
        let mut b = TypedArena::new(1024);
        let x = a.allocate(0);
        let y = b.allocate(1);
        assert_ne!(x, y);
        assert!(!b.contains(&x));
        assert_eq!(b.get(&x), None);
        assert_eq!(a.get_mut(&y), None);
        assert_eq!(b.get(&y), Some(&1));
    }

    #[test]
    #[should_panic]
    fn test_free_entry_from_other_arena() {
        let mut a = TypedArena::new(1024);
        let mut b = TypedArena::new(1024);
        let x = a.allocate(0);
        b.allocate(0);
        b.free(&x);
    }

    #[test]
    #[should_panic]
    fn test_index_stale() {
        let mut arena = TypedArena::new(1024);
        let x = arena.allocate(0);
        arena.free(&x);
        let _value: u32 = arena[x];
    }
}
