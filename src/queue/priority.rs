use std::slice;
use std::vec::Vec;

/// An element paired with the priority it was enqueued with.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Prioritized<T, P> {
    pub element: T,
    pub priority: P,
}

/// A queue that always yields the element with the lowest priority first.
///
/// Entries are kept sorted ascending by priority. `enqueue` scans for the first entry with a
/// strictly greater priority and inserts in front of it, which costs O(n) per insertion and keeps
/// entries with equal priority in the order they were enqueued.
///
/// # Examples
///
/// ```
/// use classic_collections::queue::{Prioritized, PriorityQueue};
///
/// let mut pq = PriorityQueue::new();
/// pq.enqueue("Task 1", 3);
/// pq.enqueue("Task 2", 1);
/// pq.enqueue("Task 3", 2);
///
/// assert_eq!(
///     pq.peek(),
///     Some(&Prioritized { element: "Task 2", priority: 1 }),
/// );
///
/// pq.dequeue();
/// assert_eq!(pq.len(), 2);
/// ```
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct PriorityQueue<T, P: Ord> {
    entries: Vec<Prioritized<T, P>>,
}

impl<T, P: Ord> PriorityQueue<T, P> {
    /// Constructs a new, empty `PriorityQueue<T, P>`.
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_collections::queue::PriorityQueue;
    ///
    /// let pq: PriorityQueue<&str, u32> = PriorityQueue::new();
    /// ```
    pub fn new() -> Self {
        PriorityQueue {
            entries: Vec::new(),
        }
    }

    /// Inserts `element` with `priority` behind every entry of equal or lower priority.
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_collections::queue::PriorityQueue;
    ///
    /// let mut pq = PriorityQueue::new();
    /// pq.enqueue("b", 1);
    /// pq.enqueue("a", 1);
    /// assert_eq!(pq.dequeue().map(|entry| entry.element), Some("b"));
    /// ```
    pub fn enqueue(&mut self, element: T, priority: P) {
        let index = self
            .entries
            .iter()
            .position(|entry| priority < entry.priority)
            .unwrap_or_else(|| self.entries.len());
        self.entries.insert(index, Prioritized { element, priority });
    }

    /// Removes and returns the entry with the lowest priority. Returns `None` if the queue is
    /// empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_collections::queue::{Prioritized, PriorityQueue};
    ///
    /// let mut pq = PriorityQueue::new();
    /// pq.enqueue("a", 2);
    /// pq.enqueue("b", 1);
    /// assert_eq!(pq.dequeue(), Some(Prioritized { element: "b", priority: 1 }));
    /// assert_eq!(pq.dequeue(), Some(Prioritized { element: "a", priority: 2 }));
    /// assert_eq!(pq.dequeue(), None);
    /// ```
    pub fn dequeue(&mut self) -> Option<Prioritized<T, P>> {
        if self.entries.is_empty() {
            None
        } else {
            Some(self.entries.remove(0))
        }
    }

    /// Returns the entry with the lowest priority without removing it, or `None` if the queue is
    /// empty.
    pub fn peek(&self) -> Option<&Prioritized<T, P>> {
        self.entries.first()
    }

    /// Returns the number of entries in the queue.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the queue contains no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Removes every entry from the queue.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Returns an iterator over the entries in the order they would be dequeued.
    pub fn iter(&self) -> slice::Iter<Prioritized<T, P>> {
        self.entries.iter()
    }
}

impl<T, P: Ord> Default for PriorityQueue<T, P> {
    fn default() -> Self {
        Self::new()
    }
}
