//! Fixed-size hash table with separate chaining.

use std::mem;
use std::slice;
use std::vec::Vec;

/// The bucket count used by `HashTable::new`.
pub const DEFAULT_BUCKET_COUNT: usize = 100;

/// A hash table over string-like keys that resolves collisions by chaining.
///
/// A key is hashed by summing its UTF-16 code units and reducing the sum modulo the bucket count.
/// All keys that land in the same bucket share a chain, which is scanned linearly. The bucket
/// count is fixed when the table is constructed and is never changed afterwards, so the load
/// factor grows without bound as keys are inserted and lookups degrade towards a linear scan of
/// the chain.
///
/// # Examples
///
/// ```
/// use classic_collections::hash_table::HashTable;
///
/// let mut table = HashTable::new();
/// table.insert("name", "John");
/// table.insert("age", "25");
///
/// assert_eq!(table.get(&"name"), Some(&"John"));
/// assert!(table.contains(&"age"));
///
/// assert_eq!(table.remove(&"age"), Some(("age", "25")));
/// assert!(!table.contains(&"age"));
/// ```
pub struct HashTable<K, V> {
    buckets: Vec<Vec<(K, V)>>,
    len: usize,
}

/// Sums the UTF-16 code units of `key`.
pub fn char_code_sum(key: &str) -> u64 {
    key.encode_utf16().map(u64::from).sum()
}

impl<K, V> HashTable<K, V>
where
    K: AsRef<str> + Eq,
{
    /// Constructs a new, empty `HashTable<K, V>` with `DEFAULT_BUCKET_COUNT` buckets.
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_collections::hash_table::HashTable;
    ///
    /// let table: HashTable<String, u32> = HashTable::new();
    /// assert_eq!(table.bucket_count(), 100);
    /// ```
    pub fn new() -> Self {
        Self::with_bucket_count(DEFAULT_BUCKET_COUNT)
    }

    /// Constructs a new, empty `HashTable<K, V>` with a fixed number of buckets.
    ///
    /// # Panics
    ///
    /// Panics if `bucket_count` is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_collections::hash_table::HashTable;
    ///
    /// let table: HashTable<String, u32> = HashTable::with_bucket_count(16);
    /// assert_eq!(table.bucket_count(), 16);
    /// ```
    pub fn with_bucket_count(bucket_count: usize) -> Self {
        assert!(bucket_count > 0, "Error: bucket count must be positive.");
        HashTable {
            buckets: (0..bucket_count).map(|_| Vec::new()).collect(),
            len: 0,
        }
    }

    /// Returns the index of the bucket that `key` hashes to.
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_collections::hash_table::HashTable;
    ///
    /// let table: HashTable<&str, u32> = HashTable::new();
    /// // 'a' + 'b' = 97 + 98
    /// assert_eq!(table.bucket_index(&"ab"), 95);
    /// assert_eq!(table.bucket_index(&"ba"), 95);
    /// ```
    pub fn bucket_index(&self, key: &K) -> usize {
        (char_code_sum(key.as_ref()) % self.buckets.len() as u64) as usize
    }

    /// Inserts a key-value pair into the table. If the key already exists in the table, it will
    /// return and replace the old key-value pair.
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_collections::hash_table::HashTable;
    ///
    /// let mut table = HashTable::new();
    /// assert_eq!(table.insert("a", 1), None);
    /// assert_eq!(table.insert("a", 2), Some(("a", 1)));
    /// assert_eq!(table.get(&"a"), Some(&2));
    /// ```
    pub fn insert(&mut self, key: K, value: V) -> Option<(K, V)> {
        let index = self.bucket_index(&key);
        let chain = &mut self.buckets[index];
        if let Some(pair) = chain.iter_mut().find(|pair| pair.0 == key) {
            return Some(mem::replace(pair, (key, value)));
        }
        if !chain.is_empty() {
            trace!("chaining key onto bucket {} of length {}", index, chain.len());
        }
        chain.push((key, value));
        self.len += 1;
        None
    }

    /// Removes a key-value pair from the table. If the key exists in the table, it will return
    /// the associated key-value pair. Otherwise it will return `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_collections::hash_table::HashTable;
    ///
    /// let mut table = HashTable::new();
    /// table.insert("a", 1);
    /// assert_eq!(table.remove(&"a"), Some(("a", 1)));
    /// assert_eq!(table.remove(&"a"), None);
    /// ```
    pub fn remove(&mut self, key: &K) -> Option<(K, V)> {
        let index = self.bucket_index(key);
        let chain = &mut self.buckets[index];
        let position = chain.iter().position(|pair| pair.0 == *key)?;
        self.len -= 1;
        Some(chain.remove(position))
    }

    /// Checks if a key exists in the table.
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_collections::hash_table::HashTable;
    ///
    /// let mut table = HashTable::new();
    /// table.insert("a", 1);
    /// assert!(table.contains(&"a"));
    /// assert!(!table.contains(&"b"));
    /// ```
    pub fn contains(&self, key: &K) -> bool {
        self.get(key).is_some()
    }

    /// Returns an immutable reference to the value associated with a particular key. It will
    /// return `None` if the key does not exist in the table.
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_collections::hash_table::HashTable;
    ///
    /// let mut table = HashTable::new();
    /// table.insert("a", 1);
    /// assert_eq!(table.get(&"a"), Some(&1));
    /// assert_eq!(table.get(&"b"), None);
    /// ```
    pub fn get(&self, key: &K) -> Option<&V> {
        self.buckets[self.bucket_index(key)]
            .iter()
            .find(|pair| pair.0 == *key)
            .map(|pair| &pair.1)
    }

    /// Returns a mutable reference to the value associated with a particular key. Returns `None`
    /// if such a key does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_collections::hash_table::HashTable;
    ///
    /// let mut table = HashTable::new();
    /// table.insert("a", 1);
    /// *table.get_mut(&"a").unwrap() = 2;
    /// assert_eq!(table.get(&"a"), Some(&2));
    /// ```
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        let index = self.bucket_index(key);
        self.buckets[index]
            .iter_mut()
            .find(|pair| pair.0 == *key)
            .map(|pair| &mut pair.1)
    }

    /// Returns the number of key-value pairs in the table.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the table contains no key-value pairs.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the fixed number of buckets in the table.
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Returns the ratio of stored key-value pairs to buckets.
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_collections::hash_table::HashTable;
    ///
    /// let mut table = HashTable::with_bucket_count(4);
    /// table.insert("a", 1);
    /// table.insert("b", 2);
    /// assert_eq!(table.load_factor(), 0.5);
    /// ```
    pub fn load_factor(&self) -> f64 {
        self.len as f64 / self.buckets.len() as f64
    }

    /// Removes every key-value pair while keeping the bucket count.
    pub fn clear(&mut self) {
        for chain in &mut self.buckets {
            chain.clear();
        }
        self.len = 0;
    }

    /// Returns an iterator over the table. Pairs are yielded bucket by bucket, and in insertion
    /// order within a bucket.
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_collections::hash_table::HashTable;
    ///
    /// let mut table = HashTable::new();
    /// table.insert("b", 2);
    /// table.insert("a", 1);
    ///
    /// let mut iterator = table.iter();
    /// assert_eq!(iterator.next(), Some((&"a", &1)));
    /// assert_eq!(iterator.next(), Some((&"b", &2)));
    /// assert_eq!(iterator.next(), None);
    /// ```
    pub fn iter(&self) -> HashTableIter<K, V> {
        HashTableIter {
            buckets: self.buckets.iter(),
            chain: None,
        }
    }
}

impl<K, V> Default for HashTable<K, V>
where
    K: AsRef<str> + Eq,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, K, V> IntoIterator for &'a HashTable<K, V>
where
    K: 'a + AsRef<str> + Eq,
    V: 'a,
{
    type Item = (&'a K, &'a V);
    type IntoIter = HashTableIter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An iterator for `HashTable<K, V>`.
pub struct HashTableIter<'a, K: 'a, V: 'a> {
    buckets: slice::Iter<'a, Vec<(K, V)>>,
    chain: Option<slice::Iter<'a, (K, V)>>,
}

impl<'a, K: 'a, V: 'a> Iterator for HashTableIter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let pair = self.chain.as_mut().and_then(|chain| chain.next());
            if let Some(&(ref key, ref value)) = pair {
                return Some((key, value));
            }
            self.chain = Some(self.buckets.next()?.iter());
        }
    }
}
