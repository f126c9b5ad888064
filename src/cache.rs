//! Generic LRU (Least Recently Used) cache.
//!
//! Backs the text-measurement path: measuring the same cell text twice per
//! layout pass (header + overlay, or re-measure after sort) should not cost
//! two measurer calls.

use std::collections::{HashMap, VecDeque};
use std::hash::Hash;

/// A simple LRU cache with a fixed capacity.
///
/// Eviction is insertion-ordered — lookups do not promote entries. That is
/// enough for measurement workloads, where keys recur within a handful of
/// layout passes or not at all.
pub struct LruCache<K: Hash + Eq + Clone, V> {
    entries: HashMap<K, V>,
    order: VecDeque<K>,
    capacity: usize,
}

impl<K: Hash + Eq + Clone, V> LruCache<K, V> {
    /// Create a new cache with the given capacity.
    ///
    /// A capacity of 0 disables caching entirely.
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: HashMap::new(),
            order: VecDeque::new(),
            capacity,
        }
    }

    /// Look up a value by key. Returns `None` if not present or capacity is 0.
    pub fn get(&self, key: &K) -> Option<&V> {
        if self.capacity == 0 {
            return None;
        }
        self.entries.get(key)
    }

    /// Insert a key-value pair, replacing any existing value for the key.
    pub fn insert(&mut self, key: K, value: V) {
        if self.capacity == 0 {
            return;
        }
        if self.entries.insert(key.clone(), value).is_none() {
            self.order.push_back(key);
            self.enforce_cap();
        }
    }

    /// Look up a value, computing and caching it on a miss.
    ///
    /// When capacity is 0 the value is computed every time.
    pub fn get_or_insert_with(&mut self, key: &K, compute: impl FnOnce() -> V) -> V
    where
        V: Copy,
    {
        if self.capacity == 0 {
            return compute();
        }
        if let Some(v) = self.entries.get(key) {
            return *v;
        }
        let v = compute();
        self.entries.insert(key.clone(), v);
        self.order.push_back(key.clone());
        self.enforce_cap();
        v
    }

    /// Number of cached entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop all cached entries, keeping the capacity.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.order.clear();
    }

    fn enforce_cap(&mut self) {
        while self.entries.len() > self.capacity {
            let Some(oldest) = self.order.pop_front() else {
                return;
            };
            self.entries.remove(&oldest);
        }
    }
}
