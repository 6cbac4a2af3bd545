// Bounded memoization cache for checker operations.
//
// Each checker operation owns one of these; tokens are arbitrary user
// input, so the cache is capped and evicts the least recently used entry
// once full.

use std::borrow::Borrow;
use std::hash::Hash;
use std::num::NonZeroUsize;

use lru::LruCache;

/// A bounded least-recently-used map from operation arguments to results.
#[derive(Debug)]
pub struct MemoCache<K: Hash + Eq, V> {
    inner: LruCache<K, V>,
}

impl<K: Hash + Eq, V> MemoCache<K, V> {
    /// Create a cache holding at most `capacity` entries.
    ///
    /// A capacity of zero is clamped to one.
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            inner: LruCache::new(capacity),
        }
    }

    /// Look up a key, marking it as most recently used on a hit.
    pub fn get<Q>(&mut self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.get(key)
    }

    /// Insert a result, evicting the least recently used entry when full.
    pub fn put(&mut self, key: K, value: V) {
        self.inner.put(key, value);
    }

    /// Number of cached entries.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Whether the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Maximum number of entries.
    pub fn capacity(&self) -> usize {
        self.inner.cap().get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn miss_then_hit() {
        let mut cache: MemoCache<String, bool> = MemoCache::new(4);
        assert!(cache.get(&"tafel".to_owned()).is_none());
        cache.put("tafel".to_owned(), true);
        assert_eq!(cache.get(&"tafel".to_owned()), Some(&true));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn evicts_least_recently_used() {
        let mut cache: MemoCache<u32, u32> = MemoCache::new(2);
        cache.put(1, 10);
        cache.put(2, 20);
        // Touch 1 so 2 becomes the eviction candidate.
        assert_eq!(cache.get(&1), Some(&10));
        cache.put(3, 30);
        assert_eq!(cache.len(), 2);
        assert_eq!(cache.get(&2), None);
        assert_eq!(cache.get(&1), Some(&10));
        assert_eq!(cache.get(&3), Some(&30));
    }

    #[test]
    fn reinsert_overwrites() {
        let mut cache: MemoCache<u32, u32> = MemoCache::new(2);
        cache.put(1, 10);
        cache.put(1, 11);
        assert_eq!(cache.get(&1), Some(&11));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn zero_capacity_is_clamped() {
        let mut cache: MemoCache<u32, u32> = MemoCache::new(0);
        assert_eq!(cache.capacity(), 1);
        cache.put(1, 10);
        cache.put(2, 20);
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.get(&2), Some(&20));
    }
}
