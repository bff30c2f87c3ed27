//! Search result cache for the typeahead session
//!
//! Memoizes the filtered result list for every term typed in the current
//! session so that backspacing and retyping does not re-scan the items.
//!
//! Keys are the trimmed term exactly as typed: `"ap"` and `"Ap"` are two
//! entries even though they produce the same matches.
//!
//! Entries are only valid for the item store they were computed against.
//! The session clears the cache whenever the store is replaced or the term
//! drops below the filterable length.

use crate::Item;
use moka::sync::Cache;
use std::sync::Arc;

/// Default number of terms remembered per session
pub const DEFAULT_CACHE_CAPACITY: u64 = 256;

/// Term-keyed cache of filter results
///
/// Bounded by entry count; an evicted term is simply recomputed on its
/// next lookup.
#[derive(Debug, Clone)]
pub struct SearchCache {
    entries: Cache<String, Arc<[Item]>>,
    max_capacity: u64,
}

impl SearchCache {
    /// Create a cache holding up to [`DEFAULT_CACHE_CAPACITY`] terms
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CACHE_CAPACITY)
    }

    /// Create a cache holding up to `max_capacity` terms
    #[must_use]
    pub fn with_capacity(max_capacity: u64) -> Self {
        Self {
            entries: Self::build(max_capacity),
            max_capacity,
        }
    }

    fn build(max_capacity: u64) -> Cache<String, Arc<[Item]>> {
        Cache::builder().max_capacity(max_capacity).build()
    }

    /// Look up the cached result for an exact term
    #[must_use]
    pub fn lookup(&self, term: &str) -> Option<Arc<[Item]>> {
        self.entries.get(term)
    }

    /// Remember the result computed for `term`
    pub fn store(&self, term: &str, result: Arc<[Item]>) {
        self.entries.insert(term.to_string(), result);
    }

    /// Check whether a term currently has a cached result
    #[must_use]
    pub fn contains(&self, term: &str) -> bool {
        self.entries.contains_key(term)
    }

    /// Drop every cached result
    ///
    /// The backing cache is replaced rather than invalidated, so no entry
    /// stored before the call is visible afterwards.
    pub fn clear(&mut self) {
        self.entries = Self::build(self.max_capacity);
    }

    /// Maximum number of terms held
    #[must_use]
    pub const fn capacity(&self) -> u64 {
        self.max_capacity
    }

    /// Number of cached terms, after pending maintenance has run
    #[must_use]
    pub fn len(&self) -> u64 {
        self.entries.run_pending_tasks();
        self.entries.entry_count()
    }

    /// Check if no term is cached
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for SearchCache {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::filter_items;
    use crate::testing::fruit_store;

    #[test]
    fn test_capacity_bounds_entries() {
        let cache = SearchCache::with_capacity(2);
        for term in ["ap", "apr", "ba", "ban", "bana"] {
            cache.store(term, Vec::new().into());
        }
        assert_eq!(cache.capacity(), 2);
        assert!(cache.len() <= 2);
    }

    #[test]
    fn test_new_cache_is_empty() {
        let cache = SearchCache::new();
        assert!(cache.is_empty());
        assert!(cache.lookup("ap").is_none());
    }

    #[test]
    fn test_store_and_lookup() {
        let cache = SearchCache::new();
        let store = fruit_store();
        let result: Arc<[Item]> = filter_items("ap", store.iter()).unwrap().into();

        cache.store("ap", Arc::clone(&result));

        assert_eq!(cache.lookup("ap"), Some(result));
        assert!(cache.contains("ap"));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_keys_are_case_sensitive() {
        let cache = SearchCache::new();
        let store = fruit_store();
        cache.store("ap", filter_items("ap", store.iter()).unwrap().into());

        assert!(cache.lookup("Ap").is_none());
        assert!(cache.lookup("AP").is_none());
    }

    #[test]
    fn test_empty_result_is_cached() {
        let cache = SearchCache::new();
        cache.store("zz", Vec::new().into());

        let hit = cache.lookup("zz").unwrap();
        assert!(hit.is_empty());
    }

    #[test]
    fn test_clear_drops_everything() {
        let mut cache = SearchCache::new();
        let store = fruit_store();
        cache.store("ap", filter_items("ap", store.iter()).unwrap().into());
        cache.store("ba", filter_items("ba", store.iter()).unwrap().into());

        cache.clear();

        assert!(cache.lookup("ap").is_none());
        assert!(cache.lookup("ba").is_none());
        assert!(!cache.contains("ap"));
        assert!(cache.is_empty());
        assert_eq!(cache.capacity(), DEFAULT_CACHE_CAPACITY);
    }

    #[test]
    fn test_store_overwrites_term() {
        let cache = SearchCache::new();
        cache.store("ap", vec![Item::new(1, "Apple")].into());
        cache.store("ap", vec![Item::new(7, "Apex")].into());

        let hit = cache.lookup("ap").unwrap();
        assert_eq!(hit.as_ref(), &[Item::new(7, "Apex")]);
    }
}
