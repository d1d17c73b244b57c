//! Shared memo of parsed union types.
//!
//! Parsing is pure, so the cache is keyed by the exact input text. It may be
//! shared between worker threads resolving different compilation units; the
//! backing `DashMap` shards its locks so concurrent readers rarely contend.
//!
//! Entries are never evicted. Once the cache holds `max_entries` texts, new
//! texts are parsed but not stored; callers that reuse one cache across runs
//! reset it with [`UnionTypeCache::clear`].

use crate::union_type::UnionType;
use dashmap::DashMap;
use phz_common::limits::{UNION_TYPE_CACHE_CAPACITY, UNION_TYPE_CACHE_MAX_ENTRIES};
use rustc_hash::FxBuildHasher;

#[derive(Debug)]
pub struct UnionTypeCache {
    entries: DashMap<String, UnionType, FxBuildHasher>,
    max_entries: usize,
}

impl UnionTypeCache {
    #[must_use]
    pub fn new() -> Self {
        Self::with_max_entries(UNION_TYPE_CACHE_MAX_ENTRIES)
    }

    /// A cache that stops storing new texts at `max_entries`. Concurrent
    /// inserts near the bound may overshoot it by the number of writers.
    #[must_use]
    pub fn with_max_entries(max_entries: usize) -> Self {
        Self {
            entries: DashMap::with_capacity_and_hasher(
                UNION_TYPE_CACHE_CAPACITY.min(max_entries),
                FxBuildHasher,
            ),
            max_entries,
        }
    }

    #[must_use]
    pub fn max_entries(&self) -> usize {
        self.max_entries
    }

    /// Parse `text`, reusing an earlier result for the same input.
    pub fn from_string(&self, text: &str) -> UnionType {
        if let Some(hit) = self.entries.get(text) {
            return hit.value().clone();
        }
        let parsed = UnionType::from_string(text);
        if self.entries.len() >= self.max_entries {
            return parsed;
        }
        self.entries
            .entry(text.to_string())
            .or_insert_with(|| parsed.clone());
        parsed
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&self) {
        self.entries.clear();
    }
}

impl Default for UnionTypeCache {
    fn default() -> Self {
        Self::new()
    }
}
