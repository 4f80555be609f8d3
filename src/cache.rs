use crate::pattern::{Anchoring, CompiledPattern};
use hashbrown::HashMap as FastHashMap;
use std::collections::VecDeque;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Least recently used store of compiled patterns.
#[derive(Debug)]
pub(crate) struct PatternCache {
    capacity: usize,
    map: FastHashMap<PatternCacheKey, Arc<CompiledPattern>>,
    order: VecDeque<PatternCacheKey>,
}

impl PatternCache {
    pub(crate) fn new(capacity: usize) -> Self {
        let cap = capacity.max(1);
        Self {
            capacity: cap,
            map: FastHashMap::with_capacity(cap),
            order: VecDeque::with_capacity(cap),
        }
    }

    pub(crate) fn peek(&self, key: &PatternCacheKey) -> Option<Arc<CompiledPattern>> {
        self.map.get(key).cloned()
    }

    pub(crate) fn touch(&mut self, key: &PatternCacheKey) {
        self.promote(key);
    }

    pub(crate) fn insert(&mut self, key: PatternCacheKey, compiled: Arc<CompiledPattern>) {
        if let Some(entry) = self.map.get_mut(&key) {
            *entry = compiled;
            self.promote(&key);
            return;
        }

        if self.map.len() >= self.capacity
            && let Some(oldest) = self.order.pop_back()
        {
            self.map.remove(&oldest);
        }

        self.order.push_front(key.clone());
        self.map.insert(key, compiled);
    }

    pub(crate) fn len(&self) -> usize {
        self.map.len()
    }

    /// Moves the stored key to the front without cloning it.
    fn promote(&mut self, key: &PatternCacheKey) {
        match self.order.iter().position(|existing| existing == key) {
            Some(0) | None => {}
            Some(pos) => {
                if let Some(existing) = self.order.remove(pos) {
                    self.order.push_front(existing);
                }
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) struct PatternCacheKey {
    pattern: Box<str>,
    anchoring: Anchoring,
}

impl PatternCacheKey {
    pub(crate) fn new(pattern: &str, anchoring: Anchoring) -> Self {
        Self {
            pattern: pattern.into(),
            anchoring,
        }
    }
}

#[derive(Debug, Default)]
pub(crate) struct CacheStats {
    hits: AtomicU64,
    misses: AtomicU64,
}

impl CacheStats {
    pub(crate) fn record_hit(&self) {
        self.hits.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_miss(&self) {
        self.misses.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn snapshot(&self) -> (u64, u64) {
        (
            self.hits.load(Ordering::Relaxed),
            self.misses.load(Ordering::Relaxed),
        )
    }
}
