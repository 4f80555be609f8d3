use crate::cache::{CacheStats, PatternCache, PatternCacheKey};
use crate::errors::VersionsResult;
use crate::extract::{ExtractedVersion, Extractions, extract_all_with, extract_with};
use crate::options::VersionsOptions;
use crate::pattern::{Anchoring, CompiledPattern, PatternResult, prefix};
use parking_lot::{RwLock, RwLockUpgradableReadGuard};
use std::sync::Arc;

/// Matching and extraction that reuse compiled patterns across calls.
///
/// Results are the same as the free functions of this crate, except that the
/// version group name comes from [`VersionsOptions`].
#[derive(Debug)]
pub struct Versions {
    options: VersionsOptions,
    cache: RwLock<PatternCache>,
    cache_stats: CacheStats,
}

impl Versions {
    pub fn new(options: Option<VersionsOptions>) -> VersionsResult<Self> {
        let options = options.unwrap_or_default();
        options.validate()?;

        Ok(Self {
            cache: RwLock::new(PatternCache::new(options.cache_capacity)),
            cache_stats: CacheStats::default(),
            options,
        })
    }

    pub fn options(&self) -> &VersionsOptions {
        &self.options
    }

    pub fn prefix(&self, pattern: &str) -> String {
        prefix(pattern)
    }

    pub fn match_paths<'a, S: AsRef<str>>(
        &self,
        paths: &'a [S],
        pattern: &str,
    ) -> PatternResult<Vec<&'a str>> {
        self.filter(paths, pattern, Anchoring::Full)
    }

    pub fn match_paths_unanchored<'a, S: AsRef<str>>(
        &self,
        paths: &'a [S],
        pattern: &str,
    ) -> PatternResult<Vec<&'a str>> {
        self.filter(paths, pattern, Anchoring::Unanchored)
    }

    #[tracing::instrument(level = "trace", skip(self))]
    pub fn extract(&self, path: &str, pattern: &str) -> VersionsResult<Option<ExtractedVersion>> {
        let compiled = self.compiled(pattern, Anchoring::Unanchored)?;
        extract_with(&compiled, path, &self.options.version_group)
    }

    #[tracing::instrument(level = "trace", skip(self, paths), fields(paths = paths.len() as u64))]
    pub fn extract_all<S: AsRef<str>>(
        &self,
        paths: &[S],
        pattern: &str,
    ) -> VersionsResult<Extractions> {
        if paths.is_empty() {
            return Ok(Extractions::new());
        }

        let compiled = self.compiled(pattern, Anchoring::Full)?;
        extract_all_with(&compiled, paths, &self.options.version_group)
    }

    /// Pattern cache `(hits, misses)` since construction.
    pub fn cache_metrics(&self) -> (u64, u64) {
        self.cache_stats.snapshot()
    }

    fn filter<'a, S: AsRef<str>>(
        &self,
        paths: &'a [S],
        pattern: &str,
        anchoring: Anchoring,
    ) -> PatternResult<Vec<&'a str>> {
        if paths.is_empty() {
            return Ok(Vec::new());
        }

        let compiled = self.compiled(pattern, anchoring)?;
        Ok(compiled.filter(paths))
    }

    fn compiled(&self, pattern: &str, anchoring: Anchoring) -> PatternResult<Arc<CompiledPattern>> {
        let key = PatternCacheKey::new(pattern, anchoring);

        let guard = self.cache.upgradable_read();
        if let Some(hit) = guard.peek(&key) {
            self.cache_stats.record_hit();
            tracing::trace!(cache = "hit", pattern, anchoring = ?anchoring, "pattern cache hit");
            let mut guard = RwLockUpgradableReadGuard::upgrade(guard);
            guard.touch(&key);
            return Ok(hit);
        }
        drop(guard);

        self.cache_stats.record_miss();
        tracing::trace!(cache = "miss", pattern, anchoring = ?anchoring, "pattern cache miss");

        // Failed compilations are returned before anything is cached.
        let compiled = Arc::new(CompiledPattern::with_size_limit(
            pattern,
            anchoring,
            self.options.regex_size_limit,
        )?);

        let mut cache = self.cache.write();
        cache.insert(key, Arc::clone(&compiled));
        tracing::trace!(cached = cache.len() as u64, "pattern cached");

        Ok(compiled)
    }
}
