//! Concurrent cache of validated paths
//!
//! Hosts usually evaluate a handful of literal paths against many documents.
//! The cache keeps the validated form keyed on the literal string so each path
//! is lexed for validation once.

use std::sync::Arc;

use dashmap::DashMap;
use log::debug;

use crate::{ast::Classification, error::PathError, parser::ValidatedPath};

/// Path cache configuration
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// Disabled caches validate on every call and store nothing
    pub enabled: bool,
    /// Upper bound on cached paths
    pub max_entries: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            max_entries: 1024,
        }
    }
}

/// Thread-safe map from literal path strings to validated paths.
///
/// Lookups never block each other. Two threads missing on the same path both
/// validate it and the first insert wins; both get an identical result.
/// Malformed paths are never cached.
#[derive(Debug, Default)]
pub struct PathCache {
    entries: DashMap<String, Arc<ValidatedPath>>,
    config: CacheConfig,
}

impl PathCache {
    pub fn new(config: CacheConfig) -> Self {
        Self {
            entries: DashMap::new(),
            config,
        }
    }

    pub fn config(&self) -> &CacheConfig {
        &self.config
    }

    /// Returns the cached validated path, validating and caching it on a miss.
    pub fn get_or_validate(&self, path: &str) -> Result<Arc<ValidatedPath>, PathError> {
        if !self.config.enabled {
            return ValidatedPath::parse(path).map(Arc::new);
        }

        if let Some(entry) = self.entries.get(path) {
            debug!("path cache hit for {}", path);
            return Ok(Arc::clone(entry.value()));
        }

        debug!("path cache miss for {}", path);
        let validated = Arc::new(ValidatedPath::parse(path)?);

        if self.entries.len() >= self.config.max_entries {
            self.evict_entries();
        }

        let entry = self
            .entries
            .entry(path.to_string())
            .or_insert_with(|| Arc::clone(&validated));
        Ok(Arc::clone(entry.value()))
    }

    /// Classification of `path`, served from the cache when possible.
    pub fn classify(&self, path: &str) -> Result<Classification, PathError> {
        self.get_or_validate(path).map(|p| p.classification())
    }

    pub fn contains(&self, path: &str) -> bool {
        self.entries.contains_key(path)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&self) {
        self.entries.clear();
    }

    /// Drops roughly a tenth of the entries (at least one) to make room.
    fn evict_entries(&self) {
        let to_remove: Vec<String> = self
            .entries
            .iter()
            .take((self.config.max_entries / 10).max(1))
            .map(|entry| entry.key().clone())
            .collect();

        for key in &to_remove {
            self.entries.remove(key);
        }
        debug!("evicted {} cached paths", to_remove.len());
    }
}
