use std::{
    collections::HashMap,
    hash::{DefaultHasher, Hash, Hasher},
    sync::{LazyLock, RwLock}
};

use crate::analyze::QueryAnalysis;

/// Global analysis cache
static ANALYSIS_CACHE: LazyLock<RwLock<AnalysisCache>> =
    LazyLock::new(|| RwLock::new(AnalysisCache::new(1000)));

/// Bounded cache of statement analyses keyed by statement text
pub struct AnalysisCache {
    cache:    HashMap<u64, QueryAnalysis>,
    max_size: usize
}

impl AnalysisCache {
    pub fn new(max_size: usize) -> Self {
        Self {
            cache: HashMap::with_capacity(max_size),
            max_size
        }
    }

    fn hash_key(sql: &str) -> u64 {
        let mut hasher = DefaultHasher::new();
        sql.hash(&mut hasher);
        hasher.finish()
    }

    pub fn get(&self, sql: &str) -> Option<QueryAnalysis> {
        let key = Self::hash_key(sql);
        self.cache.get(&key).cloned()
    }

    pub fn insert(&mut self, sql: &str, analysis: QueryAnalysis) {
        // Clear half when full
        if self.cache.len() >= self.max_size {
            let keys: Vec<_> = self
                .cache
                .keys()
                .take((self.max_size / 2).max(1))
                .copied()
                .collect();
            for key in keys {
                self.cache.remove(&key);
            }
        }

        let key = Self::hash_key(sql);
        self.cache.insert(key, analysis);
    }

    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }
}

/// Get cached analysis or None
pub fn get_cached(sql: &str) -> Option<QueryAnalysis> {
    ANALYSIS_CACHE.read().ok()?.get(sql)
}

/// Cache an analysis
pub fn cache_analysis(sql: &str, analysis: QueryAnalysis) {
    if let Ok(mut cache) = ANALYSIS_CACHE.write() {
        cache.insert(sql, analysis);
    }
}
