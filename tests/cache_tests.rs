// SPDX-FileCopyrightText: 2025 RAprogramm
// SPDX-License-Identifier: MIT

use sql_glance::{
    analyze::{QueryType, analyze},
    cache::{AnalysisCache, cache_analysis, get_cached}
};

#[test]
fn test_analysis_cache_new() {
    let cache = AnalysisCache::new(100);
    assert!(cache.get("SELECT 1").is_none());
    assert!(cache.is_empty());
}

#[test]
fn test_analysis_cache_insert_and_get() {
    let mut cache = AnalysisCache::new(100);
    let analysis = analyze("SELECT id FROM users").unwrap();
    cache.insert("SELECT id FROM users", analysis.clone());
    assert_eq!(cache.get("SELECT id FROM users"), Some(analysis));
    assert_eq!(cache.len(), 1);
}

#[test]
fn test_analysis_cache_miss() {
    let mut cache = AnalysisCache::new(100);
    cache.insert("SELECT 1", analyze("SELECT 1").unwrap());
    assert!(cache.get("SELECT * FROM nonexistent").is_none());
}

#[test]
fn test_analysis_cache_eviction() {
    let mut cache = AnalysisCache::new(4);
    for i in 0..4 {
        let sql = format!("SELECT {}", i);
        cache.insert(&sql, analyze(&sql).unwrap());
    }
    assert_eq!(cache.len(), 4);

    cache.insert("SELECT 99", analyze("SELECT 99").unwrap());
    assert_eq!(cache.len(), 3);
    assert!(cache.get("SELECT 99").is_some());
}

#[test]
fn test_analysis_cache_size_one() {
    let mut cache = AnalysisCache::new(1);
    cache.insert("SELECT 1", analyze("SELECT 1").unwrap());
    cache.insert("DELETE FROM t", analyze("DELETE FROM t").unwrap());
    assert_eq!(cache.len(), 1);
    assert!(cache.get("DELETE FROM t").is_some());
}

#[test]
fn test_global_cache() {
    let sql = "SELECT cache_probe FROM global_cache_test";
    cache_analysis(sql, analyze(sql).unwrap());
    let cached = get_cached(sql).unwrap();
    assert_eq!(cached.query_type, QueryType::Select);
}
