mod memory;
mod redis;

pub use self::memory::MemoryCacheService;
pub use self::redis::RedisCacheService;

use crate::fallback::distance::normalize_place;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// Cache for serialized proxy responses. Backends must be error-absorbing:
/// a broken cache degrades to misses, it never fails a request.
#[async_trait]
pub trait ResponseCache: Send + Sync {
    async fn get(&self, key: &str) -> Option<Value>;
    async fn put(&self, key: &str, value: &Value);
    async fn get_stats(&self) -> CacheStats;
    async fn health_check(&self) -> bool;
    fn backend_name(&self) -> &'static str;
}

/// Cache statistics for monitoring
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub hit_rate: f64,
    pub connected: bool,
}

fn hash_parts(parts: &[&str]) -> u64 {
    let mut hasher = DefaultHasher::new();
    for part in parts {
        part.hash(&mut hasher);
    }
    hasher.finish()
}

/// Cache key for distance-matrix responses. Place names go through the city
/// normalizer first so synonymous spellings ("Tokyo", "東京") share an entry.
pub fn distance_cache_key(origin: &str, destination: &str) -> String {
    let key = hash_parts(&[&normalize_place(origin), &normalize_place(destination)]);
    format!("distance:{:x}", key)
}

/// Cache key for flight-offer responses.
pub fn flights_cache_key(origin: &str, destination: &str, date: &str) -> String {
    let key = hash_parts(&[&normalize_place(origin), &normalize_place(destination), date]);
    format!("flights:{:x}", key)
}

/// Cache key for attraction responses.
pub fn attractions_cache_key(location: &str) -> String {
    let key = hash_parts(&[&normalize_place(location)]);
    format!("attractions:{:x}", key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_cache_key_consistency() {
        let key1 = distance_cache_key("tokyo", "osaka");
        let key2 = distance_cache_key("tokyo", "osaka");
        assert_eq!(key1, key2);
    }

    #[test]
    fn test_distance_cache_key_collapses_synonyms() {
        // Spelling variants of the same city pair share a cache entry.
        let key1 = distance_cache_key("Tokyo", "Osaka");
        let key2 = distance_cache_key("東京", "大阪");
        assert_eq!(key1, key2);
    }

    #[test]
    fn test_distance_cache_key_is_directional() {
        let forward = distance_cache_key("tokyo", "osaka");
        let reverse = distance_cache_key("osaka", "tokyo");
        assert_ne!(forward, reverse);
    }

    #[test]
    fn test_flights_cache_key_includes_date() {
        let day1 = flights_cache_key("tokyo", "sapporo", "2026-09-01");
        let day2 = flights_cache_key("tokyo", "sapporo", "2026-09-02");
        assert_ne!(day1, day2);
    }

    #[test]
    fn test_cache_keys_are_namespaced_by_endpoint() {
        let distance = distance_cache_key("tokyo", "osaka");
        let attractions = attractions_cache_key("tokyo");
        assert!(distance.starts_with("distance:"));
        assert!(attractions.starts_with("attractions:"));
    }
}
