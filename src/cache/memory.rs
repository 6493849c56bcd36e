use crate::cache::{CacheStats, ResponseCache};
use async_trait::async_trait;
use moka::future::Cache;
use serde_json::Value;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// In-memory cache backed by moka with TTL and bounded capacity.
/// All methods are `&self` — no locking needed.
pub struct MemoryCacheService {
    entries: Cache<String, Arc<Value>>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl MemoryCacheService {
    pub fn new(ttl_seconds: u64, max_capacity: u64) -> Self {
        let entries = Cache::builder()
            .time_to_live(Duration::from_secs(ttl_seconds))
            .max_capacity(max_capacity)
            .build();

        MemoryCacheService {
            entries,
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }
}

#[async_trait]
impl ResponseCache for MemoryCacheService {
    async fn get(&self, key: &str) -> Option<Value> {
        match self.entries.get(key).await {
            Some(value) => {
                self.hits.fetch_add(1, Ordering::Relaxed);
                tracing::debug!("Memory cache hit: {}", key);
                Some((*value).clone())
            }
            None => {
                self.misses.fetch_add(1, Ordering::Relaxed);
                tracing::debug!("Memory cache miss: {}", key);
                None
            }
        }
    }

    async fn put(&self, key: &str, value: &Value) {
        self.entries
            .insert(key.to_string(), Arc::new(value.clone()))
            .await;
        tracing::debug!("Memory cached response: {}", key);
    }

    async fn get_stats(&self) -> CacheStats {
        let hits = self.hits.load(Ordering::Relaxed);
        let misses = self.misses.load(Ordering::Relaxed);
        let hit_rate = if hits + misses > 0 {
            (hits as f64 / (hits + misses) as f64) * 100.0
        } else {
            0.0
        };

        CacheStats {
            hits,
            misses,
            hit_rate,
            connected: true,
        }
    }

    async fn health_check(&self) -> bool {
        true
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}
