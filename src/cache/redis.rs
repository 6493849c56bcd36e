use crate::cache::{CacheStats, ResponseCache};
use crate::error::{AppError, Result};
use async_trait::async_trait;
use redis::aio::ConnectionManager;
use redis::AsyncCommands;
use serde_json::Value;

/// Redis-backed cache service. All methods are `&self` — `ConnectionManager` is
/// `Arc`-based internally, so `.clone()` is a cheap atomic increment.
pub struct RedisCacheService {
    connection: ConnectionManager,
    ttl_seconds: u64,
}

impl RedisCacheService {
    pub async fn new(redis_url: &str, ttl_seconds: u64) -> Result<Self> {
        let client = redis::Client::open(redis_url)
            .map_err(|e| AppError::Cache(format!("Failed to create Redis client: {}", e)))?;

        let connection = ConnectionManager::new(client)
            .await
            .map_err(|e| AppError::Cache(format!("Failed to connect to Redis: {}", e)))?;

        tracing::info!("Redis cache connection established");

        Ok(RedisCacheService {
            connection,
            ttl_seconds,
        })
    }
}

#[async_trait]
impl ResponseCache for RedisCacheService {
    async fn get(&self, key: &str) -> Option<Value> {
        let mut conn = self.connection.clone();
        let result: redis::RedisResult<Option<String>> = conn.get(key).await;

        match result {
            Ok(Some(json)) => match serde_json::from_str(&json) {
                Ok(value) => {
                    tracing::debug!("Cache hit: {}", key);
                    Some(value)
                }
                Err(e) => {
                    tracing::warn!("Failed to deserialize cached response: {}", e);
                    None
                }
            },
            Ok(None) => {
                tracing::debug!("Cache miss: {}", key);
                None
            }
            Err(e) => {
                tracing::warn!("Redis error getting response: {}", e);
                None
            }
        }
    }

    async fn put(&self, key: &str, value: &Value) {
        let json = match serde_json::to_string(value) {
            Ok(j) => j,
            Err(e) => {
                tracing::warn!("Failed to serialize response for cache: {}", e);
                return;
            }
        };

        let mut conn = self.connection.clone();
        let result: redis::RedisResult<()> = conn.set_ex(key, json, self.ttl_seconds).await;

        match result {
            Ok(()) => {
                tracing::debug!("Cached response with TTL {}s: {}", self.ttl_seconds, key);
            }
            Err(e) => {
                tracing::warn!("Failed to cache response: {}", e);
            }
        }
    }

    async fn get_stats(&self) -> CacheStats {
        let mut conn = self.connection.clone();
        let info: redis::RedisResult<String> =
            redis::cmd("INFO").arg("stats").query_async(&mut conn).await;

        match info {
            Ok(info_str) => {
                let hits = parse_info_value(&info_str, "keyspace_hits");
                let misses = parse_info_value(&info_str, "keyspace_misses");
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
            Err(_) => CacheStats {
                hits: 0,
                misses: 0,
                hit_rate: 0.0,
                connected: false,
            },
        }
    }

    async fn health_check(&self) -> bool {
        let mut conn = self.connection.clone();
        let result: redis::RedisResult<String> = redis::cmd("PING").query_async(&mut conn).await;
        result.is_ok()
    }

    fn backend_name(&self) -> &'static str {
        "redis"
    }
}

fn parse_info_value(info: &str, key: &str) -> u64 {
    info.lines()
        .find(|line| line.starts_with(key))
        .and_then(|line| line.split(':').nth(1))
        .and_then(|val| val.trim().parse().ok())
        .unwrap_or(0)
}
