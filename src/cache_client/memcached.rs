use std::sync::Arc;
use std::time::Duration;

use crate::cache_client::{CacheClient, CacheError};

/// Memcached-backed [CacheClient] over a pooled `memcache::Client`. The pool
/// is created once at construction and shared for the process lifetime; the
/// synchronous protocol calls run on the blocking thread pool.
#[derive(Clone)]
pub struct MemcachedClient {
    client: Arc<memcache::Client>,
}

impl MemcachedClient {
    pub fn connect(url: &str) -> Result<Self, CacheError> {
        let client = memcache::Client::connect(url)
            .map_err(|e| e.to_string())
            .map_err(CacheError::ConnectionError)?;
        Ok(Self::from_client(client))
    }

    pub fn from_client(client: memcache::Client) -> Self {
        Self {
            client: Arc::new(client),
        }
    }
}

#[async_trait::async_trait]
impl CacheClient for MemcachedClient {
    async fn get(&self, key: &str) -> Result<Option<String>, CacheError> {
        let client = self.client.clone();
        let key = key.to_owned();
        tokio::task::spawn_blocking(move || client.get::<String>(&key))
            .await
            .map_err(|e| e.to_string())
            .map_err(CacheError::ReadError)?
            .map_err(|e| e.to_string())
            .map_err(CacheError::ReadError)
    }

    async fn set(&self, key: &str, value: &str, ttl: Duration) -> Result<(), CacheError> {
        let client = self.client.clone();
        let key = key.to_owned();
        let value = value.to_owned();
        let expiration = ttl.as_secs() as u32;
        tokio::task::spawn_blocking(move || client.set(&key, value.as_str(), expiration))
            .await
            .map_err(|e| e.to_string())
            .map_err(CacheError::WriteError)?
            .map_err(|e| e.to_string())
            .map_err(CacheError::WriteError)
    }

    async fn delete(&self, key: &str) -> Result<(), CacheError> {
        let client = self.client.clone();
        let key = key.to_owned();
        tokio::task::spawn_blocking(move || client.delete(&key))
            .await
            .map_err(|e| e.to_string())
            .map_err(CacheError::DeleteError)?
            .map(|_deleted| ())
            .map_err(|e| e.to_string())
            .map_err(CacheError::DeleteError)
    }

    async fn stats(&self, stat: &str) -> Result<u64, CacheError> {
        let client = self.client.clone();
        let stat = stat.to_owned();
        let stats = tokio::task::spawn_blocking(move || {
            client.stats().map(|servers| {
                servers
                    .iter()
                    .filter_map(|(_, stats)| stats.get(&stat))
                    .filter_map(|value| value.parse::<u64>().ok())
                    .sum::<u64>()
            })
        })
        .await
        .map_err(|e| e.to_string())
        .map_err(CacheError::StatsError)?
        .map_err(|e| e.to_string())
        .map_err(CacheError::StatsError)?;
        Ok(stats)
    }
}
