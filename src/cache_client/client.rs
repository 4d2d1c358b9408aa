use std::time::Duration;

#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    #[error("Cache connection error: {0}")]
    ConnectionError(String),
    #[error("Cache read error: {0}")]
    ReadError(String),
    #[error("Cache write error: {0}")]
    WriteError(String),
    #[error("Cache delete error: {0}")]
    DeleteError(String),
    #[error("Cache stats error: {0}")]
    StatsError(String),
}

/// Capability set expected of the underlying cache: keyed reads and TTL'd
/// writes over UTF-8 text values, plus a named statistic query. Connection
/// management, retries, and timeouts are the implementation's concern, not
/// part of this contract.
#[async_trait::async_trait]
pub trait CacheClient {
    async fn get(&self, key: &str) -> Result<Option<String>, CacheError>;
    async fn set(&self, key: &str, value: &str, ttl: Duration) -> Result<(), CacheError>;
    async fn delete(&self, key: &str) -> Result<(), CacheError>;
    async fn stats(&self, stat: &str) -> Result<u64, CacheError>;
}
