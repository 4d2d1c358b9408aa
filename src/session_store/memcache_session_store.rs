use std::time::Duration;

use crate::{
    cache_client::{CacheClient, MemcachedClient},
    session_record::SessionRecord,
    session_store::{
        configuration::{merge_defaults, Configuration, ConfigurationOverrides},
        store::{SessionStore, StoreError},
    },
    SessionKey,
};

// Memcached reports the live entry count under this statistic name.
const ITEM_COUNT_STAT: &str = "curr_items";

/// TTL-aware session store over a [CacheClient]. Every cache key is the
/// configured prefix followed by the session key; values are UTF-8 JSON text.
pub struct MemcacheSessionStore<C = MemcachedClient> {
    prefix: String,
    default_ttl: Duration,
    client: C,
}

impl MemcacheSessionStore<MemcachedClient> {
    /// Merges the supplied overrides over the defaults and connects a new
    /// memcached client. Fails only if client construction fails.
    pub fn connect(overrides: ConfigurationOverrides) -> Result<Self, StoreError> {
        let config = merge_defaults(overrides, Configuration::default());
        let client = MemcachedClient::connect(&config.url())?;
        Ok(Self::with_client(client, config))
    }
}

impl<C> MemcacheSessionStore<C>
where
    C: CacheClient,
{
    /// Wraps a pre-existing client handle instead of connecting a new one.
    pub fn with_client(client: C, config: Configuration) -> Self {
        Self {
            prefix: config.prefix,
            default_ttl: config.default_ttl,
            client,
        }
    }

    fn cache_key(&self, session_key: &SessionKey) -> String {
        format!("{}{}", self.prefix, session_key.as_ref())
    }
}

impl<C> MemcacheSessionStore<C>
where
    C: CacheClient + Clone + Send + Sync + 'static,
{
    /// Fire-and-forget variant of [SessionStore::set]: the write runs on a
    /// spawned task and any failure, serialization included, is discarded.
    /// Callers that must observe write failures use `set` instead.
    pub fn set_detached(&self, session_key: &SessionKey, record: &SessionRecord) {
        let cache_key = self.cache_key(session_key);
        let ttl = record.ttl(self.default_ttl);
        let body = match serde_json::to_string(record) {
            Ok(body) => body,
            Err(_) => return,
        };
        let client = self.client.clone();
        tokio::spawn(async move {
            let _ = client.set(&cache_key, &body, ttl).await;
        });
    }
}

#[async_trait::async_trait]
impl<C> SessionStore for MemcacheSessionStore<C>
where
    C: CacheClient + Send + Sync,
{
    type Error = StoreError;

    /// A missing entry is `Ok(None)`; a present entry that fails to parse is
    /// an error, never an empty result.
    async fn get(&self, session_key: &SessionKey) -> Result<Option<SessionRecord>, Self::Error> {
        let cache_key = self.cache_key(session_key);
        let value = self
            .client
            .get(&cache_key)
            .await
            .map_err(StoreError::from)?;
        value
            .as_deref()
            .map(serde_json::from_str::<SessionRecord>)
            .transpose()
            .map_err(StoreError::DeserializationError)
    }

    async fn set(
        &self,
        session_key: &SessionKey,
        record: &SessionRecord,
    ) -> Result<(), Self::Error> {
        let cache_key = self.cache_key(session_key);
        let ttl = record.ttl(self.default_ttl);
        let body = serde_json::to_string(record).map_err(StoreError::SerializationError)?;
        self.client
            .set(&cache_key, &body, ttl)
            .await
            .map_err(StoreError::from)
    }

    async fn destroy(&self, session_key: &SessionKey) -> Result<(), Self::Error> {
        let cache_key = self.cache_key(session_key);
        self.client
            .delete(&cache_key)
            .await
            .map_err(StoreError::from)
    }

    /// Forwards the cache's item-count statistic unmodified. The count covers
    /// the entire cache, not only entries written under this store's prefix.
    async fn length(&self) -> Result<u64, Self::Error> {
        self.client
            .stats(ITEM_COUNT_STAT)
            .await
            .map_err(StoreError::from)
    }
}
