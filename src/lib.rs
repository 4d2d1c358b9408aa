mod cache_client;
mod session_record;
mod session_store;

pub use cache_client::{CacheClient, CacheError, MemcachedClient};
pub use session_record::SessionRecord;
pub use session_store::{
    merge_defaults, Configuration, ConfigurationOverrides, MemcacheSessionStore, SessionKey,
    SessionStore, StoreError,
};
