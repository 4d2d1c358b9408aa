mod client;
mod memcached;

pub use client::{CacheClient, CacheError};
pub use memcached::MemcachedClient;
