mod configuration;
mod memcache_session_store;
mod session_key;
mod store;

pub use configuration::{merge_defaults, Configuration, ConfigurationOverrides};
pub use memcache_session_store::MemcacheSessionStore;
pub use session_key::SessionKey;
pub use store::{SessionStore, StoreError};
