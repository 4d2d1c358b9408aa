use crate::{cache_client::CacheError, session_record::SessionRecord, SessionKey};

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Store error: Unable to serialize session record: {0}")]
    SerializationError(#[source] serde_json::Error),
    #[error("Store error: Unable to deserialize stored session record: {0}")]
    DeserializationError(#[source] serde_json::Error),
    #[error(transparent)]
    CacheError(#[from] CacheError),
}

/// Session-store contract consumed by session middleware: keyed load and
/// store of session records plus a cache-wide entry count.
#[async_trait::async_trait]
pub trait SessionStore {
    type Error;

    async fn get(&self, session_key: &SessionKey) -> Result<Option<SessionRecord>, Self::Error>;
    async fn set(&self, session_key: &SessionKey, record: &SessionRecord)
        -> Result<(), Self::Error>;
    async fn destroy(&self, session_key: &SessionKey) -> Result<(), Self::Error>;
    async fn length(&self) -> Result<u64, Self::Error>;
}

#[async_trait::async_trait]
impl<S> SessionStore for &S
where
    S: SessionStore + Sync,
{
    type Error = S::Error;

    async fn get(&self, session_key: &SessionKey) -> Result<Option<SessionRecord>, Self::Error> {
        <S as SessionStore>::get(self, session_key).await
    }

    async fn set(
        &self,
        session_key: &SessionKey,
        record: &SessionRecord,
    ) -> Result<(), Self::Error> {
        <S as SessionStore>::set(self, session_key, record).await
    }

    async fn destroy(&self, session_key: &SessionKey) -> Result<(), Self::Error> {
        <S as SessionStore>::destroy(self, session_key).await
    }

    async fn length(&self) -> Result<u64, Self::Error> {
        <S as SessionStore>::length(self).await
    }
}
