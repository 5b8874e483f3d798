use crate::{Codec, CodecError};
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::Mutex;
use uuid::Uuid;

/// External key-value store backing a [`StashCodec`].
///
/// The store owns its own mutation discipline and value integrity; keys
/// written but never read back (abandoned tokens) are its garbage to
/// collect.
#[async_trait]
pub trait StashStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, CodecError>;

    async fn set(&self, key: &str, value: String) -> Result<(), CodecError>;
}

/// Opaque-token stage: stores the encoded value out-of-band and emits a
/// fresh v4 UUID as the token.
#[derive(Debug)]
pub struct StashCodec<S> {
    store: S,
}

impl<S: StashStore> StashCodec<S> {
    pub fn new(store: S) -> Self {
        StashCodec { store }
    }
}

#[async_trait]
impl<S: StashStore> Codec for StashCodec<S> {
    type Input = String;
    type Output = String;

    async fn encode(&self, input: String) -> Result<String, CodecError> {
        let key = Uuid::new_v4().to_string();
        self.store.set(&key, input).await?;
        Ok(key)
    }

    async fn decode(&self, output: String) -> Result<String, CodecError> {
        match self.store.get(&output).await? {
            Some(value) => Ok(value),
            None => Err(CodecError::MissingStashEntry(output)),
        }
    }
}

/// In-process store for tests and single-node deployments.
#[derive(Debug, Default)]
pub struct MemoryStash {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStash {
    pub fn new() -> Self {
        MemoryStash::default()
    }
}

#[async_trait]
impl StashStore for MemoryStash {
    async fn get(&self, key: &str) -> Result<Option<String>, CodecError> {
        Ok(self.entries.lock().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: String) -> Result<(), CodecError> {
        self.entries.lock().await.insert(key.to_string(), value);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn stash_round_trip_emits_uuid_tokens() {
        let codec = StashCodec::new(MemoryStash::new());
        let token = codec.encode("payload".into()).await.unwrap();

        assert!(Uuid::parse_str(&token).is_ok());
        assert_eq!(codec.decode(token).await.unwrap(), "payload");
    }

    #[tokio::test]
    async fn distinct_tokens_for_identical_values() {
        let codec = StashCodec::new(MemoryStash::new());
        let a = codec.encode("same".into()).await.unwrap();
        let b = codec.encode("same".into()).await.unwrap();
        assert_ne!(a, b);
    }

    #[tokio::test]
    async fn unknown_key_fails_decode() {
        let codec = StashCodec::new(MemoryStash::new());
        let missing = Uuid::new_v4().to_string();
        let err = codec.decode(missing.clone()).await.unwrap_err();
        assert!(matches!(err, CodecError::MissingStashEntry(key) if key == missing));
    }
}
