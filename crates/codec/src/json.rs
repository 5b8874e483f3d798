use crate::{Codec, CodecError};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::marker::PhantomData;

/// Structured-to-string stage: serializes `T` losslessly via its serde
/// representation. Type preservation (big integers, timestamps, nulls) is
/// the payload type's contract; see `model::core::value::Value`.
pub struct JsonCodec<T> {
    _marker: PhantomData<fn() -> T>,
}

impl<T> JsonCodec<T> {
    pub fn new() -> Self {
        JsonCodec {
            _marker: PhantomData,
        }
    }
}

impl<T> Default for JsonCodec<T> {
    fn default() -> Self {
        JsonCodec::new()
    }
}

impl<T> Clone for JsonCodec<T> {
    fn clone(&self) -> Self {
        JsonCodec::new()
    }
}

impl<T> std::fmt::Debug for JsonCodec<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("JsonCodec")
    }
}

#[async_trait]
impl<T> Codec for JsonCodec<T>
where
    T: Serialize + DeserializeOwned + Send,
{
    type Input = T;
    type Output = String;

    async fn encode(&self, input: T) -> Result<String, CodecError> {
        Ok(serde_json::to_string(&input)?)
    }

    async fn decode(&self, output: String) -> Result<T, CodecError> {
        Ok(serde_json::from_str(&output)?)
    }
}
