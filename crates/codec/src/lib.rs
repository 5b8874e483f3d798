//! Composable, bidirectional transforms for pagination tokens.
//!
//! A [`Codec`] is a pair of fallible, possibly suspending conversions
//! `Input -> Output` and back. Codecs chain with [`CodecExt::pipe`]:
//! encode runs front to back, decode runs back to front, and the first
//! failing stage aborts the chain with its own error.

use async_trait::async_trait;

pub mod armor;
pub mod cipher;
pub mod error;
pub mod json;
pub mod stash;

pub use armor::Base64Codec;
pub use cipher::CipherCodec;
pub use error::CodecError;
pub use json::JsonCodec;
pub use stash::{MemoryStash, StashCodec, StashStore};

#[async_trait]
pub trait Codec: Send + Sync {
    type Input: Send;
    type Output: Send;

    async fn encode(&self, input: Self::Input) -> Result<Self::Output, CodecError>;

    async fn decode(&self, output: Self::Output) -> Result<Self::Input, CodecError>;
}

pub trait CodecExt: Codec + Sized {
    /// Chains `self` with `next`; `next` must consume what `self` produces.
    fn pipe<C>(self, next: C) -> Pipe<Self, C>
    where
        C: Codec<Input = Self::Output>,
    {
        Pipe {
            first: self,
            second: next,
        }
    }
}

impl<T: Codec> CodecExt for T {}

/// Two codecs run in sequence.
#[derive(Debug, Clone)]
pub struct Pipe<A, B> {
    first: A,
    second: B,
}

#[async_trait]
impl<A, B> Codec for Pipe<A, B>
where
    A: Codec,
    B: Codec<Input = A::Output>,
{
    type Input = A::Input;
    type Output = B::Output;

    async fn encode(&self, input: Self::Input) -> Result<Self::Output, CodecError> {
        let intermediate = self.first.encode(input).await?;
        self.second.encode(intermediate).await
    }

    async fn decode(&self, output: Self::Output) -> Result<Self::Input, CodecError> {
        let intermediate = self.second.decode(output).await?;
        self.first.decode(intermediate).await
    }
}
