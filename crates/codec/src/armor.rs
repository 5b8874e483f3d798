use crate::{Codec, CodecError};
use async_trait::async_trait;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;

/// URL-safe armor stage: `-`/`_` alphabet, no padding on encode.
///
/// Decode tolerates padded input so tokens survive clients that re-pad.
#[derive(Debug, Clone, Copy, Default)]
pub struct Base64Codec;

#[async_trait]
impl Codec for Base64Codec {
    type Input = String;
    type Output = String;

    async fn encode(&self, input: String) -> Result<String, CodecError> {
        Ok(URL_SAFE_NO_PAD.encode(input.as_bytes()))
    }

    async fn decode(&self, output: String) -> Result<String, CodecError> {
        let bytes = URL_SAFE_NO_PAD.decode(output.trim_end_matches('='))?;
        Ok(String::from_utf8(bytes)?)
    }
}
