use thiserror::Error;

#[derive(Debug, Error)]
pub enum CodecError {
    /// The structured stage could not serialize or parse its payload.
    #[error("invalid structured payload: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid base64: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("decoded payload is not valid utf-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    /// The encrypted envelope is shorter than its fixed header and tag.
    #[error("too short")]
    TooShort,

    #[error("Unsupported version: {0:#04x}")]
    UnsupportedVersion(u8),

    #[error("key derivation failed")]
    KeyDerivation,

    #[error("encryption failed")]
    Encrypt,

    /// Authentication failure: a tampered ciphertext and a wrong secret
    /// are indistinguishable.
    #[error("decryption failed")]
    Decrypt,

    #[error("stash error: {0}")]
    Stash(String),

    #[error("no stashed value for key {0:?}")]
    MissingStashEntry(String),
}
