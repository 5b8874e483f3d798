use crate::{Codec, CodecError};
use aes_gcm::aead::{Aead, Payload};
use aes_gcm::{Aes256Gcm, KeyInit, Nonce};
use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use rand::rngs::OsRng;
use rand::RngCore;

const VERSION: u8 = 0x01;
const SALT_LEN: usize = 16;
const IV_LEN: usize = 12;
const TAG_LEN: usize = 16;
const KEY_LEN: usize = 32;
/// Version byte, salt, IV, and tag; the minimum envelope carries an empty
/// ciphertext.
const MIN_ENVELOPE_LEN: usize = 1 + SALT_LEN + IV_LEN + TAG_LEN;

/// scrypt cost: N = 2^15, r = 8, p = 1.
const SCRYPT_LOG_N: u8 = 15;
const SCRYPT_R: u32 = 8;
const SCRYPT_P: u32 = 1;

/// Authenticated-encryption stage.
///
/// Each encode derives a fresh AES-256 key from `(secret, random salt)` via
/// scrypt and seals the plaintext with AES-256-GCM under a random IV; the
/// version byte and salt are bound as additional authenticated data. The
/// envelope `ver || salt || iv || tag || ciphertext` is emitted as standard
/// base64. Random salt and IV make repeated encodings of the same plaintext
/// distinct.
#[derive(Debug, Clone)]
pub struct CipherCodec {
    secret: String,
}

impl CipherCodec {
    pub fn new(secret: impl Into<String>) -> Self {
        CipherCodec {
            secret: secret.into(),
        }
    }

    fn derive_key(&self, salt: &[u8]) -> Result<[u8; KEY_LEN], CodecError> {
        let params = scrypt::Params::new(SCRYPT_LOG_N, SCRYPT_R, SCRYPT_P, KEY_LEN)
            .map_err(|_| CodecError::KeyDerivation)?;
        let mut key = [0u8; KEY_LEN];
        scrypt::scrypt(self.secret.as_bytes(), salt, &params, &mut key)
            .map_err(|_| CodecError::KeyDerivation)?;
        Ok(key)
    }

    fn aad(salt: &[u8]) -> [u8; 1 + SALT_LEN] {
        let mut aad = [0u8; 1 + SALT_LEN];
        aad[0] = VERSION;
        aad[1..].copy_from_slice(salt);
        aad
    }
}

#[async_trait]
impl Codec for CipherCodec {
    type Input = String;
    type Output = String;

    async fn encode(&self, input: String) -> Result<String, CodecError> {
        let mut salt = [0u8; SALT_LEN];
        OsRng.fill_bytes(&mut salt);
        let key = self.derive_key(&salt)?;

        let mut iv = [0u8; IV_LEN];
        OsRng.fill_bytes(&mut iv);

        let cipher = Aes256Gcm::new_from_slice(&key).map_err(|_| CodecError::Encrypt)?;
        let aad = Self::aad(&salt);
        let sealed = cipher
            .encrypt(
                Nonce::from_slice(&iv),
                Payload {
                    msg: input.as_bytes(),
                    aad: &aad,
                },
            )
            .map_err(|_| CodecError::Encrypt)?;
        // aes-gcm appends the tag to the ciphertext; the envelope wants it
        // between the IV and the ciphertext.
        let (ciphertext, tag) = sealed.split_at(sealed.len() - TAG_LEN);

        let mut envelope = Vec::with_capacity(MIN_ENVELOPE_LEN + ciphertext.len());
        envelope.push(VERSION);
        envelope.extend_from_slice(&salt);
        envelope.extend_from_slice(&iv);
        envelope.extend_from_slice(tag);
        envelope.extend_from_slice(ciphertext);
        Ok(STANDARD.encode(envelope))
    }

    async fn decode(&self, output: String) -> Result<String, CodecError> {
        let envelope = STANDARD.decode(output.as_bytes())?;
        if envelope.len() < MIN_ENVELOPE_LEN {
            return Err(CodecError::TooShort);
        }
        if envelope[0] != VERSION {
            return Err(CodecError::UnsupportedVersion(envelope[0]));
        }

        let salt = &envelope[1..1 + SALT_LEN];
        let iv = &envelope[1 + SALT_LEN..1 + SALT_LEN + IV_LEN];
        let tag = &envelope[1 + SALT_LEN + IV_LEN..MIN_ENVELOPE_LEN];
        let ciphertext = &envelope[MIN_ENVELOPE_LEN..];

        let key = self.derive_key(salt)?;
        let cipher = Aes256Gcm::new_from_slice(&key).map_err(|_| CodecError::Decrypt)?;

        let mut sealed = Vec::with_capacity(ciphertext.len() + TAG_LEN);
        sealed.extend_from_slice(ciphertext);
        sealed.extend_from_slice(tag);

        let aad = Self::aad(salt);
        let plaintext = cipher
            .decrypt(
                Nonce::from_slice(iv),
                Payload {
                    msg: &sealed,
                    aad: &aad,
                },
            )
            .map_err(|_| CodecError::Decrypt)?;
        Ok(String::from_utf8(plaintext)?)
    }
}
