//! # Session Key
//!
//! One fresh 32-byte symmetric key per encryption operation. The key exists
//! only for the lifetime of a single encrypt/decrypt call, is never
//! persisted, and is wiped from memory on drop.
//!
//! The key length (32 bytes) is what selects AES-256; the CTR keystream it
//! produces is the single transform shared by the encrypt and decrypt paths.

use aes::cipher::{KeyIvInit, StreamCipher};
use aes::Aes256;
use rand::rngs::OsRng;
use rand::RngCore;
use zeroize::Zeroizing;

use crate::consts::{COPY_BUF_LEN, NONCE_LEN, SESSION_KEY_LEN};
use crate::error::RsacryptError;
use std::io::{Read, Write};

/// AES-256 in CTR mode with a big-endian full-block counter — the same
/// counter discipline as Go's `cipher.NewCTR`, which produced the original
/// wire format.
pub type Aes256Ctr = ctr::Ctr128BE<Aes256>;

/// A transient 32-byte AES-256 key, zeroized on drop.
#[derive(Debug)]
pub struct SessionKey(Zeroizing<[u8; SESSION_KEY_LEN]>);

impl SessionKey {
    /// Draw a fresh session key from the OS random source.
    pub fn generate() -> Self {
        let mut bytes = Zeroizing::new([0u8; SESSION_KEY_LEN]);
        OsRng.fill_bytes(&mut *bytes);
        Self(bytes)
    }

    /// Rebuild a session key from the raw bytes an OAEP unwrap returned.
    ///
    /// A successful unwrap that yields anything but 32 bytes means the
    /// header was produced by something other than this framing.
    pub(crate) fn from_unwrapped(raw: Vec<u8>) -> Result<Self, RsacryptError> {
        let raw = Zeroizing::new(raw);
        if raw.len() != SESSION_KEY_LEN {
            return Err(RsacryptError::Crypto(format!(
                "unwrapped session key has {} bytes, expected {SESSION_KEY_LEN}",
                raw.len()
            )));
        }
        let mut bytes = Zeroizing::new([0u8; SESSION_KEY_LEN]);
        bytes.copy_from_slice(&raw);
        Ok(Self(bytes))
    }

    /// Raw key bytes. Needed to OAEP-wrap the key into the header.
    pub fn as_bytes(&self) -> &[u8; SESSION_KEY_LEN] {
        &self.0
    }

    /// Construct the CTR keystream starting at `nonce`. Encryption and
    /// decryption build the exact same stream — CTR is its own inverse.
    pub fn keystream(&self, nonce: &[u8; NONCE_LEN]) -> Aes256Ctr {
        Aes256Ctr::new((&*self.0).into(), nonce.into())
    }
}

/// Pump `reader` through the keystream into `writer` in bounded chunks.
///
/// Single forward pass, fixed buffer — input size is unbounded. Used verbatim
/// by both transforms since XOR-with-keystream is direction-agnostic.
pub(crate) fn xor_copy<R, W>(
    cipher: &mut Aes256Ctr,
    mut reader: R,
    mut writer: W,
) -> Result<(), RsacryptError>
where
    R: Read,
    W: Write,
{
    let mut buf = [0u8; COPY_BUF_LEN];
    loop {
        let n = reader.read(&mut buf)?;
        if n == 0 {
            return Ok(());
        }
        cipher.apply_keystream(&mut buf[..n]);
        writer.write_all(&buf[..n])?;
    }
}
