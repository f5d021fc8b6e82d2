//! # Header
//!
//! The header is the first (and only) framing element of the ciphertext:
//! the RSA-OAEP(SHA-1, empty label) encryption of the session key under
//! the recipient's public key. Its length always equals the modulus length
//! (256 bytes for the fixed 2048-bit keys), which is exactly how the
//! decryptor knows how many bytes to consume before the payload starts.
//!
//! The first 16 header bytes double as the initial CTR counter block.
//! OAEP output is randomized per invocation, so these bytes vary per file
//! without extra framing — but note they carry no entropy beyond what OAEP
//! already randomizes, and they weld the asymmetric and symmetric layers
//! together: swapping either algorithm breaks the wire format.

use rand::rngs::OsRng;
use rsa::traits::PublicKeyParts;
use rsa::{Oaep, RsaPrivateKey, RsaPublicKey};
use sha1::Sha1;

use crate::consts::{MIN_MODULUS_LEN, NONCE_LEN};
use crate::error::RsacryptError;
use crate::session::SessionKey;
use std::io::Read;

/// One OAEP block: the wrapped session key, as written to (or read from)
/// the start of the ciphertext.
pub struct Header {
    bytes: Vec<u8>,
}

impl Header {
    /// Wrap `session_key` for `public_key`.
    ///
    /// Structural precondition: the modulus must fit an OAEP block for a
    /// 32-byte message under SHA-1 (`2 * 20 + 32 + 2` bytes), otherwise
    /// [`RsacryptError::KeyTooSmall`] — checked before any wrapping work.
    pub fn wrap(
        public_key: &RsaPublicKey,
        session_key: &SessionKey,
    ) -> Result<Self, RsacryptError> {
        let modulus = public_key.size();
        if modulus < MIN_MODULUS_LEN {
            return Err(RsacryptError::KeyTooSmall {
                modulus,
                required: MIN_MODULUS_LEN,
            });
        }
        let bytes = public_key
            .encrypt(&mut OsRng, Oaep::new::<Sha1>(), session_key.as_bytes())
            .map_err(|e| RsacryptError::Crypto(format!("OAEP wrap failed: {e}")))?;
        Ok(Self { bytes })
    }

    /// Read exactly `expected` bytes of header from the front of a framed
    /// ciphertext. Anything shorter is [`RsacryptError::TruncatedInput`] —
    /// the symmetric layer is never reached for such inputs.
    pub fn read_from<R: Read>(mut reader: R, expected: usize) -> Result<Self, RsacryptError> {
        let mut bytes = vec![0u8; expected];
        let mut filled = 0;
        while filled < expected {
            let n = reader.read(&mut bytes[filled..])?;
            if n == 0 {
                return Err(RsacryptError::TruncatedInput {
                    expected,
                    actual: filled,
                });
            }
            filled += n;
        }
        Ok(Self { bytes })
    }

    /// Unwrap the session key with `private_key`.
    ///
    /// Any OAEP failure maps to [`RsacryptError::KeyMismatch`]: wrong key
    /// and corrupted header are intentionally indistinguishable.
    pub fn unwrap_session_key(
        &self,
        private_key: &RsaPrivateKey,
    ) -> Result<SessionKey, RsacryptError> {
        let raw = private_key
            .decrypt(Oaep::new::<Sha1>(), &self.bytes)
            .map_err(|_| RsacryptError::KeyMismatch)?;
        SessionKey::from_unwrapped(raw)
    }

    /// The derived initial counter block: header bytes 0..16, reused rather
    /// than separately generated or stored.
    pub fn nonce(&self) -> [u8; NONCE_LEN] {
        let mut nonce = [0u8; NONCE_LEN];
        nonce.copy_from_slice(&self.bytes[..NONCE_LEN]);
        nonce
    }

    /// The raw OAEP block, emitted verbatim as the first ciphertext bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Header length — always the modulus length of the wrapping key.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}
