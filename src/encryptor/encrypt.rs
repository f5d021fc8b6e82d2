//! src/encryptor/encrypt.rs
//! Hybrid encryption: wrap a fresh session key, then stream the payload.

use rsa::RsaPublicKey;

use crate::encryptor::stream::encrypt_stream;
use crate::error::RsacryptError;
use crate::header::Header;
use crate::session::SessionKey;
use std::io::{Read, Write};

/// Encrypt `input` for `public_key` into `output`.
///
/// Output framing is fixed: the 256-byte OAEP header first, then the
/// CTR-transformed payload, same length as the plaintext. One forward pass,
/// bounded memory — input size is limited only by I/O.
///
/// # Errors
///
/// - [`RsacryptError::KeyTooSmall`] if the modulus cannot OAEP-wrap a
///   32-byte key (never for the fixed 2048-bit keys)
/// - [`RsacryptError::Io`] on any read or write failure; bytes already
///   written stay written (output creation is not transactional)
pub fn encrypt<R, W>(
    public_key: &RsaPublicKey,
    input: R,
    mut output: W,
) -> Result<(), RsacryptError>
where
    R: Read,
    W: Write,
{
    let session_key = SessionKey::generate();
    let header = Header::wrap(public_key, &session_key)?;
    output.write_all(header.as_bytes())?;
    encrypt_stream(&session_key, &header.nonce(), input, output)
}
