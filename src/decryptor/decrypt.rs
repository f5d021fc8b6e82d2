//! src/decryptor/decrypt.rs
//! Hybrid decryption: unwrap the session key from the header, then stream.

use rsa::RsaPrivateKey;

use crate::decryptor::read::read_header;
use crate::decryptor::stream::decrypt_stream;
use crate::error::RsacryptError;
use std::io::{Read, Write};

/// Decrypt a framed ciphertext from `input` with `private_key` into
/// `output`.
///
/// Fails before writing anything if the input is shorter than one RSA block
/// ([`RsacryptError::TruncatedInput`]) or the OAEP unwrap fails
/// ([`RsacryptError::KeyMismatch`] — wrong key and corrupted header alike).
/// Payload corruption after the header is *not* detected; it silently
/// yields corrupted plaintext.
pub fn decrypt<R, W>(
    private_key: &RsaPrivateKey,
    mut input: R,
    output: W,
) -> Result<(), RsacryptError>
where
    R: Read,
    W: Write,
{
    let header = read_header(&mut input, private_key)?;
    let session_key = header.unwrap_session_key(private_key)?;
    decrypt_stream(&session_key, &header.nonce(), input, output)
}
