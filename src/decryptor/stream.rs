//! src/decryptor/stream.rs
//! Streaming CTR transform for the decrypt path — the exact mirror of
//! `encryptor/stream.rs`, because CTR decryption is the same XOR.

use crate::consts::NONCE_LEN;
use crate::error::RsacryptError;
use crate::session::{xor_copy, SessionKey};
use std::io::{Read, Write};

/// XOR the remaining ciphertext in `source` against the keystream for
/// `(session_key, nonce)`, writing recovered plaintext to `destination`.
///
/// No integrity check exists at this layer: a flipped ciphertext bit
/// flips the same plaintext bit, silently.
pub fn decrypt_stream<R, W>(
    session_key: &SessionKey,
    nonce: &[u8; NONCE_LEN],
    source: R,
    destination: W,
) -> Result<(), RsacryptError>
where
    R: Read,
    W: Write,
{
    let mut cipher = session_key.keystream(nonce);
    xor_copy(&mut cipher, source, destination)
}
