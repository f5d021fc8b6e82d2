//! src/encryptor/stream.rs
//! Streaming CTR transform for the encrypt path.

use crate::consts::NONCE_LEN;
use crate::error::RsacryptError;
use crate::session::{xor_copy, SessionKey};
use std::io::{Read, Write};

/// XOR the plaintext `source` against the AES-256-CTR keystream for
/// `(session_key, nonce)` and write the result to `destination`.
///
/// The caller has already emitted the header; `nonce` must be its first
/// 16 bytes or the decryptor will rebuild a different keystream.
pub fn encrypt_stream<R, W>(
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
