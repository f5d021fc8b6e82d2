//! src/decryptor/read.rs
//! Header framing on the read side.

use rsa::traits::PublicKeyParts;
use rsa::RsaPrivateKey;

use crate::error::RsacryptError;
use crate::header::Header;
use std::io::Read;

/// Read the header for `private_key` from the front of a framed ciphertext.
///
/// The header length is structurally tied to the modulus length — 256 bytes
/// for the 2048-bit keys this crate generates. Inputs shorter than one RSA
/// block fail with [`RsacryptError::TruncatedInput`] before any symmetric
/// work happens.
pub fn read_header<R: Read>(
    reader: R,
    private_key: &RsaPrivateKey,
) -> Result<Header, RsacryptError> {
    Header::read_from(reader, private_key.size())
}
