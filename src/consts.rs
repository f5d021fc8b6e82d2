//! # Constants
//!
//! Framing constants shared by the encryptor, decryptor, and key generator.
//! The wire format is fixed: a 256-byte OAEP header followed by the
//! CTR-transformed payload, byte-for-byte the same length as the plaintext.

/// RSA modulus size in bits. The only key size this crate produces; it fixes
/// the header at 256 bytes.
pub const RSA_KEY_BITS: usize = 2048;

/// RSA modulus size in bytes — also the exact byte length of the header.
pub const RSA_MODULUS_LEN: usize = RSA_KEY_BITS / 8;

/// Session key length in bytes. A 32-byte key selects AES-256.
pub const SESSION_KEY_LEN: usize = 32;

/// Initial CTR counter block length — one AES block, taken from the first
/// 16 bytes of the header rather than generated (or stored) separately.
pub const NONCE_LEN: usize = 16;

/// SHA-1 digest length, the hash used for OAEP padding.
pub const OAEP_HASH_LEN: usize = 20;

/// Smallest modulus (in bytes) able to OAEP-wrap a session key:
/// `2 * hash_len + key_len + 2`.
pub const MIN_MODULUS_LEN: usize = 2 * OAEP_HASH_LEN + SESSION_KEY_LEN + 2;

/// Copy-loop buffer size for the streaming transforms.
pub const COPY_BUF_LEN: usize = 8 * 1024;
