// src/lib.rs

//! Hybrid RSA + AES file encryption.
//!
//! A sender encrypts an arbitrary-size file for a recipient's RSA-2048
//! public key; the recipient decrypts it with the matching private key.
//! Per file, a fresh 32-byte session key is wrapped with RSA-OAEP(SHA-1)
//! into a 256-byte header, whose first 16 bytes double as the AES-256-CTR
//! initial counter block for the payload:
//!
//! ```text
//! offset 0..256   RSA-OAEP(SHA-1) ciphertext of the 32-byte session key
//! offset 256..    AES-256-CTR(session key, counter = bytes 0..16 above)
//! ```
//!
//! There is no authentication tag: tampering with the payload yields
//! silently corrupted plaintext, by design. Callers needing
//! tamper-detection must layer it on externally.

pub mod consts;
pub mod decryptor;
pub mod encryptor;
pub mod error;
pub mod file_ops;
pub mod header;
pub mod keys;
pub mod session;

// High-level API — this is what most users import
pub use decryptor::decrypt;
pub use encryptor::encrypt;
pub use error::RsacryptError;
pub use keys::KeyPair;

// Low-level pieces for custom flows (the CLI binaries sequence header
// validation against output-file creation themselves)
pub use decryptor::{decrypt_stream, read_header};
pub use encryptor::encrypt_stream;
pub use header::Header;
pub use keys::{load_private_key, load_public_key, store_private_key, store_public_key};
pub use session::SessionKey;
