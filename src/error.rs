//! # Error Types
//!
//! This module defines the error type used throughout the library.
//! All operations return [`Result<T, RsacryptError>`](RsacryptError); every
//! error is fatal to the current operation — there are no retries anywhere.

use std::path::PathBuf;

use thiserror::Error;

/// The error type for all key-generation, encryption, and decryption
/// operations.
#[derive(Error, Debug)]
pub enum RsacryptError {
    /// I/O error occurred during file or stream operations.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// PEM/DER parse failure or unsupported key algorithm.
    #[error("key format error: {0}")]
    KeyFormat(String),

    /// The RSA prime search or the underlying random source failed.
    /// Extremely rare; treated as fatal, never retried.
    #[error("key generation failed: {0}")]
    KeyGeneration(String),

    /// The public modulus is too small for OAEP with SHA-1 and a 32-byte
    /// session key (`modulus >= 2 * hash_len + key_len + 2`).
    #[error("key too small: {modulus}-byte modulus cannot wrap a session key (need {required})")]
    KeyTooSmall { modulus: usize, required: usize },

    /// The ciphertext is shorter than one RSA block, so no header can be
    /// read. The symmetric layer is never reached.
    #[error("truncated input: got {actual} bytes, expected a {expected}-byte header")]
    TruncatedInput { expected: usize, actual: usize },

    /// OAEP unwrap of the header failed. Deliberately conflates a wrong
    /// private key with a corrupted header — OAEP does not distinguish the
    /// two, and neither do we, to avoid padding-oracle leakage.
    #[error("decryption failed: private key does not match or header is corrupted")]
    KeyMismatch,

    /// A file this operation would create already exists. Raised before any
    /// byte of the existing file is touched.
    #[error("output file already exists: {}", .0.display())]
    OutputExists(PathBuf),

    /// Residual cryptographic failure (e.g. an unwrapped session key of an
    /// unexpected length).
    #[error("crypto error: {0}")]
    Crypto(String),
}
