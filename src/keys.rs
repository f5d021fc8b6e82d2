//! # Key Generation and PEM Persistence
//!
//! RSA-2048 keypair generation plus the PEM collaborator: private keys are
//! stored as `RSA PRIVATE KEY` (PKCS#1 DER), public keys as `PUBLIC KEY`
//! (X.509 SubjectPublicKeyInfo DER) — the labels and encodings every
//! consumer of these files expects.
//!
//! Persistence refuses to overwrite: both store paths are opened with
//! exclusive creation, private key files with mode 0600 on Unix.

use std::fs;
use std::io::Write;
use std::path::Path;

use rand::rngs::OsRng;
use rsa::pkcs1::{DecodeRsaPrivateKey, EncodeRsaPrivateKey};
use rsa::pkcs8::{DecodePublicKey, EncodePublicKey, LineEnding};
use rsa::{RsaPrivateKey, RsaPublicKey};

use crate::consts::RSA_KEY_BITS;
use crate::error::RsacryptError;
use crate::file_ops::create_excl_with_mode;

const PRIVATE_KEY_MODE: u32 = 0o600;
const PUBLIC_KEY_MODE: u32 = 0o644;

/// An RSA-2048 keypair. Created once, immutable afterward; the two halves
/// are persisted as independent PEM files.
pub struct KeyPair {
    pub public: RsaPublicKey,
    pub private: RsaPrivateKey,
}

impl KeyPair {
    /// Generate a fresh 2048-bit keypair from the OS random source.
    ///
    /// A failed prime search or random source maps to
    /// [`RsacryptError::KeyGeneration`] and is fatal — not retried.
    pub fn generate() -> Result<Self, RsacryptError> {
        let private = RsaPrivateKey::new(&mut OsRng, RSA_KEY_BITS)
            .map_err(|e| RsacryptError::KeyGeneration(e.to_string()))?;
        let public = RsaPublicKey::from(&private);
        Ok(Self { public, private })
    }

    /// Persist both halves, private key first. Either path already existing
    /// fails with [`RsacryptError::OutputExists`] before any key material
    /// is written.
    pub fn store(&self, private_path: &Path, public_path: &Path) -> Result<(), RsacryptError> {
        store_private_key(&self.private, private_path)?;
        store_public_key(&self.public, public_path)
    }
}

/// Write `key` to `path` as a PKCS#1 `RSA PRIVATE KEY` PEM file (mode 0600).
pub fn store_private_key(key: &RsaPrivateKey, path: &Path) -> Result<(), RsacryptError> {
    // to_pkcs1_pem hands back a Zeroizing<String>; the armor is wiped after
    // the write.
    let pem = key
        .to_pkcs1_pem(LineEnding::LF)
        .map_err(|e| RsacryptError::KeyFormat(e.to_string()))?;
    let mut file = create_excl_with_mode(path, PRIVATE_KEY_MODE)?;
    file.write_all(pem.as_bytes())?;
    Ok(())
}

/// Write `key` to `path` as an SPKI `PUBLIC KEY` PEM file (mode 0644).
pub fn store_public_key(key: &RsaPublicKey, path: &Path) -> Result<(), RsacryptError> {
    let pem = key
        .to_public_key_pem(LineEnding::LF)
        .map_err(|e| RsacryptError::KeyFormat(e.to_string()))?;
    let mut file = create_excl_with_mode(path, PUBLIC_KEY_MODE)?;
    file.write_all(pem.as_bytes())?;
    Ok(())
}

/// Load a PKCS#1 `RSA PRIVATE KEY` PEM file.
pub fn load_private_key(path: &Path) -> Result<RsaPrivateKey, RsacryptError> {
    let pem = fs::read_to_string(path)?;
    RsaPrivateKey::from_pkcs1_pem(&pem).map_err(|e| RsacryptError::KeyFormat(e.to_string()))
}

/// Load an SPKI `PUBLIC KEY` PEM file. A syntactically valid SPKI blob for
/// any non-RSA algorithm is rejected as a key format error.
pub fn load_public_key(path: &Path) -> Result<RsaPublicKey, RsacryptError> {
    let pem = fs::read_to_string(path)?;
    RsaPublicKey::from_public_key_pem(&pem).map_err(|e| RsacryptError::KeyFormat(e.to_string()))
}
