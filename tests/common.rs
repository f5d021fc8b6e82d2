//! tests/common.rs
//! Shared fixtures: RSA keypair generation is the slow part of every test,
//! so each test binary generates its keypairs once and reuses them.

use std::sync::OnceLock;

use rsacrypt_rs::KeyPair;

static KEYPAIR: OnceLock<KeyPair> = OnceLock::new();
static OTHER_KEYPAIR: OnceLock<KeyPair> = OnceLock::new();

/// The keypair used for most operations.
pub fn test_keypair() -> &'static KeyPair {
    KEYPAIR.get_or_init(|| KeyPair::generate().expect("keypair generation"))
}

/// A second, unrelated keypair for wrong-key tests.
#[allow(dead_code)] // Used across multiple test files
pub fn other_keypair() -> &'static KeyPair {
    OTHER_KEYPAIR.get_or_init(|| KeyPair::generate().expect("keypair generation"))
}
