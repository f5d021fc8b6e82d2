//! High-level encryption facade.
//!
//! Core API: `encrypt(&public_key, src, dst)?` for full-stream encryption.
//! `encrypt_stream` is exposed for callers that frame the header themselves
//! (the `encrypt` binary does, so it can delay output creation until the
//! session key is wrapped).

pub(crate) mod encrypt;
pub(crate) mod stream;

pub use encrypt::encrypt;
pub use stream::encrypt_stream;
