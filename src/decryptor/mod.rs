//! High-level decryption facade.
//!
//! Core API: `decrypt(&private_key, src, dst)?` for full-stream decryption.
//! Helpers `read_header` and `decrypt_stream` are exposed for custom flows —
//! the `decrypt` binary uses them to validate the header (and surface a key
//! mismatch) before it creates the output file.

pub(crate) mod decrypt;
pub(crate) mod read;
pub(crate) mod stream;

pub use decrypt::decrypt;
pub use read::read_header;
pub use stream::decrypt_stream;
