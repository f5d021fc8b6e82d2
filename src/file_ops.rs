//! # File Operations
//!
//! Exclusive-creation helpers behind the no-overwrite guarantee: every file
//! this crate writes (keys, ciphertext, plaintext) is opened with
//! `create_new`, so an existing path fails with
//! [`RsacryptError::OutputExists`] before a single byte of it is touched.

use std::fs::{File, OpenOptions};
use std::io;
use std::path::Path;

use crate::error::RsacryptError;

/// Exclusively create `path` for writing with default permissions (0644 on
/// Unix, modulo umask).
pub fn create_excl(path: &Path) -> Result<File, RsacryptError> {
    open_excl(OpenOptions::new().write(true).create_new(true), path)
}

/// Exclusively create `path` with an explicit Unix mode (no-op elsewhere).
/// Used for key files: private keys get 0600.
pub fn create_excl_with_mode(path: &Path, mode: u32) -> Result<File, RsacryptError> {
    let mut options = OpenOptions::new();
    options.write(true).create_new(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(mode);
    }
    #[cfg(not(unix))]
    let _ = mode;
    open_excl(&options, path)
}

fn open_excl(options: &OpenOptions, path: &Path) -> Result<File, RsacryptError> {
    options.open(path).map_err(|err| {
        if err.kind() == io::ErrorKind::AlreadyExists {
            RsacryptError::OutputExists(path.to_path_buf())
        } else {
            RsacryptError::Io(err)
        }
    })
}
