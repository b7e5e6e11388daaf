//! # Error Types
//!
//! This module defines the error type used throughout the library.
//! All fallible operations return [`Result<T, ImgcryptError>`](ImgcryptError).

use std::path::PathBuf;
use thiserror::Error;

/// The error type for all imgcrypt operations.
#[derive(Error, Debug)]
pub enum ImgcryptError {
    /// Underlying I/O failure outside the read/write edges of file
    /// processing (key file access, console I/O).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The named algorithm is not AES or DES.
    #[error("unsupported algorithm: {0}")]
    UnsupportedAlgorithm(String),

    /// Key size the algorithm does not accept (AES: 128/192/256, DES: 56).
    #[error("invalid {algorithm} key size: {bits} bits")]
    InvalidKeySize {
        algorithm: &'static str,
        bits: u32,
    },

    /// Key file path does not end in `.aes` or `.des`.
    #[error("unrecognized key file extension: {0} (use '.aes' or '.des')")]
    UnrecognizedKeyExtension(String),

    /// Key file content is not a valid serialized key.
    #[error("key file error: {0}")]
    KeyFormat(String),

    /// Input file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Output file could not be written.
    #[error("failed to write {}: {source}", path.display())]
    FileWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Image-mode input shorter than the 54-byte BMP header.
    #[error("input too short for a BMP header: {0} bytes (need 54)")]
    TruncatedHeader(usize),

    /// Padding validation failed after the block transform (wrong key,
    /// wrong mode, or a CBC vector that does not match the encrypting one).
    #[error("bad padding after decryption")]
    BadPadding,

    /// Ciphertext malformed before the block transform.
    #[error("decryption failed: {0}")]
    Decryption(String),
}
