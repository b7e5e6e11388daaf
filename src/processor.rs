// src/processor.rs

//! Orchestrates one file operation: read, optional header split, cipher
//! transform, reassembly, single write.

use std::fs;
use std::path::Path;

use crate::cipher::{self, CipherParams, Direction};
use crate::envelope;
use crate::error::ImgcryptError;
use crate::keystore::SymmetricKey;

/// Whether the input carries a BMP header to preserve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileType {
    Image,
    Other,
}

/// Transform `input_path` into `output_path` under `key`.
///
/// Image inputs keep their first 54 bytes untouched; only the remainder
/// goes through the cipher. Nothing is written unless the whole transform
/// succeeded, so a failure leaves no partial output behind.
pub fn process(
    input_path: &Path,
    output_path: &Path,
    key: &SymmetricKey,
    params: &CipherParams,
    direction: Direction,
    file_type: FileType,
) -> Result<(), ImgcryptError> {
    let content = fs::read(input_path).map_err(|source| ImgcryptError::FileRead {
        path: input_path.to_path_buf(),
        source,
    })?;

    let output = match file_type {
        FileType::Image => {
            let (header, payload) = envelope::split(&content)?;
            let transformed = cipher::transform(payload, key, params, direction)?;
            envelope::join(header, &transformed)
        }
        FileType::Other => cipher::transform(&content, key, params, direction)?,
    };

    fs::write(output_path, output).map_err(|source| ImgcryptError::FileWrite {
        path: output_path.to_path_buf(),
        source,
    })
}
