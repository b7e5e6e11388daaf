// src/cipher/mod.rs

//! Block-cipher engine: algorithm/mode parameterization and the raw
//! encrypt/decrypt byte transformation.
//!
//! Construction is `<algorithm>/<mode>/<PKCS-style padding>`: padding is
//! applied at the cipher's native block size on encryption, validated and
//! stripped on decryption.

pub(crate) mod decrypt;
pub(crate) mod encrypt;
pub(crate) mod padding;

use std::fmt;
use std::str::FromStr;

use aes::{Aes128Dec, Aes128Enc, Aes192Dec, Aes192Enc, Aes256Dec, Aes256Enc};
use des::Des;

use crate::consts::DES_KEY_SIZE_BITS;
use crate::error::ImgcryptError;
use crate::keystore::SymmetricKey;

/// Symmetric block cipher selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    Aes,
    Des,
}

impl Algorithm {
    /// Native block size in bytes (16 for AES, 8 for DES).
    pub const fn block_size(self) -> usize {
        match self {
            Algorithm::Aes => 16,
            Algorithm::Des => 8,
        }
    }

    /// Lowercase name, used as the key-file extension.
    pub const fn extension(self) -> &'static str {
        match self {
            Algorithm::Aes => "aes",
            Algorithm::Des => "des",
        }
    }

    pub(crate) const fn name(self) -> &'static str {
        match self {
            Algorithm::Aes => "AES",
            Algorithm::Des => "DES",
        }
    }

    /// Key length in bytes for the requested size in bits.
    ///
    /// DES only accepts its conventional 56-bit size (one 64-bit key with
    /// parity bits); AES accepts 128, 192 and 256.
    pub fn key_len(self, bits: u32) -> Result<usize, ImgcryptError> {
        match (self, bits) {
            (Algorithm::Aes, 128) => Ok(16),
            (Algorithm::Aes, 192) => Ok(24),
            (Algorithm::Aes, 256) => Ok(32),
            (Algorithm::Des, DES_KEY_SIZE_BITS) => Ok(8),
            _ => Err(ImgcryptError::InvalidKeySize {
                algorithm: self.name(),
                bits,
            }),
        }
    }

    /// Whether raw material of `len` bytes is usable for this algorithm.
    pub(crate) const fn material_len_valid(self, len: usize) -> bool {
        match self {
            Algorithm::Aes => matches!(len, 16 | 24 | 32),
            Algorithm::Des => len == 8,
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = ImgcryptError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "aes" => Ok(Algorithm::Aes),
            "des" => Ok(Algorithm::Des),
            other => Err(ImgcryptError::UnsupportedAlgorithm(other.to_string())),
        }
    }
}

/// Operating mode of the block cipher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Ecb,
    Cbc,
}

/// Transformation direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Encrypt,
    Decrypt,
}

/// Full parameterization of one transform.
#[derive(Debug, Clone, Copy)]
pub struct CipherParams {
    pub algorithm: Algorithm,
    pub mode: Mode,
    pub key_size_bits: u32,
}

impl CipherParams {
    /// Validated parameter set; rejects key sizes the algorithm refuses.
    pub fn new(algorithm: Algorithm, mode: Mode, key_size_bits: u32) -> Result<Self, ImgcryptError> {
        algorithm.key_len(key_size_bits)?;
        Ok(Self {
            algorithm,
            mode,
            key_size_bits,
        })
    }
}

/// Encrypt or decrypt `payload` under `key`.
///
/// In CBC mode a fresh random IV is drawn for every call, decryption
/// included, and is written nowhere. Two independent CBC operations
/// therefore do not round-trip: decryption recovers everything except the
/// leading block. ECB is fully deterministic per key: identical plaintext
/// blocks yield identical ciphertext blocks, which is not a security
/// property.
pub fn transform(
    payload: &[u8],
    key: &SymmetricKey,
    params: &CipherParams,
    direction: Direction,
) -> Result<Vec<u8>, ImgcryptError> {
    let material = key.material();
    match (params.algorithm, direction) {
        (Algorithm::Aes, Direction::Encrypt) => match material.len() {
            16 => encrypt::encrypt_with::<Aes128Enc>(payload, material, params.mode),
            24 => encrypt::encrypt_with::<Aes192Enc>(payload, material, params.mode),
            32 => encrypt::encrypt_with::<Aes256Enc>(payload, material, params.mode),
            n => Err(invalid_material(Algorithm::Aes, n)),
        },
        (Algorithm::Aes, Direction::Decrypt) => match material.len() {
            16 => decrypt::decrypt_with::<Aes128Dec>(payload, material, params.mode),
            24 => decrypt::decrypt_with::<Aes192Dec>(payload, material, params.mode),
            32 => decrypt::decrypt_with::<Aes256Dec>(payload, material, params.mode),
            n => Err(invalid_material(Algorithm::Aes, n)),
        },
        (Algorithm::Des, Direction::Encrypt) => match material.len() {
            8 => encrypt::encrypt_with::<Des>(payload, material, params.mode),
            n => Err(invalid_material(Algorithm::Des, n)),
        },
        (Algorithm::Des, Direction::Decrypt) => match material.len() {
            8 => decrypt::decrypt_with::<Des>(payload, material, params.mode),
            n => Err(invalid_material(Algorithm::Des, n)),
        },
    }
}

fn invalid_material(algorithm: Algorithm, len: usize) -> ImgcryptError {
    ImgcryptError::InvalidKeySize {
        algorithm: algorithm.name(),
        bits: (len * 8) as u32,
    }
}
