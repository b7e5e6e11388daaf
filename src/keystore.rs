// src/keystore.rs

//! Key generation, serialization, and the per-algorithm key file policy.
//!
//! Keys live as `encryptionKey.<aes|des>` inside the store directory, one
//! file per algorithm; regenerating overwrites. The on-disk layout is
//! private to this writer/reader pair: a 3-byte magic, a format version
//! byte, an algorithm tag, a big-endian u16 length, then the raw key.

use std::fs::File;
use std::io::{ErrorKind, Read, Write};
use std::path::{Path, PathBuf};

use secure_gate::RevealSecret;

use crate::aliases::KeyMaterial;
use crate::cipher::Algorithm;
use crate::consts::{DES_KEY_SIZE_BITS, KEY_FILE_MAGIC, KEY_FILE_STEM, KEY_FILE_VERSION};
use crate::crypto::rng::random_bytes;
use crate::error::ImgcryptError;

const TAG_AES: u8 = 0x01;
const TAG_DES: u8 = 0x02;

/// Raw symmetric key material bound to the algorithm it was generated for.
///
/// Immutable once created. The material is zeroized on drop and only
/// reachable through [`material`](SymmetricKey::material).
pub struct SymmetricKey {
    algorithm: Algorithm,
    material: KeyMaterial,
}

impl SymmetricKey {
    fn new(algorithm: Algorithm, bytes: Vec<u8>) -> Self {
        Self {
            algorithm,
            material: KeyMaterial::new(bytes),
        }
    }

    /// Wrap existing raw material (e.g. a key escrowed elsewhere).
    pub fn from_material(algorithm: Algorithm, material: Vec<u8>) -> Result<Self, ImgcryptError> {
        if !algorithm.material_len_valid(material.len()) {
            return Err(ImgcryptError::KeyFormat(format!(
                "{algorithm} key cannot be {} bytes",
                material.len()
            )));
        }
        Ok(Self::new(algorithm, material))
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// The raw key bytes.
    pub fn material(&self) -> &[u8] {
        self.material.expose_secret()
    }

    /// Nominal key size in bits (56 for DES, material length × 8 for AES).
    pub fn size_bits(&self) -> u32 {
        match self.algorithm {
            Algorithm::Des => DES_KEY_SIZE_BITS,
            Algorithm::Aes => (self.material.expose_secret().len() * 8) as u32,
        }
    }
}

/// Key store rooted at a directory, with the `encryptionKey.<ext>` naming
/// policy. [`Default`] roots it at the working directory.
pub struct KeyStore {
    dir: PathBuf,
}

impl Default for KeyStore {
    fn default() -> Self {
        Self::new(".")
    }
}

impl KeyStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Generate fresh random key material of `key_size_bits` for `algorithm`.
    pub fn generate(algorithm: Algorithm, key_size_bits: u32) -> Result<SymmetricKey, ImgcryptError> {
        let len = algorithm.key_len(key_size_bits)?;
        Ok(SymmetricKey::new(algorithm, random_bytes(len)))
    }

    /// Path the key of `algorithm` is persisted under.
    pub fn key_file_path(&self, algorithm: Algorithm) -> PathBuf {
        self.dir
            .join(format!("{KEY_FILE_STEM}.{}", algorithm.extension()))
    }

    /// Serialize `key` into the store, overwriting any previous key of the
    /// same algorithm. Returns the written path.
    pub fn persist(&self, key: &SymmetricKey) -> Result<PathBuf, ImgcryptError> {
        let path = self.key_file_path(key.algorithm());
        let material = key.material();

        let mut file = File::create(&path)?;
        file.write_all(&KEY_FILE_MAGIC)?;
        file.write_all(&[KEY_FILE_VERSION, algorithm_tag(key.algorithm())])?;
        file.write_all(&(material.len() as u16).to_be_bytes())?;
        file.write_all(material)?;
        Ok(path)
    }

    /// Deserialize a key from `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<SymmetricKey, ImgcryptError> {
        let mut file = File::open(path.as_ref())?;

        let mut fixed = [0u8; 7];
        read_key_octets(&mut file, &mut fixed)?;

        if fixed[..3] != KEY_FILE_MAGIC {
            return Err(ImgcryptError::KeyFormat("invalid magic".into()));
        }
        if fixed[3] != KEY_FILE_VERSION {
            return Err(ImgcryptError::KeyFormat(format!(
                "unsupported key format version {}",
                fixed[3]
            )));
        }
        let algorithm = match fixed[4] {
            TAG_AES => Algorithm::Aes,
            TAG_DES => Algorithm::Des,
            tag => {
                return Err(ImgcryptError::KeyFormat(format!(
                    "unknown algorithm tag 0x{tag:02x}"
                )))
            }
        };

        let len = u16::from_be_bytes([fixed[5], fixed[6]]) as usize;
        if !algorithm.material_len_valid(len) {
            return Err(ImgcryptError::KeyFormat(format!(
                "{algorithm} key cannot be {len} bytes"
            )));
        }

        let mut material = vec![0u8; len];
        read_key_octets(&mut file, &mut material)?;

        let mut trailing = [0u8; 1];
        if file.read(&mut trailing)? != 0 {
            return Err(ImgcryptError::KeyFormat(
                "trailing bytes after key material".into(),
            ));
        }

        Ok(SymmetricKey::new(algorithm, material))
    }

    /// Infer the algorithm from a key-file extension (`.aes` / `.des`).
    pub fn algorithm_for_path(path: impl AsRef<Path>) -> Result<Algorithm, ImgcryptError> {
        let path = path.as_ref();
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(|ext| ext.parse::<Algorithm>().ok())
            .ok_or_else(|| ImgcryptError::UnrecognizedKeyExtension(path.display().to_string()))
    }
}

const fn algorithm_tag(algorithm: Algorithm) -> u8 {
    match algorithm {
        Algorithm::Aes => TAG_AES,
        Algorithm::Des => TAG_DES,
    }
}

// EOF while parsing is a format problem, not an I/O one.
fn read_key_octets<R: Read>(reader: &mut R, buf: &mut [u8]) -> Result<(), ImgcryptError> {
    reader.read_exact(buf).map_err(|e| match e.kind() {
        ErrorKind::UnexpectedEof => ImgcryptError::KeyFormat("key file is truncated".into()),
        _ => ImgcryptError::Io(e),
    })
}
