//! tests/keystore_tests.rs
//! Key lifecycle: generation sizes, the per-algorithm file policy, the
//! serialized format, and extension inference.

use imgcrypt::{Algorithm, ImgcryptError, KeyStore};
use std::fs;
use tempfile::tempdir;

#[test]
fn generate_validates_key_sizes() {
    assert!(matches!(
        KeyStore::generate(Algorithm::Aes, 100),
        Err(ImgcryptError::InvalidKeySize { bits: 100, .. })
    ));

    let key = KeyStore::generate(Algorithm::Aes, 256).unwrap();
    assert_eq!(key.material().len(), 32);
    assert_eq!(key.size_bits(), 256);
    assert_eq!(key.algorithm(), Algorithm::Aes);

    let des = KeyStore::generate(Algorithm::Des, 56).unwrap();
    assert_eq!(des.material().len(), 8);
    assert_eq!(des.size_bits(), 56);

    // DES accepts nothing but its conventional size
    assert!(KeyStore::generate(Algorithm::Des, 64).is_err());
}

#[test]
fn generated_keys_are_not_all_zero() {
    let key = KeyStore::generate(Algorithm::Aes, 256).unwrap();
    assert!(key.material().iter().any(|&b| b != 0));
}

#[test]
fn persist_then_load_round_trips() {
    let dir = tempdir().unwrap();
    let store = KeyStore::new(dir.path());

    let key = KeyStore::generate(Algorithm::Aes, 192).unwrap();
    let path = store.persist(&key).unwrap();
    assert_eq!(path.file_name().unwrap(), "encryptionKey.aes");

    let loaded = KeyStore::load(&path).unwrap();
    assert_eq!(loaded.algorithm(), Algorithm::Aes);
    assert_eq!(loaded.material(), key.material());
}

#[test]
fn persist_overwrites_previous_key_of_same_algorithm() {
    let dir = tempdir().unwrap();
    let store = KeyStore::new(dir.path());

    let first = KeyStore::generate(Algorithm::Des, 56).unwrap();
    let second = KeyStore::generate(Algorithm::Des, 56).unwrap();
    store.persist(&first).unwrap();
    let path = store.persist(&second).unwrap();

    let loaded = KeyStore::load(&path).unwrap();
    assert_eq!(loaded.material(), second.material());
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
}

#[test]
fn algorithms_get_separate_key_files() {
    let dir = tempdir().unwrap();
    let store = KeyStore::new(dir.path());

    store
        .persist(&KeyStore::generate(Algorithm::Aes, 128).unwrap())
        .unwrap();
    store
        .persist(&KeyStore::generate(Algorithm::Des, 56).unwrap())
        .unwrap();

    assert!(dir.path().join("encryptionKey.aes").exists());
    assert!(dir.path().join("encryptionKey.des").exists());
}

#[test]
fn algorithm_inference_from_extension() {
    assert_eq!(
        KeyStore::algorithm_for_path("encryptionKey.aes").unwrap(),
        Algorithm::Aes
    );
    assert_eq!(
        KeyStore::algorithm_for_path("keys/encryptionKey.des").unwrap(),
        Algorithm::Des
    );
    assert!(matches!(
        KeyStore::algorithm_for_path("encryptionKey.rsa"),
        Err(ImgcryptError::UnrecognizedKeyExtension(_))
    ));
    assert!(KeyStore::algorithm_for_path("plainfile").is_err());
}

#[test]
fn load_rejects_corrupt_key_files() {
    let dir = tempdir().unwrap();
    let store = KeyStore::new(dir.path());
    let key = KeyStore::generate(Algorithm::Aes, 128).unwrap();
    let path = store.persist(&key).unwrap();
    let good = fs::read(&path).unwrap();

    // flipped magic
    let mut bad = good.clone();
    bad[0] ^= 0xFF;
    fs::write(&path, &bad).unwrap();
    assert!(matches!(
        KeyStore::load(&path),
        Err(ImgcryptError::KeyFormat(_))
    ));

    // truncated material
    fs::write(&path, &good[..good.len() - 1]).unwrap();
    assert!(matches!(
        KeyStore::load(&path),
        Err(ImgcryptError::KeyFormat(_))
    ));

    // trailing junk
    let mut long = good.clone();
    long.push(0);
    fs::write(&path, &long).unwrap();
    assert!(matches!(
        KeyStore::load(&path),
        Err(ImgcryptError::KeyFormat(_))
    ));

    // not even a header
    fs::write(&path, b"no").unwrap();
    assert!(matches!(
        KeyStore::load(&path),
        Err(ImgcryptError::KeyFormat(_))
    ));
}

#[test]
fn load_missing_file_is_an_io_error() {
    assert!(matches!(
        KeyStore::load("definitely/not/here.aes"),
        Err(ImgcryptError::Io(_))
    ));
}
