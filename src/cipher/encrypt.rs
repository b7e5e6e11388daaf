//! src/cipher/encrypt.rs
//! ECB/CBC encryption loops over a RustCrypto block cipher

use aes::cipher::{Block, BlockEncrypt, BlockSizeUser, KeyInit};

use crate::cipher::padding::pad;
use crate::cipher::Mode;
use crate::crypto::rng::random_bytes;
use crate::error::ImgcryptError;
use crate::utils::xor_in_place;

/// Pad `payload` at the cipher's block size and encrypt it.
pub(crate) fn encrypt_with<C>(payload: &[u8], key: &[u8], mode: Mode) -> Result<Vec<u8>, ImgcryptError>
where
    C: BlockEncrypt + KeyInit,
{
    let cipher = C::new_from_slice(key)
        .map_err(|_| ImgcryptError::KeyFormat("key length rejected by cipher".into()))?;

    let mut buf = pad(payload, C::block_size());
    match mode {
        Mode::Ecb => ecb_encrypt(&cipher, &mut buf),
        Mode::Cbc => {
            // Fresh vector per initialization; it is kept nowhere.
            let iv = random_bytes(C::block_size());
            cbc_encrypt(&cipher, &iv, &mut buf);
        }
    }
    Ok(buf)
}

fn ecb_encrypt<C: BlockEncrypt>(cipher: &C, buf: &mut [u8]) {
    for chunk in buf.chunks_exact_mut(C::block_size()) {
        cipher.encrypt_block(Block::<C>::from_mut_slice(chunk));
    }
}

fn cbc_encrypt<C: BlockEncrypt>(cipher: &C, iv: &[u8], buf: &mut [u8]) {
    // previous ciphertext block, seeded with the IV
    let mut prev = iv.to_vec();
    for chunk in buf.chunks_exact_mut(C::block_size()) {
        xor_in_place(chunk, &prev);
        cipher.encrypt_block(Block::<C>::from_mut_slice(chunk));
        prev.copy_from_slice(chunk);
    }
}
