//! src/cipher/decrypt.rs
//! ECB/CBC decryption loops + padding validation

use aes::cipher::{Block, BlockDecrypt, BlockSizeUser, KeyInit};

use crate::cipher::padding::unpad;
use crate::cipher::Mode;
use crate::crypto::rng::random_bytes;
use crate::error::ImgcryptError;
use crate::utils::xor_in_place;

/// Decrypt `payload` and strip the padding.
pub(crate) fn decrypt_with<C>(payload: &[u8], key: &[u8], mode: Mode) -> Result<Vec<u8>, ImgcryptError>
where
    C: BlockDecrypt + KeyInit,
{
    let bs = C::block_size();
    if payload.is_empty() || payload.len() % bs != 0 {
        return Err(ImgcryptError::Decryption(format!(
            "ciphertext length {} is not a positive multiple of the {bs}-byte block size",
            payload.len()
        )));
    }

    let cipher = C::new_from_slice(key)
        .map_err(|_| ImgcryptError::KeyFormat("key length rejected by cipher".into()))?;

    let mut buf = payload.to_vec();
    match mode {
        Mode::Ecb => ecb_decrypt(&cipher, &mut buf),
        Mode::Cbc => {
            // Same vector policy as encryption: fresh and random per call.
            // Nothing ties it to the IV used when the data was produced, so
            // the leading block does not come back.
            let iv = random_bytes(bs);
            cbc_decrypt(&cipher, &iv, &mut buf);
        }
    }
    Ok(unpad(&buf, bs)?.to_vec())
}

fn ecb_decrypt<C: BlockDecrypt>(cipher: &C, buf: &mut [u8]) {
    for chunk in buf.chunks_exact_mut(C::block_size()) {
        cipher.decrypt_block(Block::<C>::from_mut_slice(chunk));
    }
}

fn cbc_decrypt<C: BlockDecrypt>(cipher: &C, iv: &[u8], buf: &mut [u8]) {
    let mut prev = iv.to_vec();
    for chunk in buf.chunks_exact_mut(C::block_size()) {
        let saved = chunk.to_vec();
        cipher.decrypt_block(Block::<C>::from_mut_slice(chunk));
        xor_in_place(chunk, &prev);
        prev = saved;
    }
}
