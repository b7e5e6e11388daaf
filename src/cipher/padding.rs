// src/cipher/padding.rs

//! PKCS-style block padding, applied at the cipher's native block size.

use crate::error::ImgcryptError;

/// Pad `data` up to the next multiple of `block_size`.
///
/// A full extra block is appended when the input is already aligned, so
/// the pad length is always in `1..=block_size`.
pub(crate) fn pad(data: &[u8], block_size: usize) -> Vec<u8> {
    let pad = block_size - data.len() % block_size;
    let mut buf = Vec::with_capacity(data.len() + pad);
    buf.extend_from_slice(data);
    buf.resize(data.len() + pad, pad as u8);
    buf
}

/// Validate and strip the padding of a decrypted buffer.
pub(crate) fn unpad(buf: &[u8], block_size: usize) -> Result<&[u8], ImgcryptError> {
    let last = *buf.last().ok_or(ImgcryptError::BadPadding)?;
    let pad = last as usize;
    if pad == 0 || pad > block_size || pad > buf.len() {
        return Err(ImgcryptError::BadPadding);
    }
    if buf[buf.len() - pad..].iter().any(|&b| b != last) {
        return Err(ImgcryptError::BadPadding);
    }
    Ok(&buf[..buf.len() - pad])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pads_to_block_multiple() {
        assert_eq!(pad(b"abc", 8), b"abc\x05\x05\x05\x05\x05");
        assert_eq!(pad(&[], 8), [8u8; 8]);
        // aligned input still gets a full pad block
        assert_eq!(pad(&[0u8; 16], 16).len(), 32);
    }

    #[test]
    fn strips_valid_padding() {
        assert_eq!(unpad(b"abc\x05\x05\x05\x05\x05", 8).unwrap(), &b"abc"[..]);
        assert!(unpad(&[8u8; 8], 8).unwrap().is_empty());
    }

    #[test]
    fn rejects_invalid_padding() {
        assert!(unpad(&[], 8).is_err());
        assert!(unpad(&[0u8; 8], 8).is_err()); // zero pad byte
        assert!(unpad(&[9u8; 8], 8).is_err()); // pad longer than a block
        assert!(unpad(b"abcde\x01\x02\x03", 8).is_err()); // inconsistent run
        assert!(unpad(&[2u8; 1], 8).is_err()); // pad longer than the buffer
    }
}
