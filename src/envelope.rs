// src/envelope.rs

//! Splits a BMP byte buffer into its 54-byte structural header and the
//! pixel payload, and reassembles the two after transformation.
//!
//! Only the length is checked; the header bytes are copied verbatim and
//! never validated or transformed.

use crate::consts::BMP_HEADER_LEN;
use crate::error::ImgcryptError;

/// Borrow the header and payload halves of an image buffer.
pub fn split(bytes: &[u8]) -> Result<(&[u8], &[u8]), ImgcryptError> {
    if bytes.len() < BMP_HEADER_LEN {
        return Err(ImgcryptError::TruncatedHeader(bytes.len()));
    }
    Ok(bytes.split_at(BMP_HEADER_LEN))
}

/// Reassemble an output buffer, header first and unchanged.
pub fn join(header: &[u8], payload: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(header.len() + payload.len());
    out.extend_from_slice(header);
    out.extend_from_slice(payload);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_rejects_short_input() {
        let err = split(&[0u8; 53]).unwrap_err();
        assert!(matches!(err, ImgcryptError::TruncatedHeader(53)));
    }

    #[test]
    fn split_allows_header_only_file() {
        let buf = [7u8; 54];
        let (header, payload) = split(&buf).unwrap();
        assert_eq!(header.len(), 54);
        assert!(payload.is_empty());
    }

    #[test]
    fn join_restores_split_output() {
        let buf: Vec<u8> = (0..100).collect();
        let (header, payload) = split(&buf).unwrap();
        assert_eq!(join(header, payload), buf);
    }
}
