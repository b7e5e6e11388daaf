//! tests/common.rs
//! Shared fixtures for the integration suites.

use imgcrypt::consts::BMP_HEADER_LEN;

/// Deterministic stand-in for a BMP: 54 recognizable header bytes followed
/// by `payload_len` pixel bytes.
#[allow(dead_code)] // Used across multiple test files
pub fn bmp_fixture(payload_len: usize) -> Vec<u8> {
    let mut buf = Vec::with_capacity(BMP_HEADER_LEN + payload_len);
    buf.extend_from_slice(b"BM");
    buf.resize(BMP_HEADER_LEN, 0xA5);
    buf.extend((0..payload_len).map(|i| (i % 251) as u8));
    buf
}
