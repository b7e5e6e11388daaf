//! Global constants: BMP layout, key file naming and format, key sizes.

/// Length of the BMP prefix copied verbatim in image mode
/// (14-byte file header + 40-byte DIB header).
pub const BMP_HEADER_LEN: usize = 54;

/// Extension appended to an image-mode output path that carries none.
pub const BMP_EXTENSION: &str = "bmp";

/// Keys are persisted as `encryptionKey.<aes|des>`, one file per algorithm.
pub const KEY_FILE_STEM: &str = "encryptionKey";

/// Magic prefix of the serialized key format.
pub const KEY_FILE_MAGIC: [u8; 3] = *b"KEY";

/// Current serialized key format version.
pub const KEY_FILE_VERSION: u8 = 1;

/// Key sizes AES accepts, in bits.
pub const AES_KEY_SIZES: [u32; 3] = [128, 192, 256];

/// The single DES key size in bits (a 64-bit key carries 8 parity bits).
pub const DES_KEY_SIZE_BITS: u32 = 56;
