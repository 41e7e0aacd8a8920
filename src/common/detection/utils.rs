//! Utility functions and constants for package format detection.

/// Local file header signature every ZIP archive starts with
pub const ZIP_SIGNATURE: &[u8] = &[0x50, 0x4B, 0x03, 0x04];

/// Whether `bytes` begins with the ZIP local file header signature.
#[inline]
pub fn has_zip_signature(bytes: &[u8]) -> bool {
    bytes.starts_with(ZIP_SIGNATURE)
}
