//! Fixed-width name field handling
//!
//! Section names occupy exactly 32 bytes on the wire: UTF-8 text followed
//! by zero padding.

use crate::types::NAME_SIZE;

/// Trim trailing zero bytes from a fixed-width field
pub fn trim_trailing_zeros(bytes: &[u8]) -> &[u8] {
    let mut end = bytes.len();
    while end > 0 && bytes[end - 1] == 0 {
        end -= 1;
    }
    &bytes[..end]
}

/// Decode a zero-padded name field as UTF-8
pub fn decode_padded_name(bytes: &[u8]) -> Result<&str, core::str::Utf8Error> {
    core::str::from_utf8(trim_trailing_zeros(bytes))
}

/// Encode a name into the fixed 32-byte field, zero-padded
///
/// Returns `None` when the UTF-8 byte length exceeds the field width.
pub fn encode_padded_name(name: &str) -> Option<[u8; NAME_SIZE]> {
    let raw = name.as_bytes();
    if raw.len() > NAME_SIZE {
        return None;
    }
    let mut field = [0u8; NAME_SIZE];
    field[..raw.len()].copy_from_slice(raw);
    Some(field)
}
