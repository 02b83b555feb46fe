//! PSELF on-disk format
//!
//! All multi-byte integers are big-endian. The container layout:
//!
//! ```text
//! offset 0   : magic          u32   = 0x5053454C ("PSEL")
//! offset 4   : version        u32
//! offset 8   : section_count  u32
//! offset 12  : section_count × 73-byte records:
//!                byte 0      : kind (0=ELF, 1=PE, 2=Mach-O)
//!                bytes 1..33 : name, 32 bytes, zero-padded UTF-8
//!                bytes 33..37: offset u32
//!                bytes 37..41: length u32
//!                bytes 41..73: SHA-256 digest, raw
//! offset 12 + section_count*73 : payload region
//! ```
//!
//! Records are packed with no delimiter; record `i` begins at byte
//! `12 + i * 73`. Payload offsets address the whole container, not the
//! payload region. The section count is authoritative: the format carries
//! no self-consistency check against the container length.

pub mod header;
pub mod section;

pub use header::Header;
pub use section::SectionDescriptor;

use crate::types::{HEADER_SIZE, RECORD_SIZE};

/// Byte offset of section record `index`
pub fn record_offset(index: usize) -> usize {
    HEADER_SIZE + index * RECORD_SIZE
}
