//! Common types and constants for PSELF

use alloc::string::String;
use alloc::vec::Vec;

use crate::error::{PselfError, Result};

/// Container magic, "PSEL" as a big-endian u32
pub const MAGIC: u32 = 0x5053454C;

/// Container format version written by the builder
pub const FORMAT_VERSION: u32 = 1;

/// Fixed header size (magic + version + section count)
pub const HEADER_SIZE: usize = 12;

/// Fixed section record size (kind + name + offset + length + digest)
pub const RECORD_SIZE: usize = 73;

/// Fixed width of the section name field
pub const NAME_SIZE: usize = 32;

/// SHA-256 digest size
pub const DIGEST_SIZE: usize = 32;

/// Section payload kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum SectionKind {
    /// ELF executable (Linux)
    Elf = 0,
    /// PE executable (Windows)
    Pe = 1,
    /// Mach-O executable (macOS)
    MachO = 2,
}

impl SectionKind {
    /// Parse from a record discriminant byte
    ///
    /// Any value outside 0..=2 is a decode error; there is deliberately no
    /// fallback kind.
    pub fn from_byte(value: u8) -> Result<Self> {
        match value {
            0 => Ok(SectionKind::Elf),
            1 => Ok(SectionKind::Pe),
            2 => Ok(SectionKind::MachO),
            _ => Err(PselfError::BadSectionType),
        }
    }

    /// Record discriminant byte for this kind
    pub fn as_byte(self) -> u8 {
        self as u8
    }

    /// Human-readable kind name
    pub fn name(self) -> &'static str {
        match self {
            SectionKind::Elf => "ELF",
            SectionKind::Pe => "PE",
            SectionKind::MachO => "MACHO",
        }
    }
}

/// Payload extracted by a successful load
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedSection {
    /// Section name from the table entry
    pub name: String,

    /// Section payload kind
    pub kind: SectionKind,

    /// Verified payload bytes
    pub content: Vec<u8>,
}
