//! Section record codec
//!
//! Each table entry is a fixed 73-byte record describing one named, typed,
//! digest-protected payload region.

use alloc::string::String;
use core::ops::Range;

use crate::error::{PselfError, Result};
use crate::types::{SectionKind, DIGEST_SIZE, NAME_SIZE, RECORD_SIZE};
use crate::utils::string;

/// Decoded section table entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionDescriptor {
    /// Section payload kind
    pub kind: SectionKind,

    /// Section name (at most 32 UTF-8 bytes on the wire)
    pub name: String,

    /// Payload offset into the container
    pub offset: u32,

    /// Payload length in bytes
    pub length: u32,

    /// Stored SHA-256 digest of the payload
    pub digest: [u8; DIGEST_SIZE],
}

impl SectionDescriptor {
    /// Decode a section record
    ///
    /// # Returns
    /// `Truncated` if fewer than 73 bytes are supplied, `BadSectionType`
    /// for an unknown kind byte, `InvalidName` if the name field is not
    /// UTF-8 after trimming trailing zero bytes.
    pub fn decode(bytes: &[u8]) -> Result<Self> {
        if bytes.len() < RECORD_SIZE {
            return Err(PselfError::Truncated);
        }

        let kind = SectionKind::from_byte(bytes[0])?;

        let name = string::decode_padded_name(&bytes[1..33])
            .map_err(|_| PselfError::InvalidName)?
            .into();

        let offset = u32::from_be_bytes([bytes[33], bytes[34], bytes[35], bytes[36]]);
        let length = u32::from_be_bytes([bytes[37], bytes[38], bytes[39], bytes[40]]);

        let mut digest = [0u8; DIGEST_SIZE];
        digest.copy_from_slice(&bytes[41..73]);

        Ok(Self {
            kind,
            name,
            offset,
            length,
            digest,
        })
    }

    /// Encode the record into its fixed 73-byte form
    ///
    /// # Returns
    /// `NameTooLong` if the name exceeds the 32-byte field; the record is
    /// the same size regardless of name length.
    pub fn encode(&self) -> Result<[u8; RECORD_SIZE]> {
        let name_field =
            string::encode_padded_name(&self.name).ok_or(PselfError::NameTooLong)?;

        let mut buf = [0u8; RECORD_SIZE];
        buf[0] = self.kind.as_byte();
        buf[1..1 + NAME_SIZE].copy_from_slice(&name_field);
        buf[33..37].copy_from_slice(&self.offset.to_be_bytes());
        buf[37..41].copy_from_slice(&self.length.to_be_bytes());
        buf[41..73].copy_from_slice(&self.digest);
        Ok(buf)
    }

    /// Byte range of this section's payload within the container
    ///
    /// Fails with `OutOfRange` when the descriptor addresses bytes beyond
    /// `container_len`.
    pub fn payload_range(&self, container_len: usize) -> Result<Range<usize>> {
        let start = self.offset as usize;
        let end = start
            .checked_add(self.length as usize)
            .ok_or(PselfError::OutOfRange)?;
        if end > container_len {
            return Err(PselfError::OutOfRange);
        }
        Ok(start..end)
    }
}
