//! Container builder
//!
//! Assembles a complete container image: header, packed section table,
//! payload region. Offsets and digests are computed from the supplied
//! content, so a built image always verifies against itself.

use alloc::string::String;
use alloc::vec::Vec;

use crate::error::Result;
use crate::format::{Header, SectionDescriptor};
use crate::types::{SectionKind, FORMAT_VERSION, HEADER_SIZE, RECORD_SIZE};
use crate::utils::digest;

struct PendingSection {
    kind: SectionKind,
    name: String,
    content: Vec<u8>,
}

/// Builder for PSELF container images
pub struct ContainerBuilder {
    version: u32,
    sections: Vec<PendingSection>,
}

impl ContainerBuilder {
    /// Create a builder for a current-version container
    pub fn new() -> Self {
        Self {
            version: FORMAT_VERSION,
            sections: Vec::new(),
        }
    }

    /// Override the header version field
    pub fn version(mut self, version: u32) -> Self {
        self.version = version;
        self
    }

    /// Append a section; payloads are laid out in insertion order
    pub fn add_section(&mut self, kind: SectionKind, name: &str, content: &[u8]) {
        self.sections.push(PendingSection {
            kind,
            name: String::from(name),
            content: content.to_vec(),
        });
    }

    /// Assemble the container image
    ///
    /// # Returns
    /// `NameTooLong` if any section name exceeds the fixed field width.
    pub fn build(self) -> Result<Vec<u8>> {
        let payload_start = HEADER_SIZE + self.sections.len() * RECORD_SIZE;

        let mut records = Vec::with_capacity(self.sections.len());
        let mut payload = Vec::new();
        let mut offset = payload_start;
        for section in &self.sections {
            let descriptor = SectionDescriptor {
                kind: section.kind,
                name: section.name.clone(),
                offset: offset as u32,
                length: section.content.len() as u32,
                digest: digest::digest(&section.content),
            };
            records.push(descriptor.encode()?);
            payload.extend_from_slice(&section.content);
            offset += section.content.len();
        }

        let header = Header::new(self.version, self.sections.len() as u32);

        let mut image = Vec::with_capacity(payload_start + payload.len());
        image.extend_from_slice(&header.encode());
        for record in &records {
            image.extend_from_slice(record);
        }
        image.extend_from_slice(&payload);
        Ok(image)
    }
}

impl Default for ContainerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
