//! Common test helpers

use pself::{ContainerBuilder, SectionKind};
use sha2::{Digest, Sha256};

/// SHA-256 of `data`, independent of the crate under test
pub fn sha256(data: &[u8]) -> [u8; 32] {
    Sha256::digest(data).into()
}

/// Build a container with a single section
#[allow(dead_code)]
pub fn single_section_container(kind: SectionKind, name: &str, content: &[u8]) -> Vec<u8> {
    let mut builder = ContainerBuilder::new();
    builder.add_section(kind, name, content);
    builder.build().expect("container should build")
}

/// Hand-assemble a raw 73-byte section record
#[allow(dead_code)]
pub fn raw_record(kind: u8, name: &[u8], offset: u32, length: u32, digest: &[u8; 32]) -> Vec<u8> {
    assert!(name.len() <= 32, "test name must fit the field");
    let mut record = vec![0u8; 73];
    record[0] = kind;
    record[1..1 + name.len()].copy_from_slice(name);
    record[33..37].copy_from_slice(&offset.to_be_bytes());
    record[37..41].copy_from_slice(&length.to_be_bytes());
    record[41..73].copy_from_slice(digest);
    record
}

/// Byte offset of the digest field inside record `index`
#[allow(dead_code)]
pub fn digest_field_offset(index: usize) -> usize {
    pself::format::record_offset(index) + 41
}

/// Byte offset of the length field inside record `index`
#[allow(dead_code)]
pub fn length_field_offset(index: usize) -> usize {
    pself::format::record_offset(index) + 37
}
