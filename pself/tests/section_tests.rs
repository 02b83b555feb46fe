//! Section record codec tests

mod common;

use common::{raw_record, sha256};
use pself::error::PselfError;
use pself::format::SectionDescriptor;
use pself::types::SectionKind;

fn sample_descriptor() -> SectionDescriptor {
    let content = [1u8, 2, 3, 4, 5];
    SectionDescriptor {
        kind: SectionKind::Elf,
        name: "text".into(),
        offset: 0,
        length: content.len() as u32,
        digest: sha256(&content),
    }
}

#[test]
fn test_section_round_trip() {
    let descriptor = sample_descriptor();
    let bytes = descriptor.encode().expect("encode should succeed");

    assert_eq!(bytes.len(), 73);
    assert_eq!(SectionDescriptor::decode(&bytes), Ok(descriptor));
}

#[test]
fn test_section_encode_layout() {
    let descriptor = sample_descriptor();
    let bytes = descriptor.encode().expect("encode should succeed");

    assert_eq!(bytes[0], 0, "ELF discriminant");
    assert_eq!(&bytes[1..5], b"text");
    assert!(bytes[5..33].iter().all(|&b| b == 0), "name zero-padded");
    assert_eq!(&bytes[33..37], &0u32.to_be_bytes());
    assert_eq!(&bytes[37..41], &5u32.to_be_bytes());
    assert_eq!(&bytes[41..73], &descriptor.digest);
}

#[test]
fn test_section_digest_copied_verbatim() {
    let mut digest = [0u8; 32];
    for (i, byte) in digest.iter_mut().enumerate() {
        *byte = i as u8;
    }
    let record = raw_record(1, b"data", 100, 200, &digest);

    let descriptor = SectionDescriptor::decode(&record).expect("valid record");
    assert_eq!(descriptor.kind, SectionKind::Pe);
    assert_eq!(descriptor.name, "data");
    assert_eq!(descriptor.offset, 100);
    assert_eq!(descriptor.length, 200);
    assert_eq!(descriptor.digest, digest);
}

#[test]
fn test_section_name_at_field_width() {
    let name = "a".repeat(32);
    let mut descriptor = sample_descriptor();
    descriptor.name = name.clone();

    let bytes = descriptor.encode().expect("32-byte name should fit");
    let decoded = SectionDescriptor::decode(&bytes).expect("valid record");
    assert_eq!(decoded.name, name);
}

#[test]
fn test_section_name_too_long() {
    let mut descriptor = sample_descriptor();
    descriptor.name = "a".repeat(33);

    assert_eq!(descriptor.encode(), Err(PselfError::NameTooLong));
}

#[test]
fn test_section_name_too_long_multibyte() {
    // 17 two-byte UTF-8 characters: 17 chars but 34 bytes
    let mut descriptor = sample_descriptor();
    descriptor.name = "é".repeat(17);

    assert_eq!(descriptor.encode(), Err(PselfError::NameTooLong));
}

#[test]
fn test_section_bad_kind_byte() {
    let record = raw_record(3, b"text", 0, 5, &[0u8; 32]);

    assert_eq!(
        SectionDescriptor::decode(&record),
        Err(PselfError::BadSectionType)
    );
}

#[test]
fn test_section_invalid_name_encoding() {
    // 0xC3 starts a two-byte sequence that 0x28 cannot continue
    let record = raw_record(0, &[0xC3, 0x28], 0, 5, &[0u8; 32]);

    assert_eq!(
        SectionDescriptor::decode(&record),
        Err(PselfError::InvalidName)
    );
}

#[test]
fn test_section_truncated() {
    let bytes = sample_descriptor().encode().expect("encode should succeed");

    assert_eq!(
        SectionDescriptor::decode(&bytes[..72]),
        Err(PselfError::Truncated)
    );
}

#[test]
fn test_payload_range() {
    let descriptor = SectionDescriptor {
        kind: SectionKind::Elf,
        name: "text".into(),
        offset: 10,
        length: 5,
        digest: [0u8; 32],
    };

    assert_eq!(descriptor.payload_range(15), Ok(10..15));
    assert_eq!(descriptor.payload_range(14), Err(PselfError::OutOfRange));
}

#[test]
fn test_payload_range_overflow() {
    let descriptor = SectionDescriptor {
        kind: SectionKind::Elf,
        name: "text".into(),
        offset: u32::MAX,
        length: u32::MAX,
        digest: [0u8; 32],
    };

    assert_eq!(
        descriptor.payload_range(100),
        Err(PselfError::OutOfRange)
    );
}
