//! Header codec tests

use pself::error::PselfError;
use pself::format::Header;

#[test]
fn test_header_round_trip() {
    let header = Header::new(7, 42);
    let bytes = header.encode();

    assert_eq!(bytes.len(), 12);
    assert_eq!(Header::decode(&bytes), Ok(header));
}

#[test]
fn test_header_concrete_bytes() {
    // "PSEL" magic, version 1, one section
    let bytes = [0x50, 0x53, 0x45, 0x4C, 0, 0, 0, 1, 0, 0, 0, 1];

    let header = Header::decode(&bytes).expect("valid header");
    assert_eq!(header.version, 1);
    assert_eq!(header.section_count, 1);
}

#[test]
fn test_header_encode_layout() {
    let bytes = Header::new(1, 3).encode();

    assert_eq!(&bytes[0..4], &[0x50, 0x53, 0x45, 0x4C]);
    assert_eq!(&bytes[4..8], &1u32.to_be_bytes());
    assert_eq!(&bytes[8..12], &3u32.to_be_bytes());
}

#[test]
fn test_header_bad_magic() {
    let mut bytes = Header::new(1, 1).encode();
    bytes[0] = 0x00;

    assert_eq!(Header::decode(&bytes), Err(PselfError::BadMagic));
}

#[test]
fn test_header_bad_magic_ignores_remaining_bytes() {
    // Any first four bytes other than the magic must fail, regardless of
    // what follows.
    for filler in [0x00u8, 0x7F, 0xFF] {
        let mut bytes = [filler; 12];
        bytes[0..4].copy_from_slice(&0x4445_4144u32.to_be_bytes());
        assert_eq!(Header::decode(&bytes), Err(PselfError::BadMagic));
    }
}

#[test]
fn test_header_truncated() {
    let bytes = Header::new(1, 1).encode();

    assert_eq!(Header::decode(&bytes[..11]), Err(PselfError::Truncated));
    assert_eq!(Header::decode(&[]), Err(PselfError::Truncated));
}

#[test]
fn test_header_extra_bytes_ignored() {
    let mut bytes = Header::new(2, 5).encode().to_vec();
    bytes.extend_from_slice(&[0xAB; 16]);

    let header = Header::decode(&bytes).expect("valid header with trailing data");
    assert_eq!(header.version, 2);
    assert_eq!(header.section_count, 5);
}
