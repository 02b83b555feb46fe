//! Fingerprint baseline store tests

use pself::fingerprint::{FingerprintStore, VerificationResult};

#[test]
fn test_baseline_round_trip() {
    let mut store = FingerprintStore::new();
    store.load_initial_fingerprints([("a", b"hello".as_slice())]);

    assert_eq!(store.verify("a", b"hello"), VerificationResult::Ok);
    assert_eq!(store.verify("a", b"hellp"), VerificationResult::Mismatch);
    assert_eq!(store.verify("b", b"anything"), VerificationResult::UnknownName);
}

#[test]
fn test_verify_does_not_mutate_baseline() {
    let mut store = FingerprintStore::new();
    store.load_initial_fingerprints([("a", b"hello".as_slice())]);

    // A mismatching verification must not refresh the baseline
    assert_eq!(store.verify("a", b"changed"), VerificationResult::Mismatch);
    assert_eq!(store.verify("a", b"hello"), VerificationResult::Ok);
    assert_eq!(store.verify("a", b"changed"), VerificationResult::Mismatch);
}

#[test]
fn test_reinitialization_overwrites() {
    let mut store = FingerprintStore::new();
    store.load_initial_fingerprints([("a", b"old".as_slice())]);
    store.load_initial_fingerprints([("a", b"new".as_slice())]);

    assert_eq!(store.verify("a", b"old"), VerificationResult::Mismatch);
    assert_eq!(store.verify("a", b"new"), VerificationResult::Ok);
    assert_eq!(store.len(), 1);
}

#[test]
fn test_multiple_entries_independent() {
    let mut store = FingerprintStore::new();
    store.load_initial_fingerprints([
        ("first", b"one".as_slice()),
        ("second", b"two".as_slice()),
    ]);

    assert_eq!(store.len(), 2);
    assert!(store.contains("first"));
    assert!(store.contains("second"));
    assert!(!store.contains("third"));

    // A drifted entry does not affect the other names
    assert_eq!(store.verify("first", b"drifted"), VerificationResult::Mismatch);
    assert_eq!(store.verify("second", b"two"), VerificationResult::Ok);
}

#[test]
fn test_empty_store() {
    let store = FingerprintStore::new();

    assert!(store.is_empty());
    assert_eq!(store.verify("a", b"hello"), VerificationResult::UnknownName);
}
