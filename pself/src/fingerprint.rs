//! Fingerprint baseline store for drift detection
//!
//! A baseline of named content digests, populated once and queried many
//! times. Verification recomputes and compares but never mutates the
//! stored baseline; re-initializing silently overwrites existing entries.
//!
//! The store has exclusive-owner semantics: no internal locking, so a
//! multi-threaded host must serialize access itself.

use alloc::collections::BTreeMap;
use alloc::string::String;

use crate::types::DIGEST_SIZE;
use crate::utils::digest;

/// Outcome of one fingerprint verification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerificationResult {
    /// Content matches the baseline digest
    Ok,
    /// Content differs from the baseline digest
    Mismatch,
    /// No baseline entry exists for the name
    UnknownName,
}

/// Baseline of named content digests
#[derive(Debug, Default)]
pub struct FingerprintStore {
    baseline: BTreeMap<String, [u8; DIGEST_SIZE]>,
}

impl FingerprintStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            baseline: BTreeMap::new(),
        }
    }

    /// Record the baseline digest of each named blob
    ///
    /// Existing entries for the same name are silently overwritten; there
    /// is no "already initialized" guard.
    pub fn load_initial_fingerprints<'a, I>(&mut self, blobs: I)
    where
        I: IntoIterator<Item = (&'a str, &'a [u8])>,
    {
        for (name, content) in blobs {
            self.baseline.insert(String::from(name), digest::digest(content));
        }
    }

    /// Re-verify content against the recorded baseline
    ///
    /// Pure query - never mutates the baseline.
    pub fn verify(&self, name: &str, content: &[u8]) -> VerificationResult {
        match self.baseline.get(name) {
            None => VerificationResult::UnknownName,
            Some(expected) if digest::matches(expected, content) => VerificationResult::Ok,
            Some(_) => VerificationResult::Mismatch,
        }
    }

    /// Whether a baseline entry exists for `name`
    pub fn contains(&self, name: &str) -> bool {
        self.baseline.contains_key(name)
    }

    /// Number of baseline entries
    pub fn len(&self) -> usize {
        self.baseline.len()
    }

    /// Whether the baseline is empty
    pub fn is_empty(&self) -> bool {
        self.baseline.is_empty()
    }
}
