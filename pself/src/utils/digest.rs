//! SHA-256 digest calculations for section verification

use sha2::{Digest, Sha256};

use crate::types::DIGEST_SIZE;

/// Compute the SHA-256 digest of a byte range
pub fn digest(content: &[u8]) -> [u8; DIGEST_SIZE] {
    Sha256::digest(content).into()
}

/// Compare a stored digest against recomputed content
///
/// Full-length equality; constant-time comparison is a hardening option
/// left to callers that need it.
pub fn matches(expected: &[u8; DIGEST_SIZE], content: &[u8]) -> bool {
    digest(content) == *expected
}
