//! Digest primitives: Keccak-256 and SHA-256.
//!
//! The two algorithms are never interchangeable. Keccak-256 is the standard
//! digest over canonical record encodings; SHA-256 is used exclusively for
//! the length-prefixed transaction envelope.

use sha2::{Digest as _, Sha256};
use sha3::Keccak256;

use crate::primitives::Hash256;

/// Compute the Keccak-256 digest of data.
pub fn keccak256(data: &[u8]) -> Hash256 {
    let mut hasher = Keccak256::new();
    hasher.update(data);
    Hash256(hasher.finalize().into())
}

/// Compute the SHA-256 digest of data.
pub fn sha256(data: &[u8]) -> Hash256 {
    let mut hasher = Sha256::new();
    hasher.update(data);
    Hash256(hasher.finalize().into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digests_deterministic() {
        let data = b"test data";
        assert_eq!(keccak256(data), keccak256(data));
        assert_eq!(sha256(data), sha256(data));
    }

    #[test]
    fn test_algorithms_distinct() {
        let data = b"test data";
        assert_ne!(keccak256(data), sha256(data));
    }

    #[test]
    fn test_sha256_known_vector() {
        // SHA-256 of the empty string, FIPS 180-4.
        assert_eq!(
            sha256(b"").to_hex(),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn test_keccak256_known_vector() {
        // Keccak-256 of the empty string (pre-NIST padding, as used by EVM chains).
        assert_eq!(
            keccak256(b"").to_hex(),
            "c5d2460186f7233c927e7db2dcc703c0e500b653ca82273b7bfad8045d85a470"
        );
    }
}
