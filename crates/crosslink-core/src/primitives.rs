//! Strong types for the fixed-width byte values carried by chain records.
//!
//! All of these serialize to `0x`-prefixed lowercase hex in the external JSON
//! representation, with strict length checks on decode. Newtypes keep a hash
//! from being passed where an address belongs.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Parse a `0x`-prefixed hex string into an exact-width byte array.
fn parse_prefixed<const N: usize>(s: &str) -> Result<[u8; N], String> {
    let digits = s
        .strip_prefix("0x")
        .ok_or_else(|| "missing 0x prefix".to_string())?;
    let raw = hex::decode(digits).map_err(|e| e.to_string())?;
    if raw.len() != N {
        return Err(format!("expected {} bytes, got {}", N, raw.len()));
    }
    let mut arr = [0u8; N];
    arr.copy_from_slice(&raw);
    Ok(arr)
}

/// A 32-byte hash value (header identity, state roots, parent links).
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Hash256(pub [u8; 32]);

impl Hash256 {
    /// The zero hash (sentinel value).
    pub const ZERO: Self = Self([0u8; 32]);

    /// Create from raw bytes.
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Get the raw bytes.
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Convert to unprefixed hex.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Parse from unprefixed hex.
    pub fn from_hex(s: &str) -> Result<Self, hex::FromHexError> {
        let bytes = hex::decode(s)?;
        if bytes.len() != 32 {
            return Err(hex::FromHexError::InvalidStringLength);
        }
        let mut arr = [0u8; 32];
        arr.copy_from_slice(&bytes);
        Ok(Self(arr))
    }
}

impl fmt::Debug for Hash256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Hash256({})", &self.to_hex()[..16])
    }
}

impl fmt::Display for Hash256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", self.to_hex())
    }
}

impl AsRef<[u8]> for Hash256 {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; 32]> for Hash256 {
    fn from(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }
}

impl Serialize for Hash256 {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format!("0x{}", self.to_hex()))
    }
}

impl<'de> Deserialize<'de> for Hash256 {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        parse_prefixed::<32>(&s).map(Self).map_err(D::Error::custom)
    }
}

/// A 20-byte account address.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Address(pub [u8; 20]);

impl Address {
    /// The zero address.
    pub const ZERO: Self = Self([0u8; 20]);

    /// Create from raw bytes.
    pub const fn from_bytes(bytes: [u8; 20]) -> Self {
        Self(bytes)
    }

    /// Get the raw bytes.
    pub const fn as_bytes(&self) -> &[u8; 20] {
        &self.0
    }

    /// Convert to unprefixed hex.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Parse from unprefixed hex.
    pub fn from_hex(s: &str) -> Result<Self, hex::FromHexError> {
        let bytes = hex::decode(s)?;
        if bytes.len() != 20 {
            return Err(hex::FromHexError::InvalidStringLength);
        }
        let mut arr = [0u8; 20];
        arr.copy_from_slice(&bytes);
        Ok(Self(arr))
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({})", self.to_hex())
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", self.to_hex())
    }
}

impl AsRef<[u8]> for Address {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; 20]> for Address {
    fn from(bytes: [u8; 20]) -> Self {
        Self(bytes)
    }
}

impl Serialize for Address {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format!("0x{}", self.to_hex()))
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        parse_prefixed::<20>(&s).map(Self).map_err(D::Error::custom)
    }
}

/// The 256-byte log bloom filter of a header.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Bloom(pub [u8; 256]);

impl Bloom {
    /// The empty bloom filter.
    pub const ZERO: Self = Self([0u8; 256]);

    /// Create from raw bytes.
    pub const fn from_bytes(bytes: [u8; 256]) -> Self {
        Self(bytes)
    }

    /// Get the raw bytes.
    pub const fn as_bytes(&self) -> &[u8; 256] {
        &self.0
    }

    /// Convert to unprefixed hex.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl Default for Bloom {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Debug for Bloom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Bloom({}..)", &self.to_hex()[..16])
    }
}

impl AsRef<[u8]> for Bloom {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; 256]> for Bloom {
    fn from(bytes: [u8; 256]) -> Self {
        Self(bytes)
    }
}

impl Serialize for Bloom {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format!("0x{}", self.to_hex()))
    }
}

impl<'de> Deserialize<'de> for Bloom {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        parse_prefixed::<256>(&s).map(Self).map_err(D::Error::custom)
    }
}

/// The 8-byte proof-of-work nonce of a header.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct BlockNonce(pub [u8; 8]);

impl BlockNonce {
    /// The zero nonce.
    pub const ZERO: Self = Self([0u8; 8]);

    /// Create from raw bytes.
    pub const fn from_bytes(bytes: [u8; 8]) -> Self {
        Self(bytes)
    }

    /// Encode an integer nonce big-endian.
    pub fn from_u64(n: u64) -> Self {
        Self(n.to_be_bytes())
    }

    /// Get the raw bytes.
    pub const fn as_bytes(&self) -> &[u8; 8] {
        &self.0
    }

    /// Interpret the nonce as a big-endian integer.
    pub fn to_u64(&self) -> u64 {
        u64::from_be_bytes(self.0)
    }

    /// Convert to unprefixed hex.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Debug for BlockNonce {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BlockNonce({})", self.to_hex())
    }
}

impl AsRef<[u8]> for BlockNonce {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; 8]> for BlockNonce {
    fn from(bytes: [u8; 8]) -> Self {
        Self(bytes)
    }
}

impl Serialize for BlockNonce {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format!("0x{}", self.to_hex()))
    }
}

impl<'de> Deserialize<'de> for BlockNonce {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        parse_prefixed::<8>(&s).map(Self).map_err(D::Error::custom)
    }
}

/// Variable-length byte payloads (header extra data, call data).
///
/// Unlike the fixed-width types above, any length is accepted on decode; the
/// `0x` prefix and hex well-formedness are still mandatory.
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct HexBytes(pub Vec<u8>);

impl HexBytes {
    /// Create from raw bytes.
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Self(bytes.into())
    }

    /// Get the raw bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Byte length of the payload.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the payload is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Convert to unprefixed hex.
    pub fn to_hex(&self) -> String {
        hex::encode(&self.0)
    }
}

impl fmt::Debug for HexBytes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HexBytes(0x{})", self.to_hex())
    }
}

impl AsRef<[u8]> for HexBytes {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<Vec<u8>> for HexBytes {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

impl From<&[u8]> for HexBytes {
    fn from(bytes: &[u8]) -> Self {
        Self(bytes.to_vec())
    }
}

impl Serialize for HexBytes {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format!("0x{}", self.to_hex()))
    }
}

impl<'de> Deserialize<'de> for HexBytes {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        let digits = s
            .strip_prefix("0x")
            .ok_or_else(|| D::Error::custom("missing 0x prefix"))?;
        let raw = hex::decode(digits).map_err(D::Error::custom)?;
        Ok(Self(raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash256_hex_roundtrip() {
        let hash = Hash256::from_bytes([0x42; 32]);
        let hex = hash.to_hex();
        let recovered = Hash256::from_hex(&hex).unwrap();
        assert_eq!(hash, recovered);
    }

    #[test]
    fn test_hash256_json_prefixed() {
        let hash = Hash256::from_bytes([0xab; 32]);
        let json = serde_json::to_string(&hash).unwrap();
        assert_eq!(json, format!("\"0x{}\"", "ab".repeat(32)));

        let back: Hash256 = serde_json::from_str(&json).unwrap();
        assert_eq!(back, hash);
    }

    #[test]
    fn test_hash256_rejects_unprefixed_json() {
        let result: Result<Hash256, _> =
            serde_json::from_str(&format!("\"{}\"", "ab".repeat(32)));
        assert!(result.is_err());
    }

    #[test]
    fn test_hash256_rejects_wrong_length() {
        let result: Result<Hash256, _> = serde_json::from_str("\"0xabcd\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_address_json_roundtrip() {
        let addr = Address::from_bytes([0x11; 20]);
        let json = serde_json::to_string(&addr).unwrap();
        let back: Address = serde_json::from_str(&json).unwrap();
        assert_eq!(back, addr);
    }

    #[test]
    fn test_bloom_json_length() {
        let bloom = Bloom::ZERO;
        let json = serde_json::to_string(&bloom).unwrap();
        // "0x" + 512 hex digits + quotes
        assert_eq!(json.len(), 2 + 2 + 512);
    }

    #[test]
    fn test_block_nonce_u64_roundtrip() {
        let nonce = BlockNonce::from_u64(0xdeadbeef);
        assert_eq!(nonce.to_u64(), 0xdeadbeef);
    }

    #[test]
    fn test_hex_bytes_any_length() {
        let bytes: HexBytes = serde_json::from_str("\"0xdeadbeef\"").unwrap();
        assert_eq!(bytes.as_bytes(), &[0xde, 0xad, 0xbe, 0xef]);

        let empty: HexBytes = serde_json::from_str("\"0x\"").unwrap();
        assert!(empty.is_empty());
    }
}
