//! The two numeric text conventions carried by this crate.
//!
//! 1. **Minimal hex** — the external JSON convention: `0x` prefix, lowercase,
//!    no leading zero nibble, zero is exactly `0x0`.
//! 2. **Decimal strings** — the binary-envelope convention: plain base-10
//!    rendering of the integer.
//!
//! These are separate compatibility contracts with separate consumers. They
//! are deliberately kept as distinct functions and must never be unified.

use primitive_types::U256;

use crate::error::CodecError;

/// Encode a 256-bit quantity as minimal hex.
pub fn encode_u256(v: &U256) -> String {
    format!("0x{:x}", v)
}

/// Encode a 64-bit quantity as minimal hex.
pub fn encode_u64(v: u64) -> String {
    format!("0x{:x}", v)
}

/// Validate the minimal-hex frame and return the bare digits.
fn strip_quantity(s: &str) -> Result<&str, String> {
    let digits = s
        .strip_prefix("0x")
        .ok_or_else(|| "missing 0x prefix".to_string())?;
    if digits.is_empty() {
        return Err("hex string without digits".to_string());
    }
    if digits.len() > 1 && digits.starts_with('0') {
        return Err("leading zero digits".to_string());
    }
    Ok(digits)
}

/// Decode a minimal-hex 256-bit quantity.
pub fn decode_u256(field: &'static str, s: &str) -> Result<U256, CodecError> {
    let digits = strip_quantity(s).map_err(|reason| CodecError::malformed(field, reason))?;
    if digits.len() > 64 {
        return Err(CodecError::malformed(field, "value exceeds 256 bits"));
    }
    U256::from_str_radix(digits, 16).map_err(|e| CodecError::malformed(field, e.to_string()))
}

/// Decode a minimal-hex 64-bit quantity.
pub fn decode_u64(field: &'static str, s: &str) -> Result<u64, CodecError> {
    let digits = strip_quantity(s).map_err(|reason| CodecError::malformed(field, reason))?;
    if digits.len() > 16 {
        return Err(CodecError::malformed(field, "value exceeds 64 bits"));
    }
    u64::from_str_radix(digits, 16).map_err(|e| CodecError::malformed(field, e.to_string()))
}

/// Render a 256-bit quantity as a base-10 decimal string (envelope convention).
pub fn encode_decimal(v: &U256) -> String {
    v.to_string()
}

/// Parse a base-10 decimal string back into a 256-bit quantity.
///
/// Rejects anything outside the non-negative integer domain: empty input,
/// sign characters, non-digits, and values wider than 256 bits. The caller
/// maps the reason onto its own error kind.
pub(crate) fn parse_decimal(s: &str) -> Result<U256, String> {
    if s.is_empty() {
        return Err("empty decimal string".to_string());
    }
    if !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err("not a non-negative decimal integer".to_string());
    }
    U256::from_dec_str(s).map_err(|e| format!("{:?}", e))
}

/// Serde adapter: `U256` as minimal hex.
pub mod u256_hex {
    use super::*;
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(v: &U256, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&encode_u256(v))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<U256, D::Error> {
        let s = String::deserialize(deserializer)?;
        decode_u256("quantity", &s).map_err(D::Error::custom)
    }
}

/// Serde adapter: optional `U256` as minimal hex, absent or null meaning `None`.
pub mod u256_hex_opt {
    use super::*;
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(
        v: &Option<U256>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match v {
            Some(v) => serializer.serialize_some(&encode_u256(v)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<U256>, D::Error> {
        let opt: Option<String> = Option::deserialize(deserializer)?;
        opt.map(|s| decode_u256("quantity", &s).map_err(D::Error::custom))
            .transpose()
    }
}

/// Serde adapter: `u64` as minimal hex.
pub mod u64_hex {
    use super::*;
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(v: &u64, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&encode_u64(*v))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
        let s = String::deserialize(deserializer)?;
        decode_u64("quantity", &s).map_err(D::Error::custom)
    }
}

/// Serde adapter: optional `u64` as minimal hex.
pub mod u64_hex_opt {
    use super::*;
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(
        v: &Option<u64>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match v {
            Some(v) => serializer.serialize_some(&encode_u64(*v)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<u64>, D::Error> {
        let opt: Option<String> = Option::deserialize(deserializer)?;
        opt.map(|s| decode_u64("quantity", &s).map_err(D::Error::custom))
            .transpose()
    }
}
