//! The length-prefixed binary transaction envelope.
//!
//! Layout:
//!
//! ```text
//! envelope := uvarint(len(body)) || body
//! body     := type_tag(4) || nonce(uvarint) || gas_price(str) || gas_limit(uvarint)
//!          || recipient(len 0 | len 20 + bytes) || value(str) || payload(bytes)
//!          || v(str) || r(str) || s(str)
//! ```
//!
//! Integers inside `str` fields are base-10 decimal text — a different
//! convention from the hex the JSON codec speaks, and the two must never be
//! unified. The type tag is the first four bytes of the SHA-256 of the
//! registered route name.
//!
//! **CRITICAL**: This encoding is FROZEN. Changing it changes every envelope
//! digest ever produced.

use std::collections::BTreeMap;
use std::fmt;

use crate::crypto::sha256;
use crate::error::CodecError;
use crate::primitives::Address;
use crate::quantity;
use crate::transaction::LegacyTx;
use crate::wire;

/// Route name under which the Ethereum-message payload is registered.
pub const MSG_ETHEREUM_TX_ROUTE: &str = "ethermint/MsgEthereumTx";

/// A 4-byte registered type tag.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TypeTag(pub [u8; 4]);

impl TypeTag {
    /// Derive the tag for a route name.
    pub fn for_route(route: &str) -> Self {
        let digest = sha256(route.as_bytes());
        let mut tag = [0u8; 4];
        tag.copy_from_slice(&digest.as_bytes()[..4]);
        Self(tag)
    }
}

impl fmt::Debug for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TypeTag({})", hex::encode(self.0))
    }
}

/// Builder for the envelope registry. Consumed by [`RegistryBuilder::seal`];
/// a sealed registry cannot be reopened.
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    routes: BTreeMap<String, TypeTag>,
}

impl RegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a concrete route. Registering the same route twice is a no-op.
    pub fn register(mut self, route: &str) -> Self {
        self.routes
            .entry(route.to_string())
            .or_insert_with(|| TypeTag::for_route(route));
        self
    }

    /// Seal the registry. No further registration is possible.
    pub fn seal(self) -> EnvelopeRegistry {
        EnvelopeRegistry {
            routes: self.routes,
        }
    }
}

/// The sealed, immutable route registry.
///
/// Reads require no synchronization; any number of threads may consult a
/// sealed registry concurrently.
#[derive(Debug)]
pub struct EnvelopeRegistry {
    routes: BTreeMap<String, TypeTag>,
}

impl EnvelopeRegistry {
    /// The registry every hasher uses unless one is injected: exactly one
    /// route, the Ethereum-message payload.
    pub fn standard() -> Self {
        RegistryBuilder::new().register(MSG_ETHEREUM_TX_ROUTE).seal()
    }

    /// Tag for a registered route.
    pub fn tag(&self, route: &str) -> Option<TypeTag> {
        self.routes.get(route).copied()
    }

    /// Route owning a tag, for decode.
    pub fn route_for_tag(&self, tag: TypeTag) -> Option<&str> {
        self.routes
            .iter()
            .find(|(_, t)| **t == tag)
            .map(|(route, _)| route.as_str())
    }
}

/// Wire-only projection of a legacy transaction.
///
/// Every 256-bit integer is rendered as a base-10 decimal string; nothing
/// else about the payload changes. Field order is frozen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodableTxData {
    pub account_nonce: u64,
    pub price: String,
    pub gas_limit: u64,
    pub recipient: Option<Address>,
    pub amount: String,
    pub payload: Vec<u8>,
    pub v: String,
    pub r: String,
    pub s: String,
}

impl EncodableTxData {
    /// Project a legacy payload onto the wire record.
    ///
    /// Infallible: the in-memory integer type has no negative values to
    /// reject, and decimal rendering always succeeds.
    pub fn project(tx: &LegacyTx) -> Self {
        Self {
            account_nonce: tx.nonce,
            price: quantity::encode_decimal(&tx.gas_price),
            gas_limit: tx.gas,
            recipient: tx.to,
            amount: quantity::encode_decimal(&tx.value),
            payload: tx.data.as_bytes().to_vec(),
            v: quantity::encode_decimal(&tx.v),
            r: quantity::encode_decimal(&tx.r),
            s: quantity::encode_decimal(&tx.s),
        }
    }

    /// Parse the decimal fields back into a legacy payload.
    pub fn try_into_legacy(&self) -> Result<LegacyTx, CodecError> {
        let gas_price = quantity::parse_decimal(&self.price)
            .map_err(|reason| CodecError::InvalidAmount {
                field: "gas_price",
                reason,
            })?;
        let value = quantity::parse_decimal(&self.amount)
            .map_err(|reason| CodecError::InvalidAmount {
                field: "value",
                reason,
            })?;
        let v = parse_sig_value("v", &self.v)?;
        let r = parse_sig_value("r", &self.r)?;
        let s = parse_sig_value("s", &self.s)?;
        Ok(LegacyTx {
            nonce: self.account_nonce,
            gas_price,
            gas: self.gas_limit,
            to: self.recipient,
            value,
            data: self.payload.clone().into(),
            v,
            r,
            s,
        })
    }
}

fn parse_sig_value(
    component: &'static str,
    s: &str,
) -> Result<primitive_types::U256, CodecError> {
    quantity::parse_decimal(s).map_err(|reason| CodecError::InvalidSignatureValue {
        component,
        reason,
    })
}

/// Encode a wire record into the registry's envelope for a route.
pub fn encode_envelope(
    registry: &EnvelopeRegistry,
    route: &str,
    data: &EncodableTxData,
) -> Result<Vec<u8>, CodecError> {
    let tag = registry
        .tag(route)
        .ok_or_else(|| CodecError::UnknownRoute(route.to_string()))?;

    let mut body = Vec::with_capacity(128);
    body.extend_from_slice(&tag.0);
    wire::write_uvarint(&mut body, data.account_nonce);
    wire::write_str(&mut body, &data.price);
    wire::write_uvarint(&mut body, data.gas_limit);
    match &data.recipient {
        Some(addr) => wire::write_bytes(&mut body, addr.as_bytes()),
        None => wire::write_uvarint(&mut body, 0),
    }
    wire::write_str(&mut body, &data.amount);
    wire::write_bytes(&mut body, &data.payload);
    wire::write_str(&mut body, &data.v);
    wire::write_str(&mut body, &data.r);
    wire::write_str(&mut body, &data.s);

    let mut out = Vec::with_capacity(body.len() + 2);
    wire::write_uvarint(&mut out, body.len() as u64);
    out.extend_from_slice(&body);
    Ok(out)
}

/// Decode an envelope back into its route name and wire record.
pub fn decode_envelope(
    registry: &EnvelopeRegistry,
    bytes: &[u8],
) -> Result<(String, EncodableTxData), CodecError> {
    let mut input = bytes;
    let body_len = wire::read_uvarint(&mut input, "body length")? as usize;
    if input.len() < body_len {
        return Err(CodecError::TruncatedEnvelope("body"));
    }
    if input.len() > body_len {
        return Err(CodecError::TrailingBytes);
    }

    if input.len() < 4 {
        return Err(CodecError::TruncatedEnvelope("type tag"));
    }
    let mut tag = [0u8; 4];
    tag.copy_from_slice(&input[..4]);
    input = &input[4..];
    let route = registry
        .route_for_tag(TypeTag(tag))
        .ok_or_else(|| CodecError::UnknownRoute(hex::encode(tag)))?
        .to_string();

    let account_nonce = wire::read_uvarint(&mut input, "nonce")?;
    let price = wire::read_str(&mut input, "gas price")?;
    let gas_limit = wire::read_uvarint(&mut input, "gas limit")?;
    let recipient_raw = wire::read_bytes(&mut input, "recipient")?;
    let recipient = match recipient_raw.len() {
        0 => None,
        20 => {
            let mut arr = [0u8; 20];
            arr.copy_from_slice(&recipient_raw);
            Some(Address::from_bytes(arr))
        }
        n => {
            return Err(CodecError::malformed(
                "recipient",
                format!("expected 0 or 20 bytes, got {}", n),
            ))
        }
    };
    let amount = wire::read_str(&mut input, "value")?;
    let payload = wire::read_bytes(&mut input, "payload")?;
    let v = wire::read_str(&mut input, "v")?;
    let r = wire::read_str(&mut input, "r")?;
    let s = wire::read_str(&mut input, "s")?;

    if !input.is_empty() {
        return Err(CodecError::TrailingBytes);
    }

    Ok((
        route,
        EncodableTxData {
            account_nonce,
            price,
            gas_limit,
            recipient,
            amount,
            payload,
            v,
            r,
            s,
        },
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use primitive_types::U256;

    fn golden_legacy() -> LegacyTx {
        LegacyTx {
            nonce: 5,
            gas_price: U256::from(100u64),
            gas: 21_000,
            to: None,
            value: U256::zero(),
            data: Vec::new().into(),
            v: U256::from(167u64),
            r: U256::from(2_718_281_828_459_045_235u64),
            s: U256::from(3_141_592_653_589_793_238u64),
        }
    }

    #[test]
    fn test_route_tag_value() {
        // first four bytes of SHA-256("ethermint/MsgEthereumTx")
        assert_eq!(
            TypeTag::for_route(MSG_ETHEREUM_TX_ROUTE).0,
            [0x2d, 0x77, 0x35, 0x25]
        );
    }

    #[test]
    fn test_registry_sealed_lookup() {
        let registry = EnvelopeRegistry::standard();
        let tag = registry.tag(MSG_ETHEREUM_TX_ROUTE).unwrap();
        assert_eq!(registry.route_for_tag(tag), Some(MSG_ETHEREUM_TX_ROUTE));
        assert!(registry.tag("other/Route").is_none());
    }

    #[test]
    fn test_projection_decimal_strings() {
        let data = EncodableTxData::project(&golden_legacy());
        assert_eq!(data.account_nonce, 5);
        assert_eq!(data.price, "100");
        assert_eq!(data.gas_limit, 21_000);
        assert_eq!(data.amount, "0");
        assert_eq!(data.v, "167");
        assert_eq!(data.r, "2718281828459045235");
        assert_eq!(data.s, "3141592653589793238");
    }

    #[test]
    fn test_envelope_golden_bytes() {
        let registry = EnvelopeRegistry::standard();
        let data = EncodableTxData::project(&golden_legacy());
        let envelope = encode_envelope(&registry, MSG_ETHEREUM_TX_ROUTE, &data).unwrap();
        assert_eq!(
            hex::encode(&envelope),
            "3c2d773525050331303088a40100013000033136371332373138323831383238\
             3435393034353233351333313431353932363533353839373933323338"
        );
    }

    #[test]
    fn test_envelope_roundtrip() {
        let registry = EnvelopeRegistry::standard();
        let original = LegacyTx {
            to: Some(Address::from_bytes([0x11; 20])),
            data: vec![0xde, 0xad, 0xbe, 0xef].into(),
            ..golden_legacy()
        };
        let data = EncodableTxData::project(&original);
        let envelope = encode_envelope(&registry, MSG_ETHEREUM_TX_ROUTE, &data).unwrap();
        let (route, decoded) = decode_envelope(&registry, &envelope).unwrap();
        assert_eq!(route, MSG_ETHEREUM_TX_ROUTE);
        assert_eq!(decoded, data);
        assert_eq!(decoded.try_into_legacy().unwrap(), original);
    }

    #[test]
    fn test_unknown_route_rejected() {
        let registry = EnvelopeRegistry::standard();
        let data = EncodableTxData::project(&golden_legacy());
        assert!(matches!(
            encode_envelope(&registry, "unregistered/Route", &data),
            Err(CodecError::UnknownRoute(_))
        ));
    }

    #[test]
    fn test_truncated_envelope_rejected() {
        let registry = EnvelopeRegistry::standard();
        let data = EncodableTxData::project(&golden_legacy());
        let envelope = encode_envelope(&registry, MSG_ETHEREUM_TX_ROUTE, &data).unwrap();
        let truncated = &envelope[..envelope.len() - 3];
        assert!(decode_envelope(&registry, truncated).is_err());
    }

    #[test]
    fn test_trailing_bytes_rejected() {
        let registry = EnvelopeRegistry::standard();
        let data = EncodableTxData::project(&golden_legacy());
        let mut envelope = encode_envelope(&registry, MSG_ETHEREUM_TX_ROUTE, &data).unwrap();
        envelope.push(0x00);
        assert!(matches!(
            decode_envelope(&registry, &envelope),
            Err(CodecError::TrailingBytes)
        ));
    }

    #[test]
    fn test_negative_wire_values_rejected() {
        let mut data = EncodableTxData::project(&golden_legacy());
        data.amount = "-5".to_string();
        assert!(matches!(
            data.try_into_legacy(),
            Err(CodecError::InvalidAmount { field: "value", .. })
        ));

        let mut data = EncodableTxData::project(&golden_legacy());
        data.r = "-1".to_string();
        assert!(matches!(
            data.try_into_legacy(),
            Err(CodecError::InvalidSignatureValue { component: "r", .. })
        ));
    }
}
