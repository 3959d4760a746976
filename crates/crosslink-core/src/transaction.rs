//! Transaction records and the payload union.
//!
//! The payload is a closed set of variants; code that needs one specific
//! format matches exhaustively instead of downcasting.

use primitive_types::U256;

use crate::primitives::{Address, HexBytes};
use crate::wire;

/// The legacy (pre-typed) transaction payload.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LegacyTx {
    pub nonce: u64,
    pub gas_price: U256,
    pub gas: u64,
    /// `None` creates a contract.
    pub to: Option<Address>,
    pub value: U256,
    pub data: HexBytes,
    /// Signature values. For protected transactions V carries the chain id
    /// per EIP-155.
    pub v: U256,
    pub r: U256,
    pub s: U256,
}

/// The EIP-1559 dynamic-fee transaction payload.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DynamicFeeTx {
    pub chain_id: U256,
    pub nonce: u64,
    pub gas_tip_cap: U256,
    pub gas_fee_cap: U256,
    pub gas: u64,
    pub to: Option<Address>,
    pub value: U256,
    pub data: HexBytes,
    pub v: U256,
    pub r: U256,
    pub s: U256,
}

/// The closed set of transaction payload formats.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TxPayload {
    Legacy(LegacyTx),
    DynamicFee(DynamicFeeTx),
}

impl TxPayload {
    /// Wire-format type byte, matching the typed-transaction numbering.
    fn type_byte(&self) -> u8 {
        match self {
            TxPayload::Legacy(_) => 0x00,
            TxPayload::DynamicFee(_) => 0x02,
        }
    }
}

/// A transaction wrapping one payload variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    payload: TxPayload,
}

impl Transaction {
    pub fn new(payload: TxPayload) -> Self {
        Self { payload }
    }

    pub fn legacy(inner: LegacyTx) -> Self {
        Self::new(TxPayload::Legacy(inner))
    }

    pub fn dynamic_fee(inner: DynamicFeeTx) -> Self {
        Self::new(TxPayload::DynamicFee(inner))
    }

    pub fn payload(&self) -> &TxPayload {
        &self.payload
    }

    pub fn is_legacy(&self) -> bool {
        matches!(self.payload, TxPayload::Legacy(_))
    }

    /// The chain identifier the transaction targets.
    ///
    /// Legacy payloads derive it from V per EIP-155: `(v - 35) / 2` for
    /// protected transactions, zero for the unprotected 27/28 values.
    pub fn chain_id(&self) -> U256 {
        match &self.payload {
            TxPayload::Legacy(inner) => derive_chain_id(&inner.v),
            TxPayload::DynamicFee(inner) => inner.chain_id,
        }
    }

    /// Deterministic canonical encoding of the whole transaction.
    ///
    /// One type byte followed by the payload fields as length-prefixed wire
    /// values in declaration order. This is the byte string the standard
    /// digest runs over; it is not the network (RLP) encoding.
    pub fn canonical_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(128);
        out.push(self.payload.type_byte());
        match &self.payload {
            TxPayload::Legacy(inner) => {
                wire::write_uvarint(&mut out, inner.nonce);
                wire::write_u256(&mut out, &inner.gas_price);
                wire::write_uvarint(&mut out, inner.gas);
                match &inner.to {
                    Some(addr) => wire::write_bytes(&mut out, addr.as_bytes()),
                    None => wire::write_uvarint(&mut out, 0),
                }
                wire::write_u256(&mut out, &inner.value);
                wire::write_bytes(&mut out, inner.data.as_bytes());
                wire::write_u256(&mut out, &inner.v);
                wire::write_u256(&mut out, &inner.r);
                wire::write_u256(&mut out, &inner.s);
            }
            TxPayload::DynamicFee(inner) => {
                wire::write_u256(&mut out, &inner.chain_id);
                wire::write_uvarint(&mut out, inner.nonce);
                wire::write_u256(&mut out, &inner.gas_tip_cap);
                wire::write_u256(&mut out, &inner.gas_fee_cap);
                wire::write_uvarint(&mut out, inner.gas);
                match &inner.to {
                    Some(addr) => wire::write_bytes(&mut out, addr.as_bytes()),
                    None => wire::write_uvarint(&mut out, 0),
                }
                wire::write_u256(&mut out, &inner.value);
                wire::write_bytes(&mut out, inner.data.as_bytes());
                wire::write_u256(&mut out, &inner.v);
                wire::write_u256(&mut out, &inner.r);
                wire::write_u256(&mut out, &inner.s);
            }
        }
        out
    }
}

/// EIP-155 chain id recovery from a legacy V value.
fn derive_chain_id(v: &U256) -> U256 {
    if *v >= U256::from(35u64) {
        (*v - U256::from(35u64)) / U256::from(2u64)
    } else {
        U256::zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn legacy_with_v(v: u64) -> Transaction {
        Transaction::legacy(LegacyTx {
            v: U256::from(v),
            ..LegacyTx::default()
        })
    }

    #[test]
    fn test_eip155_chain_id_recovery() {
        // chain 66 signs with v in {167, 168}
        assert_eq!(legacy_with_v(167).chain_id(), U256::from(66u64));
        assert_eq!(legacy_with_v(168).chain_id(), U256::from(66u64));
        // mainnet signs with v in {37, 38}
        assert_eq!(legacy_with_v(37).chain_id(), U256::from(1u64));
        assert_eq!(legacy_with_v(38).chain_id(), U256::from(1u64));
        // unprotected pre-fork values have no chain id
        assert_eq!(legacy_with_v(27).chain_id(), U256::zero());
        assert_eq!(legacy_with_v(28).chain_id(), U256::zero());
    }

    #[test]
    fn test_dynamic_fee_chain_id_is_explicit() {
        let tx = Transaction::dynamic_fee(DynamicFeeTx {
            chain_id: U256::from(5u64),
            v: U256::from(167u64), // ignored: only legacy derives from V
            ..DynamicFeeTx::default()
        });
        assert_eq!(tx.chain_id(), U256::from(5u64));
        assert!(!tx.is_legacy());
    }

    #[test]
    fn test_canonical_bytes_deterministic() {
        let tx = legacy_with_v(167);
        assert_eq!(tx.canonical_bytes(), tx.canonical_bytes());
    }

    #[test]
    fn test_canonical_bytes_distinguish_variants() {
        let legacy = Transaction::legacy(LegacyTx::default());
        let dynamic = Transaction::dynamic_fee(DynamicFeeTx::default());
        assert_ne!(legacy.canonical_bytes(), dynamic.canonical_bytes());
        assert_eq!(legacy.canonical_bytes()[0], 0x00);
        assert_eq!(dynamic.canonical_bytes()[0], 0x02);
    }

    #[test]
    fn test_canonical_bytes_cover_recipient() {
        let mut inner = LegacyTx::default();
        let without = Transaction::legacy(inner.clone()).canonical_bytes();
        inner.to = Some(Address::from_bytes([0x11; 20]));
        let with = Transaction::legacy(inner).canonical_bytes();
        assert_ne!(without, with);
    }
}
