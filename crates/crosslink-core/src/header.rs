//! Block header record and its canonical JSON codec.
//!
//! Encoding always recomputes the seal hash and writes it under the `hash`
//! key; the hash is derived state, never an input. Decoding is a partial
//! update: keys absent from the input leave the target untouched, and the
//! whole decode fails atomically if any present field is malformed.

use primitive_types::U256;
use serde::{Deserialize, Serialize};

use crate::crypto::keccak256;
use crate::error::CodecError;
use crate::primitives::{Address, BlockNonce, Bloom, Hash256, HexBytes};
use crate::quantity;
use crate::rlp;

/// A block header.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Header {
    pub parent_hash: Hash256,
    pub uncle_hash: Hash256,
    pub coinbase: Address,
    pub root: Hash256,
    pub tx_hash: Hash256,
    pub receipt_hash: Hash256,
    pub bloom: Bloom,
    pub difficulty: U256,
    pub number: U256,
    pub gas_limit: u64,
    pub gas_used: u64,
    pub time: u64,
    pub extra: HexBytes,
    pub mix_digest: Hash256,
    pub nonce: BlockNonce,
    /// Absent on headers sealed before the fee-market fork.
    pub base_fee: Option<U256>,
}

impl Header {
    /// The header's identity hash: Keccak-256 over the canonical RLP list.
    ///
    /// `base_fee` joins the list only when present, so pre-fork headers keep
    /// their historical hashes.
    pub fn seal_hash(&self) -> Hash256 {
        let mut payload = Vec::with_capacity(640);
        rlp::append_bytes(&mut payload, self.parent_hash.as_bytes());
        rlp::append_bytes(&mut payload, self.uncle_hash.as_bytes());
        rlp::append_bytes(&mut payload, self.coinbase.as_bytes());
        rlp::append_bytes(&mut payload, self.root.as_bytes());
        rlp::append_bytes(&mut payload, self.tx_hash.as_bytes());
        rlp::append_bytes(&mut payload, self.receipt_hash.as_bytes());
        rlp::append_bytes(&mut payload, self.bloom.as_bytes());
        rlp::append_u256(&mut payload, &self.difficulty);
        rlp::append_u256(&mut payload, &self.number);
        rlp::append_uint(&mut payload, self.gas_limit);
        rlp::append_uint(&mut payload, self.gas_used);
        rlp::append_uint(&mut payload, self.time);
        rlp::append_bytes(&mut payload, self.extra.as_bytes());
        rlp::append_bytes(&mut payload, self.mix_digest.as_bytes());
        rlp::append_bytes(&mut payload, self.nonce.as_bytes());
        if let Some(base_fee) = &self.base_fee {
            rlp::append_u256(&mut payload, base_fee);
        }
        keccak256(&rlp::wrap_list(&payload))
    }

    /// Encode to the external JSON value. The `hash` key is recomputed here
    /// and overrides anything a caller may believe the hash to be.
    pub fn to_json_value(&self) -> Result<serde_json::Value, CodecError> {
        serde_json::to_value(self.repr())
            .map_err(|e| CodecError::malformed("header", e.to_string()))
    }

    /// Encode to the external JSON text.
    pub fn to_json(&self) -> Result<String, CodecError> {
        serde_json::to_string(&self.repr())
            .map_err(|e| CodecError::malformed("header", e.to_string()))
    }

    /// Parse and apply an external representation in one atomic step.
    pub fn update_from_json(&mut self, input: &str) -> Result<(), CodecError> {
        let patch = HeaderPatch::from_json(input)?;
        patch.apply_to(self);
        Ok(())
    }

    fn repr(&self) -> HeaderRepr {
        HeaderRepr {
            parent_hash: self.parent_hash,
            uncle_hash: self.uncle_hash,
            coinbase: self.coinbase,
            root: self.root,
            tx_hash: self.tx_hash,
            receipt_hash: self.receipt_hash,
            bloom: self.bloom,
            difficulty: self.difficulty,
            number: self.number,
            gas_limit: self.gas_limit,
            gas_used: self.gas_used,
            time: self.time,
            extra: self.extra.clone(),
            mix_digest: self.mix_digest,
            nonce: self.nonce,
            base_fee: self.base_fee,
            hash: self.seal_hash(),
        }
    }
}

/// The external field layout, encode side.
#[derive(Serialize)]
struct HeaderRepr {
    #[serde(rename = "parentHash")]
    parent_hash: Hash256,
    #[serde(rename = "sha3Uncles")]
    uncle_hash: Hash256,
    #[serde(rename = "miner")]
    coinbase: Address,
    #[serde(rename = "stateRoot")]
    root: Hash256,
    #[serde(rename = "transactionsRoot")]
    tx_hash: Hash256,
    #[serde(rename = "receiptsRoot")]
    receipt_hash: Hash256,
    #[serde(rename = "logsBloom")]
    bloom: Bloom,
    #[serde(rename = "difficulty", with = "quantity::u256_hex")]
    difficulty: U256,
    #[serde(rename = "number", with = "quantity::u256_hex")]
    number: U256,
    #[serde(rename = "gasLimit", with = "quantity::u64_hex")]
    gas_limit: u64,
    #[serde(rename = "gasUsed", with = "quantity::u64_hex")]
    gas_used: u64,
    #[serde(rename = "timestamp", with = "quantity::u64_hex")]
    time: u64,
    #[serde(rename = "extraData")]
    extra: HexBytes,
    #[serde(rename = "mixHash")]
    mix_digest: Hash256,
    #[serde(rename = "nonce")]
    nonce: BlockNonce,
    #[serde(
        rename = "baseFeePerGas",
        with = "quantity::u256_hex_opt",
        skip_serializing_if = "Option::is_none"
    )]
    base_fee: Option<U256>,
    #[serde(rename = "hash")]
    hash: Hash256,
}

/// The external field layout, decode side: every key optional.
///
/// A `hash` key in the input is parsed for well-formedness but never applied
/// to a target — the seal hash is always derived from the other fields. The
/// value that was ignored stays readable via [`HeaderPatch::ignored_hash`].
#[derive(Debug, Default, Deserialize)]
pub struct HeaderPatch {
    #[serde(rename = "parentHash")]
    pub parent_hash: Option<Hash256>,
    #[serde(rename = "sha3Uncles")]
    pub uncle_hash: Option<Hash256>,
    #[serde(rename = "miner")]
    pub coinbase: Option<Address>,
    #[serde(rename = "stateRoot")]
    pub root: Option<Hash256>,
    #[serde(rename = "transactionsRoot")]
    pub tx_hash: Option<Hash256>,
    #[serde(rename = "receiptsRoot")]
    pub receipt_hash: Option<Hash256>,
    #[serde(rename = "logsBloom")]
    pub bloom: Option<Bloom>,
    #[serde(rename = "difficulty", default, with = "quantity::u256_hex_opt")]
    pub difficulty: Option<U256>,
    #[serde(rename = "number", default, with = "quantity::u256_hex_opt")]
    pub number: Option<U256>,
    #[serde(rename = "gasLimit", default, with = "quantity::u64_hex_opt")]
    pub gas_limit: Option<u64>,
    #[serde(rename = "gasUsed", default, with = "quantity::u64_hex_opt")]
    pub gas_used: Option<u64>,
    #[serde(rename = "timestamp", default, with = "quantity::u64_hex_opt")]
    pub time: Option<u64>,
    #[serde(rename = "extraData")]
    pub extra: Option<HexBytes>,
    #[serde(rename = "mixHash")]
    pub mix_digest: Option<Hash256>,
    #[serde(rename = "nonce")]
    pub nonce: Option<BlockNonce>,
    #[serde(rename = "baseFeePerGas", default, with = "quantity::u256_hex_opt")]
    pub base_fee: Option<U256>,
    #[serde(rename = "hash")]
    hash: Option<Hash256>,
}

impl HeaderPatch {
    /// Stage one: parse the whole representation. Fails without touching any
    /// target if any present field is malformed. Unrecognized keys are
    /// ignored.
    pub fn from_json(input: &str) -> Result<Self, CodecError> {
        serde_json::from_str(input).map_err(|e| CodecError::malformed("header", e.to_string()))
    }

    /// Stage two: copy every present field onto the target.
    pub fn apply_to(&self, header: &mut Header) {
        if let Some(v) = self.parent_hash {
            header.parent_hash = v;
        }
        if let Some(v) = self.uncle_hash {
            header.uncle_hash = v;
        }
        if let Some(v) = self.coinbase {
            header.coinbase = v;
        }
        if let Some(v) = self.root {
            header.root = v;
        }
        if let Some(v) = self.tx_hash {
            header.tx_hash = v;
        }
        if let Some(v) = self.receipt_hash {
            header.receipt_hash = v;
        }
        if let Some(v) = self.bloom {
            header.bloom = v;
        }
        if let Some(v) = self.difficulty {
            header.difficulty = v;
        }
        if let Some(v) = self.number {
            header.number = v;
        }
        if let Some(v) = self.gas_limit {
            header.gas_limit = v;
        }
        if let Some(v) = self.gas_used {
            header.gas_used = v;
        }
        if let Some(v) = self.time {
            header.time = v;
        }
        if let Some(v) = &self.extra {
            header.extra = v.clone();
        }
        if let Some(v) = self.mix_digest {
            header.mix_digest = v;
        }
        if let Some(v) = self.nonce {
            header.nonce = v;
        }
        if let Some(v) = self.base_fee {
            header.base_fee = Some(v);
        }
        // self.hash is never applied: the seal hash is derived, not stored.
    }

    /// The `hash` value the input carried, if any. Informational only.
    pub fn ignored_hash(&self) -> Option<&Hash256> {
        self.hash.as_ref()
    }
}
