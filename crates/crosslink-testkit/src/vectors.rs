//! Golden test vectors for cross-implementation verification.
//!
//! Every implementation of the record codec must produce identical:
//! - envelope bytes (for envelope-path transactions)
//! - identity digests on both hash paths
//!
//! Vectors are generated from fixed inputs; the envelope digests of the
//! frozen vectors are additionally pinned byte-for-byte in
//! `tests/golden.rs`.

use primitive_types::U256;
use serde::{Deserialize, Serialize};

use crosslink_core::{
    encode_envelope, route_for, Address, EncodableTxData, EnvelopeRegistry, HashRoute, LegacyTx,
    Transaction, TxHasher, MSG_ETHEREUM_TX_ROUTE,
};

/// A single golden test vector.
#[derive(Debug, Serialize, Deserialize)]
pub struct GoldenVector {
    pub name: String,
    pub description: String,

    // Inputs
    pub nonce: u64,
    pub gas_price: String, // decimal
    pub gas_limit: u64,
    pub recipient: Option<String>, // 20 bytes hex
    pub value: String,             // decimal
    pub payload: String,           // hex
    pub v: String,                 // decimal
    pub r: String,                 // decimal
    pub s: String,                 // decimal

    // Derived outputs
    pub chain_id: String,         // decimal
    pub route: String,            // "standard" | "envelope"
    pub envelope: Option<String>, // hex, envelope route only
    pub digest: String,           // 32 bytes hex
}

/// Generate a golden vector from a legacy transaction.
fn generate_vector(name: &str, description: &str, inner: LegacyTx) -> GoldenVector {
    let tx = Transaction::legacy(inner.clone());
    let hasher = TxHasher::new();
    let route = route_for(&tx);

    let envelope = match route {
        HashRoute::Envelope => {
            let registry = EnvelopeRegistry::standard();
            let data = EncodableTxData::project(&inner);
            let bytes = encode_envelope(&registry, MSG_ETHEREUM_TX_ROUTE, &data)
                .expect("standard registry carries the route");
            Some(hex::encode(bytes))
        }
        HashRoute::Standard => None,
    };

    GoldenVector {
        name: name.to_string(),
        description: description.to_string(),
        nonce: inner.nonce,
        gas_price: inner.gas_price.to_string(),
        gas_limit: inner.gas,
        recipient: inner.to.map(|a| a.to_hex()),
        value: inner.value.to_string(),
        payload: hex::encode(inner.data.as_bytes()),
        v: inner.v.to_string(),
        r: inner.r.to_string(),
        s: inner.s.to_string(),
        chain_id: tx.chain_id().to_string(),
        route: match route {
            HashRoute::Standard => "standard".to_string(),
            HashRoute::Envelope => "envelope".to_string(),
        },
        envelope,
        digest: hasher.hash(&tx).expect("legacy payload always hashes").to_hex(),
    }
}

/// Generate all golden vectors.
pub fn all_vectors() -> Vec<GoldenVector> {
    let reference = LegacyTx {
        nonce: 5,
        gas_price: U256::from(100u64),
        gas: 21_000,
        to: None,
        value: U256::zero(),
        data: Vec::new().into(),
        v: U256::from(167u64),
        r: U256::from(2_718_281_828_459_045_235u64),
        s: U256::from(3_141_592_653_589_793_238u64),
    };

    vec![
        generate_vector(
            "envelope_contract_creation",
            "Chain 66 legacy transaction: no recipient, zero value, empty payload",
            reference.clone(),
        ),
        generate_vector(
            "envelope_transfer_with_payload",
            "Chain 66 legacy transaction with recipient, value, and call data",
            LegacyTx {
                nonce: 0,
                gas_price: U256::from(1_000_000_000u64),
                gas: 90_000,
                to: Some(Address::from_bytes([0x11; 20])),
                value: U256::from(1u64),
                data: vec![0xde, 0xad, 0xbe, 0xef].into(),
                v: U256::from(168u64),
                r: U256::from(7u64),
                s: U256::from(9u64),
            },
        ),
        generate_vector(
            "standard_chain_one",
            "The reference payload signed for chain 1 takes the standard path",
            LegacyTx {
                v: U256::from(37u64),
                ..reference
            },
        ),
    ]
}

/// Rebuild the transaction a vector was generated from.
pub fn transaction_from_vector(vector: &GoldenVector) -> Transaction {
    let to = vector.recipient.as_ref().map(|s| {
        Address::from_hex(s).expect("vector recipient is 20 bytes of hex")
    });
    Transaction::legacy(LegacyTx {
        nonce: vector.nonce,
        gas_price: U256::from_dec_str(&vector.gas_price).expect("decimal gas price"),
        gas: vector.gas_limit,
        to,
        value: U256::from_dec_str(&vector.value).expect("decimal value"),
        data: hex::decode(&vector.payload).expect("hex payload").into(),
        v: U256::from_dec_str(&vector.v).expect("decimal v"),
        r: U256::from_dec_str(&vector.r).expect("decimal r"),
        s: U256::from_dec_str(&vector.s).expect("decimal s"),
    })
}

/// Check every vector against a fresh hasher; returns the first mismatch.
pub fn verify_all_vectors() -> Result<(), String> {
    let hasher = TxHasher::new();
    for vector in all_vectors() {
        let tx = transaction_from_vector(&vector);
        let digest = hasher
            .hash(&tx)
            .map_err(|e| format!("{}: {}", vector.name, e))?;
        if digest.to_hex() != vector.digest {
            return Err(format!(
                "{}: digest mismatch: expected {}, got {}",
                vector.name,
                vector.digest,
                digest.to_hex()
            ));
        }
    }
    Ok(())
}
