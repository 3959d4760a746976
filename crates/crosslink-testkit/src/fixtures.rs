//! Test fixtures and helpers.
//!
//! Known-value records shared by unit, property, and golden tests.

use primitive_types::U256;

use crosslink_core::{
    Address, BlockNonce, Bloom, DynamicFeeTx, Hash256, Header, LegacyTx, Transaction,
};

/// A fully populated post-fork header with distinct values in every field.
pub fn sample_header() -> Header {
    Header {
        parent_hash: Hash256::from_bytes([0x01; 32]),
        uncle_hash: Hash256::from_bytes([0x02; 32]),
        coinbase: Address::from_bytes([0x03; 20]),
        root: Hash256::from_bytes([0x04; 32]),
        tx_hash: Hash256::from_bytes([0x05; 32]),
        receipt_hash: Hash256::from_bytes([0x06; 32]),
        bloom: Bloom::from_bytes([0x07; 256]),
        difficulty: U256::from(131_072u64),
        number: U256::from(1_000_000u64),
        gas_limit: 21_000,
        gas_used: 20_000,
        time: 1_620_000_000,
        extra: vec![0xca, 0xfe].into(),
        mix_digest: Hash256::from_bytes([0x08; 32]),
        nonce: BlockNonce::from_u64(0x0102030405060708),
        base_fee: Some(U256::from(7u64)),
    }
}

/// A header sealed before the fee-market fork: no base fee.
pub fn pre_fork_header() -> Header {
    let mut header = sample_header();
    header.base_fee = None;
    header
}

/// The envelope-path reference transaction: chain 66, nonce 5, gas price 100,
/// gas limit 21000, value 0, empty payload, fixed signature values.
pub fn envelope_tx() -> Transaction {
    Transaction::legacy(LegacyTx {
        nonce: 5,
        gas_price: U256::from(100u64),
        gas: 21_000,
        to: None,
        value: U256::zero(),
        data: Vec::new().into(),
        v: U256::from(167u64),
        r: U256::from(2_718_281_828_459_045_235u64),
        s: U256::from(3_141_592_653_589_793_238u64),
    })
}

/// The same payload signed for chain 1, which takes the standard path.
pub fn standard_tx() -> Transaction {
    match envelope_tx().payload() {
        crosslink_core::TxPayload::Legacy(inner) => Transaction::legacy(LegacyTx {
            v: U256::from(37u64),
            ..inner.clone()
        }),
        _ => unreachable!(),
    }
}

/// A dynamic-fee transaction targeting the envelope chain; it has no
/// envelope codec and must be rejected by the envelope path.
pub fn dynamic_fee_tx_on_envelope_chain() -> Transaction {
    Transaction::dynamic_fee(DynamicFeeTx {
        chain_id: U256::from(crosslink_core::OKEX_CHAIN_ID),
        nonce: 1,
        gas_tip_cap: U256::from(2u64),
        gas_fee_cap: U256::from(100u64),
        gas: 21_000,
        to: Some(Address::from_bytes([0x22; 20])),
        value: U256::from(1u64),
        data: Vec::new().into(),
        v: U256::from(1u64),
        r: U256::from(11u64),
        s: U256::from(12u64),
    })
}
