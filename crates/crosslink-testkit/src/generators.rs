//! Proptest generators for property-based testing.

use proptest::prelude::*;

use primitive_types::U256;

use crosslink_core::{
    Address, BlockNonce, Bloom, Hash256, Header, HexBytes, LegacyTx, Transaction,
};

/// Generate a random 256-bit quantity of any width.
pub fn u256() -> impl Strategy<Value = U256> {
    prop::collection::vec(any::<u8>(), 0..=32).prop_map(|bytes| U256::from_big_endian(&bytes))
}

/// Generate a random Hash256.
pub fn hash256() -> impl Strategy<Value = Hash256> {
    any::<[u8; 32]>().prop_map(Hash256::from_bytes)
}

/// Generate a random Address.
pub fn address() -> impl Strategy<Value = Address> {
    any::<[u8; 20]>().prop_map(Address::from_bytes)
}

/// Generate a random Bloom.
pub fn bloom() -> impl Strategy<Value = Bloom> {
    prop::collection::vec(any::<u8>(), 256).prop_map(|bytes| {
        let mut arr = [0u8; 256];
        arr.copy_from_slice(&bytes);
        Bloom::from_bytes(arr)
    })
}

/// Generate a random BlockNonce.
pub fn block_nonce() -> impl Strategy<Value = BlockNonce> {
    any::<[u8; 8]>().prop_map(BlockNonce::from_bytes)
}

/// Generate payload bytes of bounded length.
pub fn hex_bytes(max_len: usize) -> impl Strategy<Value = HexBytes> {
    prop::collection::vec(any::<u8>(), 0..=max_len).prop_map(HexBytes::from)
}

prop_compose! {
    /// Generate a header with every field randomized.
    pub fn header()(
        links in (hash256(), hash256(), address()),
        roots in (hash256(), hash256(), hash256()),
        bloom in bloom(),
        big_quantities in (u256(), u256()),
        small_quantities in (any::<u64>(), any::<u64>(), any::<u64>()),
        extra in hex_bytes(64),
        seal in (hash256(), block_nonce()),
        base_fee in prop::option::of(u256()),
    ) -> Header {
        let (parent_hash, uncle_hash, coinbase) = links;
        let (root, tx_hash, receipt_hash) = roots;
        let (difficulty, number) = big_quantities;
        let (gas_limit, gas_used, time) = small_quantities;
        let (mix_digest, nonce) = seal;
        Header {
            parent_hash,
            uncle_hash,
            coinbase,
            root,
            tx_hash,
            receipt_hash,
            bloom,
            difficulty,
            number,
            gas_limit,
            gas_used,
            time,
            extra,
            mix_digest,
            nonce,
            base_fee,
        }
    }
}

prop_compose! {
    /// Generate a legacy transaction with an arbitrary V value.
    pub fn legacy_tx()(
        nonce in any::<u64>(),
        gas_price in u256(),
        gas in any::<u64>(),
        to in prop::option::of(address()),
        value in u256(),
        data in hex_bytes(128),
        v in u256(),
        sig in (u256(), u256()),
    ) -> LegacyTx {
        let (r, s) = sig;
        LegacyTx { nonce, gas_price, gas, to, value, data, v, r, s }
    }
}

prop_compose! {
    /// Generate a legacy transaction protected for a specific chain id.
    pub fn legacy_tx_on_chain(chain_id: u64)(
        inner in legacy_tx(),
        parity in any::<bool>(),
    ) -> LegacyTx {
        LegacyTx {
            v: U256::from(chain_id) * 2u64 + 35u64 + u64::from(parity),
            ..inner
        }
    }
}

/// Generate a whole transaction wrapping a legacy payload.
pub fn legacy_transaction() -> impl Strategy<Value = Transaction> {
    legacy_tx().prop_map(Transaction::legacy)
}
