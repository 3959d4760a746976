//! # Crosslink Core
//!
//! Canonical record encoding and hashing for EVM-compatible chain records.
//!
//! This crate contains no I/O, no storage, no networking. It is pure
//! computation over two record types:
//!
//! - [`Header`] - a block header, with a canonical JSON codec that always
//!   recomputes the derived seal hash on encode
//! - [`Transaction`] - a transaction wrapping a closed payload union, hashed
//!   over one of two mutually exclusive digest paths
//!
//! ## Hash routing
//!
//! [`TxHasher`] picks the digest path from the chain id the transaction
//! carries: the one designated exchange chain hashes SHA-256 over a
//! length-prefixed binary envelope (see [`envelope`]); every other chain
//! hashes Keccak-256 over the canonical transaction encoding.
//!
//! ## Encoding conventions
//!
//! The JSON codec renders integers as minimal hex (`0x0`, `0xff`); the
//! envelope renders them as base-10 decimal strings. Both are frozen
//! compatibility contracts; see [`quantity`].

pub mod crypto;
pub mod envelope;
pub mod error;
pub mod hasher;
pub mod header;
pub mod primitives;
pub mod quantity;
mod rlp;
pub mod transaction;
mod wire;

pub use crypto::{keccak256, sha256};
pub use envelope::{
    decode_envelope, encode_envelope, EncodableTxData, EnvelopeRegistry, RegistryBuilder,
    TypeTag, MSG_ETHEREUM_TX_ROUTE,
};
pub use error::CodecError;
pub use hasher::{route_for, standard_tx_hash, HashRoute, TxHasher, OKEX_CHAIN_ID};
pub use header::{Header, HeaderPatch};
pub use primitives::{Address, BlockNonce, Bloom, Hash256, HexBytes};
pub use transaction::{DynamicFeeTx, LegacyTx, Transaction, TxPayload};
