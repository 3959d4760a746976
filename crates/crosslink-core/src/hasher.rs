//! Transaction identity hashing.
//!
//! A transaction hashes one of two ways, selected by the chain id it
//! carries: the standard Keccak-256 path, or the SHA-256 envelope path used
//! by one specific exchange chain. The two digests are never interchangeable.

use std::sync::OnceLock;

use primitive_types::U256;

use crate::crypto::{keccak256, sha256};
use crate::envelope::{encode_envelope, EncodableTxData, EnvelopeRegistry, MSG_ETHEREUM_TX_ROUTE};
use crate::error::CodecError;
use crate::primitives::Hash256;
use crate::transaction::{Transaction, TxPayload};

/// OKExChain mainnet.
pub const OKEX_CHAIN_ID: u64 = 66;

/// Which digest pipeline a transaction takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HashRoute {
    /// Keccak-256 over the canonical transaction encoding.
    Standard,
    /// SHA-256 over the length-prefixed binary envelope.
    Envelope,
}

/// Pure routing decision: only the one designated chain takes the envelope.
pub fn route_for(tx: &Transaction) -> HashRoute {
    if tx.chain_id() == U256::from(OKEX_CHAIN_ID) {
        HashRoute::Envelope
    } else {
        HashRoute::Standard
    }
}

/// Keccak-256 of the transaction's canonical encoding (the standard path).
pub fn standard_tx_hash(tx: &Transaction) -> Hash256 {
    keccak256(&tx.canonical_bytes())
}

/// Computes transaction identity hashes, owning the envelope registry.
///
/// The registry is built at most once, on first use of the envelope path;
/// concurrent first callers block on a single initialization and then share
/// the sealed, immutable registry. A pre-built registry can also be injected
/// with [`TxHasher::with_registry`].
#[derive(Debug, Default)]
pub struct TxHasher {
    registry: OnceLock<EnvelopeRegistry>,
}

impl TxHasher {
    pub const fn new() -> Self {
        Self {
            registry: OnceLock::new(),
        }
    }

    /// Build a hasher around an already-sealed registry.
    pub fn with_registry(registry: EnvelopeRegistry) -> Self {
        let cell = OnceLock::new();
        let _ = cell.set(registry);
        Self { registry: cell }
    }

    /// The sealed registry, initializing it on first use.
    pub fn registry(&self) -> &EnvelopeRegistry {
        self.registry.get_or_init(EnvelopeRegistry::standard)
    }

    /// The canonical identity hash of a transaction.
    pub fn hash(&self, tx: &Transaction) -> Result<Hash256, CodecError> {
        let route = route_for(tx);
        tracing::trace!(chain_id = %tx.chain_id(), ?route, "selected transaction hash route");
        match route {
            HashRoute::Standard => Ok(standard_tx_hash(tx)),
            HashRoute::Envelope => self.envelope_hash(tx),
        }
    }

    /// The envelope-path hash. Only legacy payloads have an envelope codec.
    pub fn envelope_hash(&self, tx: &Transaction) -> Result<Hash256, CodecError> {
        let inner = match tx.payload() {
            TxPayload::Legacy(inner) => inner,
            TxPayload::DynamicFee(_) => return Err(CodecError::NotSupportedCodec),
        };
        let data = EncodableTxData::project(inner);
        let bytes = encode_envelope(self.registry(), MSG_ETHEREUM_TX_ROUTE, &data)?;
        Ok(sha256(&bytes))
    }
}
