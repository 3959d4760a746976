//! # Crosslink Testkit
//!
//! Testing utilities for the Crosslink record codec.
//!
//! This crate provides:
//!
//! - **Golden vectors**: fixed transactions with expected envelopes and
//!   digests for cross-implementation verification
//! - **Generators**: proptest strategies for headers and transactions
//! - **Fixtures**: known-value records for test scenarios
//!
//! ## Golden Vectors
//!
//! ```rust
//! use crosslink_testkit::vectors::all_vectors;
//!
//! for vector in all_vectors() {
//!     println!("{}: {}", vector.name, vector.digest);
//! }
//! ```
//!
//! ## Property Testing
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use crosslink_testkit::generators::header;
//!
//! proptest! {
//!     #[test]
//!     fn seal_hash_is_deterministic(h in header()) {
//!         prop_assert_eq!(h.seal_hash(), h.seal_hash());
//!     }
//! }
//! ```

pub mod fixtures;
pub mod generators;
pub mod vectors;

pub use fixtures::{
    dynamic_fee_tx_on_envelope_chain, envelope_tx, pre_fork_header, sample_header, standard_tx,
};
pub use vectors::{all_vectors, transaction_from_vector, verify_all_vectors, GoldenVector};
