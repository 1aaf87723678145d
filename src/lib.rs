//! Pure Rust arithmetic in the secp256k1 base field: the prime field of
//! order p = 2^256 - 2^32 - 977.
//!
//! Elements use a redundant representation of 5 64-bit limbs in base 2^52
//! with lazy reduction, ported from the implementation in
//! <https://github.com/bitcoin-core/secp256k1>. See [`FieldElement`] for the
//! magnitude rules callers are expected to maintain.
//!
//! ## Minimum Supported Rust Version
//!
//! Rust **1.65** or higher.
//!
//! Minimum supported Rust version can be changed in the future, but it will
//! be done with a minor version bump.

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, unused_qualifications)]

#[cfg(test)]
mod dev;
mod field;

#[cfg(any(feature = "test-vectors", test))]
pub mod test_vectors;

pub use crate::field::FieldElement;
pub use subtle;
pub use zeroize;
