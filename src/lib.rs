//! Keccak sponge constructions: the width-generic Keccak-p permutation,
//! the FIPS 202 fixed-output digests (SHA3-224/256/384/512 plus the legacy
//! Keccak variants), the SHAKE128/256 and cSHAKE128/256 extendable-output
//! functions, and the SP 800-185 derived constructions TupleHash and
//! ParallelHash.
//!
//! All digests stream: feed input with [`Digest::update`], take output
//! with [`Digest::digest`] or, for XOFs, through a [`XofReader`] obtained
//! from [`Xof::reader`].

pub mod encode;
pub mod errors;
pub mod keccak;

mod digest;
mod parallel_hash;
mod sha3;
mod shake;
mod sponge;
mod tuple_hash;
mod xof;

pub use digest::Digest;
pub use errors::{Error, Result};
pub use parallel_hash::ParallelHash;
pub use sha3::Sha3;
pub use shake::Shake;
pub use tuple_hash::TupleHash;
pub use xof::{Xof, XofReader};
