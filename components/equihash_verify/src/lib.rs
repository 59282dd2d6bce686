//! Verification for the [Equihash] Proof-of-Work algorithm.
//!
//! Equihash is based on a generalization of the Birthday problem: find a set of
//! `2^k` indices whose personalized BLAKE2b outputs, XOR-folded together in
//! `k` rounds of `n / (k + 1)` bits each, cancel to zero. *Finding* such a set
//! is a memory-bandwidth-bound search; *re-checking* a candidate set costs
//! `2^k` hash evaluations and a single folding pass. This crate implements
//! only the re-checking side. Solution generation, and whatever consensus
//! rules act on the validity bit, belong to the caller.
//!
//! Both entry points are pure, stateless functions over borrowed buffers, and
//! are safe to call from any number of threads at once. Every malformed input
//! collapses into the single `false` outcome: a caller cannot distinguish a
//! mis-parameterized call from a mis-solved one, and must treat any non-`true`
//! result as a rejection.
//!
//! Solutions are accepted for any `(n, k)` whose collision bit length
//! `n / (k + 1)` lies in `8..=24` (which covers every deployed parameter set,
//! including `(200, 9)`, `(144, 5)`, and `(96, 5)`); anything else is reported
//! as invalid rather than unsupported.
//!
#![cfg_attr(feature = "std", doc = "## Feature flags")]
#![cfg_attr(feature = "std", doc = document_features::document_features!())]
//!
//! References
//! ==========
//! - Alex Biryukov and Dmitry Khovratovich.
//!   [*Equihash: Asymmetric Proof-of-Work Based on the Generalized Birthday Problem.*][BK16]
//!   NDSS ’16.
//! - [Section 7.6.1: Equihash.] Zcash Protocol Specification.
//!
//! [Equihash]: https://zips.z.cash/protocol/protocol.pdf#equihash
//! [BK16]: https://www.internetsociety.org/sites/default/files/blogs-media/equihash-asymmetric-proof-of-work-based-generalized-birthday-problem.pdf
//! [Section 7.6.1: Equihash.]: https://zips.z.cash/protocol/protocol.pdf#equihash

// Catch documentation errors caused by code changes.
#![deny(rustdoc::broken_intra_doc_links)]
#![no_std]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(feature = "std")]
extern crate std;

#[macro_use]
extern crate alloc;

mod encoding;
mod params;
mod verify;

#[cfg(test)]
mod test_vectors;

pub use verify::{is_valid_encoded_solution, is_valid_solution};
