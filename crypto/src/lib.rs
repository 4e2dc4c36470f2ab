//! Hashing primitives for the credential registry.
//!
//! - **Blake2b-256** for entropy mixing and candidate selection
//! - Digest-to-index reduction for picking from a dense collection

pub mod hash;

pub use hash::{blake2b_256, blake2b_256_multi, digest_index};
