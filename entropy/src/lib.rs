//! Environmental entropy for picking a pending applicant.
//!
//! The registry only needs *some* unpredictability when it hands a voter a
//! candidate, so it mixes whatever low-entropy input the environment offers
//! (a block-like height counter, the current time, the caller).
//!
//! **Known limitation:** whoever controls block production (or, here, the
//! clock and the call order) can steer the output. Nothing in this crate is
//! a verifiable or tamper-proof randomness service; do not use it where
//! unpredictability carries value.

pub mod block;
pub mod error;

pub use block::BlockEntropy;
pub use error::EntropyError;

/// Trait for providing environmental entropy.
pub trait EntropySource: Send + Sync {
    /// Get entropy for a given context (e.g. the caller's address bytes).
    fn entropy(&self, context: &[u8]) -> Result<EntropyOutput, EntropyError>;

    /// Human-readable name of this entropy source.
    fn name(&self) -> &str;
}

/// The output of an entropy source.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EntropyOutput {
    /// The mixed bytes (32 bytes).
    pub value: [u8; 32],
    /// Block height (or sequence number) the value was drawn at.
    pub height: u64,
}
