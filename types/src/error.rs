//! Error taxonomy shared across crates.

use thiserror::Error;

/// Coarse classification every component error maps onto.
///
/// Callers branch on the kind; the concrete error carries the detail.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The caller's request is not permitted in the current state
    /// (already applied, duplicate vote, profile exists, not trusted, ...).
    PreconditionViolation,
    /// A balance or allowance is too low.
    InsufficientFunds,
    /// The referenced applicant, application, profile, or request does not exist.
    NotFound,
    /// An amount computation overflowed.
    Arithmetic,
    /// An environmental input (entropy) could not be obtained.
    Unavailable,
}

/// Errors raised while constructing core types.
#[derive(Debug, Error)]
pub enum TypesError {
    #[error("invalid address: {0}")]
    InvalidAddress(String),

    #[error("invalid registry parameter: {0}")]
    InvalidParams(String),
}
