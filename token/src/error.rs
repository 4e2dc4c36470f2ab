//! Token-ledger errors.

use thiserror::Error;
use veri_types::ErrorKind;

#[derive(Debug, Error)]
pub enum TokenError {
    #[error("insufficient balance: need {needed}, available {available}")]
    InsufficientBalance { needed: u128, available: u128 },

    #[error("insufficient allowance: need {needed}, approved {approved}")]
    InsufficientAllowance { needed: u128, approved: u128 },

    #[error("amount must be non-zero")]
    ZeroAmount,

    #[error("arithmetic overflow in token ledger")]
    Overflow,
}

impl TokenError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InsufficientBalance { .. } | Self::InsufficientAllowance { .. } => {
                ErrorKind::InsufficientFunds
            }
            Self::ZeroAmount => ErrorKind::PreconditionViolation,
            Self::Overflow => ErrorKind::Arithmetic,
        }
    }
}
