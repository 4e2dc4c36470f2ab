use thiserror::Error;
use veri_entropy::EntropyError;
use veri_token::TokenError;
use veri_types::ErrorKind;

#[derive(Debug, Error)]
pub enum GovernanceError {
    #[error("employer {0} has already applied or is already trusted")]
    AlreadyApplied(String),

    #[error("insufficient deposit: need {needed}, provided {provided}")]
    InsufficientDeposit { needed: u128, provided: u128 },

    #[error("no pending applicants")]
    NoPendingApplicants,

    #[error("{0} has no employee profile and may not vote")]
    NotEligible(String),

    #[error("no pending application for {0}")]
    ApplicationNotFound(String),

    #[error("{0} has already voted on this application")]
    DuplicateVote(String),

    #[error("vote weight must be non-zero")]
    ZeroWeight,

    #[error("treasury cannot cover settlement: need {needed}, available {available}")]
    TreasuryShortfall { needed: u128, available: u128 },

    #[error("arithmetic overflow in vote tally")]
    Overflow,

    #[error("token ledger: {0}")]
    Token(#[from] TokenError),

    #[error("entropy: {0}")]
    Entropy(#[from] EntropyError),
}

impl GovernanceError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::AlreadyApplied(_)
            | Self::NotEligible(_)
            | Self::DuplicateVote(_)
            | Self::ZeroWeight => ErrorKind::PreconditionViolation,
            Self::InsufficientDeposit { .. } | Self::TreasuryShortfall { .. } => {
                ErrorKind::InsufficientFunds
            }
            Self::NoPendingApplicants | Self::ApplicationNotFound(_) => ErrorKind::NotFound,
            Self::Overflow => ErrorKind::Arithmetic,
            Self::Token(e) => e.kind(),
            Self::Entropy(e) => e.kind(),
        }
    }
}
