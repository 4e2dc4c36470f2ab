use thiserror::Error;
use veri_types::ErrorKind;

#[derive(Debug, Error)]
pub enum NodeError {
    #[error("governance error: {0}")]
    Governance(#[from] veri_governance::GovernanceError),

    #[error("verification ledger error: {0}")]
    Resume(#[from] veri_resume::ResumeError),

    #[error("token ledger error: {0}")]
    Token(#[from] veri_token::TokenError),

    #[error("invalid parameters: {0}")]
    Types(#[from] veri_types::TypesError),

    #[error("config error: {0}")]
    Config(String),
}

impl NodeError {
    /// Caller-facing category of the failure.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Governance(e) => e.kind(),
            Self::Resume(e) => e.kind(),
            Self::Token(e) => e.kind(),
            Self::Types(_) | Self::Config(_) => ErrorKind::PreconditionViolation,
        }
    }
}
