use thiserror::Error;
use veri_token::TokenError;
use veri_types::ErrorKind;

#[derive(Debug, Error)]
pub enum ResumeError {
    #[error("{0} already owns a resume profile")]
    ProfileExists(String),

    #[error("{0} has no resume profile")]
    ProfileNotFound(String),

    #[error("employer {0} is not in the trusted set")]
    EmployerNotTrusted(String),

    #[error("verification request {0} does not exist")]
    RequestNotFound(u64),

    #[error("{caller} is not the employer named on request {id}")]
    NotRequestOwner { id: u64, caller: String },

    #[error("verification request {0} has already been resolved")]
    RequestNotPending(u64),

    #[error("invalid decision code {0}")]
    InvalidDecision(u8),

    #[error("request id space exhausted")]
    Overflow,

    #[error("token ledger: {0}")]
    Token(#[from] TokenError),
}

impl ResumeError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::ProfileExists(_)
            | Self::EmployerNotTrusted(_)
            | Self::NotRequestOwner { .. }
            | Self::RequestNotPending(_)
            | Self::InvalidDecision(_) => ErrorKind::PreconditionViolation,
            Self::ProfileNotFound(_) | Self::RequestNotFound(_) => ErrorKind::NotFound,
            Self::Overflow => ErrorKind::Arithmetic,
            Self::Token(e) => e.kind(),
        }
    }
}
