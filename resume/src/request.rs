//! Verification requests and their one-shot resolution.

use serde::{Deserialize, Serialize};
use veri_types::{Address, Timestamp, TokenAmount};

use crate::error::ResumeError;

pub type RequestId = u64;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RequestStatus {
    Pending,
    Verified,
    Rejected,
}

impl RequestStatus {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::Pending)
    }
}

/// An employer's resolution of a pending request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Decision {
    Verified,
    Rejected,
}

impl Decision {
    pub fn code(self) -> u8 {
        match self {
            Self::Verified => 1,
            Self::Rejected => 2,
        }
    }
}

impl From<Decision> for RequestStatus {
    fn from(decision: Decision) -> Self {
        match decision {
            Decision::Verified => Self::Verified,
            Decision::Rejected => Self::Rejected,
        }
    }
}

/// Numeric status codes: `1` verified, `2` rejected.
impl TryFrom<u8> for Decision {
    type Error = ResumeError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(Self::Verified),
            2 => Ok(Self::Rejected),
            other => Err(ResumeError::InvalidDecision(other)),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationRequest {
    pub id: RequestId,
    pub employee: Address,
    pub employer: Address,
    pub content: String,
    pub status: RequestStatus,
    /// Fee held in escrow while pending.
    pub fee: TokenAmount,
    pub created_at: Timestamp,
    pub resolved_at: Option<Timestamp>,
}
