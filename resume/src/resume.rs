//! Resume records.

use serde::{Deserialize, Serialize};
use veri_types::{Address, Timestamp};

use crate::request::RequestId;

/// One employer-attested line on a resume. Immutable once appended.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResumeEntry {
    pub employer: Address,
    pub content: String,
    pub verified_at: Timestamp,
    /// The request this entry was attested through.
    pub request_id: RequestId,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeResume {
    pub owner: Address,
    /// In attestation order.
    pub entries: Vec<ResumeEntry>,
    pub created_at: Timestamp,
}

impl EmployeeResume {
    pub fn new(owner: Address, now: Timestamp) -> Self {
        Self {
            owner,
            entries: Vec::new(),
            created_at: now,
        }
    }

    /// Entries attested by `employer`.
    pub fn entries_from<'a>(
        &'a self,
        employer: &'a Address,
    ) -> impl Iterator<Item = &'a ResumeEntry> + 'a {
        self.entries.iter().filter(move |e| &e.employer == employer)
    }
}
