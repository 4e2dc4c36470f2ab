//! Random pending-applicant selection from environmental entropy.

use crate::error::GovernanceError;
use veri_crypto::{blake2b_256_multi, digest_index};
use veri_entropy::EntropySource;
use veri_types::Address;

/// Picks one pending applicant for a voter to review.
///
/// Algorithm: draw entropy for the caller, compute `Hash(entropy || caller)`,
/// reduce it modulo the number of pending applicants, and index into the
/// dense pending slice. Whoever controls the entropy input controls the pick;
/// see `veri_entropy` for the limitation.
pub struct CandidateSelector;

impl CandidateSelector {
    pub fn pick(
        &self,
        entropy: &dyn EntropySource,
        pending: &[Address],
        caller: &Address,
    ) -> Result<Address, GovernanceError> {
        if pending.is_empty() {
            return Err(GovernanceError::NoPendingApplicants);
        }
        let caller_bytes = caller.as_str().as_bytes();
        let draw = entropy.entropy(caller_bytes)?;
        let digest = blake2b_256_multi(&[&draw.value, caller_bytes]);
        let index = digest_index(&digest, pending.len()).ok_or(GovernanceError::NoPendingApplicants)?;
        tracing::debug!(
            caller = %caller,
            source = entropy.name(),
            height = draw.height,
            index,
            pending = pending.len(),
            "selected pending applicant"
        );
        pending
            .get(index)
            .cloned()
            .ok_or(GovernanceError::NoPendingApplicants)
    }
}
