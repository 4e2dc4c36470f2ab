//! Employer admission governance for the credential registry.
//!
//! Lifecycle: Apply (native deposit) → Voting (stake-weighted, one vote per
//! address) → Finalisation at the quorum cap → Accepted (trusted set) or
//! Rejected (discarded).
//!
//! Key principle: a vote is a stake. Each voter escrows tokens with the
//! registry; at finalisation the winning side gets its stake back plus a
//! flat bonus on its own stake, the losing side forfeits.

pub mod application;
pub mod directory;
pub mod error;
pub mod pending;
pub mod registry;
pub mod selection;
pub mod settlement;

pub use application::{ApplicationStatus, ApplicationView, EmployerApplication, VoteRecord};
pub use directory::{ProfileDirectory, TrustDirectory};
pub use error::GovernanceError;
pub use pending::PendingSet;
pub use registry::{EmployerRegistry, VoteReceipt};
pub use selection::CandidateSelector;
pub use settlement::{compute_settlement, Settlement, VoterSettlement};
