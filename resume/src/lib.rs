//! Verification ledger for employee resumes.
//!
//! Employees open a profile (anti-spam fee), then ask trusted employers to
//! attest resume lines by escrowing a request fee. The employer named on a
//! request resolves it once: a verified request becomes a permanent resume
//! entry and releases the escrow to the employer.
//!
//! Employer trust is read through [`veri_governance::TrustDirectory`]; the
//! ledger never mutates the registry.

pub mod error;
pub mod ledger;
pub mod request;
pub mod resume;

pub use error::ResumeError;
pub use ledger::ResumeLedger;
pub use request::{Decision, RequestId, RequestStatus, VerificationRequest};
pub use resume::{EmployeeResume, ResumeEntry};
