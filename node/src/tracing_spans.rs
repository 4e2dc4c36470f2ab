//! Pre-built [`tracing::Span`] constructors for registry operations.
//!
//! Every state-transition call runs inside one of these, so the engine
//! events it emits (and the rollback warning, if any) share its fields.

use tracing::{info_span, Span};

use veri_types::Address;

/// Span covering an employer's application.
pub fn apply_span(employer: &Address) -> Span {
    info_span!("apply", employer = %employer)
}

/// Span covering one weighted vote, including any finalisation it triggers.
pub fn vote_span(voter: &Address, candidate: &Address) -> Span {
    info_span!("vote", voter = %voter, candidate = %candidate)
}

/// Span covering a resume-ledger call made by `caller`.
pub fn resume_span(action: &'static str, caller: &Address) -> Span {
    info_span!("resume", action, caller = %caller)
}

/// Span covering a token-ledger call made by `account`.
pub fn token_span(action: &'static str, account: &Address) -> Span {
    info_span!("token", action, account = %account)
}
