//! Settlement at finalisation: refunds, bonuses, and forfeits.
//!
//! After an application reaches quorum, this module walks the per-voter
//! ledger once and computes:
//! - Winning voters: stake returned + bonus of `reward_bps` on their own stake
//! - Losing voters: stake forfeited
//!
//! What happens to forfeited stake is decided by the registry's
//! `ForfeitPolicy`, not here.

use crate::application::{ApplicationStatus, VoteRecord};
use crate::error::GovernanceError;
use serde::{Deserialize, Serialize};
use veri_types::{Address, TokenAmount};

/// Outcome for a single voter.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoterSettlement {
    pub voter: Address,
    pub support: bool,
    /// Amount staked with the vote.
    pub staked: TokenAmount,
    /// Whether the vote matched the outcome.
    pub won: bool,
    /// Bonus on top of the returned stake (winners only).
    pub bonus: TokenAmount,
    /// Total paid back to the voter: stake + bonus, or zero.
    pub payout: TokenAmount,
    /// Stake not returned (losers only).
    pub forfeited: TokenAmount,
}

/// Settlement of a finalised application.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settlement {
    pub employer: Address,
    pub outcome: ApplicationStatus,
    pub voters: Vec<VoterSettlement>,
    pub total_payout: TokenAmount,
    pub total_forfeited: TokenAmount,
}

/// Compute every voter's payout for a terminal `outcome`.
///
/// A `Pending` outcome settles nobody as a winner; callers only pass
/// `Accepted` or `Rejected`.
pub fn compute_settlement(
    employer: &Address,
    outcome: ApplicationStatus,
    votes: &[VoteRecord],
    reward_bps: u32,
) -> Result<Settlement, GovernanceError> {
    let mut voters = Vec::with_capacity(votes.len());
    let mut total_payout = TokenAmount::ZERO;
    let mut total_forfeited = TokenAmount::ZERO;

    for vote in votes {
        let won = match outcome {
            ApplicationStatus::Accepted => vote.support,
            ApplicationStatus::Rejected => !vote.support,
            ApplicationStatus::Pending => false,
        };
        let settled = if won {
            let bonus = vote.weight.bps(reward_bps).ok_or(GovernanceError::Overflow)?;
            let payout = vote.weight.checked_add(bonus).ok_or(GovernanceError::Overflow)?;
            total_payout = total_payout
                .checked_add(payout)
                .ok_or(GovernanceError::Overflow)?;
            VoterSettlement {
                voter: vote.voter.clone(),
                support: vote.support,
                staked: vote.weight,
                won: true,
                bonus,
                payout,
                forfeited: TokenAmount::ZERO,
            }
        } else {
            total_forfeited = total_forfeited
                .checked_add(vote.weight)
                .ok_or(GovernanceError::Overflow)?;
            VoterSettlement {
                voter: vote.voter.clone(),
                support: vote.support,
                staked: vote.weight,
                won: false,
                bonus: TokenAmount::ZERO,
                payout: TokenAmount::ZERO,
                forfeited: vote.weight,
            }
        };
        voters.push(settled);
    }

    Ok(Settlement {
        employer: employer.clone(),
        outcome,
        voters,
        total_payout,
        total_forfeited,
    })
}
