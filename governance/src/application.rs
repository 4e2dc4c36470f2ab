//! Employer applications and their running tallies.

use std::collections::HashSet;

use crate::error::GovernanceError;
use serde::{Deserialize, Serialize};
use veri_types::{Address, NativeAmount, Timestamp, TokenAmount};

/// Where an application stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ApplicationStatus {
    /// Collecting votes.
    Pending,
    /// Quorum reached with yes-weight strictly above no-weight; employer is trusted.
    Accepted,
    /// Quorum reached without a strict yes majority; application discarded.
    Rejected,
}

impl ApplicationStatus {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::Pending)
    }
}

/// One voter's escrowed position on an application.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteRecord {
    pub voter: Address,
    /// `true` = admit the employer.
    pub support: bool,
    /// Tokens staked with the vote (also its tally weight).
    pub weight: TokenAmount,
    pub cast_at: Timestamp,
}

/// An employer's application for admission to the trusted set.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EmployerApplication {
    /// The applying employer.
    pub employer: Address,
    /// Native value attached to the application.
    pub deposit: NativeAmount,
    /// Tokens the deposit minted into the registry treasury.
    pub treasury_credit: TokenAmount,
    /// Cumulative weight voting to admit.
    pub yes_weight: TokenAmount,
    /// Cumulative weight voting to reject.
    pub no_weight: TokenAmount,
    /// Number of votes recorded.
    pub vote_count: u32,
    /// Per-voter ledger, in submission order. Walked once at settlement.
    pub votes: Vec<VoteRecord>,
    /// One vote per address.
    voted: HashSet<Address>,
    pub status: ApplicationStatus,
    pub applied_at: Timestamp,
    pub finalized_at: Option<Timestamp>,
}

impl EmployerApplication {
    pub fn new(
        employer: Address,
        deposit: NativeAmount,
        treasury_credit: TokenAmount,
        now: Timestamp,
    ) -> Self {
        Self {
            employer,
            deposit,
            treasury_credit,
            yes_weight: TokenAmount::ZERO,
            no_weight: TokenAmount::ZERO,
            vote_count: 0,
            votes: Vec::new(),
            voted: HashSet::new(),
            status: ApplicationStatus::Pending,
            applied_at: now,
            finalized_at: None,
        }
    }

    pub fn has_voted(&self, voter: &Address) -> bool {
        self.voted.contains(voter)
    }

    /// Add a vote to the tallies. Nothing changes if the vote is rejected.
    pub fn record_vote(&mut self, vote: VoteRecord) -> Result<(), GovernanceError> {
        if self.voted.contains(&vote.voter) {
            return Err(GovernanceError::DuplicateVote(vote.voter.to_string()));
        }
        let (yes, no) = if vote.support {
            let yes = self
                .yes_weight
                .checked_add(vote.weight)
                .ok_or(GovernanceError::Overflow)?;
            (yes, self.no_weight)
        } else {
            let no = self
                .no_weight
                .checked_add(vote.weight)
                .ok_or(GovernanceError::Overflow)?;
            (self.yes_weight, no)
        };
        let count = self
            .vote_count
            .checked_add(1)
            .ok_or(GovernanceError::Overflow)?;

        self.yes_weight = yes;
        self.no_weight = no;
        self.vote_count = count;
        self.voted.insert(vote.voter.clone());
        self.votes.push(vote);
        Ok(())
    }

    /// Custody tokens this application owns: its treasury credit plus every
    /// stake escrowed so far.
    pub fn held(&self) -> Result<TokenAmount, GovernanceError> {
        self.treasury_credit
            .checked_add(self.yes_weight)
            .and_then(|sum| sum.checked_add(self.no_weight))
            .ok_or(GovernanceError::Overflow)
    }

    /// The outcome the current tallies would produce. Ties reject.
    pub fn leading_outcome(&self) -> ApplicationStatus {
        if self.yes_weight > self.no_weight {
            ApplicationStatus::Accepted
        } else {
            ApplicationStatus::Rejected
        }
    }

    pub fn view(&self) -> ApplicationView {
        ApplicationView {
            employer: self.employer.clone(),
            deposit: self.deposit,
            yes_weight: self.yes_weight,
            no_weight: self.no_weight,
            vote_count: self.vote_count,
            status: self.status,
        }
    }
}

/// Read-only projection of an application's progress.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationView {
    pub employer: Address,
    pub deposit: NativeAmount,
    pub yes_weight: TokenAmount,
    pub no_weight: TokenAmount,
    pub vote_count: u32,
    pub status: ApplicationStatus,
}
