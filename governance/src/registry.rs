//! The employer registry: applications, voting, finalisation, trusted set.

use std::collections::{BTreeSet, HashMap};

use crate::application::{ApplicationStatus, ApplicationView, EmployerApplication, VoteRecord};
use crate::directory::{ProfileDirectory, TrustDirectory};
use crate::error::GovernanceError;
use crate::pending::PendingSet;
use crate::selection::CandidateSelector;
use crate::settlement::{compute_settlement, Settlement};
use serde::{Deserialize, Serialize};
use veri_entropy::EntropySource;
use veri_token::TokenLedger;
use veri_types::{Address, ForfeitPolicy, NativeAmount, RegistryParams, Timestamp, TokenAmount};

/// Result of a successful vote.
#[derive(Clone, Debug)]
pub struct VoteReceipt {
    pub candidate: Address,
    pub voter: Address,
    pub support: bool,
    pub weight: TokenAmount,
    /// Tallies after this vote.
    pub tally: ApplicationView,
    /// Present when this vote reached the quorum cap.
    pub finalization: Option<Settlement>,
}

/// Tracks applications, the pending collection, and the trusted set.
///
/// Stakes are held in the registry's custody `account` on the token ledger
/// from vote time until finalisation. The treasury credit and stakes of each
/// pending application are reserved for that application's own settlement;
/// only the unreserved remainder of custody may fund another application's
/// bonuses.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EmployerRegistry {
    account: Address,
    params: RegistryParams,
    /// Custody tokens owned by pending applications.
    reserved: TokenAmount,
    /// Pending applications plus the last finalised one per employer.
    applications: HashMap<Address, EmployerApplication>,
    pending: PendingSet,
    trusted: BTreeSet<Address>,
}

impl EmployerRegistry {
    pub fn new(account: Address, params: RegistryParams) -> Self {
        Self {
            account,
            params,
            reserved: TokenAmount::ZERO,
            applications: HashMap::new(),
            pending: PendingSet::new(),
            trusted: BTreeSet::new(),
        }
    }

    /// Custody account holding escrowed stakes and the treasury.
    pub fn account(&self) -> &Address {
        &self.account
    }

    pub fn params(&self) -> &RegistryParams {
        &self.params
    }

    /// Custody tokens held for pending applications.
    pub fn reserved(&self) -> TokenAmount {
        self.reserved
    }

    /// Apply for admission, attaching a native deposit.
    ///
    /// The deposit is minted into the registry's custody account, where it
    /// funds voter bonuses. It is not refunded on either outcome.
    pub fn apply_for_verification<L: TokenLedger + ?Sized>(
        &mut self,
        ledger: &mut L,
        employer: &Address,
        deposit: NativeAmount,
        now: Timestamp,
    ) -> Result<ApplicationView, GovernanceError> {
        if self.pending.contains(employer) || self.trusted.contains(employer) {
            return Err(GovernanceError::AlreadyApplied(employer.to_string()));
        }
        let needed = self.params.min_deposit();
        if deposit < needed {
            return Err(GovernanceError::InsufficientDeposit {
                needed: needed.raw(),
                provided: deposit.raw(),
            });
        }

        let credited = ledger.mint(&self.account, deposit)?;
        let reserved = self
            .reserved
            .checked_add(credited)
            .ok_or(GovernanceError::Overflow)?;

        let application = EmployerApplication::new(employer.clone(), deposit, credited, now);
        let view = application.view();
        self.applications.insert(employer.clone(), application);
        self.pending.insert(employer.clone());
        self.reserved = reserved;

        tracing::info!(
            employer = %employer,
            %deposit,
            treasury_credit = %credited,
            pending = self.pending.len(),
            "employer applied for verification"
        );
        Ok(view)
    }

    /// Pick one pending applicant for `caller` to review.
    pub fn get_random_unverified_employer(
        &self,
        entropy: &dyn EntropySource,
        caller: &Address,
    ) -> Result<Address, GovernanceError> {
        CandidateSelector.pick(entropy, self.pending.as_slice(), caller)
    }

    /// Cast a stake-weighted vote on a pending application.
    ///
    /// The `weight` tokens move from the voter into custody (the voter must
    /// have approved the registry for at least that much). The vote that
    /// brings the count to the quorum cap finalises the application in the
    /// same call. Any failure leaves registry and ledger untouched, except
    /// for a ledger that fails a settlement transfer after the treasury check
    /// passed; the node facade rolls that case back.
    #[allow(clippy::too_many_arguments)]
    pub fn vote_on_employer<L, P>(
        &mut self,
        ledger: &mut L,
        profiles: &P,
        voter: &Address,
        candidate: &Address,
        support: bool,
        weight: TokenAmount,
        now: Timestamp,
    ) -> Result<VoteReceipt, GovernanceError>
    where
        L: TokenLedger + ?Sized,
        P: ProfileDirectory + ?Sized,
    {
        if !profiles.has_profile(voter) {
            return Err(GovernanceError::NotEligible(voter.to_string()));
        }
        if weight.is_zero() {
            return Err(GovernanceError::ZeroWeight);
        }
        let application = self
            .applications
            .get(candidate)
            .filter(|app| app.status == ApplicationStatus::Pending)
            .ok_or_else(|| GovernanceError::ApplicationNotFound(candidate.to_string()))?;
        if application.has_voted(voter) {
            return Err(GovernanceError::DuplicateVote(voter.to_string()));
        }

        let own = application.held()?;
        let mut updated = application.clone();
        updated.record_vote(VoteRecord {
            voter: voter.clone(),
            support,
            weight,
            cast_at: now,
        })?;

        let finalization = if updated.vote_count >= self.params.quorum_cap {
            let settlement = compute_settlement(
                candidate,
                updated.leading_outcome(),
                &updated.votes,
                self.params.voter_reward_bps,
            )?;
            // Other pending applications' credit and stakes are off limits.
            let others = self
                .reserved
                .checked_sub(own)
                .ok_or(GovernanceError::Overflow)?;
            let available = ledger
                .balance_of(&self.account)
                .checked_add(weight)
                .ok_or(GovernanceError::Overflow)?
                .saturating_sub(others);
            if settlement.total_payout > available {
                return Err(GovernanceError::TreasuryShortfall {
                    needed: settlement.total_payout.raw(),
                    available: available.raw(),
                });
            }
            Some(settlement)
        } else {
            None
        };

        let reserved = match &finalization {
            Some(_) => self.reserved.checked_sub(own),
            None => self.reserved.checked_add(weight),
        }
        .ok_or(GovernanceError::Overflow)?;

        ledger.transfer_from(&self.account, voter, &self.account, weight)?;
        self.reserved = reserved;

        tracing::info!(
            candidate = %candidate,
            voter = %voter,
            support,
            %weight,
            votes = updated.vote_count,
            "vote recorded"
        );

        if let Some(settlement) = &finalization {
            updated.status = settlement.outcome;
            updated.finalized_at = Some(now);
            self.pending.remove(candidate);
            if settlement.outcome == ApplicationStatus::Accepted {
                self.trusted.insert(candidate.clone());
            }
        }
        let tally = updated.view();
        self.applications.insert(candidate.clone(), updated);

        if let Some(settlement) = &finalization {
            self.settle(ledger, settlement)?;
            tracing::info!(
                employer = %candidate,
                outcome = ?settlement.outcome,
                yes = %tally.yes_weight,
                no = %tally.no_weight,
                paid = %settlement.total_payout,
                forfeited = %settlement.total_forfeited,
                "application finalised"
            );
        }

        Ok(VoteReceipt {
            candidate: candidate.clone(),
            voter: voter.clone(),
            support,
            weight,
            tally,
            finalization,
        })
    }

    /// Pay winners out of custody and dispose of forfeited stake.
    fn settle<L: TokenLedger + ?Sized>(
        &self,
        ledger: &mut L,
        settlement: &Settlement,
    ) -> Result<(), GovernanceError> {
        for voter in settlement.voters.iter().filter(|v| !v.payout.is_zero()) {
            ledger.transfer(&self.account, &voter.voter, voter.payout)?;
        }
        if self.params.forfeit_policy == ForfeitPolicy::Burn && !settlement.total_forfeited.is_zero()
        {
            ledger.burn(&self.account, settlement.total_forfeited)?;
        }
        Ok(())
    }

    /// Whether `employer` is in the trusted set.
    pub fn is_verified(&self, employer: &Address) -> bool {
        self.trusted.contains(employer)
    }

    /// Current tallies and status of `employer`'s latest application.
    pub fn employer_application(&self, employer: &Address) -> Option<ApplicationView> {
        self.applications.get(employer).map(EmployerApplication::view)
    }

    /// Full application record, including the per-voter ledger.
    pub fn application(&self, employer: &Address) -> Option<&EmployerApplication> {
        self.applications.get(employer)
    }

    /// Pending applicants in their dense selection order.
    pub fn applied_employers(&self) -> &[Address] {
        self.pending.as_slice()
    }

    pub fn trusted_employers(&self) -> impl Iterator<Item = &Address> {
        self.trusted.iter()
    }
}

impl TrustDirectory for EmployerRegistry {
    fn is_trusted(&self, employer: &Address) -> bool {
        self.is_verified(employer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use veri_nullables::NullEntropy;
    use veri_token::MemoryTokenLedger;
    use veri_types::ErrorKind;

    const NOW: Timestamp = Timestamp::EPOCH;

    fn addr(n: u64) -> Address {
        Address::from_u64(n)
    }

    fn registry_account() -> Address {
        addr(0xE0)
    }

    fn employer() -> Address {
        addr(0xAA)
    }

    struct Fixture {
        registry: EmployerRegistry,
        ledger: MemoryTokenLedger,
        profiles: HashSet<Address>,
    }

    impl Fixture {
        fn new(params: RegistryParams) -> Self {
            Self {
                registry: EmployerRegistry::new(registry_account(), params),
                ledger: MemoryTokenLedger::new(1000),
                profiles: HashSet::new(),
            }
        }

        /// Mint 1000 tokens, approve the registry, and register a profile.
        fn voter(&mut self, n: u64) -> Address {
            let voter = addr(n);
            self.ledger.mint(&voter, NativeAmount::from_units(1)).unwrap();
            self.ledger
                .approve(&voter, &registry_account(), TokenAmount::new(1000));
            self.profiles.insert(voter.clone());
            voter
        }

        /// A voter holding `units` native units' worth of tokens, all approved.
        fn funded_voter(&mut self, n: u64, units: u128) -> Address {
            let voter = addr(n);
            let minted = self
                .ledger
                .mint(&voter, NativeAmount::from_units(units))
                .unwrap();
            self.ledger.approve(&voter, &registry_account(), minted);
            self.profiles.insert(voter.clone());
            voter
        }

        fn apply_as(&mut self, candidate: &Address) {
            self.registry
                .apply_for_verification(&mut self.ledger, candidate, NativeAmount::from_units(1), NOW)
                .unwrap();
        }

        fn vote_for(
            &mut self,
            candidate: &Address,
            voter: &Address,
            support: bool,
            weight: u128,
        ) -> Result<VoteReceipt, GovernanceError> {
            self.registry.vote_on_employer(
                &mut self.ledger,
                &self.profiles,
                voter,
                candidate,
                support,
                TokenAmount::new(weight),
                NOW,
            )
        }

        fn apply(&mut self) {
            self.registry
                .apply_for_verification(&mut self.ledger, &employer(), NativeAmount::from_units(1), NOW)
                .unwrap();
        }

        fn vote(&mut self, voter: &Address, support: bool, weight: u128) -> Result<VoteReceipt, GovernanceError> {
            self.registry.vote_on_employer(
                &mut self.ledger,
                &self.profiles,
                voter,
                &employer(),
                support,
                TokenAmount::new(weight),
                NOW,
            )
        }
    }

    #[test]
    fn apply_adds_pending_and_funds_treasury() {
        let mut f = Fixture::new(RegistryParams::default());
        f.apply();

        assert_eq!(f.registry.applied_employers(), &[employer()]);
        assert!(!f.registry.is_verified(&employer()));
        assert_eq!(f.ledger.balance_of(&registry_account()), TokenAmount::new(1000));
        let view = f.registry.employer_application(&employer()).unwrap();
        assert_eq!(view.status, ApplicationStatus::Pending);
        assert_eq!(view.vote_count, 0);
    }

    #[test]
    fn apply_twice_fails() {
        let mut f = Fixture::new(RegistryParams::default());
        f.apply();
        let err = f
            .registry
            .apply_for_verification(&mut f.ledger, &employer(), NativeAmount::from_units(1), NOW)
            .unwrap_err();
        assert!(matches!(err, GovernanceError::AlreadyApplied(_)));
        assert_eq!(err.kind(), ErrorKind::PreconditionViolation);
        assert_eq!(f.registry.applied_employers().len(), 1);
        assert_eq!(f.ledger.balance_of(&registry_account()), TokenAmount::new(1000));
    }

    #[test]
    fn small_deposit_is_rejected() {
        let mut f = Fixture::new(RegistryParams::default());
        let err = f
            .registry
            .apply_for_verification(&mut f.ledger, &employer(), NativeAmount::new(1), NOW)
            .unwrap_err();
        assert!(matches!(err, GovernanceError::InsufficientDeposit { .. }));
        assert!(f.registry.applied_employers().is_empty());
        assert!(f.registry.employer_application(&employer()).is_none());
    }

    #[test]
    fn random_pick_requires_applicants() {
        let mut f = Fixture::new(RegistryParams::default());
        let entropy = NullEntropy::constant([5; 32]);
        let err = f
            .registry
            .get_random_unverified_employer(&entropy, &addr(1))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);

        f.apply();
        let picked = f
            .registry
            .get_random_unverified_employer(&entropy, &addr(1))
            .unwrap();
        assert_eq!(picked, employer());
    }

    #[test]
    fn random_pick_skips_finalised_applicant_after_swap_remove() {
        let params = RegistryParams {
            quorum_cap: 1,
            ..RegistryParams::default()
        };
        let mut f = Fixture::new(params);
        let (a, b, c) = (addr(0xA1), addr(0xB1), addr(0xC1));
        f.apply_as(&a);
        f.apply_as(&b);
        f.apply_as(&c);
        let voter = f.voter(1);
        f.vote_for(&a, &voter, true, 10).unwrap();

        // Finalising the head moved the tail into its slot.
        assert_eq!(f.registry.applied_employers(), &[c.clone(), b.clone()]);

        let outputs: Vec<[u8; 32]> = (0u8..64).map(|i| [i; 32]).collect();
        let entropy = NullEntropy::new(outputs);
        let mut seen = HashSet::new();
        for _ in 0..64 {
            seen.insert(f.registry.get_random_unverified_employer(&entropy, &voter).unwrap());
        }
        assert!(!seen.contains(&a));
        assert_eq!(seen, HashSet::from([b, c]));
    }

    #[test]
    fn vote_records_weight_and_escrows_stake() {
        let mut f = Fixture::new(RegistryParams::default());
        f.apply();
        let voter = f.voter(1);

        let receipt = f.vote(&voter, true, 30).unwrap();

        assert!(receipt.finalization.is_none());
        assert_eq!(receipt.tally.yes_weight, TokenAmount::new(30));
        assert_eq!(receipt.tally.vote_count, 1);
        assert_eq!(f.ledger.balance_of(&voter), TokenAmount::new(970));
        assert_eq!(f.ledger.balance_of(&registry_account()), TokenAmount::new(1030));
    }

    #[test]
    fn voter_without_profile_is_not_eligible() {
        let mut f = Fixture::new(RegistryParams::default());
        f.apply();
        let voter = f.voter(1);
        f.profiles.remove(&voter);

        let err = f.vote(&voter, true, 30).unwrap_err();
        assert!(matches!(err, GovernanceError::NotEligible(_)));
        assert_eq!(f.ledger.balance_of(&voter), TokenAmount::new(1000));
    }

    #[test]
    fn vote_on_unknown_candidate_fails() {
        let mut f = Fixture::new(RegistryParams::default());
        let voter = f.voter(1);
        let err = f.vote(&voter, true, 30).unwrap_err();
        assert!(matches!(err, GovernanceError::ApplicationNotFound(_)));
    }

    #[test]
    fn second_vote_by_same_address_fails() {
        let mut f = Fixture::new(RegistryParams::default());
        f.apply();
        let voter = f.voter(1);
        f.vote(&voter, true, 30).unwrap();

        let err = f.vote(&voter, false, 30).unwrap_err();
        assert!(matches!(err, GovernanceError::DuplicateVote(_)));
        let view = f.registry.employer_application(&employer()).unwrap();
        assert_eq!(view.vote_count, 1);
        assert_eq!(view.no_weight, TokenAmount::ZERO);
        assert_eq!(f.ledger.balance_of(&voter), TokenAmount::new(970));
    }

    #[test]
    fn zero_weight_is_rejected() {
        let mut f = Fixture::new(RegistryParams::default());
        f.apply();
        let voter = f.voter(1);
        assert!(matches!(f.vote(&voter, true, 0), Err(GovernanceError::ZeroWeight)));
    }

    #[test]
    fn missing_allowance_leaves_tally_unchanged() {
        let mut f = Fixture::new(RegistryParams::default());
        f.apply();
        let voter = f.voter(1);
        f.ledger.approve(&voter, &registry_account(), TokenAmount::new(10));

        let err = f.vote(&voter, true, 30).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InsufficientFunds);
        let view = f.registry.employer_application(&employer()).unwrap();
        assert_eq!(view.vote_count, 0);
        assert!(!f.registry.application(&employer()).unwrap().has_voted(&voter));
    }

    #[test]
    fn finalises_exactly_at_quorum_cap() {
        let mut f = Fixture::new(RegistryParams::default());
        f.apply();
        for n in 1..15 {
            let voter = f.voter(n);
            let receipt = f.vote(&voter, true, 67).unwrap();
            assert!(receipt.finalization.is_none(), "vote {n} must not finalise");
        }
        assert_eq!(f.registry.applied_employers(), &[employer()]);

        let last = f.voter(15);
        let receipt = f.vote(&last, true, 67).unwrap();
        let settlement = receipt.finalization.expect("15th vote finalises");
        assert_eq!(settlement.outcome, ApplicationStatus::Accepted);
        assert!(f.registry.is_verified(&employer()));
        assert!(f.registry.applied_employers().is_empty());

        let late = f.voter(16);
        let err = f.vote(&late, true, 67).unwrap_err();
        assert!(matches!(err, GovernanceError::ApplicationNotFound(_)));
    }

    #[test]
    fn tie_at_quorum_rejects() {
        let params = RegistryParams {
            quorum_cap: 2,
            ..RegistryParams::default()
        };
        let mut f = Fixture::new(params);
        f.apply();
        let yes = f.voter(1);
        let no = f.voter(2);
        f.vote(&yes, true, 50).unwrap();
        let receipt = f.vote(&no, false, 50).unwrap();

        assert_eq!(receipt.finalization.unwrap().outcome, ApplicationStatus::Rejected);
        assert!(!f.registry.is_verified(&employer()));
        assert!(f.registry.applied_employers().is_empty());
        assert_eq!(f.ledger.balance_of(&yes), TokenAmount::new(950));
        assert_eq!(f.ledger.balance_of(&no), TokenAmount::new(1002));
    }

    #[test]
    fn forfeited_stake_stays_in_treasury_by_default() {
        let params = RegistryParams {
            quorum_cap: 2,
            ..RegistryParams::default()
        };
        let mut f = Fixture::new(params);
        f.apply();
        let a = f.voter(1);
        let b = f.voter(2);
        f.vote(&a, true, 100).unwrap();
        f.vote(&b, false, 40).unwrap();

        // 1000 deposit + 100 + 40 staked - 105 paid to the winner.
        assert_eq!(f.ledger.balance_of(&registry_account()), TokenAmount::new(1035));
        assert_eq!(f.ledger.balance_of(&a), TokenAmount::new(1005));
        assert_eq!(f.ledger.balance_of(&b), TokenAmount::new(960));
    }

    #[test]
    fn burn_policy_destroys_forfeited_stake() {
        let params = RegistryParams {
            quorum_cap: 2,
            forfeit_policy: ForfeitPolicy::Burn,
            ..RegistryParams::default()
        };
        let mut f = Fixture::new(params);
        f.apply();
        let a = f.voter(1);
        let b = f.voter(2);
        let supply_before = f.ledger.total_supply();
        f.vote(&a, true, 100).unwrap();
        f.vote(&b, false, 40).unwrap();

        assert_eq!(f.ledger.balance_of(&registry_account()), TokenAmount::new(995));
        assert_eq!(f.ledger.total_supply().raw(), supply_before.raw() - 40);
    }

    #[test]
    fn treasury_shortfall_rejects_the_triggering_vote() {
        let params = RegistryParams {
            quorum_cap: 2,
            voter_reward_bps: 10_000,
            ..RegistryParams::default()
        };
        let mut f = Fixture::new(params);
        f.apply();
        let a = f.voter(1);
        let b = f.voter(2);
        f.vote(&a, true, 1000).unwrap();

        // Payout 4000 against 1000 deposit + 1000 + 1000 staked.
        let err = f.vote(&b, true, 1000).unwrap_err();
        assert!(matches!(err, GovernanceError::TreasuryShortfall { needed: 4000, available: 3000 }));
        assert_eq!(f.ledger.balance_of(&b), TokenAmount::new(1000));
        let view = f.registry.employer_application(&employer()).unwrap();
        assert_eq!(view.vote_count, 1);
        assert_eq!(view.status, ApplicationStatus::Pending);
    }

    #[test]
    fn settlement_cannot_spend_another_pending_applications_funds() {
        let params = RegistryParams {
            quorum_cap: 2,
            ..RegistryParams::default()
        };
        let mut f = Fixture::new(params);
        let a = addr(0xA1);
        let b = addr(0xB1);
        f.apply_as(&a);
        f.apply_as(&b);
        let v1 = f.funded_voter(1, 1);
        let v2 = f.funded_voter(2, 21);
        let v3 = f.funded_voter(3, 21);
        let v4 = f.funded_voter(4, 1);

        f.vote_for(&b, &v1, true, 1000).unwrap();
        f.vote_for(&a, &v2, true, 20_000).unwrap();
        assert_eq!(f.registry.reserved(), TokenAmount::new(23_000));

        // A's payout of 42000 may only draw on A's 21000 plus the new stake.
        let custody_before = f.ledger.balance_of(&registry_account());
        let err = f.vote_for(&a, &v3, true, 20_000).unwrap_err();
        assert!(matches!(
            err,
            GovernanceError::TreasuryShortfall { needed: 42_000, available: 41_000 }
        ));
        assert_eq!(f.ledger.balance_of(&registry_account()), custody_before);
        assert_eq!(f.registry.reserved(), TokenAmount::new(23_000));
        assert_eq!(f.registry.employer_application(&a).unwrap().vote_count, 1);

        let receipt = f.vote_for(&b, &v4, true, 1000).unwrap();
        assert_eq!(receipt.finalization.unwrap().total_payout, TokenAmount::new(2100));
        assert!(f.registry.is_verified(&b));
        assert_eq!(f.registry.applied_employers(), &[a.clone()]);
        // Only A's credit and stake remain reserved.
        assert_eq!(f.registry.reserved(), TokenAmount::new(21_000));
        assert!(f.registry.reserved() <= f.ledger.balance_of(&registry_account()));
    }

    #[test]
    fn interleaved_applications_release_their_reservations() {
        let params = RegistryParams {
            quorum_cap: 2,
            ..RegistryParams::default()
        };
        let mut f = Fixture::new(params);
        let a = addr(0xA1);
        let b = addr(0xB1);
        f.apply_as(&a);
        f.apply_as(&b);
        let v1 = f.voter(1);
        let v2 = f.voter(2);
        let v3 = f.voter(3);
        let v4 = f.voter(4);

        f.vote_for(&a, &v1, true, 100).unwrap();
        f.vote_for(&b, &v2, true, 200).unwrap();
        f.vote_for(&a, &v3, false, 50).unwrap();
        assert!(f.registry.is_verified(&a));
        // 2000 credit + 350 staked - 105 paid; B still holds 1200.
        assert_eq!(f.ledger.balance_of(&registry_account()), TokenAmount::new(2245));
        assert_eq!(f.registry.reserved(), TokenAmount::new(1200));

        f.vote_for(&b, &v4, true, 100).unwrap();
        assert!(f.registry.is_verified(&b));
        assert_eq!(f.registry.reserved(), TokenAmount::ZERO);
        // Both credits plus the 50 forfeit, less 210 + 105 of bonus payouts.
        assert_eq!(f.ledger.balance_of(&registry_account()), TokenAmount::new(2030));
    }

    #[test]
    fn rejected_employer_may_reapply() {
        let params = RegistryParams {
            quorum_cap: 1,
            ..RegistryParams::default()
        };
        let mut f = Fixture::new(params);
        f.apply();
        let voter = f.voter(1);
        f.vote(&voter, false, 10).unwrap();
        assert_eq!(
            f.registry.employer_application(&employer()).unwrap().status,
            ApplicationStatus::Rejected
        );

        f.apply();
        let view = f.registry.employer_application(&employer()).unwrap();
        assert_eq!(view.status, ApplicationStatus::Pending);
        assert_eq!(view.vote_count, 0);
        // The fresh application has a fresh voter ledger.
        f.vote(&voter, true, 10).unwrap();
        assert!(f.registry.is_verified(&employer()));
    }

    #[test]
    fn trusted_employer_cannot_reapply() {
        let params = RegistryParams {
            quorum_cap: 1,
            ..RegistryParams::default()
        };
        let mut f = Fixture::new(params);
        f.apply();
        let voter = f.voter(1);
        f.vote(&voter, true, 10).unwrap();

        let err = f
            .registry
            .apply_for_verification(&mut f.ledger, &employer(), NativeAmount::from_units(1), NOW)
            .unwrap_err();
        assert!(matches!(err, GovernanceError::AlreadyApplied(_)));
        assert!(f.registry.is_trusted(&employer()));
        assert_eq!(f.registry.trusted_employers().count(), 1);
    }
}
