//! The registry node: shared state plus transactional entry points.

use veri_entropy::{BlockEntropy, EntropySource};
use veri_governance::{ApplicationView, EmployerRegistry, VoteReceipt};
use veri_resume::{
    Decision, EmployeeResume, RequestId, ResumeLedger, VerificationRequest,
};
use veri_token::TokenLedger;
use veri_types::{Address, Clock, NativeAmount, SystemClock, Timestamp, TokenAmount};

use crate::config::NodeConfig;
use crate::error::NodeError;
use crate::tracing_spans;

/// Everything a transaction may touch. Cloned to snapshot.
#[derive(Clone, Debug)]
struct NodeState<L> {
    ledger: L,
    registry: EmployerRegistry,
    resumes: ResumeLedger,
}

/// Owns the token ledger and both engines, and serialises every call.
///
/// Each mutating method takes `&mut self`, so calls never interleave and the
/// ledger cannot re-enter an engine mid-call. A failed call restores the
/// snapshot taken before it started.
pub struct VeriNode<L> {
    state: NodeState<L>,
    clock: Box<dyn Clock + Send + Sync>,
    entropy: Box<dyn EntropySource>,
}

impl<L: TokenLedger + Clone> VeriNode<L> {
    /// Build a node on wall-clock time and block-style entropy.
    pub fn new(config: &NodeConfig, ledger: L) -> Result<Self, NodeError> {
        Self::with_environment(config, ledger, SystemClock, BlockEntropy::new(SystemClock))
    }

    /// Build a node with explicit time and entropy sources.
    pub fn with_environment(
        config: &NodeConfig,
        ledger: L,
        clock: impl Clock + Send + Sync + 'static,
        entropy: impl EntropySource + 'static,
    ) -> Result<Self, NodeError> {
        config.validate()?;
        if ledger.tokens_per_native_unit() != config.params.mint_rate() {
            return Err(NodeError::Config(format!(
                "ledger mints {} tokens per native unit, config expects {}",
                ledger.tokens_per_native_unit(),
                config.params.mint_rate()
            )));
        }
        tracing::info!(
            registry = %config.registry_account,
            resume_ledger = %config.resume_ledger_account,
            quorum_cap = config.params.quorum_cap,
            entropy = entropy.name(),
            "registry node initialised"
        );
        Ok(Self {
            state: NodeState {
                ledger,
                registry: EmployerRegistry::new(
                    config.registry_account.clone(),
                    config.params.clone(),
                ),
                resumes: ResumeLedger::new(
                    config.resume_ledger_account.clone(),
                    config.params.clone(),
                ),
            },
            clock: Box::new(clock),
            entropy: Box::new(entropy),
        })
    }

    /// Run `op` against the state; on error, put the pre-call state back.
    fn transact<T>(
        &mut self,
        op: &'static str,
        f: impl FnOnce(&mut NodeState<L>, Timestamp) -> Result<T, NodeError>,
    ) -> Result<T, NodeError> {
        let now = self.clock.now();
        let snapshot = self.state.clone();
        f(&mut self.state, now).inspect_err(|e| {
            self.state = snapshot;
            tracing::warn!(op, error = %e, kind = ?e.kind(), "transaction rolled back");
        })
    }

    // Token ledger

    /// Convert an attached native payment into tokens for `account`.
    pub fn mint(&mut self, account: &Address, payment: NativeAmount) -> Result<TokenAmount, NodeError> {
        let _span = tracing_spans::token_span("mint", account).entered();
        self.transact("mint", |s, _| Ok(s.ledger.mint(account, payment)?))
    }

    pub fn approve(&mut self, owner: &Address, spender: &Address, amount: TokenAmount) {
        let _span = tracing_spans::token_span("approve", owner).entered();
        self.state.ledger.approve(owner, spender, amount);
    }

    pub fn balance_of(&self, account: &Address) -> TokenAmount {
        self.state.ledger.balance_of(account)
    }

    pub fn allowance(&self, owner: &Address, spender: &Address) -> TokenAmount {
        self.state.ledger.allowance(owner, spender)
    }

    pub fn ledger(&self) -> &L {
        &self.state.ledger
    }

    // Employer registry

    pub fn registry(&self) -> &EmployerRegistry {
        &self.state.registry
    }

    pub fn registry_account(&self) -> &Address {
        self.state.registry.account()
    }

    pub fn apply_for_verification(
        &mut self,
        employer: &Address,
        deposit: NativeAmount,
    ) -> Result<ApplicationView, NodeError> {
        let _span = tracing_spans::apply_span(employer).entered();
        self.transact("apply_for_verification", |s, now| {
            Ok(s.registry
                .apply_for_verification(&mut s.ledger, employer, deposit, now)?)
        })
    }

    pub fn get_random_unverified_employer(&self, caller: &Address) -> Result<Address, NodeError> {
        Ok(self
            .state
            .registry
            .get_random_unverified_employer(self.entropy.as_ref(), caller)?)
    }

    pub fn vote_on_employer(
        &mut self,
        voter: &Address,
        candidate: &Address,
        support: bool,
        weight: TokenAmount,
    ) -> Result<VoteReceipt, NodeError> {
        let _span = tracing_spans::vote_span(voter, candidate).entered();
        self.transact("vote_on_employer", |s, now| {
            Ok(s.registry.vote_on_employer(
                &mut s.ledger,
                &s.resumes,
                voter,
                candidate,
                support,
                weight,
                now,
            )?)
        })
    }

    pub fn is_verified(&self, employer: &Address) -> bool {
        self.state.registry.is_verified(employer)
    }

    pub fn employer_application(&self, employer: &Address) -> Option<ApplicationView> {
        self.state.registry.employer_application(employer)
    }

    pub fn applied_employers(&self) -> &[Address] {
        self.state.registry.applied_employers()
    }

    pub fn trusted_employers(&self) -> Vec<Address> {
        self.state.registry.trusted_employers().cloned().collect()
    }

    // Verification ledger

    pub fn resumes(&self) -> &ResumeLedger {
        &self.state.resumes
    }

    pub fn resume_ledger_account(&self) -> &Address {
        self.state.resumes.account()
    }

    pub fn create_resume(&mut self, caller: &Address) -> Result<EmployeeResume, NodeError> {
        let _span = tracing_spans::resume_span("create_resume", caller).entered();
        self.transact("create_resume", |s, now| {
            Ok(s.resumes.create_resume(&mut s.ledger, caller, now)?.clone())
        })
    }

    pub fn send_verification_request(
        &mut self,
        caller: &Address,
        content: &str,
        employer: &Address,
    ) -> Result<RequestId, NodeError> {
        let _span = tracing_spans::resume_span("send_verification_request", caller).entered();
        self.transact("send_verification_request", |s, now| {
            Ok(s.resumes.send_verification_request(
                &mut s.ledger,
                &s.registry,
                caller,
                content,
                employer,
                now,
            )?)
        })
    }

    pub fn update_verification_request_status(
        &mut self,
        caller: &Address,
        id: RequestId,
        decision: Decision,
    ) -> Result<VerificationRequest, NodeError> {
        let _span = tracing_spans::resume_span("update_verification_request_status", caller).entered();
        self.transact("update_verification_request_status", |s, now| {
            Ok(s.resumes
                .update_verification_request_status(&mut s.ledger, caller, id, decision, now)?
                .clone())
        })
    }

    /// Resolve with a numeric status code (`1` verified, `2` rejected).
    pub fn update_verification_request_status_code(
        &mut self,
        caller: &Address,
        id: RequestId,
        code: u8,
    ) -> Result<VerificationRequest, NodeError> {
        let decision = Decision::try_from(code)?;
        self.update_verification_request_status(caller, id, decision)
    }

    pub fn view_my_verification_requests(&self, caller: &Address) -> &[VerificationRequest] {
        self.state.resumes.view_my_verification_requests(caller)
    }

    pub fn requests_for_employer(&self, employer: &Address) -> Vec<&VerificationRequest> {
        self.state.resumes.requests_for_employer(employer)
    }

    pub fn get_my_resume(&self, caller: &Address) -> Result<&EmployeeResume, NodeError> {
        Ok(self.state.resumes.get_my_resume(caller)?)
    }

    pub fn view_employee_resume(&self, employee: &Address) -> Result<&EmployeeResume, NodeError> {
        Ok(self.state.resumes.view_employee_resume(employee)?)
    }
}
