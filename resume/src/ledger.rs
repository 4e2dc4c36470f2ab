//! The verification ledger: profiles, request escrow, employer resolution.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use veri_governance::{ProfileDirectory, TrustDirectory};
use veri_token::TokenLedger;
use veri_types::{Address, RegistryParams, RejectedEscrowPolicy, Timestamp, TokenAmount};

use crate::error::ResumeError;
use crate::request::{Decision, RequestId, RequestStatus, VerificationRequest};
use crate::resume::{EmployeeResume, ResumeEntry};

/// Owns every resume and verification request.
///
/// Fees are pulled into the ledger's custody `account` with `transfer_from`,
/// so callers must approve the account first. Resume fees are retained;
/// request fees stay in escrow until the employer resolves the request.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ResumeLedger {
    account: Address,
    params: RegistryParams,
    resumes: HashMap<Address, EmployeeResume>,
    /// Per-employee requests in submission order.
    requests: HashMap<Address, Vec<VerificationRequest>>,
    /// Request id -> (employee, position in that employee's list).
    index: HashMap<RequestId, (Address, usize)>,
    next_id: RequestId,
    escrow: TokenAmount,
}

impl ResumeLedger {
    pub fn new(account: Address, params: RegistryParams) -> Self {
        Self {
            account,
            params,
            resumes: HashMap::new(),
            requests: HashMap::new(),
            index: HashMap::new(),
            next_id: 1,
            escrow: TokenAmount::ZERO,
        }
    }

    pub fn account(&self) -> &Address {
        &self.account
    }

    pub fn params(&self) -> &RegistryParams {
        &self.params
    }

    /// Request fees currently held for unresolved requests.
    pub fn escrow_balance(&self) -> TokenAmount {
        self.escrow
    }

    /// Open an empty resume for `owner`, charging the profile fee.
    pub fn create_resume<L: TokenLedger + ?Sized>(
        &mut self,
        ledger: &mut L,
        owner: &Address,
        now: Timestamp,
    ) -> Result<&EmployeeResume, ResumeError> {
        if self.resumes.contains_key(owner) {
            return Err(ResumeError::ProfileExists(owner.to_string()));
        }
        let fee = self.params.resume_fee_amount();
        if !fee.is_zero() {
            ledger.transfer_from(&self.account, owner, &self.account, fee)?;
        }

        tracing::info!(owner = %owner, %fee, "resume created");
        let resume = self
            .resumes
            .entry(owner.clone())
            .or_insert_with(|| EmployeeResume::new(owner.clone(), now));
        Ok(&*resume)
    }

    /// Ask a trusted `employer` to attest `content`, escrowing the request fee.
    pub fn send_verification_request<L, T>(
        &mut self,
        ledger: &mut L,
        trust: &T,
        employee: &Address,
        content: impl Into<String>,
        employer: &Address,
        now: Timestamp,
    ) -> Result<RequestId, ResumeError>
    where
        L: TokenLedger + ?Sized,
        T: TrustDirectory + ?Sized,
    {
        if !self.resumes.contains_key(employee) {
            return Err(ResumeError::ProfileNotFound(employee.to_string()));
        }
        if !trust.is_trusted(employer) {
            return Err(ResumeError::EmployerNotTrusted(employer.to_string()));
        }
        let id = self.next_id;
        let next_id = id.checked_add(1).ok_or(ResumeError::Overflow)?;
        let fee = self.params.request_fee_amount();
        let escrow = self.escrow.checked_add(fee).ok_or(ResumeError::Overflow)?;

        ledger.transfer_from(&self.account, employee, &self.account, fee)?;

        let list = self.requests.entry(employee.clone()).or_default();
        self.index.insert(id, (employee.clone(), list.len()));
        list.push(VerificationRequest {
            id,
            employee: employee.clone(),
            employer: employer.clone(),
            content: content.into(),
            status: RequestStatus::Pending,
            fee,
            created_at: now,
            resolved_at: None,
        });
        self.next_id = next_id;
        self.escrow = escrow;

        tracing::info!(id, employee = %employee, employer = %employer, %fee, "verification requested");
        Ok(id)
    }

    /// Resolve request `id`. Only the employer named on the request may call,
    /// and only once.
    ///
    /// Verified appends a resume entry and releases the escrow to the
    /// employer. Rejected disposes of the escrow per the configured
    /// [`RejectedEscrowPolicy`].
    pub fn update_verification_request_status<L: TokenLedger + ?Sized>(
        &mut self,
        ledger: &mut L,
        caller: &Address,
        id: RequestId,
        decision: Decision,
        now: Timestamp,
    ) -> Result<&VerificationRequest, ResumeError> {
        let (employee, position) = self
            .index
            .get(&id)
            .cloned()
            .ok_or(ResumeError::RequestNotFound(id))?;
        let request = self
            .requests
            .get(&employee)
            .and_then(|list| list.get(position))
            .ok_or(ResumeError::RequestNotFound(id))?;
        if &request.employer != caller {
            return Err(ResumeError::NotRequestOwner {
                id,
                caller: caller.to_string(),
            });
        }
        if request.status.is_terminal() {
            return Err(ResumeError::RequestNotPending(id));
        }
        let fee = request.fee;
        let escrow = self.escrow.checked_sub(fee).ok_or(ResumeError::Overflow)?;

        match (decision, self.params.rejected_escrow_policy) {
            (Decision::Verified, _) | (Decision::Rejected, RejectedEscrowPolicy::ForfeitToEmployer) => {
                ledger.transfer(&self.account, caller, fee)?
            }
            (Decision::Rejected, RejectedEscrowPolicy::RefundEmployee) => {
                ledger.transfer(&self.account, &employee, fee)?
            }
            (Decision::Rejected, RejectedEscrowPolicy::Burn) => ledger.burn(&self.account, fee)?,
        }
        self.escrow = escrow;

        if decision == Decision::Verified {
            let content = request.content.clone();
            let resume = self
                .resumes
                .get_mut(&employee)
                .ok_or_else(|| ResumeError::ProfileNotFound(employee.to_string()))?;
            resume.entries.push(ResumeEntry {
                employer: caller.clone(),
                content,
                verified_at: now,
                request_id: id,
            });
        }

        let request = self
            .requests
            .get_mut(&employee)
            .and_then(|list| list.get_mut(position))
            .ok_or(ResumeError::RequestNotFound(id))?;
        request.status = decision.into();
        request.resolved_at = Some(now);

        tracing::info!(id, employee = %employee, employer = %caller, ?decision, %fee, "verification request resolved");
        Ok(&*request)
    }

    /// The caller's own requests in submission order.
    pub fn view_my_verification_requests(&self, caller: &Address) -> &[VerificationRequest] {
        self.requests
            .get(caller)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Requests addressed to `employer`, ordered by id.
    pub fn requests_for_employer(&self, employer: &Address) -> Vec<&VerificationRequest> {
        let mut found: Vec<&VerificationRequest> = self
            .requests
            .values()
            .flatten()
            .filter(|r| &r.employer == employer)
            .collect();
        found.sort_by_key(|r| r.id);
        found
    }

    pub fn request(&self, id: RequestId) -> Option<&VerificationRequest> {
        let (employee, position) = self.index.get(&id)?;
        self.requests.get(employee)?.get(*position)
    }

    pub fn get_my_resume(&self, caller: &Address) -> Result<&EmployeeResume, ResumeError> {
        self.view_employee_resume(caller)
    }

    /// Any caller may read any resume.
    pub fn view_employee_resume(&self, employee: &Address) -> Result<&EmployeeResume, ResumeError> {
        self.resumes
            .get(employee)
            .ok_or_else(|| ResumeError::ProfileNotFound(employee.to_string()))
    }
}

impl ProfileDirectory for ResumeLedger {
    fn has_profile(&self, account: &Address) -> bool {
        self.resumes.contains_key(account)
    }
}
