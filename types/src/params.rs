//! Registry parameters: quorum, rewards, fees, and the escrow dispositions.
//!
//! Amounts are stored as `u64` raw units so the whole struct round-trips
//! through TOML; the typed accessors convert them for the engines.

use crate::amount::{NativeAmount, TokenAmount, NATIVE_UNIT};
use crate::error::TypesError;
use serde::{Deserialize, Serialize};

/// Where the stake of a losing voter goes at settlement.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ForfeitPolicy {
    /// Retained in the registry's custody account as treasury.
    #[default]
    Treasury,
    /// Destroyed through the token ledger.
    Burn,
}

/// Where the escrowed fee of a rejected verification request goes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectedEscrowPolicy {
    /// Paid to the employer who reviewed (and rejected) the request.
    #[default]
    ForfeitToEmployer,
    /// Returned to the employee who submitted the request.
    RefundEmployee,
    /// Destroyed through the token ledger.
    Burn,
}

/// All tunable registry parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryParams {
    // ── Governance ───────────────────────────────────────────────────────
    /// Number of votes after which an application is finalised.
    pub quorum_cap: u32,

    /// Bonus paid to each winning voter on their own stake (basis points).
    /// Default: 500 = 5%.
    pub voter_reward_bps: u32,

    /// Minimum native deposit (base units) to apply for verification.
    /// Default: one whole native unit.
    pub min_application_deposit: u64,

    /// Tokens minted per whole native unit of payment.
    pub tokens_per_native_unit: u64,

    /// Disposition of losing voters' stakes.
    pub forfeit_policy: ForfeitPolicy,

    // ── Verification ledger ──────────────────────────────────────────────
    /// Anti-spam fee (tokens) for creating a resume profile.
    pub resume_fee: u64,

    /// Fee (tokens) escrowed with every verification request.
    pub request_fee: u64,

    /// Disposition of a rejected request's escrowed fee.
    pub rejected_escrow_policy: RejectedEscrowPolicy,
}

impl RegistryParams {
    pub fn min_deposit(&self) -> NativeAmount {
        NativeAmount::new(u128::from(self.min_application_deposit))
    }

    pub fn resume_fee_amount(&self) -> TokenAmount {
        TokenAmount::new(u128::from(self.resume_fee))
    }

    pub fn request_fee_amount(&self) -> TokenAmount {
        TokenAmount::new(u128::from(self.request_fee))
    }

    pub fn mint_rate(&self) -> u128 {
        u128::from(self.tokens_per_native_unit)
    }

    /// Reject parameter sets the engines cannot operate under.
    pub fn validate(&self) -> Result<(), TypesError> {
        if self.quorum_cap == 0 {
            return Err(TypesError::InvalidParams("quorum_cap must be positive".into()));
        }
        if self.voter_reward_bps > 10_000 {
            return Err(TypesError::InvalidParams(format!(
                "voter_reward_bps {} exceeds 10000",
                self.voter_reward_bps
            )));
        }
        if self.min_application_deposit == 0 {
            return Err(TypesError::InvalidParams(
                "min_application_deposit must be non-zero".into(),
            ));
        }
        if self.request_fee == 0 {
            return Err(TypesError::InvalidParams("request_fee must be at least 1".into()));
        }
        Ok(())
    }
}

impl Default for RegistryParams {
    fn default() -> Self {
        Self {
            quorum_cap: 15,
            voter_reward_bps: 500,
            min_application_deposit: NATIVE_UNIT as u64,
            tokens_per_native_unit: 1000,
            forfeit_policy: ForfeitPolicy::Treasury,
            resume_fee: 1,
            request_fee: 1,
            rejected_escrow_policy: RejectedEscrowPolicy::ForfeitToEmployer,
        }
    }
}
