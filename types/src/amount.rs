//! Amount types for the registry token and the native currency.
//!
//! Amounts are represented as integers (u128) to avoid floating-point errors.
//! The smallest token unit is 1; the native currency is counted in its base
//! unit (10^18 base units make one whole native unit).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Base units per whole native unit.
pub const NATIVE_UNIT: u128 = 1_000_000_000_000_000_000;

/// Basis-point denominator (10_000 = 100%).
const BPS_DENOMINATOR: u128 = 10_000;

/// Registry token amount: the stake, fee, and reward currency.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct TokenAmount(u128);

impl TokenAmount {
    pub const ZERO: Self = Self(0);

    pub fn new(raw: u128) -> Self {
        Self(raw)
    }

    pub fn raw(&self) -> u128 {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub fn checked_add(self, other: Self) -> Option<Self> {
        self.0.checked_add(other.0).map(Self)
    }

    pub fn checked_sub(self, other: Self) -> Option<Self> {
        self.0.checked_sub(other.0).map(Self)
    }

    pub fn saturating_sub(self, other: Self) -> Self {
        Self(self.0.saturating_sub(other.0))
    }

    /// `bps` basis points of this amount, rounded down.
    pub fn bps(self, bps: u32) -> Option<Self> {
        self.0
            .checked_mul(u128::from(bps))
            .map(|scaled| Self(scaled / BPS_DENOMINATOR))
    }
}

impl fmt::Display for TokenAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} VT", self.0)
    }
}

/// Native currency amount attached to value-bearing calls, in base units.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct NativeAmount(u128);

impl NativeAmount {
    pub const ZERO: Self = Self(0);

    pub fn new(raw: u128) -> Self {
        Self(raw)
    }

    /// `units` whole native units.
    pub fn from_units(units: u128) -> Self {
        Self(units.saturating_mul(NATIVE_UNIT))
    }

    pub fn raw(&self) -> u128 {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Tokens credited for this payment at `tokens_per_unit` tokens per whole unit.
    pub fn to_tokens(self, tokens_per_unit: u128) -> Option<TokenAmount> {
        self.0
            .checked_mul(tokens_per_unit)
            .map(|scaled| TokenAmount(scaled / NATIVE_UNIT))
    }
}

impl fmt::Display for NativeAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} wei", self.0)
    }
}
