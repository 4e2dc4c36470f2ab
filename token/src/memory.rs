//! In-memory token ledger with O(1) balance and allowance lookups.

use std::collections::HashMap;

use crate::error::TokenError;
use crate::ledger::TokenLedger;
use serde::{Deserialize, Serialize};
use veri_types::{Address, NativeAmount, TokenAmount};

/// Reference [`TokenLedger`] backed by hash maps.
///
/// `Clone` is cheap enough for the node facade to snapshot the whole ledger
/// around a transaction.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MemoryTokenLedger {
    balances: HashMap<Address, TokenAmount>,
    /// owner → spender → approved amount.
    allowances: HashMap<Address, HashMap<Address, TokenAmount>>,
    total_supply: TokenAmount,
    /// Tokens minted per whole native unit of payment.
    tokens_per_native_unit: u128,
}

impl MemoryTokenLedger {
    pub fn new(tokens_per_native_unit: u128) -> Self {
        Self {
            balances: HashMap::new(),
            allowances: HashMap::new(),
            total_supply: TokenAmount::ZERO,
            tokens_per_native_unit,
        }
    }

    fn debit_check(&self, from: &Address, amount: TokenAmount) -> Result<TokenAmount, TokenError> {
        let available = self.balance_of(from);
        available
            .checked_sub(amount)
            .ok_or(TokenError::InsufficientBalance {
                needed: amount.raw(),
                available: available.raw(),
            })
    }

    /// Move funds after all checks passed. Handles `from == to`.
    fn move_funds(
        &mut self,
        from: &Address,
        to: &Address,
        amount: TokenAmount,
    ) -> Result<(), TokenError> {
        let from_after = self.debit_check(from, amount)?;
        if from == to {
            return Ok(());
        }
        let to_after = self
            .balance_of(to)
            .checked_add(amount)
            .ok_or(TokenError::Overflow)?;
        self.balances.insert(from.clone(), from_after);
        self.balances.insert(to.clone(), to_after);
        Ok(())
    }
}

impl Default for MemoryTokenLedger {
    fn default() -> Self {
        Self::new(1000)
    }
}

impl TokenLedger for MemoryTokenLedger {
    fn balance_of(&self, owner: &Address) -> TokenAmount {
        self.balances.get(owner).copied().unwrap_or(TokenAmount::ZERO)
    }

    fn allowance(&self, owner: &Address, spender: &Address) -> TokenAmount {
        self.allowances
            .get(owner)
            .and_then(|approved| approved.get(spender))
            .copied()
            .unwrap_or(TokenAmount::ZERO)
    }

    fn total_supply(&self) -> TokenAmount {
        self.total_supply
    }

    fn tokens_per_native_unit(&self) -> u128 {
        self.tokens_per_native_unit
    }

    fn mint(&mut self, account: &Address, payment: NativeAmount) -> Result<TokenAmount, TokenError> {
        if payment.is_zero() {
            return Err(TokenError::ZeroAmount);
        }
        let minted = payment
            .to_tokens(self.tokens_per_native_unit)
            .ok_or(TokenError::Overflow)?;
        let balance = self
            .balance_of(account)
            .checked_add(minted)
            .ok_or(TokenError::Overflow)?;
        let supply = self
            .total_supply
            .checked_add(minted)
            .ok_or(TokenError::Overflow)?;
        self.balances.insert(account.clone(), balance);
        self.total_supply = supply;
        tracing::debug!(account = %account, %payment, %minted, "minted tokens");
        Ok(minted)
    }

    fn approve(&mut self, owner: &Address, spender: &Address, amount: TokenAmount) {
        self.allowances
            .entry(owner.clone())
            .or_default()
            .insert(spender.clone(), amount);
    }

    fn transfer(
        &mut self,
        from: &Address,
        to: &Address,
        amount: TokenAmount,
    ) -> Result<(), TokenError> {
        self.move_funds(from, to, amount)
    }

    fn transfer_from(
        &mut self,
        spender: &Address,
        owner: &Address,
        recipient: &Address,
        amount: TokenAmount,
    ) -> Result<(), TokenError> {
        let approved = self.allowance(owner, spender);
        let remaining = approved
            .checked_sub(amount)
            .ok_or(TokenError::InsufficientAllowance {
                needed: amount.raw(),
                approved: approved.raw(),
            })?;
        self.move_funds(owner, recipient, amount)?;
        self.approve(owner, spender, remaining);
        Ok(())
    }

    fn burn(&mut self, from: &Address, amount: TokenAmount) -> Result<(), TokenError> {
        let from_after = self.debit_check(from, amount)?;
        self.balances.insert(from.clone(), from_after);
        self.total_supply = self.total_supply.saturating_sub(amount);
        Ok(())
    }
}
