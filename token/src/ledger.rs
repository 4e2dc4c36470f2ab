//! The token-ledger interface consumed by the engines.

use crate::error::TokenError;
use veri_types::{Address, NativeAmount, TokenAmount};

/// A conventional transferable-balance ledger.
///
/// Every failing call must leave balances, allowances, and supply untouched.
pub trait TokenLedger {
    fn balance_of(&self, owner: &Address) -> TokenAmount;

    fn allowance(&self, owner: &Address, spender: &Address) -> TokenAmount;

    fn total_supply(&self) -> TokenAmount;

    /// Tokens credited by `mint` per whole native unit of payment.
    fn tokens_per_native_unit(&self) -> u128;

    /// Convert an attached native payment into tokens credited to `account`.
    /// Returns the amount credited.
    fn mint(&mut self, account: &Address, payment: NativeAmount) -> Result<TokenAmount, TokenError>;

    /// Set (not add to) the amount `spender` may move out of `owner`.
    fn approve(&mut self, owner: &Address, spender: &Address, amount: TokenAmount);

    fn transfer(&mut self, from: &Address, to: &Address, amount: TokenAmount)
        -> Result<(), TokenError>;

    /// Move `amount` from `owner` to `recipient` on behalf of `spender`,
    /// consuming `spender`'s allowance.
    fn transfer_from(
        &mut self,
        spender: &Address,
        owner: &Address,
        recipient: &Address,
        amount: TokenAmount,
    ) -> Result<(), TokenError>;

    /// Destroy `amount` held by `from`.
    fn burn(&mut self, from: &Address, amount: TokenAmount) -> Result<(), TokenError>;
}
