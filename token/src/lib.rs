//! Token ledger: the fungible-balance collaborator both engines settle through.
//!
//! The registry and the verification ledger only ever see the [`TokenLedger`]
//! trait: balances, allowances, mint-on-deposit, and the approve /
//! transfer-from pattern. [`MemoryTokenLedger`] is the in-process reference
//! implementation used by the node facade and the tests.

pub mod error;
pub mod ledger;
pub mod memory;

pub use error::TokenError;
pub use ledger::TokenLedger;
pub use memory::MemoryTokenLedger;
