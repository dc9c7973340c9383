//! Ledger trait definition.

use crate::crypto::Address;
use crate::engine::Amount;
use async_trait::async_trait;
use thiserror::Error;

/// Errors from ledger operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    #[error("insufficient funds: {address} holds {available}, needs {required}")]
    InsufficientFunds {
        address: Address,
        available: Amount,
        required: Amount,
    },

    #[error("balance overflow for {0}")]
    BalanceOverflow(Address),

    #[error("ledger unavailable: {0}")]
    Unavailable(String),
}

/// Trait for the host's value-transfer operations
///
/// Implementations can be:
/// - MockLedger for testing and the demo service
/// - An adapter over a real account system
#[async_trait]
pub trait Ledger: Send + Sync {
    /// Move `amount` from the player's balance into escrow
    async fn collect(&self, from: &Address, amount: Amount) -> Result<(), LedgerError>;

    /// Credit `amount` from escrow to the address
    async fn pay(&self, to: &Address, amount: Amount) -> Result<(), LedgerError>;

    /// Current spendable balance of the address
    async fn balance(&self, address: &Address) -> Result<Amount, LedgerError>;
}
