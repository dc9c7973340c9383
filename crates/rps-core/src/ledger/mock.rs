//! In-memory ledger for testing.

use super::traits::{Ledger, LedgerError};
use crate::crypto::Address;
use crate::engine::Amount;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// In-memory ledger keyed by address
#[derive(Clone, Default)]
pub struct MockLedger {
    balances: Arc<Mutex<HashMap<Address, Amount>>>,
    /// Total currently held in escrow across all games
    escrowed: Arc<Mutex<Amount>>,
    /// When set, every call fails with `Unavailable`
    offline: Arc<Mutex<bool>>,
}

impl MockLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Credit an address out of thin air (faucet)
    pub fn fund(&self, address: Address, amount: Amount) -> Amount {
        let mut balances = self.balances.lock().unwrap();
        let balance = balances.entry(address).or_insert(0);
        *balance = balance.saturating_add(amount);
        *balance
    }

    /// Amount collected but not yet paid out
    pub fn escrowed(&self) -> Amount {
        *self.escrowed.lock().unwrap()
    }

    /// Simulate an outage of the backing account system
    pub fn set_offline(&self, offline: bool) {
        *self.offline.lock().unwrap() = offline;
    }

    fn check_online(&self) -> Result<(), LedgerError> {
        if *self.offline.lock().unwrap() {
            return Err(LedgerError::Unavailable("ledger offline".to_string()));
        }
        Ok(())
    }

    fn balance_of(&self, address: &Address) -> Amount {
        self.balances
            .lock()
            .unwrap()
            .get(address)
            .copied()
            .unwrap_or(0)
    }
}

#[async_trait]
impl Ledger for MockLedger {
    async fn collect(&self, from: &Address, amount: Amount) -> Result<(), LedgerError> {
        self.check_online()?;
        let mut balances = self.balances.lock().unwrap();
        let available = balances.get(from).copied().unwrap_or(0);
        if available < amount {
            return Err(LedgerError::InsufficientFunds {
                address: *from,
                available,
                required: amount,
            });
        }
        balances.insert(*from, available - amount);

        let mut escrowed = self.escrowed.lock().unwrap();
        *escrowed = escrowed.saturating_add(amount);
        Ok(())
    }

    async fn pay(&self, to: &Address, amount: Amount) -> Result<(), LedgerError> {
        self.check_online()?;
        let mut balances = self.balances.lock().unwrap();
        let balance = balances.entry(*to).or_insert(0);
        *balance = balance
            .checked_add(amount)
            .ok_or(LedgerError::BalanceOverflow(*to))?;

        let mut escrowed = self.escrowed.lock().unwrap();
        *escrowed = escrowed.saturating_sub(amount);
        Ok(())
    }

    async fn balance(&self, address: &Address) -> Result<Amount, LedgerError> {
        self.check_online()?;
        Ok(self.balance_of(address))
    }
}
