//! Value ledger abstraction.
//!
//! The engine moves stakes into escrow and pays the pot out through a
//! `Ledger`; `MockLedger` keeps balances in memory.

mod mock;
mod traits;

pub use mock::MockLedger;
pub use traits::{Ledger, LedgerError};
