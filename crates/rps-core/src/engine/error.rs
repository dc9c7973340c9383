//! Engine error taxonomy.

use super::Amount;
use crate::crypto::Address;
use crate::ledger::LedgerError;
use thiserror::Error;

/// Errors from game operations. Every failure leaves the game untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("bet is smaller than blind")]
    InsufficientStake { stake: Amount, blind: Amount },

    #[error("player already has a move")]
    DuplicateCommitment(Address),

    #[error("no winner")]
    NoWinner,

    #[error("pot is empty")]
    EmptyPot,

    #[error("game already settled")]
    GameSettled,

    #[error("revealed move does not match commitment of {0}")]
    CommitmentMismatch(Address),

    #[error("no commitment on record for {0}")]
    UnknownPlayer(Address),

    #[error("pot would overflow")]
    PotOverflow,

    #[error(transparent)]
    Ledger(#[from] LedgerError),
}
