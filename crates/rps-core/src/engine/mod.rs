//! Single-use escrow game engine.

mod error;
mod game;

pub use error::GameError;
pub use game::{Game, GameSnapshot, Payout, PlayerEntry, Reveal};

/// Monetary amount in the ledger's base unit
pub type Amount = u64;
