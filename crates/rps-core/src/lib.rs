//! RPS Escrow Core Library
//!
//! This crate provides the commitment codec, the Rock-Paper-Scissors rules,
//! the value ledger abstraction, and the single-use escrow game engine.

pub mod crypto;
pub mod engine;
pub mod games;
pub mod ledger;

pub use crypto::{commit, Address, CodecError, Commitment, Salt};
pub use engine::{Amount, Game, GameError, GameSnapshot, Payout, PlayerEntry, Reveal};
pub use games::{Move, Outcome};
pub use ledger::{Ledger, LedgerError, MockLedger};
