//! Cryptographic primitives for the commit-reveal wager.
//!
//! This module provides:
//! - Commitment and Salt for the commit-reveal scheme
//! - Address for identifying player accounts
//! - Fixed-width hex helpers shared by the byte types

mod address;
mod commitment;
mod hex_bytes;

pub use address::Address;
pub use commitment::{commit, Commitment, Salt, SALT_LEN};

use thiserror::Error;

/// Errors from decoding codec values
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    #[error("salt text is {0} bytes, at most 31 fit in a salt")]
    SaltTooLong(usize),

    #[error("invalid hex string")]
    InvalidHex,

    #[error("expected {expected} bytes, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("unknown move: {0}")]
    UnknownMove(String),
}
