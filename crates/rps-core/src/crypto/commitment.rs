//! Commitment and Salt for the commit-reveal scheme.

use super::{hex_bytes, CodecError};
use crate::games::{Move, MOVE_TAG_LEN};
use rand::RngCore;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;
use std::str::FromStr;

/// Width of a salt in bytes
pub const SALT_LEN: usize = 32;

/// Secret salt chosen by a player when committing
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Salt(#[serde(with = "hex_bytes")] [u8; SALT_LEN]);

impl Salt {
    /// Create a new random salt
    pub fn random() -> Self {
        let mut bytes = [0u8; SALT_LEN];
        rand::thread_rng().fill_bytes(&mut bytes);
        Self(bytes)
    }

    /// Create from raw bytes
    pub fn from_bytes(bytes: [u8; SALT_LEN]) -> Self {
        Self(bytes)
    }

    /// Encode short text as a zero-padded salt.
    ///
    /// At most 31 bytes are accepted so the last byte is always a terminator,
    /// matching the `bytes32` string convention wallets use.
    pub fn from_text(text: &str) -> Result<Self, CodecError> {
        let raw = text.as_bytes();
        if raw.len() >= SALT_LEN {
            return Err(CodecError::SaltTooLong(raw.len()));
        }
        let mut bytes = [0u8; SALT_LEN];
        bytes[..raw.len()].copy_from_slice(raw);
        Ok(Self(bytes))
    }

    /// Parse from 64 hex digits, with or without `0x`
    pub fn from_hex(s: &str) -> Result<Self, CodecError> {
        hex_bytes::decode_fixed(s).map(Self)
    }

    /// Get the underlying bytes
    pub fn as_bytes(&self) -> &[u8; SALT_LEN] {
        &self.0
    }
}

impl fmt::Debug for Salt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Salt({}..)", hex::encode(&self.0[..4]))
    }
}

/// Commitment = SHA256(move tag || salt)
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Commitment(#[serde(with = "hex_bytes")] [u8; 32]);

impl Commitment {
    /// Create a commitment to a move under a salt.
    ///
    /// The preimage is always `MOVE_TAG_LEN + SALT_LEN` bytes: the move's
    /// padded tag followed by the salt.
    pub fn new(mv: Move, salt: &Salt) -> Self {
        let mut preimage = [0u8; MOVE_TAG_LEN + SALT_LEN];
        preimage[..MOVE_TAG_LEN].copy_from_slice(&mv.tag());
        preimage[MOVE_TAG_LEN..].copy_from_slice(salt.as_bytes());

        let mut hasher = Sha256::new();
        hasher.update(preimage);
        Self(hasher.finalize().into())
    }

    /// Create from raw bytes
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Get the underlying bytes
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Verify that the given move and salt produce this commitment
    pub fn verify(&self, mv: Move, salt: &Salt) -> bool {
        *self == Self::new(mv, salt)
    }
}

/// Commit to `mv` under `salt`
pub fn commit(mv: Move, salt: &Salt) -> Commitment {
    Commitment::new(mv, salt)
}

impl FromStr for Commitment {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        hex_bytes::decode_fixed(s).map(Self)
    }
}

impl fmt::Debug for Commitment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Commitment({})", hex::encode(&self.0[..8]))
    }
}

impl fmt::Display for Commitment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}
