//! Data models for the escrow service.

use rps_core::GameSnapshot;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Game instance identifier
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GameId(pub Uuid);

impl GameId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for GameId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Game snapshot tagged with its id
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GameSummary {
    pub game_id: GameId,
    #[serde(flatten)]
    pub snapshot: GameSnapshot,
}
