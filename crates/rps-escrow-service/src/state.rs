//! Application state management.

use crate::models::{GameId, GameSummary};
use rps_core::{Amount, Game, MockLedger};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// Games by id, plus ids in creation order
#[derive(Default)]
struct Registry {
    games: HashMap<GameId, Arc<Game>>,
    order: Vec<GameId>,
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    registry: Arc<RwLock<Registry>>,
    ledger: MockLedger,
    /// Blind used when a create request names none
    default_blind: Amount,
}

impl AppState {
    pub fn new(default_blind: Amount) -> Self {
        Self::with_ledger(default_blind, MockLedger::new())
    }

    pub fn with_ledger(default_blind: Amount, ledger: MockLedger) -> Self {
        Self {
            registry: Arc::new(RwLock::new(Registry::default())),
            ledger,
            default_blind,
        }
    }

    pub fn ledger(&self) -> &MockLedger {
        &self.ledger
    }

    pub fn default_blind(&self) -> Amount {
        self.default_blind
    }

    // Game operations

    /// Open a fresh single-use game
    pub fn create_game(&self, blind: Amount) -> GameId {
        let id = GameId::new();
        let game = Arc::new(Game::new(blind, Arc::new(self.ledger.clone())));
        let mut registry = self.registry.write().unwrap();
        registry.games.insert(id, game);
        registry.order.push(id);
        id
    }

    pub fn get_game(&self, id: GameId) -> Option<Arc<Game>> {
        self.registry.read().unwrap().games.get(&id).cloned()
    }

    /// Snapshots of every game, oldest first
    pub async fn list_games(&self) -> Vec<GameSummary> {
        let games: Vec<(GameId, Arc<Game>)> = {
            let registry = self.registry.read().unwrap();
            registry
                .order
                .iter()
                .filter_map(|id| registry.games.get(id).map(|g| (*id, Arc::clone(g))))
                .collect()
        };

        let mut summaries = Vec::with_capacity(games.len());
        for (game_id, game) in games {
            summaries.push(GameSummary {
                game_id,
                snapshot: game.snapshot().await,
            });
        }
        summaries
    }
}
