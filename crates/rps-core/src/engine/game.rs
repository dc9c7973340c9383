//! Game state and the play / evaluate / claim operations.

use super::{Amount, GameError};
use crate::crypto::{commit, Address, Commitment, Salt};
use crate::games::{judge, Move, Outcome};
use crate::ledger::Ledger;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

/// A player's disclosed move and salt
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Reveal {
    pub address: Address,
    #[serde(rename = "move")]
    pub mv: Move,
    pub salt: Salt,
}

impl Reveal {
    pub fn new(address: Address, mv: Move, salt: Salt) -> Self {
        Self { address, mv, salt }
    }
}

/// Commitment stored for a player
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerEntry {
    pub address: Address,
    pub commitment: Commitment,
}

/// Record of the one successful claim
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payout {
    pub winner: Address,
    pub amount: Amount,
}

/// Point-in-time view of a game
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub blind: Amount,
    pub pot: Amount,
    /// Players in the order they joined
    pub players: Vec<PlayerEntry>,
    pub payout: Option<Payout>,
}

#[derive(Default)]
struct GameState {
    commitments: HashMap<Address, Commitment>,
    joined: Vec<Address>,
    pot: Amount,
    payout: Option<Payout>,
}

impl GameState {
    /// Check a reveal against the commitment on record
    fn verify(&self, reveal: &Reveal) -> Result<(), GameError> {
        let stored = self
            .commitments
            .get(&reveal.address)
            .ok_or(GameError::UnknownPlayer(reveal.address))?;

        if *stored != commit(reveal.mv, &reveal.salt) {
            warn!("Reveal from {} does not match its commitment", reveal.address);
            return Err(GameError::CommitmentMismatch(reveal.address));
        }
        Ok(())
    }

    fn winner(&self, a: &Reveal, b: &Reveal) -> Result<Option<Address>, GameError> {
        self.verify(a)?;
        self.verify(b)?;

        let winner = match judge(a.mv, b.mv) {
            Outcome::AWins => Some(a.address),
            Outcome::BWins => Some(b.address),
            Outcome::Draw => None,
        };
        debug!("{} vs {}: winner {:?}", a.mv, b.mv, winner);
        Ok(winner)
    }
}

/// One single-use commit-reveal wager.
///
/// All state lives behind one mutex. `play` and `claim` hold it across their
/// checks, the ledger transfer and the mutation, so no two calls interleave.
pub struct Game {
    blind: Amount,
    state: Mutex<GameState>,
    ledger: Arc<dyn Ledger>,
}

impl Game {
    /// Create a game with a fixed minimum stake
    pub fn new(blind: Amount, ledger: Arc<dyn Ledger>) -> Self {
        Self {
            blind,
            state: Mutex::new(GameState::default()),
            ledger,
        }
    }

    pub fn blind(&self) -> Amount {
        self.blind
    }

    pub async fn pot(&self) -> Amount {
        self.state.lock().await.pot
    }

    /// Commitment stored for `address`, if it has played
    pub async fn moves(&self, address: &Address) -> Option<Commitment> {
        self.state.lock().await.commitments.get(address).copied()
    }

    pub async fn snapshot(&self) -> GameSnapshot {
        let state = self.state.lock().await;
        GameSnapshot {
            blind: self.blind,
            pot: state.pot,
            players: state
                .joined
                .iter()
                .map(|address| PlayerEntry {
                    address: *address,
                    commitment: state.commitments[address],
                })
                .collect(),
            payout: state.payout,
        }
    }

    /// Commit to a hidden move and put `stake` in the pot
    pub async fn play(
        &self,
        caller: Address,
        commitment: Commitment,
        stake: Amount,
    ) -> Result<(), GameError> {
        if stake < self.blind {
            return Err(GameError::InsufficientStake {
                stake,
                blind: self.blind,
            });
        }

        let mut state = self.state.lock().await;
        if state.payout.is_some() {
            return Err(GameError::GameSettled);
        }
        if state.commitments.contains_key(&caller) {
            return Err(GameError::DuplicateCommitment(caller));
        }
        let pot = state.pot.checked_add(stake).ok_or(GameError::PotOverflow)?;

        self.ledger.collect(&caller, stake).await?;

        state.commitments.insert(caller, commitment);
        state.joined.push(caller);
        state.pot = pot;

        info!("{} committed {:?} with stake {}, pot {}", caller, commitment, stake, pot);
        Ok(())
    }

    /// Verify both reveals and return the winner, or `None` on a tie
    pub async fn evaluate(&self, a: &Reveal, b: &Reveal) -> Result<Option<Address>, GameError> {
        self.state.lock().await.winner(a, b)
    }

    /// Verify both reveals and pay the whole pot to the winner
    pub async fn claim(&self, a: &Reveal, b: &Reveal) -> Result<Payout, GameError> {
        let mut state = self.state.lock().await;

        let winner = state.winner(a, b)?.ok_or(GameError::NoWinner)?;
        // A payout closes the game for good, whatever the pot holds
        if state.payout.is_some() || state.pot == 0 {
            return Err(GameError::EmptyPot);
        }

        let amount = state.pot;
        self.ledger.pay(&winner, amount).await?;

        let payout = Payout { winner, amount };
        state.pot = 0;
        state.payout = Some(payout);

        info!("Paid pot of {} to {}", amount, winner);
        Ok(payout)
    }
}
