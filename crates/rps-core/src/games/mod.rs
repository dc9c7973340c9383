//! Game definitions and winner rules.

mod rps;

pub use rps::{judge, Move, Outcome, MOVE_TAG_LEN};
