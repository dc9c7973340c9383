//! Rock-Paper-Scissors moves and precedence.

use crate::crypto::CodecError;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Width of a move's padded tag in the commitment preimage
pub const MOVE_TAG_LEN: usize = 32;

/// Rock-Paper-Scissors move
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Move {
    Rock,
    Paper,
    Scissors,
}

impl Move {
    /// Canonical name, also the tag hashed into commitments
    pub fn as_str(&self) -> &'static str {
        match self {
            Move::Rock => "ROCK",
            Move::Paper => "PAPER",
            Move::Scissors => "SCISSORS",
        }
    }

    /// Name zero-padded to `MOVE_TAG_LEN` bytes
    pub fn tag(&self) -> [u8; MOVE_TAG_LEN] {
        let mut tag = [0u8; MOVE_TAG_LEN];
        let name = self.as_str().as_bytes();
        tag[..name.len()].copy_from_slice(name);
        tag
    }

    /// Check if this move beats the other
    pub fn beats(&self, other: &Move) -> bool {
        matches!(
            (self, other),
            (Move::Rock, Move::Scissors) | (Move::Scissors, Move::Paper) | (Move::Paper, Move::Rock)
        )
    }
}

impl FromStr for Move {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "rock" => Ok(Move::Rock),
            "paper" => Ok(Move::Paper),
            "scissors" => Ok(Move::Scissors),
            _ => Err(CodecError::UnknownMove(s.to_string())),
        }
    }
}

// Accepts any casing, like `FromStr`
impl<'de> Deserialize<'de> for Move {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of a game between side A and side B
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    AWins,
    BWins,
    Draw,
}

/// Decide the outcome of `a` against `b`
pub fn judge(a: Move, b: Move) -> Outcome {
    if a == b {
        Outcome::Draw
    } else if a.beats(&b) {
        Outcome::AWins
    } else {
        Outcome::BWins
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rps_rock_beats_scissors() {
        assert_eq!(judge(Move::Rock, Move::Scissors), Outcome::AWins);
        assert_eq!(judge(Move::Scissors, Move::Rock), Outcome::BWins);
    }

    #[test]
    fn test_rps_scissors_beats_paper() {
        assert_eq!(judge(Move::Scissors, Move::Paper), Outcome::AWins);
        assert_eq!(judge(Move::Paper, Move::Scissors), Outcome::BWins);
    }

    #[test]
    fn test_rps_paper_beats_rock() {
        assert_eq!(judge(Move::Paper, Move::Rock), Outcome::AWins);
        assert_eq!(judge(Move::Rock, Move::Paper), Outcome::BWins);
    }

    #[test]
    fn test_rps_all_outcomes() {
        let moves = [Move::Rock, Move::Paper, Move::Scissors];
        let mut a_wins = 0;
        let mut b_wins = 0;
        let mut draws = 0;

        for a in moves {
            for b in moves {
                match judge(a, b) {
                    Outcome::AWins => a_wins += 1,
                    Outcome::BWins => b_wins += 1,
                    Outcome::Draw => {
                        assert_eq!(a, b);
                        draws += 1
                    }
                }
            }
        }

        assert_eq!((a_wins, b_wins, draws), (3, 3, 3));
    }

    #[test]
    fn test_move_tag_is_padded_name() {
        let tag = Move::Scissors.tag();
        assert_eq!(&tag[..8], b"SCISSORS");
        assert!(tag[8..].iter().all(|b| *b == 0));
    }

    #[test]
    fn test_move_parse() {
        assert_eq!("rock".parse::<Move>().unwrap(), Move::Rock);
        assert_eq!("PAPER".parse::<Move>().unwrap(), Move::Paper);
        assert_eq!("Scissors".parse::<Move>().unwrap(), Move::Scissors);
        assert!(matches!(
            "lizard".parse::<Move>(),
            Err(CodecError::UnknownMove(_))
        ));
    }

    #[test]
    fn test_move_serde_any_case() {
        for name in ["\"rock\"", "\"ROCK\"", "\"Rock\""] {
            assert_eq!(serde_json::from_str::<Move>(name).unwrap(), Move::Rock);
        }
        assert_eq!(serde_json::to_string(&Move::Scissors).unwrap(), "\"scissors\"");

        let err = serde_json::from_str::<Move>("\"lizard\"").unwrap_err();
        assert!(err.to_string().contains("unknown move: lizard"));
    }
}
