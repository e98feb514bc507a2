//! Types describing the state of a dispute game.

use alloy_primitives::B256;
use anyhow::{bail, Error};
use std::fmt;

/// The [Claim] type is an alias to [B256], used to deliniate a claim hash from a regular hash.
pub type Claim = B256;

/// The [GameStatus] enum is used to indicate the status of a dispute game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    /// The [GameStatus::InProgress] variant is used to indicate that the dispute game is still in progress.
    InProgress = 0,
    /// The [GameStatus::ChallengerWon] variant is used to indicate that the challenger of the root claim has won the
    /// dispute game.
    ChallengerWon = 1,
    /// The [GameStatus::DefenderWon] variant is used to indicate that the defender of the root claim has won the
    /// dispute game.
    DefenderWon = 2,
}

impl GameStatus {
    /// Returns `true` if the dispute game has concluded, i.e. the status is anything other than
    /// [GameStatus::InProgress].
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

impl TryFrom<u8> for GameStatus {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(GameStatus::InProgress),
            1 => Ok(GameStatus::ChallengerWon),
            2 => Ok(GameStatus::DefenderWon),
            _ => bail!("Invalid game status: {value}"),
        }
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::InProgress => write!(f, "In Progress"),
            GameStatus::ChallengerWon => write!(f, "Challenger Won"),
            GameStatus::DefenderWon => write!(f, "Defender Won"),
        }
    }
}
