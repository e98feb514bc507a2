//! Holds the [GameOutcome] type.

use balin_primitives::GameStatus;

/// The [GameOutcome] enum describes how a concluded dispute game ended from the perspective of the local player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    /// The side represented by the local player won the dispute.
    Won,
    /// The side represented by the local player lost the dispute.
    Lost,
}

impl GameOutcome {
    /// Classifies a [GameStatus] for a player representing the proposer (`is_proposer = true`, defending the root
    /// claim) or the challenger (`is_proposer = false`).
    ///
    /// ### Returns
    /// - `None` if the game is still [GameStatus::InProgress].
    /// - `Some(GameOutcome)` otherwise.
    pub fn classify(is_proposer: bool, status: GameStatus) -> Option<Self> {
        match (is_proposer, status) {
            (_, GameStatus::InProgress) => None,
            (true, GameStatus::DefenderWon) | (false, GameStatus::ChallengerWon) => Some(Self::Won),
            (true, GameStatus::ChallengerWon) | (false, GameStatus::DefenderWon) => Some(Self::Lost),
        }
    }
}
