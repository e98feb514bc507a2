//! Configuration for a [crate::GamePlayer].

use serde::Deserialize;
use std::time::Duration;

/// The [PlayerConfig] holds the settings a [crate::GamePlayer] and its driver are built from.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlayerConfig {
    /// Whether the player represents the proposer of the root claim. If `false`, the player is a challenger.
    pub is_proposer: bool,
    /// The number of seconds to wait between two rounds of progressing the game.
    pub poll_interval_secs: u64,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            is_proposer: false,
            poll_interval_secs: 12,
        }
    }
}

impl PlayerConfig {
    /// Returns the poll interval as a [Duration].
    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_interval_secs)
    }
}
