//! This module contains the [GamePlayer], which progresses a single dispute game until it concludes.

use crate::{GameOutcome, PlayerConfig};
use anyhow::Result;
use balin_primitives::{Agent, GameStateReader, GameStatus};
use std::time::Duration;
use tracing::{dispatcher, error, info, Dispatch};

/// The [GamePlayer] drives a single dispute game on behalf of one side of the dispute. Each call to
/// [GamePlayer::progress_game] asks the [Agent] to act and then inspects the game's status through the
/// [GameStateReader]. Once a terminal status is observed it is cached, and the game is never acted upon again.
///
/// The player is not meant to be shared between concurrent callers; [GamePlayer::progress_game] takes `&mut self`.
pub struct GamePlayer<A, L>
where
    A: Agent,
    L: GameStateReader,
{
    agent: A,
    loader: L,
    /// Whether the player represents the proposer (defender) of the root claim.
    is_proposer: bool,
    /// The dispatcher that all events emitted by the player are sent to.
    logger: Dispatch,
    /// The terminal status of the game, set once on the first round that observes it.
    completed: Option<GameStatus>,
}

impl<A, L> GamePlayer<A, L>
where
    A: Agent,
    L: GameStateReader,
{
    pub fn new(agent: A, loader: L, is_proposer: bool, logger: Dispatch) -> Self {
        Self {
            agent,
            loader,
            is_proposer,
            logger,
            completed: None,
        }
    }

    pub fn from_config(agent: A, loader: L, config: &PlayerConfig, logger: Dispatch) -> Self {
        Self::new(agent, loader, config.is_proposer, logger)
    }

    /// Returns the terminal [GameStatus] of the game if the player has observed it, without reading the game.
    pub fn status(&self) -> Option<GameStatus> {
        self.completed
    }

    /// Returns whether the player represents the proposer of the root claim.
    pub fn is_proposer(&self) -> bool {
        self.is_proposer
    }

    /// Performs one round of progress on the game.
    ///
    /// A failed action or claim count read is logged and never fails the round; the action is retried on the next
    /// round. Failing to read the status of the game is returned as an error, and the game is not considered
    /// concluded.
    ///
    /// ### Returns
    /// - `Ok(true)` if the game has concluded, on this round or an earlier one.
    /// - `Ok(false)` if the game is still in progress.
    pub async fn progress_game(&mut self) -> Result<bool> {
        Ok(self.progress().await?.is_some())
    }

    /// Progresses the game until it concludes, waiting `poll_interval` between rounds.
    ///
    /// ### Returns
    /// - The terminal [GameStatus] of the game, or the first error from reading the game's state.
    pub async fn run(&mut self, poll_interval: Duration) -> Result<GameStatus> {
        loop {
            if let Some(status) = self.progress().await? {
                return Ok(status);
            }
            tokio::time::sleep(poll_interval).await;
        }
    }

    async fn progress(&mut self) -> Result<Option<GameStatus>> {
        // A concluded game is never acted upon again.
        if let Some(status) = self.completed {
            return Ok(Some(status));
        }

        if let Err(err) = self.agent.act().await {
            self.log(|| error!(err = %err, "acting on the game failed"));
        }

        // The claim count is informational; failing to read it never blocks the status check.
        let claims = match self.loader.claim_count().await {
            Ok(claims) => Some(claims),
            Err(err) => {
                self.log(|| error!(err = %err, "failed to get claim count"));
                None
            }
        };
        let status = self.loader.game_status().await?;

        let Some(outcome) = GameOutcome::classify(self.is_proposer, status) else {
            match claims {
                Some(claims) => self.log(|| info!(claims, status = ?status, "game info")),
                None => self.log(|| info!(status = ?status, "game info")),
            }
            return Ok(None);
        };

        self.completed = Some(status);
        match outcome {
            GameOutcome::Won => self.log(|| info!(status = ?status, "the dispute concluded favorably")),
            GameOutcome::Lost => {
                self.log(|| error!(status = ?status, "the dispute concluded unfavorably"))
            }
        }
        Ok(Some(status))
    }

    #[inline]
    fn log(&self, event: impl FnOnce()) {
        dispatcher::with_default(&self.logger, event)
    }
}
