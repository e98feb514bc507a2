//! The traits module contains the capabilities a dispute game player depends on.

use crate::GameStatus;
use anyhow::Result;
use std::sync::Arc;

/// The [Agent] trait describes a participant in a dispute game that is able to perform the next unit of work on
/// behalf of one side of the dispute. What that work is (posting claims, stepping the VM, resolving) is entirely up
/// to the implementation.
#[async_trait::async_trait]
pub trait Agent: Send + Sync {
    /// Performs a single round of actions against the dispute game.
    async fn act(&self) -> Result<()>;
}

/// The [GameStateReader] trait describes a read-only view of a dispute game. Every call reflects the latest state
/// observed by the implementation; no staleness guarantees are made.
///
/// A single type may implement both [Agent] and [GameStateReader].
#[async_trait::async_trait]
pub trait GameStateReader: Send + Sync {
    /// Returns the current [GameStatus] of the dispute game.
    async fn game_status(&self) -> Result<GameStatus>;

    /// Returns the number of claims within the dispute game.
    async fn claim_count(&self) -> Result<u64>;
}

#[async_trait::async_trait]
impl<T: Agent + ?Sized> Agent for Arc<T> {
    async fn act(&self) -> Result<()> {
        (**self).act().await
    }
}

#[async_trait::async_trait]
impl<T: GameStateReader + ?Sized> GameStateReader for Arc<T> {
    async fn game_status(&self) -> Result<GameStatus> {
        (**self).game_status().await
    }

    async fn claim_count(&self) -> Result<u64> {
        (**self).claim_count().await
    }
}
