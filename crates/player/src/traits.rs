//! This module holds the collaborator traits used to validate the absolute prestate of a game.

use anyhow::Result;
use std::sync::Arc;

/// A [TraceProvider] is a type that can provide the raw absolute prestate (in bytes) of the execution trace that the
/// local player disputes over. Implementations must return the same bytes across calls for a fixed game
/// configuration.
#[async_trait::async_trait]
pub trait TraceProvider: Send + Sync {
    /// Returns the raw absolute prestate (in bytes).
    async fn absolute_prestate(&self) -> Result<Arc<[u8]>>;
}

/// A [PrestateSource] reports the absolute prestate hash that a dispute game expects, typically read from the
/// game contract.
#[async_trait::async_trait]
pub trait PrestateSource: Send + Sync {
    /// Returns the expected absolute prestate hash.
    async fn absolute_prestate_hash(&self) -> Result<Arc<[u8]>>;
}
