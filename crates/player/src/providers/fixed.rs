//! This module contains a [crate::PrestateSource] that serves a configured prestate hash.

use crate::PrestateSource;
use anyhow::Result;
use balin_primitives::Claim;
use std::sync::Arc;

/// The [StaticPrestateSource] is a [PrestateSource] that reports a fixed absolute prestate hash, for when the
/// expected prestate is known ahead of time rather than read from a game contract.
pub struct StaticPrestateSource {
    pub absolute_prestate_hash: Claim,
}

impl StaticPrestateSource {
    pub fn new(absolute_prestate_hash: Claim) -> Self {
        Self {
            absolute_prestate_hash,
        }
    }
}

#[async_trait::async_trait]
impl PrestateSource for StaticPrestateSource {
    async fn absolute_prestate_hash(&self) -> Result<Arc<[u8]>> {
        Ok(Arc::from(self.absolute_prestate_hash.as_slice()))
    }
}
