//! This module contains the implementation of the [crate::TraceProvider] trait for the mock Alphabet VM.

use crate::TraceProvider;
use alloy_primitives::U256;
use anyhow::Result;
use std::sync::Arc;

/// The [AlphabetTraceProvider] is a [TraceProvider] that serves the absolute prestate of the mock Alphabet VM.
pub struct AlphabetTraceProvider {
    /// The absolute prestate of the alphabet VM is the setup state. This will be the ascii representation of letter
    /// prior to the first in the honest alphabet trace, encoded as a 32 byte big-endian integer.
    pub absolute_prestate: [u8; 32],
}

impl AlphabetTraceProvider {
    pub fn new(absolute_prestate: u64) -> Self {
        Self {
            absolute_prestate: U256::from(absolute_prestate).to_be_bytes(),
        }
    }
}

#[async_trait::async_trait]
impl TraceProvider for AlphabetTraceProvider {
    async fn absolute_prestate(&self) -> Result<Arc<[u8]>> {
        Ok(Arc::new(self.absolute_prestate))
    }
}
