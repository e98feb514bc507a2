//! This module contains [validate_absolute_prestate], which checks the local absolute prestate against the one a
//! dispute game expects.

use crate::{PrestateSource, TraceProvider};
use alloy_primitives::{keccak256, Bytes};
use balin_primitives::Claim;

/// The [PrestateError] enum describes why the absolute prestate could not be validated.
#[derive(Debug, thiserror::Error)]
pub enum PrestateError {
    /// The local absolute prestate could not be fetched from the [TraceProvider].
    #[error("failed to get absolute prestate from trace provider")]
    TraceProvider(#[source] anyhow::Error),
    /// The expected absolute prestate hash could not be fetched from the [PrestateSource].
    #[error("failed to get absolute prestate hash from prestate source")]
    PrestateSource(#[source] anyhow::Error),
    /// The hash of the local absolute prestate does not match the expected hash.
    #[error("absolute prestate mismatch: local {local}, expected {expected}")]
    Mismatch {
        /// The keccak256 hash of the local absolute prestate.
        local: Claim,
        /// The hash reported by the [PrestateSource].
        expected: Bytes,
    },
}

impl PrestateError {
    /// Returns `true` if the prestates were compared and found to differ, as opposed to not being fetched at all.
    pub fn is_mismatch(&self) -> bool {
        matches!(self, Self::Mismatch { .. })
    }
}

/// Validates that the keccak256 hash of the absolute prestate served by the [TraceProvider] is byte-for-byte equal to
/// the hash reported by the [PrestateSource].
///
/// The [PrestateSource] is not queried if the [TraceProvider] fails.
pub async fn validate_absolute_prestate<P, S>(provider: &P, source: &S) -> Result<(), PrestateError>
where
    P: TraceProvider + ?Sized,
    S: PrestateSource + ?Sized,
{
    let prestate = provider
        .absolute_prestate()
        .await
        .map_err(PrestateError::TraceProvider)?;
    let local = keccak256(&prestate[..]);

    let expected = source
        .absolute_prestate_hash()
        .await
        .map_err(PrestateError::PrestateSource)?;

    if local.as_slice() != &expected[..] {
        return Err(PrestateError::Mismatch {
            local,
            expected: Bytes::copy_from_slice(&expected),
        });
    }
    Ok(())
}
