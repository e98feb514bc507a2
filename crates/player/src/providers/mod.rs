//! This module contains [crate::TraceProvider] and [crate::PrestateSource] implementations.

mod alphabet;
pub use self::alphabet::AlphabetTraceProvider;

mod fixed;
pub use self::fixed::StaticPrestateSource;
