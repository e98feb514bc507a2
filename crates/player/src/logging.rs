//! Logging setup for binaries embedding a [crate::GamePlayer].

use anyhow::Result;
use tracing::Dispatch;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Installs a global `tracing` subscriber that writes to stderr.
///
/// The filter is read from `RUST_LOG`, falling back to `default_directive` (e.g. `"info"`) if it is unset or
/// invalid.
pub fn init_tracing(default_directive: &str) -> Result<()> {
    tracing_subscriber::registry()
        .with(env_filter(EnvFilter::try_from_default_env().ok(), default_directive))
        .with(fmt::layer().with_writer(std::io::stderr))
        .try_init()?;
    Ok(())
}

/// Falls back to `default_directive` when no filter was read from the environment.
fn env_filter(from_env: Option<EnvFilter>, default_directive: &str) -> EnvFilter {
    from_env.unwrap_or_else(|| EnvFilter::new(default_directive))
}

/// Returns a handle to the current default dispatcher, to be handed to a [crate::GamePlayer] that should log
/// wherever the rest of the process does.
pub fn current_dispatch() -> Dispatch {
    tracing::dispatcher::get_default(Dispatch::clone)
}
