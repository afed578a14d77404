//! Logging setup for applications embedding the player.
//!
//! The library only emits `tracing` events; nothing is printed unless the
//! host installs a subscriber, either its own or the one below.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_FILTER: &str = "jamstream_player=info,warn";

/// Install a stderr subscriber.
///
/// The level comes from `RUST_LOG` when set, e.g.
/// `RUST_LOG=jamstream_player=debug` to see every queue transition.
/// Fails if a global subscriber is already installed.
pub fn init_logging() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()?;

    tracing::debug!("logging initialized");
    Ok(())
}
