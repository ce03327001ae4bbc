//! Diagnostic logging setup.
//!
//! Logs go to stderr through `tracing`, keeping stdout free for reports.
//! `RUST_LOG` wins over the configured level when set.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

use crate::error::{Result, TallyError};

/// Install the global subscriber. Fails if one is already installed.
pub fn init_tracing(log_level: &str) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("tally={}", log_level)));

    let formatting_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .compact();

    Registry::default()
        .with(env_filter)
        .with(formatting_layer)
        .try_init()
        .map_err(|e| TallyError::Config(format!("Failed to initialize tracing: {}", e)))?;

    tracing::debug!(log_level, "Logging initialized");
    Ok(())
}
