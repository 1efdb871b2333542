//! Logging Config

use clap::Args;

/// Logging settings.
#[derive(Debug, Args)]
pub struct LoggingConfig {
    /// Default log filter when `RUST_LOG` is unset
    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    pub log_level: String,
}
