//! Logging setup
//!
//! Installs the global `tracing` subscriber for the binaries. `RUST_LOG`
//! takes precedence over the configured level.

use std::fs::OpenOptions;
use std::sync::Mutex;

use tracing_subscriber::{fmt, EnvFilter};

use crate::config::LoggingConfig;
use crate::error::{NotRedisError, Result};

/// Initialize the global subscriber from the logging section
pub fn init(config: &LoggingConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .map_err(|e| NotRedisError::Config(format!("invalid log level '{}': {}", config.level, e)))?;

    let builder = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_names(true);

    let installed = match config.output.as_str() {
        "stderr" => builder.with_writer(std::io::stderr).try_init(),
        "stdout" => builder.with_writer(std::io::stdout).try_init(),
        path => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
    };

    installed.map_err(|e| NotRedisError::Config(format!("failed to install logger: {}", e)))
}
