//! Structured logging.
//!
//! Libraries emit `tracing` events; the binary calls [`init_logging`] once at
//! startup. `RUST_LOG` overrides the configured level. Output goes to stderr
//! so stdout stays clean for `--format json`.
//!
//! Field names used across the workspace:
//! - `key`: storage key of a collection
//! - `id`: quote or support request id
//! - `endpoint`: chat endpoint URL

use std::sync::OnceLock;
use tracing_subscriber::EnvFilter;

use crate::{Error, Result};

static LOGGING_INITIALIZED: OnceLock<()> = OnceLock::new();

/// Install the global subscriber. Later calls are no-ops.
pub fn init_logging(level: &str) -> Result<()> {
    if LOGGING_INITIALIZED.get().is_some() {
        return Ok(());
    }

    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(level)
            .map_err(|e| Error::Logging(format!("invalid log level '{}': {}", level, e)))?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| Error::Logging(e.to_string()))?;

    let _ = LOGGING_INITIALIZED.set(());
    Ok(())
}
