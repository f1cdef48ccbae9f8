//! Terminal error type.
//!
//! One enum for everything that can abort a session, so `main` has a
//! single error surface to log. Core and config errors pass through
//! unchanged; their messages already carry the context.

use thiserror::Error;

use cashier_config::ConfigError;
use cashier_core::CoreError;

/// Errors that end a terminal session.
#[derive(Debug, Error)]
pub enum TerminalError {
    /// Business logic refused the operation.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The currency catalog could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Console input or output failed.
    #[error("console I/O error: {0}")]
    Io(#[from] std::io::Error),
}
