//! # Currency Loading Error Types
//!
//! Error types for currency catalog loading.
//!
//! ## Error Flow
//! ```text
//! io::Error / serde_json::Error
//!      │
//!      ▼
//! ConfigError (this module)  ← adds the file path and currency context
//!      │
//!      ▼
//! TerminalError (in app)     ← shown to the operator once, at top level
//! ```

use std::path::PathBuf;

use thiserror::Error;

/// Currency catalog loading errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The currency file could not be read.
    ///
    /// ## When This Occurs
    /// - File missing at the configured path
    /// - Permission denied
    #[error("could not read currency file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The currency file is not valid JSON for the expected shape.
    #[error("could not parse currency file: {0}")]
    Parse(#[from] serde_json::Error),

    /// The file parsed but defines no currencies at all.
    #[error("the currency file does not define any currencies")]
    Empty,

    /// A denomination value cannot be represented as money.
    ///
    /// ## When This Occurs
    /// - Zero or negative denomination
    /// - More precision than the minor unit (e.g. 0.001)
    /// - Non-finite JSON numbers smuggled in through extensions
    #[error("currency '{code}' has an invalid denomination value: {value}")]
    InvalidDenomination { code: String, value: f64 },
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ConfigError::InvalidDenomination {
            code: "USD".to_string(),
            value: 0.001,
        };
        assert_eq!(
            err.to_string(),
            "currency 'USD' has an invalid denomination value: 0.001"
        );

        let err = ConfigError::Empty;
        assert_eq!(
            err.to_string(),
            "the currency file does not define any currencies"
        );
    }
}
