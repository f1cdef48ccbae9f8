//! Terminal settings.
//!
//! Settings are loaded from environment variables with fallback to
//! defaults, so a bare `cashier` invocation in a directory containing
//! `CurrencyConfig.json` just works.

use std::env;
use std::path::PathBuf;

/// Environment variable naming the currency catalog file.
const ENV_CURRENCY_FILE: &str = "CASHIER_CURRENCY_FILE";

/// Environment variable pre-selecting the active currency code.
const ENV_CURRENCY: &str = "CASHIER_CURRENCY";

/// Terminal configuration.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Path to the currency catalog JSON file.
    /// Default: `CurrencyConfig.json` in the working directory.
    pub currency_file: PathBuf,

    /// Currency code to activate at startup. When unset the terminal
    /// prompts the operator to choose from the loaded catalog.
    pub currency_code: Option<String>,
}

impl Settings {
    /// Loads settings from the environment.
    pub fn load() -> Self {
        Settings {
            currency_file: env::var(ENV_CURRENCY_FILE)
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("CurrencyConfig.json")),

            currency_code: env::var(ENV_CURRENCY)
                .ok()
                .map(|code| code.trim().to_string())
                .filter(|code| !code.is_empty()),
        }
    }
}
