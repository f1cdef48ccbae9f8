//! # Currency Catalog Loader
//!
//! Reads the currency file and converts it into core definitions.
//!
//! The filesystem touch-point (`load_currencies`) is deliberately thin:
//! everything interesting happens in `parse_currencies`, which takes a
//! string and is therefore unit-testable without touching disk.

use std::fs;
use std::path::Path;

use tracing::{debug, info};

use cashier_core::{CurrencyDefinition, Money};

use crate::error::ConfigError;
use crate::model::{CurrencyFile, CurrencyRecord};

// =============================================================================
// Loading
// =============================================================================

/// Loads currency definitions from a JSON file.
///
/// ## Errors
/// - [`ConfigError::Io`] when the file cannot be read (the path is
///   included in the message)
/// - everything [`parse_currencies`] can fail with
pub fn load_currencies(path: &Path) -> Result<Vec<CurrencyDefinition>, ConfigError> {
    let json = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let currencies = parse_currencies(&json)?;
    info!(
        path = %path.display(),
        count = currencies.len(),
        "currency catalog loaded"
    );
    Ok(currencies)
}

/// Parses currency definitions from JSON text.
///
/// ## Rules
/// - Malformed JSON fails with [`ConfigError::Parse`]
/// - A file with no currencies fails with [`ConfigError::Empty`]
/// - Every denomination must convert to a positive whole-cent amount,
///   else [`ConfigError::InvalidDenomination`] naming the currency and
///   the offending value
/// - Duplicate denominations are tolerated here; the catalog
///   deduplicates on activation
pub fn parse_currencies(json: &str) -> Result<Vec<CurrencyDefinition>, ConfigError> {
    let file: CurrencyFile = serde_json::from_str(json)?;

    if file.currencies.is_empty() {
        return Err(ConfigError::Empty);
    }

    file.currencies.into_iter().map(convert_record).collect()
}

/// Converts one file record into a core definition, moving each decimal
/// denomination into integer cents.
fn convert_record(record: CurrencyRecord) -> Result<CurrencyDefinition, ConfigError> {
    let mut denominations = Vec::with_capacity(record.denominations.len());

    for &value in &record.denominations {
        let amount = Money::try_from_decimal(value)
            .filter(Money::is_positive)
            .ok_or_else(|| ConfigError::InvalidDenomination {
                code: record.currency_code.clone(),
                value,
            })?;
        denominations.push(amount);
    }

    debug!(
        code = %record.currency_code,
        denominations = denominations.len(),
        "currency parsed"
    );

    Ok(CurrencyDefinition {
        country: record.country,
        code: record.currency_code,
        denominations,
    })
}

// =============================================================================
// Unit Tests
// =============================================================================
