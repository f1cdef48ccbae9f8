//! # Currency File Models
//!
//! Serde models matching the on-disk currency file shape. The file keys
//! are PascalCase (`Currencies`, `CurrencyCode`); these structs exist so
//! that naming convention stays at the boundary and never leaks into the
//! core types.

use serde::{Deserialize, Serialize};

/// Root of the currency configuration file.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CurrencyFile {
    /// All currencies the deployment supports.
    /// Defaults to empty when the key is missing, so a bare `{}` file is
    /// reported as "no currencies" rather than a parse error.
    #[serde(default)]
    pub currencies: Vec<CurrencyRecord>,
}

/// One currency entry as written in the file.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CurrencyRecord {
    /// Issuing country display name. Optional, informational only.
    #[serde(default)]
    pub country: Option<String>,

    /// Currency code, e.g. "USD".
    pub currency_code: String,

    /// Denominations as decimal amounts, e.g. `[20.00, 0.25]`.
    /// Converted to integer cents during loading.
    pub denominations: Vec<f64>,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserializes_pascal_case_keys() {
        let json = r#"
        {
            "Currencies": [
                {
                    "Country": "United States",
                    "CurrencyCode": "USD",
                    "Denominations": [20.00, 0.25]
                }
            ]
        }
        "#;

        let file: CurrencyFile = serde_json::from_str(json).unwrap();
        assert_eq!(file.currencies.len(), 1);
        assert_eq!(file.currencies[0].currency_code, "USD");
        assert_eq!(file.currencies[0].country.as_deref(), Some("United States"));
        assert_eq!(file.currencies[0].denominations, vec![20.00, 0.25]);
    }

    #[test]
    fn test_country_is_optional() {
        let json = r#"
        {
            "Currencies": [
                { "CurrencyCode": "MXN", "Denominations": [0.50] }
            ]
        }
        "#;

        let file: CurrencyFile = serde_json::from_str(json).unwrap();
        assert_eq!(file.currencies[0].country, None);
    }

    #[test]
    fn test_missing_currencies_key_defaults_to_empty() {
        let file: CurrencyFile = serde_json::from_str("{}").unwrap();
        assert!(file.currencies.is_empty());
    }
}
