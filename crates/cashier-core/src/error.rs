//! # Error Types
//!
//! Domain-specific error types for cashier-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  cashier-core errors (this file)                                       │
//! │  ├── CoreError        - Catalog state and change computation failures  │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  cashier-config errors (separate crate)                                │
//! │  └── ConfigError      - Currency file loading failures                 │
//! │                                                                         │
//! │  Terminal errors (in app)                                              │
//! │  └── TerminalError    - What the operator sees                         │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → TerminalError → Console           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (currency code, amounts)
//! 3. Errors are enum variants, never String
//! 4. Every failure aborts the current operation with no partial state change

use thiserror::Error;

use crate::money::Money;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
///
/// These errors represent catalog state problems or business rule
/// violations. They are deterministic: retrying the same call with the
/// same inputs fails the same way, so callers decide whether to correct
/// the input and call again.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The requested currency code is not in the catalog.
    ///
    /// ## When This Occurs
    /// - `set_active` given a code the currency file never defined
    /// - Typo in a configured default currency
    #[error("the currency code '{code}' was not found in the available currencies")]
    CurrencyNotFound { code: String },

    /// An operation needed the active currency but none is selected.
    ///
    /// ## When This Occurs
    /// - Denominations requested before `set_active`
    /// - Change calculation attempted on a freshly initialized catalog
    #[error("no currency has been selected")]
    NoCurrencySelected,

    /// The transaction named a currency other than the active one.
    ///
    /// The catalog processes one currency at a time. A transaction tagged
    /// "EUR" while "USD" is active is refused rather than silently
    /// computed in the wrong denominations.
    #[error("the currency code '{code}' is not currently loaded")]
    CurrencyNotLoaded { code: String },

    /// The currency exists but has no usable denominations.
    #[error("the currency code '{code}' does not have any valid denominations")]
    EmptyDenominations { code: String },

    /// The catalog was initialized with no currencies at all.
    #[error("the currency catalog cannot be initialized from an empty currency list")]
    EmptyCatalog,

    /// The tendered amount does not cover the price.
    ///
    /// ## When This Occurs
    /// - Customer has not finished paying yet
    ///
    /// The payment and price were each well-formed; this is a business
    /// condition, not a validation failure. The shortfall lets the caller
    /// prompt for exactly the missing amount.
    #[error("insufficient payment: {shortfall} still owed")]
    InsufficientPayment { shortfall: Money },

    /// No combination of available denominations sums to the change due.
    ///
    /// ## When This Occurs
    /// - Change of $0.70 against denominations of only $5 / $1 / $0.25
    ///
    /// The partial breakdown is discarded: change is all-or-nothing.
    #[error("unable to provide exact change with available denominations")]
    UnrepresentableChange { remainder: Money },

    /// Validation error (wraps ValidationError).
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when caller input doesn't meet requirements.
/// Used for early validation before business logic runs.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or blank.
    #[error("{field} is required")]
    Required { field: String },

    /// Value must be strictly positive.
    #[error("{field} must be greater than zero")]
    MustBePositive { field: String },

    /// Value must not be negative.
    #[error("{field} cannot be negative")]
    CannotBeNegative { field: String },

    /// A tendered denomination is not part of the active currency.
    #[error("invalid denomination: {denomination}")]
    InvalidDenomination { denomination: Money },

    /// The declared payment total disagrees with its own breakdown.
    #[error("total paid {declared} does not match the tendered breakdown ({computed})")]
    TotalMismatch { declared: Money, computed: Money },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

/// Convenience type alias for Results with ValidationError.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::CurrencyNotLoaded {
            code: "EUR".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "the currency code 'EUR' is not currently loaded"
        );

        let err = CoreError::UnrepresentableChange {
            remainder: Money::from_cents(20),
        };
        assert_eq!(
            err.to_string(),
            "unable to provide exact change with available denominations"
        );

        let err = CoreError::InsufficientPayment {
            shortfall: Money::from_cents(250),
        };
        assert_eq!(err.to_string(), "insufficient payment: $2.50 still owed");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "currency code".to_string(),
        };
        assert_eq!(err.to_string(), "currency code is required");

        let err = ValidationError::InvalidDenomination {
            denomination: Money::from_cents(300),
        };
        assert_eq!(err.to_string(), "invalid denomination: $3.00");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "price".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
