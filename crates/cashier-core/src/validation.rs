//! # Validation Module
//!
//! Input validation rules for Cashier POS.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Terminal prompts                                             │
//! │  ├── Parse checks (is it a number, is the line well-formed)            │
//! │  └── Immediate operator feedback and re-prompting                      │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── Denomination membership against the active currency              │
//! │  └── Monetary sign and consistency rules                               │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Change engine preconditions                                  │
//! │  └── Active-currency match, business rules                             │
//! │                                                                         │
//! │  Defense in depth: the engine never trusts the prompts.                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Check Order
//! `validate_payment` runs its checks in a fixed order so failures are
//! deterministic and testable: denomination membership first (smallest
//! offending denomination wins, because breakdowns iterate ascending),
//! then the total checks.

use crate::error::{ValidationError, ValidationResult};
use crate::money::Money;
use crate::types::Payment;

// =============================================================================
// Currency Code
// =============================================================================

/// Validates a currency code is present.
///
/// ## Rules
/// - Must not be empty or whitespace-only
///
/// Whether the code actually exists is the catalog's question, not a
/// validation question.
///
/// ## Example
/// ```rust
/// use cashier_core::validation::validate_currency_code;
///
/// assert!(validate_currency_code("USD").is_ok());
/// assert!(validate_currency_code("  ").is_err());
/// ```
pub fn validate_currency_code(code: &str) -> ValidationResult<()> {
    if code.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "currency code".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Price
// =============================================================================

/// Validates a price amount.
///
/// ## Rules
/// - Must be non-negative
///
/// Zero is accepted here: rejecting zero-price *transactions* is a
/// business rule enforced by the change engine, not a property of the
/// amount itself.
pub fn validate_price(price: Money) -> ValidationResult<()> {
    if price.is_negative() {
        return Err(ValidationError::CannotBeNegative {
            field: "price".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Payment
// =============================================================================

/// Validates a tendered payment against the active currency's denominations.
///
/// ## Rules, in order
/// 1. Every tendered denomination must appear in `valid_denominations`
///    (exact cent match, no tolerance); the first offender fails with
///    `InvalidDenomination` naming it
/// 2. `total_paid` must not be negative
/// 3. `total_paid` must equal the total recomputed from the breakdown;
///    the declared total is never trusted
///
/// ## Example
/// ```rust
/// use std::collections::BTreeMap;
/// use cashier_core::{Money, Payment};
/// use cashier_core::validation::validate_payment;
///
/// let valid = [Money::from_cents(500), Money::from_cents(25)];
///
/// let mut tendered = BTreeMap::new();
/// tendered.insert(Money::from_cents(500), 2);
/// let payment = Payment::from_breakdown(tendered);
/// assert!(validate_payment(&payment, &valid).is_ok());
///
/// let mut tendered = BTreeMap::new();
/// tendered.insert(Money::from_cents(300), 1); // no $3.00 denomination
/// let payment = Payment::from_breakdown(tendered);
/// assert!(validate_payment(&payment, &valid).is_err());
/// ```
pub fn validate_payment(payment: &Payment, valid_denominations: &[Money]) -> ValidationResult<()> {
    for denomination in payment.denominations.keys() {
        if !valid_denominations.contains(denomination) {
            return Err(ValidationError::InvalidDenomination {
                denomination: *denomination,
            });
        }
    }

    if payment.total_paid.is_negative() {
        return Err(ValidationError::CannotBeNegative {
            field: "total paid".to_string(),
        });
    }

    let computed = payment.breakdown_total();
    if computed != payment.total_paid {
        return Err(ValidationError::TotalMismatch {
            declared: payment.total_paid,
            computed,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
