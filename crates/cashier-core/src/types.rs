//! # Domain Types
//!
//! Core domain types used throughout Cashier POS.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌────────────────────┐  ┌─────────────────┐  ┌─────────────────┐      │
//! │  │ CurrencyDefinition │  │     Payment     │  │  ChangeResult   │      │
//! │  │  ────────────────  │  │  ─────────────  │  │  ─────────────  │      │
//! │  │  country           │  │  total_paid     │  │  denominations  │      │
//! │  │  code ("USD")      │  │  denominations  │  │  total_change   │      │
//! │  │  denominations     │  │  (denom→count)  │  │  (denom→count)  │      │
//! │  └────────────────────┘  └─────────────────┘  └─────────────────┘      │
//! │                                                                         │
//! │  Breakdown maps are BTreeMap<Money, u32> so iteration order is         │
//! │  always deterministic (ascending by denomination value).               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::money::Money;

// =============================================================================
// Currency Definition
// =============================================================================

/// One currency supported by the point of sale.
///
/// Definitions are produced by the loading layer and handed to the
/// [`CurrencyCatalog`](crate::catalog::CurrencyCatalog) wholesale; nothing
/// else constructs or mutates them at runtime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrencyDefinition {
    /// Display label for the issuing country (informational only).
    pub country: Option<String>,

    /// Unique currency code (ISO 4217 style, e.g. "USD").
    /// Catalog lookups compare codes case-insensitively.
    pub code: String,

    /// Valid denominations for this currency, in cents.
    /// Order here is the file's order; the catalog normalizes it.
    pub denominations: Vec<Money>,
}

// =============================================================================
// Payment
// =============================================================================

/// A payment tendered for a transaction.
///
/// ## Invariant
/// `total_paid` must equal the sum of `denomination * count` over the
/// breakdown. The engine validates this instead of trusting the caller,
/// so a `Payment` built by hand with a drifted total is rejected.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Payment {
    /// The total amount paid by the customer.
    pub total_paid: Money,

    /// Breakdown of the payment: denomination value to unit count.
    pub denominations: BTreeMap<Money, u32>,
}

impl Payment {
    /// Builds a payment from a tendered breakdown, computing the total.
    ///
    /// This is the preferred constructor: the total cannot drift from the
    /// breakdown because it is derived from it.
    ///
    /// ## Example
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use cashier_core::{Money, Payment};
    ///
    /// let mut tendered = BTreeMap::new();
    /// tendered.insert(Money::from_cents(1000), 2); // two $10 bills
    /// tendered.insert(Money::from_cents(25), 3);   // three quarters
    ///
    /// let payment = Payment::from_breakdown(tendered);
    /// assert_eq!(payment.total_paid, Money::from_cents(2075));
    /// ```
    pub fn from_breakdown(denominations: BTreeMap<Money, u32>) -> Self {
        let total_paid = breakdown_total(&denominations);
        Payment {
            total_paid,
            denominations,
        }
    }

    /// Recomputes the total from the breakdown (used by validation).
    pub fn breakdown_total(&self) -> Money {
        breakdown_total(&self.denominations)
    }
}

// =============================================================================
// Change Result
// =============================================================================

/// The change owed back to the customer for a successful transaction.
///
/// ## Invariant
/// `total_change` equals the sum of `denomination * count` over the
/// breakdown, and equals `total_paid - price` for the transaction that
/// produced it. An exact payment yields an empty breakdown and a zero
/// total; that is a success, not an error.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ChangeResult {
    /// Breakdown of the change: denomination value to unit count.
    /// Denominations with a count of zero never appear.
    pub denominations: BTreeMap<Money, u32>,

    /// The total amount of change to hand back.
    pub total_change: Money,
}

impl ChangeResult {
    /// The result for an exact payment: nothing to hand back.
    pub fn empty() -> Self {
        ChangeResult {
            denominations: BTreeMap::new(),
            total_change: Money::zero(),
        }
    }

    /// Recomputes the total from the breakdown (used by tests and audits).
    pub fn breakdown_total(&self) -> Money {
        breakdown_total(&self.denominations)
    }
}

// =============================================================================
// Shared Helpers
// =============================================================================

/// Sums `denomination * count` over a breakdown map.
fn breakdown_total(denominations: &BTreeMap<Money, u32>) -> Money {
    denominations
        .iter()
        .fold(Money::zero(), |total, (denomination, count)| {
            total + denomination.multiply_count(*count)
        })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payment_from_breakdown_computes_total() {
        let mut tendered = BTreeMap::new();
        tendered.insert(Money::from_cents(2000), 1);
        tendered.insert(Money::from_cents(500), 2);
        tendered.insert(Money::from_cents(25), 4);

        let payment = Payment::from_breakdown(tendered);
        assert_eq!(payment.total_paid, Money::from_cents(3100));
        assert_eq!(payment.breakdown_total(), Money::from_cents(3100));
    }

    #[test]
    fn test_payment_empty_breakdown_is_zero() {
        let payment = Payment::from_breakdown(BTreeMap::new());
        assert_eq!(payment.total_paid, Money::zero());
    }

    #[test]
    fn test_change_result_empty() {
        let change = ChangeResult::empty();
        assert!(change.denominations.is_empty());
        assert_eq!(change.total_change, Money::zero());
        assert_eq!(change.breakdown_total(), Money::zero());
    }

    #[test]
    fn test_change_result_breakdown_total() {
        let mut breakdown = BTreeMap::new();
        breakdown.insert(Money::from_cents(500), 1);
        breakdown.insert(Money::from_cents(100), 4);
        breakdown.insert(Money::from_cents(25), 2);

        let change = ChangeResult {
            denominations: breakdown,
            total_change: Money::from_cents(950),
        };
        assert_eq!(change.breakdown_total(), change.total_change);
    }
}
