//! # Change Engine
//!
//! Computes the cash change owed to a customer for a transaction.
//!
//! ## How a Transaction Flows
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    calculate_change(price, payment, code)               │
//! │                                                                         │
//! │  1. currency code non-blank          ── validation error               │
//! │  2. price > 0                        ── validation error               │
//! │  3. price / payment validation       ── validation error               │
//! │  4. code matches ACTIVE currency     ── CurrencyNotLoaded              │
//! │  5. denominations non-empty          ── EmptyDenominations             │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  change_due = total_paid - price                                       │
//! │       ├── negative ── InsufficientPayment { shortfall }                │
//! │       ├── zero ────── empty breakdown, done                            │
//! │       └── positive ── greedy walk of denominations, largest first:     │
//! │                         count = change_due / denomination              │
//! │                         record count, subtract, stop at zero           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  remainder > 0 ── UnrepresentableChange (partial breakdown DISCARDED)  │
//! │  remainder = 0 ── ChangeResult { breakdown, total_paid - price }       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Known Limitation: Greedy Assumes a Canonical System
//! Greedy decomposition hands back the minimum number of units only for
//! canonical denomination systems (USD and MXN are canonical). For a
//! contrived set like `{4, 3, 1}`, change of 6 comes back as `4+1+1`
//! instead of `3+3`. The engine does not try to detect such sets; the
//! result is still exact, just not minimal.

use std::collections::BTreeMap;

use crate::catalog::CurrencyCatalog;
use crate::error::{CoreError, CoreResult, ValidationError};
use crate::money::Money;
use crate::types::{ChangeResult, Payment};
use crate::validation;

// =============================================================================
// Change Engine
// =============================================================================

/// The change-decomposition engine.
///
/// Borrows the catalog it reads from; callers own the catalog and decide
/// its lifetime. The engine holds no state of its own: `calculate_change`
/// is a pure function of its arguments plus the catalog's current
/// denomination snapshot, so an engine can be created per transaction at
/// zero cost.
#[derive(Debug)]
pub struct ChangeEngine<'a> {
    catalog: &'a CurrencyCatalog,
}

impl<'a> ChangeEngine<'a> {
    /// Creates an engine reading from the given catalog.
    pub fn new(catalog: &'a CurrencyCatalog) -> Self {
        ChangeEngine { catalog }
    }

    /// Calculates the change breakdown for a transaction.
    ///
    /// ## Arguments
    /// * `price` - what the customer owes; must be strictly positive
    /// * `payment` - the tendered breakdown and its total
    /// * `currency_code` - the currency the transaction is denominated
    ///   in; must match the catalog's ACTIVE currency exactly
    ///   (case-sensitive, unlike catalog lookup)
    ///
    /// ## Returns
    /// A [`ChangeResult`] whose breakdown sums exactly to
    /// `total_paid - price`. An exact payment returns an empty breakdown.
    ///
    /// ## Errors
    /// Each precondition failure is a distinct error; see the module
    /// documentation for the exact order. Failures never return a
    /// partial breakdown.
    pub fn calculate_change(
        &self,
        price: Money,
        payment: &Payment,
        currency_code: &str,
    ) -> CoreResult<ChangeResult> {
        // Precondition gauntlet. Order is part of the contract.
        validation::validate_currency_code(currency_code)?;

        if !price.is_positive() {
            // Zero-price transactions are refused as a business rule:
            // nothing was sold, so there is nothing to make change for.
            return Err(ValidationError::MustBePositive {
                field: "price".to_string(),
            }
            .into());
        }

        validation::validate_price(price)?;
        let denominations = self.catalog.denominations()?;
        validation::validate_payment(payment, &denominations)?;

        let active = self
            .catalog
            .active()
            .ok_or(CoreError::NoCurrencySelected)?;
        if active.code != currency_code {
            return Err(CoreError::CurrencyNotLoaded {
                code: currency_code.to_string(),
            });
        }

        if denominations.is_empty() {
            // The catalog guarantees a non-empty cache; this guards the
            // invariant anyway.
            return Err(CoreError::EmptyDenominations {
                code: active.code.clone(),
            });
        }

        let change_due = payment.total_paid - price;
        if change_due.is_negative() {
            return Err(CoreError::InsufficientPayment {
                shortfall: price - payment.total_paid,
            });
        }
        if change_due.is_zero() {
            return Ok(ChangeResult::empty());
        }

        // Greedy walk, largest denomination first. All arithmetic is in
        // integer cents, so the remainder is exact at every step and the
        // zero test needs no rounding.
        let mut breakdown = BTreeMap::new();
        let mut remaining = change_due.cents();
        for denomination in denominations.iter() {
            let count = remaining / denomination.cents();
            if count > 0 {
                breakdown.insert(*denomination, count as u32);
                remaining -= count * denomination.cents();
            }
            if remaining == 0 {
                break;
            }
        }

        if remaining > 0 {
            // All-or-nothing: the breakdown accumulated so far is dropped.
            return Err(CoreError::UnrepresentableChange {
                remainder: Money::from_cents(remaining),
            });
        }

        Ok(ChangeResult {
            denominations: breakdown,
            // Recomputed from the inputs rather than accumulated through
            // the loop, so the reported total is exact by construction.
            total_change: payment.total_paid - price,
        })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CurrencyDefinition;

    /// USD with the full bill-and-coin set, descending after activation:
    /// $20, $10, $5, $1, $0.25, $0.10, $0.05, $0.01
    fn usd_catalog() -> CurrencyCatalog {
        let mut catalog = CurrencyCatalog::new();
        catalog
            .initialize(vec![CurrencyDefinition {
                country: Some("United States".to_string()),
                code: "USD".to_string(),
                denominations: vec![
                    Money::from_cents(1),
                    Money::from_cents(5),
                    Money::from_cents(10),
                    Money::from_cents(25),
                    Money::from_cents(100),
                    Money::from_cents(500),
                    Money::from_cents(1000),
                    Money::from_cents(2000),
                ],
            }])
            .unwrap();
        catalog.set_active("USD").unwrap();
        catalog
    }

    /// A deliberately sparse currency that cannot represent every amount.
    fn sparse_catalog() -> CurrencyCatalog {
        let mut catalog = CurrencyCatalog::new();
        catalog
            .initialize(vec![CurrencyDefinition {
                country: None,
                code: "USD".to_string(),
                denominations: vec![
                    Money::from_cents(500),
                    Money::from_cents(100),
                    Money::from_cents(25),
                ],
            }])
            .unwrap();
        catalog.set_active("USD").unwrap();
        catalog
    }

    fn payment_of(entries: &[(i64, u32)]) -> Payment {
        let mut tendered = BTreeMap::new();
        for &(cents, count) in entries {
            tendered.insert(Money::from_cents(cents), count);
        }
        Payment::from_breakdown(tendered)
    }

    #[test]
    fn test_change_for_typical_transaction() {
        let catalog = usd_catalog();
        let engine = ChangeEngine::new(&catalog);

        // $10.50 price, paid with two $10 bills
        let payment = payment_of(&[(1000, 2)]);
        let change = engine
            .calculate_change(Money::from_cents(1050), &payment, "USD")
            .unwrap();

        assert_eq!(change.total_change, Money::from_cents(950));
        assert_eq!(change.denominations.len(), 3);
        assert_eq!(change.denominations[&Money::from_cents(500)], 1); // 1 x $5
        assert_eq!(change.denominations[&Money::from_cents(100)], 4); // 4 x $1
        assert_eq!(change.denominations[&Money::from_cents(25)], 2); // 2 quarters
    }

    #[test]
    fn test_change_breakdown_sums_to_total() {
        let catalog = usd_catalog();
        let engine = ChangeEngine::new(&catalog);

        let payment = payment_of(&[(2000, 1), (25, 3)]); // $20.75
        let change = engine
            .calculate_change(Money::from_cents(387), &payment, "USD")
            .unwrap();

        assert_eq!(change.total_change, Money::from_cents(2075 - 387));
        assert_eq!(change.breakdown_total(), change.total_change);
    }

    #[test]
    fn test_exact_payment_returns_empty_breakdown() {
        let catalog = usd_catalog();
        let engine = ChangeEngine::new(&catalog);

        // $15.75 paid exactly
        let payment = payment_of(&[(1000, 1), (500, 1), (25, 3)]);
        let change = engine
            .calculate_change(Money::from_cents(1575), &payment, "USD")
            .unwrap();

        assert!(change.denominations.is_empty());
        assert_eq!(change.total_change, Money::zero());
    }

    #[test]
    fn test_no_zero_counts_in_breakdown() {
        let catalog = usd_catalog();
        let engine = ChangeEngine::new(&catalog);

        // Change of $0.06: a nickel and a penny; every other denomination
        // must be absent rather than present with count 0
        let payment = payment_of(&[(100, 1)]);
        let change = engine
            .calculate_change(Money::from_cents(94), &payment, "USD")
            .unwrap();

        assert_eq!(change.denominations.len(), 2);
        assert!(change.denominations.values().all(|&count| count > 0));
    }

    #[test]
    fn test_insufficient_payment_reports_shortfall() {
        let catalog = usd_catalog();
        let engine = ChangeEngine::new(&catalog);

        let payment = payment_of(&[(500, 1)]); // $5.00 against $12.00
        let err = engine
            .calculate_change(Money::from_cents(1200), &payment, "USD")
            .unwrap_err();

        match err {
            CoreError::InsufficientPayment { shortfall } => {
                assert_eq!(shortfall, Money::from_cents(700));
            }
            other => panic!("expected InsufficientPayment, got {other:?}"),
        }
    }

    #[test]
    fn test_currency_code_mismatch_is_case_sensitive() {
        let catalog = usd_catalog();
        let engine = ChangeEngine::new(&catalog);
        let payment = payment_of(&[(2000, 1)]);

        // A different currency entirely
        let err = engine
            .calculate_change(Money::from_cents(1000), &payment, "EUR")
            .unwrap_err();
        match err {
            CoreError::CurrencyNotLoaded { code } => assert_eq!(code, "EUR"),
            other => panic!("expected CurrencyNotLoaded, got {other:?}"),
        }

        // Same currency, wrong case: the transaction match is exact even
        // though catalog lookup is not
        let err = engine
            .calculate_change(Money::from_cents(1000), &payment, "usd")
            .unwrap_err();
        assert!(matches!(err, CoreError::CurrencyNotLoaded { .. }));
    }

    #[test]
    fn test_invalid_denomination_fails_before_computation() {
        let catalog = usd_catalog();
        let engine = ChangeEngine::new(&catalog);

        // $3.00 is not a US denomination, even though the totals work out
        let payment = payment_of(&[(300, 4), (2000, 1)]);
        let err = engine
            .calculate_change(Money::from_cents(1000), &payment, "USD")
            .unwrap_err();

        match err {
            CoreError::Validation(ValidationError::InvalidDenomination { denomination }) => {
                assert_eq!(denomination, Money::from_cents(300));
            }
            other => panic!("expected InvalidDenomination, got {other:?}"),
        }
    }

    #[test]
    fn test_unrepresentable_change_is_all_or_nothing() {
        let catalog = sparse_catalog();
        let engine = ChangeEngine::new(&catalog);

        // $15.00 against $14.30: change due $0.70, but $5/$1/$0.25 can
        // only reach $0.50 greedily, stranding $0.20
        let payment = payment_of(&[(500, 3)]);
        let err = engine
            .calculate_change(Money::from_cents(1430), &payment, "USD")
            .unwrap_err();

        match err {
            CoreError::UnrepresentableChange { remainder } => {
                assert_eq!(remainder, Money::from_cents(20));
            }
            other => panic!("expected UnrepresentableChange, got {other:?}"),
        }
    }

    #[test]
    fn test_blank_currency_code_rejected() {
        let catalog = usd_catalog();
        let engine = ChangeEngine::new(&catalog);
        let payment = payment_of(&[(2000, 1)]);

        let err = engine
            .calculate_change(Money::from_cents(1000), &payment, "  ")
            .unwrap_err();
        assert!(matches!(
            err,
            CoreError::Validation(ValidationError::Required { .. })
        ));
    }

    #[test]
    fn test_zero_and_negative_price_rejected() {
        let catalog = usd_catalog();
        let engine = ChangeEngine::new(&catalog);
        let payment = payment_of(&[(2000, 1)]);

        for cents in [0, -100] {
            let err = engine
                .calculate_change(Money::from_cents(cents), &payment, "USD")
                .unwrap_err();
            assert!(matches!(
                err,
                CoreError::Validation(ValidationError::MustBePositive { .. })
            ));
        }
    }

    #[test]
    fn test_no_active_currency_surfaces_before_code_match() {
        let mut catalog = CurrencyCatalog::new();
        catalog
            .initialize(vec![CurrencyDefinition {
                country: None,
                code: "USD".to_string(),
                denominations: vec![Money::from_cents(100)],
            }])
            .unwrap();
        // set_active never called

        let engine = ChangeEngine::new(&catalog);
        let payment = payment_of(&[(100, 20)]);
        let err = engine
            .calculate_change(Money::from_cents(1000), &payment, "USD")
            .unwrap_err();
        assert!(matches!(err, CoreError::NoCurrencySelected));
    }

    #[test]
    fn test_tendered_denominations_remain_change_candidates() {
        let catalog = usd_catalog();
        let engine = ChangeEngine::new(&catalog);

        // The customer pays with quarters and still gets quarters back:
        // $11.00 tendered as 44 quarters against $10.50 returns 2 quarters
        let payment = payment_of(&[(25, 44)]);
        let change = engine
            .calculate_change(Money::from_cents(1050), &payment, "USD")
            .unwrap();

        assert_eq!(change.denominations[&Money::from_cents(25)], 2);
        assert_eq!(change.total_change, Money::from_cents(50));
    }

    #[test]
    fn test_greedy_consumes_largest_first() {
        let catalog = usd_catalog();
        let engine = ChangeEngine::new(&catalog);

        // Change of $36.41 must lean on the largest denominations:
        // 1x$20 + 1x$10 + 1x$5 + 1x$1 + 1x$0.25 + 1x$0.10 + 1x$0.05 + 1x$0.01
        let payment = payment_of(&[(2000, 2)]);
        let change = engine
            .calculate_change(Money::from_cents(359), &payment, "USD")
            .unwrap();

        let expected: Vec<(i64, u32)> = vec![
            (1, 1),
            (5, 1),
            (10, 1),
            (25, 1),
            (100, 1),
            (500, 1),
            (1000, 1),
            (2000, 1),
        ];
        let actual: Vec<(i64, u32)> = change
            .denominations
            .iter()
            .map(|(denomination, count)| (denomination.cents(), *count))
            .collect();
        assert_eq!(actual, expected);
    }
}
