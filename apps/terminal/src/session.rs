//! # Transaction Session
//!
//! The pay-until-covered loop for one transaction.
//!
//! ## Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Transaction Session                               │
//! │                                                                         │
//! │  show accepted denominations                                           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  prompt for price                                                      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌──► collect a tender round, MERGE into the running breakdown         │
//! │  │        │                                                             │
//! │  │        ▼                                                             │
//! │  │   engine.calculate_change(price, payment, active code)              │
//! │  │        │                                                             │
//! │  │        ├── InsufficientPayment ── show shortfall, loop ─────────┐   │
//! │  └────────┴──────────────────────────────────────────────────◄─────┘   │
//! │           │                                                             │
//! │           ▼                                                             │
//! │       display change breakdown, largest denomination first             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The running tender is kept as one merged breakdown so the payment the
//! engine sees always satisfies the total-equals-breakdown invariant,
//! no matter how many rounds it took the customer to cover the price.

use std::collections::BTreeMap;
use std::io::{BufRead, Write};

use tracing::info;

use cashier_core::{ChangeEngine, ChangeResult, CoreError, CurrencyCatalog, Money, Payment};

use crate::error::TerminalError;
use crate::prompt;

// =============================================================================
// Session
// =============================================================================

/// Runs one transaction against the catalog's active currency.
pub fn run_transaction<R: BufRead, W: Write>(
    catalog: &CurrencyCatalog,
    input: &mut R,
    output: &mut W,
) -> Result<ChangeResult, TerminalError> {
    let active_code = catalog
        .active()
        .map(|currency| currency.code.clone())
        .ok_or(CoreError::NoCurrencySelected)?;
    let denominations = catalog.denominations()?;
    let engine = ChangeEngine::new(catalog);

    show_denominations(output, &denominations)?;
    let price = prompt::read_price(input, output)?;
    info!(%price, currency = %active_code, "transaction started");

    let mut tendered: BTreeMap<Money, u32> = BTreeMap::new();
    loop {
        let round = prompt::read_tender(input, output, &denominations)?;
        merge_tender(&mut tendered, round);

        let payment = Payment::from_breakdown(tendered.clone());
        writeln!(output, "\nTotal amount paid so far: {}", payment.total_paid)?;

        match engine.calculate_change(price, &payment, &active_code) {
            Ok(change) => {
                display_change(output, &change)?;
                info!(total_change = %change.total_change, "transaction complete");
                return Ok(change);
            }
            Err(CoreError::InsufficientPayment { shortfall }) => {
                writeln!(
                    output,
                    "Insufficient payment. Please pay an additional {shortfall}."
                )?;
            }
            Err(err) => return Err(err.into()),
        }
    }
}

/// Folds one tender round into the running breakdown.
fn merge_tender(tendered: &mut BTreeMap<Money, u32>, round: BTreeMap<Money, u32>) {
    for (denomination, count) in round {
        *tendered.entry(denomination).or_insert(0) += count;
    }
}

// =============================================================================
// Display
// =============================================================================

/// Prints the accepted denominations, largest first.
fn show_denominations<W: Write>(output: &mut W, denominations: &[Money]) -> std::io::Result<()> {
    let formatted: Vec<String> = denominations
        .iter()
        .map(|denomination| denomination.to_string())
        .collect();
    writeln!(output, "Accepted denominations: {}", formatted.join(", "))
}

/// Prints the change breakdown, largest denomination first.
fn display_change<W: Write>(output: &mut W, change: &ChangeResult) -> std::io::Result<()> {
    if change.denominations.is_empty() {
        return writeln!(output, "No change to return.");
    }

    writeln!(output, "\nChange to return:")?;
    for (denomination, count) in change.denominations.iter().rev() {
        writeln!(output, "  {count} x {denomination}")?;
    }
    writeln!(output, "Total change: {}", change.total_change)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use cashier_core::CurrencyDefinition;

    use super::*;

    fn usd_catalog() -> CurrencyCatalog {
        let mut catalog = CurrencyCatalog::new();
        catalog
            .initialize(vec![CurrencyDefinition {
                country: Some("United States".to_string()),
                code: "USD".to_string(),
                denominations: vec![
                    Money::from_cents(2000),
                    Money::from_cents(1000),
                    Money::from_cents(500),
                    Money::from_cents(100),
                    Money::from_cents(25),
                    Money::from_cents(10),
                    Money::from_cents(5),
                    Money::from_cents(1),
                ],
            }])
            .unwrap();
        catalog.set_active("USD").unwrap();
        catalog
    }

    #[test]
    fn test_single_round_transaction() {
        let catalog = usd_catalog();
        // Price $10.50, paid with two $10 bills
        let mut input = Cursor::new("10.50\n10 x 2\n\n");
        let mut output = Vec::new();

        let change = run_transaction(&catalog, &mut input, &mut output).unwrap();
        assert_eq!(change.total_change, Money::from_cents(950));
        assert_eq!(change.denominations[&Money::from_cents(500)], 1);

        let transcript = String::from_utf8(output).unwrap();
        assert!(transcript.contains("Change to return:"));
        assert!(transcript.contains("1 x $5.00"));
        assert!(transcript.contains("4 x $1.00"));
        assert!(transcript.contains("2 x $0.25"));
        assert!(transcript.contains("Total change: $9.50"));
    }

    #[test]
    fn test_displays_breakdown_largest_first() {
        let catalog = usd_catalog();
        let mut input = Cursor::new("3.59\n20 x 2\n\n");
        let mut output = Vec::new();

        run_transaction(&catalog, &mut input, &mut output).unwrap();

        let transcript = String::from_utf8(output).unwrap();
        let twenty = transcript.find("1 x $20.00").unwrap();
        let penny = transcript.find("1 x $0.01").unwrap();
        assert!(twenty < penny);
    }

    #[test]
    fn test_insufficient_payment_prompts_for_more() {
        let catalog = usd_catalog();
        // Price $12.00; first round tenders $5.00, second round $10.00
        let mut input = Cursor::new("12.00\n5 x 1\n\n10 x 1\n\n");
        let mut output = Vec::new();

        let change = run_transaction(&catalog, &mut input, &mut output).unwrap();
        assert_eq!(change.total_change, Money::from_cents(300));

        let transcript = String::from_utf8(output).unwrap();
        assert!(transcript.contains("Insufficient payment. Please pay an additional $7.00."));
        assert!(transcript.contains("Total amount paid so far: $15.00"));
    }

    #[test]
    fn test_exact_payment_reports_no_change() {
        let catalog = usd_catalog();
        let mut input = Cursor::new("15.75\n10 x 1\n5 x 1\n0.25 x 3\n\n");
        let mut output = Vec::new();

        let change = run_transaction(&catalog, &mut input, &mut output).unwrap();
        assert!(change.denominations.is_empty());

        let transcript = String::from_utf8(output).unwrap();
        assert!(transcript.contains("No change to return."));
    }

    #[test]
    fn test_no_active_currency_fails() {
        let mut catalog = CurrencyCatalog::new();
        catalog
            .initialize(vec![CurrencyDefinition {
                country: None,
                code: "USD".to_string(),
                denominations: vec![Money::from_cents(100)],
            }])
            .unwrap();

        let mut input = Cursor::new("10.00\n");
        let mut output = Vec::new();

        let result = run_transaction(&catalog, &mut input, &mut output);
        assert!(matches!(
            result,
            Err(TerminalError::Core(CoreError::NoCurrencySelected))
        ));
    }
}
