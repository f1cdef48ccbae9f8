//! # Operator Prompts
//!
//! Console input collection for the terminal. Every prompt is generic
//! over `BufRead`/`Write` so tests drive them with in-memory buffers
//! instead of a live console.
//!
//! Input retry loops live HERE, not in the core: the core fails fast on
//! bad input, the prompts re-ask until the operator produces something
//! the core will accept (or the input stream ends).

use std::collections::BTreeMap;
use std::io::{self, BufRead, Write};

use cashier_core::{CurrencyDefinition, Money};

// =============================================================================
// Line Reading
// =============================================================================

/// Reads one trimmed line, failing with `UnexpectedEof` when the input
/// stream is exhausted (keeps the retry loops from spinning forever on a
/// closed stdin).
fn read_line<R: BufRead>(input: &mut R) -> io::Result<String> {
    let mut line = String::new();
    let bytes = input.read_line(&mut line)?;
    if bytes == 0 {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "input stream ended",
        ));
    }
    Ok(line.trim().to_string())
}

// =============================================================================
// Currency Selection
// =============================================================================

/// Prompts the operator to pick a currency from the loaded catalog.
///
/// Returns the entered code as-is; the catalog performs the actual
/// (case-insensitive) lookup and the caller re-prompts on rejection.
pub fn select_currency<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    available: &[CurrencyDefinition],
) -> io::Result<String> {
    writeln!(output, "Available currencies:")?;
    for currency in available {
        match &currency.country {
            Some(country) => writeln!(output, "  {} ({})", currency.code, country)?,
            None => writeln!(output, "  {}", currency.code)?,
        }
    }

    loop {
        write!(output, "Select a currency code: ")?;
        output.flush()?;

        let code = read_line(input)?;
        if !code.is_empty() {
            return Ok(code);
        }
        writeln!(output, "A currency code is required.")?;
    }
}

// =============================================================================
// Price Prompt
// =============================================================================

/// Prompts for the transaction price until a positive whole-cent decimal
/// is entered.
pub fn read_price<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> io::Result<Money> {
    loop {
        write!(output, "Enter the price of the item(s): ")?;
        output.flush()?;

        let line = read_line(input)?;
        match parse_amount(&line) {
            Some(price) if price.is_positive() => return Ok(price),
            _ => writeln!(output, "Invalid price! Enter a positive amount like 10.50.")?,
        }
    }
}

/// Parses a decimal amount entered at the console.
///
/// Accepts an optional leading `$`. Returns `None` for anything that is
/// not a whole-cent decimal.
pub fn parse_amount(line: &str) -> Option<Money> {
    let cleaned = line.trim().trim_start_matches('$');
    let value: f64 = cleaned.parse().ok()?;
    Money::try_from_decimal(value)
}

// =============================================================================
// Tender Prompt
// =============================================================================

/// Collects one round of tendered denominations.
///
/// One denomination per line as `<denomination> x <count>` (the `x` is
/// optional); a blank line finishes the round. Lines naming a
/// denomination outside `valid_denominations` are refused immediately so
/// the operator can correct them on the spot.
pub fn read_tender<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    valid_denominations: &[Money],
) -> io::Result<BTreeMap<Money, u32>> {
    writeln!(
        output,
        "Enter tendered cash as '<denomination> x <count>', one per line (blank line to finish):"
    )?;

    let mut tendered: BTreeMap<Money, u32> = BTreeMap::new();
    loop {
        write!(output, "> ")?;
        output.flush()?;

        let line = read_line(input)?;
        if line.is_empty() {
            return Ok(tendered);
        }

        let Some((denomination, count)) = parse_tender_line(&line) else {
            writeln!(output, "Invalid denomination input.")?;
            continue;
        };

        if !valid_denominations.contains(&denomination) {
            writeln!(
                output,
                "Invalid denomination. Please enter a valid denomination."
            )?;
            continue;
        }

        *tendered.entry(denomination).or_insert(0) += count;
    }
}

/// Parses one tender line into a denomination and count.
///
/// Accepted shapes: `10 x 2`, `10 2`, `0.25 x 3`, `$5 1`.
/// Returns `None` for malformed lines and zero counts.
pub fn parse_tender_line(line: &str) -> Option<(Money, u32)> {
    let mut parts: Vec<&str> = line.split_whitespace().collect();
    if parts.len() == 3 && parts[1].eq_ignore_ascii_case("x") {
        parts.remove(1);
    }
    if parts.len() != 2 {
        return None;
    }

    let denomination = parse_amount(parts[0])?;
    let count: u32 = parts[1].parse().ok()?;
    if count == 0 {
        return None;
    }
    Some((denomination, count))
}

// =============================================================================
// Unit Tests
// =============================================================================
