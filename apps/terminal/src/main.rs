//! # Cashier Terminal
//!
//! Interactive console point of sale.
//!
//! ## Startup Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Terminal Startup                                 │
//! │                                                                         │
//! │  init tracing ──► load Settings (env) ──► load currency file           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  CurrencyCatalog::initialize ──► set_active (env or prompt)            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  run one transaction session                                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```bash
//! # Currency file in the working directory, prompt for the currency
//! cashier
//!
//! # Explicit file and pre-selected currency
//! CASHIER_CURRENCY_FILE=./CurrencyConfig.json CASHIER_CURRENCY=USD cashier
//! ```

mod config;
mod error;
mod prompt;
mod session;

use std::io::{self, BufRead, Write};
use std::process;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use cashier_core::CurrencyCatalog;

use crate::config::Settings;
use crate::error::TerminalError;

fn main() {
    // Initialize tracing; RUST_LOG overrides the default level
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    if let Err(err) = run() {
        error!(%err, "terminal session failed");
        process::exit(1);
    }
}

fn run() -> Result<(), TerminalError> {
    let settings = Settings::load();
    info!(path = %settings.currency_file.display(), "starting cashier terminal");

    let currencies = cashier_config::load_currencies(&settings.currency_file)?;

    let mut catalog = CurrencyCatalog::new();
    catalog.initialize(currencies)?;

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();

    activate_currency(&mut catalog, &settings, &mut input, &mut output)?;

    writeln!(output, "\nWelcome to the Cashier POS terminal!\n")?;
    session::run_transaction(&catalog, &mut input, &mut output)?;

    Ok(())
}

/// Activates the configured currency, or prompts for one until the
/// catalog accepts it.
fn activate_currency<R: BufRead, W: Write>(
    catalog: &mut CurrencyCatalog,
    settings: &Settings,
    input: &mut R,
    output: &mut W,
) -> Result<(), TerminalError> {
    // A configured currency is trusted: failure is fatal so a typo in
    // the environment is noticed instead of silently re-prompted.
    if let Some(code) = &settings.currency_code {
        catalog.set_active(code)?;
        if let Some(active) = catalog.active() {
            info!(code = %active.code, "currency selected");
        }
        return Ok(());
    }

    loop {
        let code = prompt::select_currency(input, output, catalog.available())?;
        match catalog.set_active(&code) {
            Ok(()) => {
                if let Some(active) = catalog.active() {
                    info!(code = %active.code, "currency selected");
                }
                return Ok(());
            }
            Err(err) => writeln!(output, "{err}")?,
        }
    }
}
