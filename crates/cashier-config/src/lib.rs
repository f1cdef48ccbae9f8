//! # cashier-config: Currency Catalog Loading for Cashier POS
//!
//! This crate reads the currency catalog file and converts it into
//! [`cashier_core`] types. It is the only crate in the workspace that
//! performs filesystem I/O.
//!
//! ## Data Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Currency Loading Pipeline                          │
//! │                                                                         │
//! │  CurrencyConfig.json                                                   │
//! │       │  fs::read_to_string                                            │
//! │       ▼                                                                 │
//! │  CurrencyFile { Currencies: [...] }     (serde, PascalCase keys)       │
//! │       │  per-record conversion                                         │
//! │       ▼                                                                 │
//! │  Vec<CurrencyDefinition>                (Money in integer cents)       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  CurrencyCatalog::initialize(...)       (in cashier-core)              │
//! │                                                                         │
//! │  Decimal denominations become cents exactly once, here. A value        │
//! │  that is zero, negative, or finer than one cent fails the load.        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## File Format
//! ```json
//! {
//!   "Currencies": [
//!     {
//!       "Country": "United States",
//!       "CurrencyCode": "USD",
//!       "Denominations": [20.00, 10.00, 5.00, 1.00, 0.25, 0.10, 0.05, 0.01]
//!     }
//!   ]
//! }
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod loader;
pub mod model;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::ConfigError;
pub use loader::{load_currencies, parse_currencies};
pub use model::{CurrencyFile, CurrencyRecord};
