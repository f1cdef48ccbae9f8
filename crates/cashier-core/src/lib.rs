//! # cashier-core: Pure Business Logic for Cashier POS
//!
//! This crate is the **heart** of Cashier POS. It contains all business logic
//! as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Cashier POS Architecture                          │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Terminal (apps/terminal)                     │   │
//! │  │    Currency Select ──► Price Prompt ──► Tender ──► Change      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ cashier-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   money   │  │  catalog  │  │  change   │  │ validation│  │   │
//! │  │   │   Money   │  │ Currency  │  │  Change   │  │   rules   │  │   │
//! │  │   │  (cents)  │  │  Catalog  │  │  Engine   │  │  checks   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO FILESYSTEM • NO CONSOLE • PURE FUNCTIONS         │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                cashier-config (Loading Layer)                   │   │
//! │  │          JSON currency file parsing and conversion              │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`types`] - Domain types (CurrencyDefinition, Payment, ChangeResult)
//! - [`catalog`] - The currency catalog and active-currency state
//! - [`validation`] - Payment and price validation rules
//! - [`change`] - Greedy change decomposition engine
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Filesystem, console, and network access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in cents (i64) to avoid float errors
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use std::collections::BTreeMap;
//! use cashier_core::{ChangeEngine, CurrencyCatalog, CurrencyDefinition, Money, Payment};
//!
//! let mut catalog = CurrencyCatalog::new();
//! catalog
//!     .initialize(vec![CurrencyDefinition {
//!         country: Some("United States".to_string()),
//!         code: "USD".to_string(),
//!         denominations: vec![
//!             Money::from_cents(2000),
//!             Money::from_cents(1000),
//!             Money::from_cents(500),
//!             Money::from_cents(100),
//!             Money::from_cents(25),
//!             Money::from_cents(10),
//!             Money::from_cents(5),
//!             Money::from_cents(1),
//!         ],
//!     }])
//!     .unwrap();
//! catalog.set_active("USD").unwrap();
//!
//! let mut tendered = BTreeMap::new();
//! tendered.insert(Money::from_cents(1000), 2); // two $10 bills
//! let payment = Payment::from_breakdown(tendered);
//!
//! let engine = ChangeEngine::new(&catalog);
//! let change = engine
//!     .calculate_change(Money::from_cents(1050), &payment, "USD")
//!     .unwrap();
//!
//! // $20.00 paid against a $10.50 price comes back as $9.50
//! assert_eq!(change.total_change, Money::from_cents(950));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod change;
pub mod error;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use cashier_core::Money` instead of
// `use cashier_core::money::Money`

pub use catalog::CurrencyCatalog;
pub use change::ChangeEngine;
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use types::{ChangeResult, CurrencyDefinition, Payment};
