//! # Currency Catalog
//!
//! Owns the list of known currencies and tracks which one is active.
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Catalog Lifecycle                                  │
//! │                                                                         │
//! │  CurrencyCatalog::new()                                                │
//! │       │  empty, nothing selectable                                     │
//! │       ▼                                                                 │
//! │  initialize(currencies) ── replaces the available list wholesale,      │
//! │       │                    clears any active currency                  │
//! │       ▼                                                                 │
//! │  set_active("usd") ─────── case-insensitive lookup; denominations      │
//! │       │                    deduplicated, sorted DESCENDING, cached     │
//! │       ▼                                                                 │
//! │  denominations() ───────── Arc snapshot of the cached descending list  │
//! │                                                                         │
//! │  The descending order is a contract: the change engine consumes        │
//! │  the snapshot largest-first without re-sorting.                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Thread Safety
//! Writers (`initialize`, `set_active`) take `&mut self`, so exclusive
//! access is enforced by the borrow checker rather than a lock. Readers
//! take `&self` and may run concurrently. The denomination cache is an
//! `Arc<[Money]>` that is replaced, never edited in place: a snapshot
//! handed out before a `set_active` stays valid and internally consistent
//! for as long as the holder keeps it.

use std::sync::Arc;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::CurrencyDefinition;
use crate::validation;

// =============================================================================
// Active Currency
// =============================================================================

/// The currently selected currency plus its normalized denomination cache.
///
/// Built atomically by `set_active`: either both fields are replaced or
/// neither is.
#[derive(Debug, Clone)]
struct ActiveCurrency {
    definition: CurrencyDefinition,
    /// Deduplicated, strictly positive, sorted descending.
    denominations: Arc<[Money]>,
}

// =============================================================================
// Currency Catalog
// =============================================================================

/// The catalog of supported currencies.
///
/// The catalog is an explicitly constructed value owned by the caller and
/// passed by reference to whoever needs it. There is no global instance:
/// tests build their own catalogs and stay hermetic.
#[derive(Debug, Default)]
pub struct CurrencyCatalog {
    /// All loaded currencies, in load order. Immutable snapshot between
    /// `initialize` calls.
    available: Vec<CurrencyDefinition>,

    /// At most one active currency, or none.
    active: Option<ActiveCurrency>,
}

impl CurrencyCatalog {
    /// Creates an empty catalog with no currencies and nothing active.
    pub fn new() -> Self {
        CurrencyCatalog {
            available: Vec::new(),
            active: None,
        }
    }

    /// Populates the catalog from already-parsed currency definitions.
    ///
    /// ## Rules
    /// - The list must be non-empty, else [`CoreError::EmptyCatalog`]
    /// - Replaces any previously loaded list wholesale
    /// - Clears the active currency: a re-initialized catalog requires a
    ///   fresh `set_active` before transactions can run
    pub fn initialize(&mut self, currencies: Vec<CurrencyDefinition>) -> CoreResult<()> {
        if currencies.is_empty() {
            return Err(CoreError::EmptyCatalog);
        }

        self.available = currencies;
        self.active = None;
        Ok(())
    }

    /// Selects the active currency by code.
    ///
    /// ## Rules
    /// - `code` must be non-blank, else a `Required` validation error
    /// - Lookup is a case-insensitive exact match ("usd" finds "USD")
    /// - Unknown codes fail with [`CoreError::CurrencyNotFound`]
    /// - The currency's denominations are normalized: non-positive values
    ///   dropped, duplicates removed, sorted descending. An empty result
    ///   fails with [`CoreError::EmptyDenominations`]
    /// - The active slot and the denomination cache are replaced together,
    ///   and only on full success; a failed call leaves the previous
    ///   active currency untouched
    pub fn set_active(&mut self, code: &str) -> CoreResult<()> {
        validation::validate_currency_code(code)?;

        let definition = self
            .available
            .iter()
            .find(|currency| currency.code.eq_ignore_ascii_case(code))
            .ok_or_else(|| CoreError::CurrencyNotFound {
                code: code.to_string(),
            })?;

        // Normalize: largest first, one entry per value. Non-positive
        // amounts can never participate in a greedy decomposition.
        let mut denominations = definition.denominations.clone();
        denominations.retain(|denomination| denomination.is_positive());
        denominations.sort_unstable_by(|a, b| b.cmp(a));
        denominations.dedup();

        if denominations.is_empty() {
            return Err(CoreError::EmptyDenominations {
                code: definition.code.clone(),
            });
        }

        self.active = Some(ActiveCurrency {
            definition: definition.clone(),
            denominations: denominations.into(),
        });
        Ok(())
    }

    /// Returns the active currency definition, or `None` if nothing has
    /// been selected. `None` is the explicit signal; there is no
    /// placeholder definition with empty fields.
    pub fn active(&self) -> Option<&CurrencyDefinition> {
        self.active.as_ref().map(|active| &active.definition)
    }

    /// Returns a read-only view of all loaded currencies, in load order.
    pub fn available(&self) -> &[CurrencyDefinition] {
        &self.available
    }

    /// Returns the cached denomination snapshot for the active currency,
    /// sorted descending.
    ///
    /// The snapshot is cheap to clone (`Arc`) and immune to later
    /// `set_active` calls, which replace the cache rather than mutate it.
    ///
    /// ## Errors
    /// [`CoreError::NoCurrencySelected`] when no currency is active.
    pub fn denominations(&self) -> CoreResult<Arc<[Money]>> {
        self.active
            .as_ref()
            .map(|active| Arc::clone(&active.denominations))
            .ok_or(CoreError::NoCurrencySelected)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
