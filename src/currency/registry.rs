// ============================================================================
// Currency Registry
// Code -> record lookup table, built once and never mutated
// ============================================================================

use super::catalog;
use super::definition::{Currency, CurrencyUnit};
use crate::errors::{MoneyError, MoneyResult};
use std::collections::HashMap;
use std::sync::OnceLock;

/// Immutable lookup table from currency code to currency record.
///
/// Use [`CurrencyRegistry::common`] for the built-in catalog or
/// [`CurrencyRegistry::new`] to assemble a custom one at startup.
#[derive(Debug, Clone)]
pub struct CurrencyRegistry {
    by_code: HashMap<&'static str, &'static Currency>,
    ordered: Vec<&'static Currency>,
}

impl CurrencyRegistry {
    /// Build a registry from a fixed set of records.
    ///
    /// # Errors
    /// Returns `InvalidArgument` if two records share a code.
    pub fn new<I>(currencies: I) -> MoneyResult<Self>
    where
        I: IntoIterator<Item = &'static Currency>,
    {
        let mut by_code = HashMap::new();
        let mut ordered = Vec::new();

        for currency in currencies {
            if by_code.insert(currency.code(), currency).is_some() {
                tracing::debug!(code = currency.code(), "duplicate currency code");
                return Err(MoneyError::invalid(format!(
                    "duplicate currency code: {}",
                    currency.code()
                )));
            }
            ordered.push(currency);
        }

        Ok(Self { by_code, ordered })
    }

    /// The registry of common currencies, initialized on first use.
    pub fn common() -> &'static CurrencyRegistry {
        static COMMON: OnceLock<CurrencyRegistry> = OnceLock::new();
        COMMON.get_or_init(|| Self {
            by_code: catalog::ALL.iter().map(|&c| (c.code(), c)).collect(),
            ordered: catalog::ALL.to_vec(),
        })
    }

    /// Look up a record by code.
    ///
    /// # Errors
    /// Returns `UnknownCurrencyCode` if the code is not registered.
    pub fn get(&self, code: &str) -> MoneyResult<&'static Currency> {
        self.by_code.get(code).copied().ok_or_else(|| {
            tracing::debug!(code, "currency code not registered");
            MoneyError::UnknownCurrencyCode(code.to_string())
        })
    }

    /// Map any capability implementor onto the registered record with the same code.
    ///
    /// # Errors
    /// Returns `UnknownCurrencyCode` if the unit's code is not registered.
    pub fn resolve<U: CurrencyUnit + ?Sized>(&self, unit: &U) -> MoneyResult<&'static Currency> {
        self.get(unit.code())
    }

    pub fn contains(&self, code: &str) -> bool {
        self.by_code.contains_key(code)
    }

    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }

    /// Iterate records in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &'static Currency> + '_ {
        self.ordered.iter().copied()
    }
}
