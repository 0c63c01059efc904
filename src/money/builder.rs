// ============================================================================
// Money Builder
// Staged construction where currency and amount may arrive separately
// ============================================================================

use super::amount::Money;
use crate::currency::{Currency, CurrencyRegistry};
use crate::errors::{MoneyError, MoneyResult};
use rust_decimal::Decimal;

/// Builder for [`Money`] when the parts are collected one by one
/// (form fields, ledger rows, configuration).
///
/// # Example
/// ```
/// use fixed_money::money::MoneyBuilder;
///
/// let money = MoneyBuilder::new()
///     .currency_code("EUR")?
///     .major(12)
///     .minor(5)
///     .build()?;
///
/// assert_eq!(money.to_string(), "EUR 12,05");
/// # Ok::<(), fixed_money::MoneyError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct MoneyBuilder {
    currency: Option<&'static Currency>,
    major: Option<i64>,
    minor: Option<i64>,
    decimal: Option<Decimal>,
}

impl MoneyBuilder {
    /// Create an empty builder
    pub fn new() -> Self {
        Self::default()
    }

    // ========================================================================
    // Currency Configuration
    // ========================================================================

    pub fn currency(mut self, currency: &'static Currency) -> Self {
        self.currency = Some(currency);
        self
    }

    /// Set the currency by code from the common catalog.
    ///
    /// # Errors
    /// `UnknownCurrencyCode` if the code is not in the catalog.
    pub fn currency_code(self, code: &str) -> MoneyResult<Self> {
        self.currency_from(CurrencyRegistry::common(), code)
    }

    /// Set the currency by code from a custom registry.
    ///
    /// # Errors
    /// `UnknownCurrencyCode` if the code is not registered.
    pub fn currency_from(self, registry: &CurrencyRegistry, code: &str) -> MoneyResult<Self> {
        Ok(self.currency(registry.get(code)?))
    }

    // ========================================================================
    // Amount Configuration
    // ========================================================================

    /// Whole units. Combined with [`MoneyBuilder::minor`] like [`Money::of`].
    pub fn major(mut self, major: i64) -> Self {
        self.major = Some(major);
        self
    }

    /// Cents in `0..=99`.
    pub fn minor(mut self, minor: i64) -> Self {
        self.minor = Some(minor);
        self
    }

    /// Exact decimal amount, as [`Money::of_decimal`].
    pub fn decimal(mut self, value: Decimal) -> Self {
        self.decimal = Some(value);
        self
    }

    // ========================================================================
    // Build
    // ========================================================================

    /// Validate and build.
    ///
    /// A lone `major` means zero cents and a lone `minor` means zero whole units.
    ///
    /// # Errors
    /// - `NullArgument` if the currency or the amount was never set
    /// - `InvalidArgument` if both a decimal and major/minor parts were set,
    ///   or if the parts themselves are invalid
    pub fn build(self) -> MoneyResult<Money> {
        let currency = self.currency.ok_or_else(|| {
            tracing::debug!("money built without a currency");
            MoneyError::NullArgument("currency")
        })?;

        let has_parts = self.major.is_some() || self.minor.is_some();
        match self.decimal {
            Some(_) if has_parts => Err(MoneyError::invalid(
                "set either a decimal amount or major/minor parts, not both",
            )),
            Some(value) => Money::of_decimal(value, currency),
            None if has_parts => Money::of(
                self.major.unwrap_or_default(),
                self.minor.unwrap_or_default(),
                currency,
            ),
            None => {
                tracing::debug!(currency = currency.code(), "money built without an amount");
                Err(MoneyError::NullArgument("amount"))
            },
        }
    }
}
