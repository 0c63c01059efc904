// ============================================================================
// Common Currencies
// Fixed catalog of currency records available at process start
// ============================================================================

use super::definition::Currency;
use crate::errors::{MoneyError, MoneyResult};

pub static BRL: Currency = Currency::new("Brazilian Real", "BRL", "R$");
pub static CAD: Currency = Currency::new("Canadian Dollar", "CAD", "C$");
pub static CHF: Currency = Currency::new("Swiss Franc", "CHF", "CHf");
pub static DKK: Currency = Currency::new("Danish Krone", "DKK", "Kr.");
pub static EUR: Currency = Currency::new("Euro", "EUR", "€");
pub static GBP: Currency = Currency::new("British Pound", "GBP", "£");
pub static NOK: Currency = Currency::new("Norwegian Kroner", "NOK", "kr");
pub static SEK: Currency = Currency::new("Swedish Krona", "SEK", "kr");
pub static USD: Currency = Currency::new("US Dollar", "USD", "$");

/// Every common currency, in catalog order.
pub static ALL: [&Currency; 9] = [&BRL, &CAD, &CHF, &DKK, &EUR, &GBP, &NOK, &SEK, &USD];

impl Currency {
    /// Look up a common currency by its exact (case-sensitive) code.
    ///
    /// # Errors
    /// Returns `UnknownCurrencyCode` when no catalog entry carries `code`.
    ///
    /// # Example
    /// ```
    /// use fixed_money::currency::{Currency, EUR};
    ///
    /// assert_eq!(Currency::from_code("EUR").unwrap(), &EUR);
    /// assert!(Currency::from_code("eur").is_err());
    /// ```
    pub fn from_code(code: &str) -> MoneyResult<&'static Currency> {
        ALL.iter().copied().find(|c| c.code() == code).ok_or_else(|| {
            tracing::debug!(code, "unknown currency code");
            MoneyError::UnknownCurrencyCode(code.to_string())
        })
    }
}
