// ============================================================================
// Fixed Money Library
// Immutable fixed-point money values with exact arithmetic
// ============================================================================

//! # Fixed Money
//!
//! An exact, immutable money value type for financial and accounting code.
//!
//! ## Features
//!
//! - **Fixed-point amounts** stored as i64 minor units (two decimal digits)
//! - **Currency guards** on every operation combining two amounts
//! - **Exact splitting**: `divide` and `allocate` never lose or invent a cent
//! - **Checked arithmetic**: overflow is reported, never wrapped
//! - **Static currency catalog** with a code lookup table built once
//!
//! ## Example
//!
//! ```rust
//! use fixed_money::prelude::*;
//!
//! let bill = Money::of(100, 0, &EUR)?;
//! let shares = bill.divide(3)?;
//!
//! let rendered: Vec<String> = shares.iter().map(Money::to_string).collect();
//! assert_eq!(rendered, ["EUR 33,34", "EUR 33,33", "EUR 33,33"]);
//! assert_eq!(Money::sum(shares)?, bill);
//!
//! let dollars = Money::of(1, 0, &USD)?;
//! assert!(matches!(
//!     bill.plus(dollars),
//!     Err(MoneyError::CurrencyMismatch { .. })
//! ));
//! # Ok::<(), MoneyError>(())
//! ```

pub mod currency;
pub mod errors;
pub mod money;
pub mod utils;

pub use errors::{MoneyError, MoneyResult};
pub use money::Money;

// Re-exports for convenience
pub mod prelude {
    pub use crate::currency::{
        Currency, CurrencyRegistry, CurrencyUnit, BRL, CAD, CHF, DKK, EUR, GBP, NOK, SEK, USD,
    };
    pub use crate::errors::{MoneyError, MoneyResult};
    pub use crate::money::{Money, MoneyBuilder};
}
