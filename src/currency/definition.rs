// ============================================================================
// Currency Definition
// Immutable currency record and the capability contract money relies on
// ============================================================================

use std::fmt;
use std::hash::{Hash, Hasher};

/// Capability contract for anything that describes a currency.
///
/// The `code` is the identity key: two units with the same code are the same
/// currency for every money operation.
pub trait CurrencyUnit {
    /// Human readable name (e.g. "Euro")
    fn name(&self) -> &str;

    /// Short unique identifier, usually the ISO 4217 alphabetic code
    fn code(&self) -> &str;

    /// Display glyph (e.g. "€")
    fn symbol(&self) -> &str;

    /// Whether both units denote the same currency.
    fn same_currency<U: CurrencyUnit + ?Sized>(&self, other: &U) -> bool {
        self.code() == other.code()
    }
}

impl<T: CurrencyUnit + ?Sized> CurrencyUnit for &T {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn code(&self) -> &str {
        (**self).code()
    }

    fn symbol(&self) -> &str {
        (**self).symbol()
    }
}

/// A currency record: name, code and symbol.
///
/// Records are process-wide constants. Equality and hashing look at the code
/// only, so two records carrying the same code but different display strings
/// still compare equal.
///
/// # Example
/// ```
/// use fixed_money::currency::Currency;
///
/// static XTS: Currency = Currency::new("Testing Code", "XTS", "¤");
///
/// assert_eq!(XTS.code(), "XTS");
/// assert_eq!(XTS.to_string(), "XTS");
/// ```
#[derive(Clone, Copy)]
pub struct Currency {
    name: &'static str,
    code: &'static str,
    symbol: &'static str,
}

impl Currency {
    /// Create a currency record. Usable in `static` and `const` items.
    #[inline]
    pub const fn new(name: &'static str, code: &'static str, symbol: &'static str) -> Self {
        Self { name, code, symbol }
    }

    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    #[inline]
    pub const fn code(&self) -> &'static str {
        self.code
    }

    #[inline]
    pub const fn symbol(&self) -> &'static str {
        self.symbol
    }
}

impl CurrencyUnit for Currency {
    fn name(&self) -> &str {
        self.name
    }

    fn code(&self) -> &str {
        self.code
    }

    fn symbol(&self) -> &str {
        self.symbol
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl PartialEq for Currency {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.code == other.code
    }
}

impl Eq for Currency {}

impl Hash for Currency {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.code.hash(state);
    }
}

impl fmt::Debug for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Currency({} {:?} {:?})", self.code, self.name, self.symbol)
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code)
    }
}
