// ============================================================================
// Money
// Immutable amount of minor units tied to a currency
// ============================================================================

use crate::currency::Currency;
use crate::errors::{MoneyError, MoneyResult};
use rust_decimal::Decimal;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Minor units per major unit (cents per euro)
pub const MINOR_PER_MAJOR: i64 = 100;

/// Number of decimal digits carried by the minor unit
pub const SCALE: u32 = 2;

/// An exact amount of money in a given currency.
///
/// Internally stores `value × 100` as an i64 together with a reference to a
/// static currency record. Every operation returns a new value; nothing is
/// mutated in place.
///
/// # Value Range
/// - Minimum: -92,233,720,368,547,758.08
/// - Maximum: +92,233,720,368,547,758.07
/// - Precision: 0.01 (one minor unit)
///
/// # Example
/// ```
/// use fixed_money::currency::EUR;
/// use fixed_money::Money;
///
/// let price = Money::of(1, 53, &EUR)?;
/// let total = price.plus(Money::of(2, 76, &EUR)?)?;
/// assert_eq!(total.to_string(), "EUR 4,29");
/// # Ok::<(), fixed_money::MoneyError>(())
/// ```
#[derive(Clone, Copy)]
pub struct Money {
    amount: i64,
    currency: &'static Currency,
}

impl Money {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Create from major and minor units.
    ///
    /// # Arguments
    /// - `major`: whole units (can be negative)
    /// - `minor`: cents, must be in `0..=99`; takes the sign of `major` when
    ///   `major` is non-zero
    ///
    /// ```
    /// use fixed_money::currency::EUR;
    /// use fixed_money::Money;
    ///
    /// assert_eq!(Money::of(-1, 35, &EUR)?.amount(), -135);
    /// assert_eq!(Money::of(0, 35, &EUR)?.amount(), 35);
    /// # Ok::<(), fixed_money::MoneyError>(())
    /// ```
    ///
    /// # Errors
    /// - `InvalidArgument` if `minor` is outside `0..=99`
    /// - `Overflow` if the total does not fit in i64 minor units
    pub fn of(major: i64, minor: i64, currency: &'static Currency) -> MoneyResult<Self> {
        if !(0..MINOR_PER_MAJOR).contains(&minor) {
            tracing::debug!(major, minor, "minor units out of range");
            return Err(MoneyError::invalid(format!(
                "minor must be within 0..=99, received: {minor}"
            )));
        }

        let signed_minor = if major < 0 { -minor } else { minor };

        major
            .checked_mul(MINOR_PER_MAJOR)
            .and_then(|scaled| scaled.checked_add(signed_minor))
            .map(|amount| Self::from_minor(amount, currency))
            .ok_or(MoneyError::Overflow)
    }

    /// Create from an exact decimal value with at most two fractional digits.
    ///
    /// The value is never rounded. A one-digit fraction gets an implicit
    /// trailing zero (`2.5` becomes 250 minor units); any other mantissa is
    /// taken as the minor-unit count directly (`1.23` becomes 123, `7` becomes
    /// 7). `10.9282` is rejected.
    ///
    /// # Errors
    /// - `InvalidArgument` if the decimal scale exceeds 2
    /// - `Overflow` if the value does not fit in i64 minor units
    pub fn of_decimal(value: Decimal, currency: &'static Currency) -> MoneyResult<Self> {
        let scale = value.scale();
        if scale > SCALE {
            tracing::debug!(%value, scale, "decimal scale exceeds minor units");
            return Err(MoneyError::invalid(format!(
                "value scale must be at most {SCALE}, received: {value}"
            )));
        }

        // Only a single fractional digit needs aligning to cents
        let multiplier = if scale == 1 { 10 } else { 1 };
        value
            .mantissa()
            .checked_mul(multiplier)
            .and_then(|raw| i64::try_from(raw).ok())
            .map(|amount| Self::from_minor(amount, currency))
            .ok_or(MoneyError::Overflow)
    }

    /// Create from a raw count of minor units.
    #[inline]
    pub const fn from_minor(amount: i64, currency: &'static Currency) -> Self {
        Self { amount, currency }
    }

    /// Zero in the given currency.
    #[inline]
    pub const fn zero(currency: &'static Currency) -> Self {
        Self::from_minor(0, currency)
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Total amount in minor units.
    #[inline]
    pub const fn amount(&self) -> i64 {
        self.amount
    }

    /// Whole units, truncated toward zero.
    #[inline]
    pub const fn major_amount(&self) -> i64 {
        self.amount / MINOR_PER_MAJOR
    }

    /// Cents as a magnitude in `0..=99`, regardless of sign.
    #[inline]
    pub const fn minor_amount(&self) -> i64 {
        (self.amount % MINOR_PER_MAJOR).abs()
    }

    #[inline]
    pub const fn currency(&self) -> &'static Currency {
        self.currency
    }

    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.amount == 0
    }

    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.amount > 0
    }

    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.amount < 0
    }

    /// Exact decimal view of the amount, always with scale 2.
    pub fn to_decimal(&self) -> Decimal {
        Decimal::new(self.amount, SCALE)
    }

    // ========================================================================
    // Currency Guard
    // ========================================================================

    /// Fail unless `other` is in the same currency as `self`.
    ///
    /// # Errors
    /// Returns `CurrencyMismatch` naming both codes.
    pub fn ensure_same_currency(&self, other: &Money) -> MoneyResult<()> {
        if self.currency == other.currency {
            return Ok(());
        }

        tracing::debug!(
            expected = self.currency.code(),
            found = other.currency.code(),
            "currency mismatch"
        );
        Err(MoneyError::CurrencyMismatch {
            expected: self.currency.code(),
            found: other.currency.code(),
        })
    }

    #[inline]
    fn with_amount(self, amount: Option<i64>) -> MoneyResult<Self> {
        amount
            .map(|amount| Self::from_minor(amount, self.currency))
            .ok_or(MoneyError::Overflow)
    }

    // ========================================================================
    // Arithmetic Operations
    // ========================================================================

    /// Add another amount in the same currency.
    ///
    /// # Errors
    /// `CurrencyMismatch` or `Overflow`.
    pub fn plus(self, other: Money) -> MoneyResult<Self> {
        self.ensure_same_currency(&other)?;
        self.with_amount(self.amount.checked_add(other.amount))
    }

    /// Add `major * 100 + minor` minor units as a plain integer sum.
    ///
    /// Unlike [`Money::of`], `minor` is neither range-checked nor aligned to
    /// the sign of `major`: `plus_parts(-1, 20)` adds -80, not -120.
    ///
    /// # Errors
    /// `Overflow` if the result leaves the i64 range.
    pub fn plus_parts(self, major: i64, minor: i64) -> MoneyResult<Self> {
        let delta = major
            .checked_mul(MINOR_PER_MAJOR)
            .and_then(|scaled| scaled.checked_add(minor));
        self.with_amount(delta.and_then(|delta| self.amount.checked_add(delta)))
    }

    /// Subtract another amount in the same currency.
    ///
    /// # Errors
    /// `CurrencyMismatch` or `Overflow`.
    pub fn minus(self, other: Money) -> MoneyResult<Self> {
        self.ensure_same_currency(&other)?;
        self.with_amount(self.amount.checked_sub(other.amount))
    }

    /// Subtract `major * 100 + minor` minor units, mirroring [`Money::plus_parts`].
    ///
    /// # Errors
    /// `Overflow` if the result leaves the i64 range.
    pub fn minus_parts(self, major: i64, minor: i64) -> MoneyResult<Self> {
        let delta = major
            .checked_mul(MINOR_PER_MAJOR)
            .and_then(|scaled| scaled.checked_add(minor));
        self.with_amount(delta.and_then(|delta| self.amount.checked_sub(delta)))
    }

    /// Flip the sign.
    ///
    /// # Errors
    /// `Overflow` for the single value `i64::MIN` minor units.
    pub fn negate(self) -> MoneyResult<Self> {
        self.with_amount(self.amount.checked_neg())
    }

    /// Absolute value.
    ///
    /// # Errors
    /// `Overflow` for the single value `i64::MIN` minor units.
    pub fn abs(self) -> MoneyResult<Self> {
        if self.is_negative() {
            self.negate()
        } else {
            Ok(self)
        }
    }

    /// Scale by a whole-number factor.
    ///
    /// # Errors
    /// `Overflow` if the product leaves the i64 range.
    pub fn multiply(self, factor: i64) -> MoneyResult<Self> {
        self.with_amount(self.amount.checked_mul(factor))
    }

    /// Ratio of this amount to `base`, e.g. `1.00` of `10.00` is `0.1`.
    ///
    /// This is the only floating-point result in the crate: a ratio, not an amount.
    /// A zero `base` follows IEEE division: infinite for a non-zero amount, NaN for zero.
    ///
    /// # Errors
    /// `CurrencyMismatch` if currencies differ.
    pub fn percentage_of(self, base: Money) -> MoneyResult<f64> {
        self.ensure_same_currency(&base)?;

        let cents = self.amount as f64 * MINOR_PER_MAJOR as f64;
        Ok(cents / base.amount as f64 / MINOR_PER_MAJOR as f64)
    }

    // ========================================================================
    // Comparison
    // ========================================================================

    /// Order two amounts in the same currency.
    ///
    /// # Errors
    /// `CurrencyMismatch` if currencies differ.
    pub fn compare(&self, other: &Money) -> MoneyResult<Ordering> {
        self.ensure_same_currency(other)?;
        Ok(self.amount.cmp(&other.amount))
    }

    /// # Errors
    /// `CurrencyMismatch` if currencies differ.
    pub fn is_greater_than(&self, other: &Money) -> MoneyResult<bool> {
        self.compare(other).map(Ordering::is_gt)
    }

    /// # Errors
    /// `CurrencyMismatch` if currencies differ.
    pub fn is_less_than(&self, other: &Money) -> MoneyResult<bool> {
        self.compare(other).map(Ordering::is_lt)
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl PartialEq for Money {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.amount == other.amount && self.currency == other.currency
    }
}

impl Eq for Money {}

/// Amounts in different currencies are unordered.
impl PartialOrd for Money {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.compare(other).ok()
    }
}

impl Hash for Money {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.amount.hash(state);
        self.currency.hash(state);
    }
}

// ============================================================================
// Display and Debug
// ============================================================================

impl fmt::Debug for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Money({}, raw={})", self, self.amount)
    }
}

/// Renders `"<code> <major>,<minor>"`, e.g. `EUR -1,35`.
///
/// The sign survives for amounts between -0,99 and -0,01: `EUR -0,50`.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let code = self.currency.code();
        let major = self.major_amount();
        let minor = self.minor_amount();

        if self.amount < 0 && major == 0 {
            // Handle -0,xx case
            write!(f, "{code} -0,{minor:02}")
        } else {
            write!(f, "{code} {major},{minor:02}")
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::currency::{EUR, USD};
    use rust_decimal_macros::dec;

    fn eur(major: i64, minor: i64) -> Money {
        Money::of(major, minor, &EUR).unwrap()
    }

    #[test]
    fn test_of() {
        assert_eq!(eur(1, 23).to_string(), "EUR 1,23");
        assert_eq!(Money::of_decimal(dec!(1.23), &EUR).unwrap().to_string(), "EUR 1,23");
    }

    #[test]
    fn test_of_sign_normalization() {
        assert_eq!(eur(-1, 35).amount(), -135);
        assert_eq!(eur(-1, 35).to_string(), "EUR -1,35");
        assert_eq!(eur(0, 35).amount(), 35);
        assert_eq!(eur(5, 0).amount(), 500);
    }

    #[test]
    fn test_of_minor_out_of_range() {
        assert!(matches!(
            Money::of(0, -1, &EUR),
            Err(MoneyError::InvalidArgument(_))
        ));
        assert!(matches!(
            Money::of(0, 100, &EUR),
            Err(MoneyError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_of_overflow() {
        assert_eq!(Money::of(i64::MAX, 0, &EUR), Err(MoneyError::Overflow));
        assert_eq!(
            Money::of(i64::MAX / 100, 99, &EUR),
            Err(MoneyError::Overflow)
        );
    }

    #[test]
    fn test_of_decimal() {
        assert_eq!(Money::of_decimal(dec!(2.5), &EUR).unwrap(), eur(2, 50));
        assert_eq!(Money::of_decimal(dec!(2.56), &EUR).unwrap(), eur(2, 56));
        assert_eq!(Money::of_decimal(dec!(-0.05), &EUR).unwrap().amount(), -5);
        assert_eq!(Money::of_decimal(Decimal::new(123, 2), &EUR).unwrap(), eur(1, 23));
    }

    #[test]
    fn test_of_decimal_one_fractional_digit() {
        assert_eq!(Money::of_decimal(dec!(0.5), &EUR).unwrap().amount(), 50);
        assert_eq!(Money::of_decimal(dec!(-1.2), &EUR).unwrap().amount(), -120);
    }

    #[test]
    fn test_of_decimal_whole_mantissa_is_minor_units() {
        let money = Money::of_decimal(Decimal::new(7, 0), &EUR).unwrap();
        assert_eq!(money.amount(), 7);
        assert_eq!(money.to_string(), "EUR 0,07");
        assert_eq!(Money::of_decimal(dec!(250), &EUR).unwrap(), eur(2, 50));
    }

    #[test]
    fn test_of_decimal_over_scaled() {
        assert!(matches!(
            Money::of_decimal(dec!(10.9282), &EUR),
            Err(MoneyError::InvalidArgument(_))
        ));
        // Trailing zeros still count toward the scale
        assert!(Money::of_decimal(dec!(1.230), &EUR).is_err());
    }

    #[test]
    fn test_of_decimal_overflow() {
        let beyond_i64 = Decimal::from(u64::MAX);
        assert_eq!(Money::of_decimal(beyond_i64, &EUR), Err(MoneyError::Overflow));

        // Aligning one fractional digit overflows even though the mantissa fits
        let tenths = Decimal::new(i64::MAX, 1);
        assert_eq!(Money::of_decimal(tenths, &EUR), Err(MoneyError::Overflow));

        let max = Decimal::from(i64::MAX);
        assert_eq!(Money::of_decimal(max, &EUR).unwrap().amount(), i64::MAX);
    }

    #[test]
    fn test_accessors_round_trip() {
        let money = eur(42, 7);
        assert_eq!(money.major_amount(), 42);
        assert_eq!(money.minor_amount(), 7);
        assert_eq!(money.currency(), &EUR);

        let negative = eur(-3, 40);
        assert_eq!(negative.major_amount(), -3);
        assert_eq!(negative.minor_amount(), 40);
    }

    #[test]
    fn test_sign_predicates() {
        assert!(eur(0, 1).is_positive());
        assert!(eur(-1, 0).is_negative());
        assert!(Money::zero(&EUR).is_zero());
        assert!(!Money::zero(&EUR).is_positive());
        assert!(!Money::zero(&EUR).is_negative());
    }

    #[test]
    fn test_to_decimal() {
        assert_eq!(eur(1, 23).to_decimal(), dec!(1.23));
        assert_eq!(eur(-4, 5).to_decimal().to_string(), "-4.05");
        assert_eq!(Money::zero(&EUR).to_decimal().to_string(), "0.00");
    }

    #[test]
    fn test_plus() {
        let m1 = eur(1, 53);
        let m2 = eur(2, 76);
        assert_eq!(m1.plus(m2).unwrap(), eur(4, 29));
        assert_eq!(m1.plus_parts(1, 68).unwrap(), eur(3, 21));
    }

    #[test]
    fn test_plus_parts_is_raw_integer_add() {
        // -1 major and 20 minor add -80, where Money::of(-1, 20) would be -120
        let result = eur(5, 0).plus_parts(-1, 20).unwrap();
        assert_eq!(result.amount(), 420);
        assert_ne!(result, eur(5, 0).plus(eur(-1, 20)).unwrap());
    }

    #[test]
    fn test_minus() {
        let m1 = eur(0, 54);
        let m2 = eur(1, 89);
        assert_eq!(m1.minus(m2).unwrap(), eur(-1, 35));
        assert_eq!(m1.minus_parts(0, 44).unwrap(), eur(0, 10));
    }

    #[test]
    fn test_currency_mismatch() {
        let euros = eur(1, 0);
        let dollars = Money::of(1, 0, &USD).unwrap();
        let mismatch = MoneyError::CurrencyMismatch {
            expected: "EUR",
            found: "USD",
        };

        assert_eq!(euros.plus(dollars), Err(mismatch.clone()));
        assert_eq!(euros.minus(dollars), Err(mismatch.clone()));
        assert_eq!(euros.compare(&dollars), Err(mismatch.clone()));
        assert_eq!(
            dollars.ensure_same_currency(&euros).unwrap_err().to_string(),
            "currency mismatch: expected USD, found EUR"
        );
        assert!(euros.percentage_of(dollars).is_err());
        assert!(euros.is_greater_than(&dollars).is_err());
        assert!(euros.is_less_than(&dollars).is_err());
    }

    #[test]
    fn test_overflow_checks() {
        let max = Money::from_minor(i64::MAX, &EUR);
        let min = Money::from_minor(i64::MIN, &EUR);
        assert_eq!(max.plus(eur(0, 1)), Err(MoneyError::Overflow));
        assert_eq!(min.minus(eur(0, 1)), Err(MoneyError::Overflow));
        assert_eq!(max.plus_parts(0, 1), Err(MoneyError::Overflow));
        assert_eq!(min.minus_parts(0, 1), Err(MoneyError::Overflow));
        assert_eq!(max.multiply(2), Err(MoneyError::Overflow));
        assert_eq!(min.negate(), Err(MoneyError::Overflow));
        assert_eq!(min.abs(), Err(MoneyError::Overflow));
    }

    #[test]
    fn test_multiply() {
        assert_eq!(eur(1, 20).multiply(2).unwrap(), eur(2, 40));
        assert_eq!(
            eur(-1, 20).multiply(2).unwrap(),
            eur(2, 40).negate().unwrap()
        );
        assert_eq!(eur(3, 33).multiply(0).unwrap(), Money::zero(&EUR));
        assert_eq!(eur(3, 33).multiply(-1).unwrap(), eur(-3, 33));
    }

    #[test]
    fn test_negate_and_abs() {
        assert_eq!(eur(2, 40).negate().unwrap().amount(), -240);
        assert_eq!(eur(-2, 40).abs().unwrap(), eur(2, 40));
        assert_eq!(eur(2, 40).abs().unwrap(), eur(2, 40));
        assert_eq!(Money::zero(&EUR).abs().unwrap(), Money::zero(&EUR));
    }

    #[test]
    fn test_percentage_of() {
        let ratio = eur(1, 0).percentage_of(eur(10, 0)).unwrap();
        assert!((ratio - 0.1).abs() < 0.0001);

        let ratio = eur(774, 27).percentage_of(eur(182_737, 9)).unwrap();
        assert!((ratio - 0.0042).abs() < 0.0001);
    }

    #[test]
    fn test_percentage_of_zero_base() {
        let ratio = eur(1, 0).percentage_of(Money::zero(&EUR)).unwrap();
        assert!(ratio.is_infinite() && ratio.is_sign_positive());

        let ratio = eur(-1, 0).percentage_of(Money::zero(&EUR)).unwrap();
        assert!(ratio.is_infinite() && ratio.is_sign_negative());

        assert!(Money::zero(&EUR).percentage_of(Money::zero(&EUR)).unwrap().is_nan());
    }

    #[test]
    fn test_comparison() {
        let small = eur(1, 0);
        let large = eur(2, 0);

        assert_eq!(small.compare(&large).unwrap(), Ordering::Less);
        assert_eq!(large.compare(&small).unwrap(), Ordering::Greater);
        assert_eq!(small.compare(&eur(1, 0)).unwrap(), Ordering::Equal);
        assert!(large.is_greater_than(&small).unwrap());
        assert!(small.is_less_than(&large).unwrap());
        assert!(!small.is_greater_than(&small).unwrap());
        assert!(small < large);
    }

    #[test]
    fn test_partial_ord_mixed_currencies() {
        let euros = eur(1, 0);
        let dollars = Money::of(2, 0, &USD).unwrap();
        assert_eq!(euros.partial_cmp(&dollars), None);
        assert!(!(euros < dollars));
        assert!(!(euros > dollars));
    }

    #[test]
    fn test_equality() {
        assert_eq!(eur(2, 50), Money::from_minor(250, &EUR));
        assert_ne!(eur(2, 50), Money::of(2, 50, &USD).unwrap());
        assert_ne!(eur(2, 50), eur(2, 51));
    }

    #[test]
    fn test_display() {
        assert_eq!(eur(0, 5).to_string(), "EUR 0,05");
        assert_eq!(eur(-12, 3).to_string(), "EUR -12,03");
        assert_eq!(Money::zero(&USD).to_string(), "USD 0,00");
        assert_eq!(eur(1_000, 0).to_string(), "EUR 1000,00");
    }

    #[test]
    fn test_display_negative_below_one() {
        let neg = eur(0, 50).negate().unwrap();
        assert_eq!(neg.major_amount(), 0);
        assert_eq!(neg.minor_amount(), 50);
        assert_eq!(neg.to_string(), "EUR -0,50");
    }

    #[test]
    fn test_debug() {
        assert_eq!(format!("{:?}", eur(1, 5)), "Money(EUR 1,05, raw=105)");
    }
}
