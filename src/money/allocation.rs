// ============================================================================
// Allocation
// Splitting and summing money without losing a single minor unit
// ============================================================================

use super::amount::Money;
use crate::errors::{MoneyError, MoneyResult};
use std::iter::Sum;

impl Money {
    /// Split into `parts` amounts that add back up to exactly `self`.
    ///
    /// # Example
    /// ```text
    /// 100,00 / 3:
    ///   q = 3333, r = 1
    ///   [33,34, 33,33, 33,33]   (the first r parts get one extra cent)
    ///
    /// -1,00 / 3:
    ///   q = -33, r = -1
    ///   [-0,34, -0,33, -0,33]   (the first |r| parts get one extra negative cent)
    /// ```
    ///
    /// # Errors
    /// `InvalidArgument` if `parts` is zero.
    pub fn divide(self, parts: usize) -> MoneyResult<Vec<Money>> {
        if parts == 0 {
            tracing::debug!(amount = self.amount(), "divide into zero parts");
            return Err(MoneyError::invalid("cannot divide into zero parts"));
        }

        let divisor = i64::try_from(parts).map_err(|_| MoneyError::Overflow)?;
        let quotient = self.amount() / divisor;
        let remainder = self.amount() - quotient * divisor;
        // |remainder| < parts, so it always fits
        let extra = usize::try_from(remainder.unsigned_abs()).map_err(|_| MoneyError::Overflow)?;

        tracing::trace!(parts, quotient, remainder, "dividing amount");

        let currency = self.currency();
        let bumped = quotient + remainder.signum();
        Ok((0..parts)
            .map(|index| {
                let amount = if index < extra { bumped } else { quotient };
                Money::from_minor(amount, currency)
            })
            .collect())
    }

    /// Split proportionally to integer `ratios`, e.g. `[1, 2]` for one third / two thirds.
    ///
    /// Each share is first truncated toward zero; the units left over go one
    /// at a time to the shares with the largest truncated fraction, earlier
    /// shares winning ties. The shares always add back up to `self`.
    ///
    /// # Errors
    /// `InvalidArgument` if `ratios` is empty or sums to zero.
    pub fn allocate(self, ratios: &[u32]) -> MoneyResult<Vec<Money>> {
        let total: i128 = ratios.iter().map(|&ratio| i128::from(ratio)).sum();
        if total == 0 {
            tracing::debug!(?ratios, "allocation ratios sum to zero");
            return Err(MoneyError::invalid(
                "allocation ratios must contain a non-zero entry",
            ));
        }

        let amount = i128::from(self.amount());
        let mut shares = Vec::with_capacity(ratios.len());
        let mut fractions = Vec::with_capacity(ratios.len());

        for (index, &ratio) in ratios.iter().enumerate() {
            let exact = amount * i128::from(ratio);
            shares.push(exact / total);
            fractions.push((index, (exact % total).abs()));
        }

        let remainder = amount - shares.iter().sum::<i128>();
        let step = remainder.signum();

        tracing::trace!(?ratios, remainder, "allocating amount");

        // Largest fraction first, lowest index on ties
        fractions.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
        let leftover =
            usize::try_from(remainder.unsigned_abs()).map_err(|_| MoneyError::Overflow)?;
        for &(index, _) in fractions.iter().take(leftover) {
            if let Some(share) = shares.get_mut(index) {
                *share += step;
            }
        }

        let currency = self.currency();
        shares
            .into_iter()
            .map(|share| {
                i64::try_from(share)
                    .map(|amount| Money::from_minor(amount, currency))
                    .map_err(|_| MoneyError::Overflow)
            })
            .collect()
    }

    /// Add up a collection of amounts that all share one currency.
    ///
    /// # Errors
    /// - `InvalidArgument` if the collection is empty or mixes currencies
    /// - `Overflow` if the total leaves the i64 range
    pub fn sum<I>(monies: I) -> MoneyResult<Money>
    where
        I: IntoIterator<Item = Money>,
    {
        let mut monies = monies.into_iter();
        let first = monies.next().ok_or_else(|| {
            tracing::debug!("sum of empty collection");
            MoneyError::invalid("cannot sum an empty collection")
        })?;

        monies.try_fold(first, |total, money| {
            if total.currency() != money.currency() {
                tracing::debug!(
                    expected = total.currency().code(),
                    found = money.currency().code(),
                    "sum over mixed currencies"
                );
                return Err(MoneyError::invalid(format!(
                    "all monies must have the same currency, found {} and {}",
                    total.currency(),
                    money.currency()
                )));
            }
            total
                .amount()
                .checked_add(money.amount())
                .map(|amount| Money::from_minor(amount, total.currency()))
                .ok_or(MoneyError::Overflow)
        })
    }
}

/// Lets `iter.sum::<MoneyResult<Money>>()` stand in for [`Money::sum`].
impl Sum<Money> for MoneyResult<Money> {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        Money::sum(iter)
    }
}

impl<'a> Sum<&'a Money> for MoneyResult<Money> {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        Money::sum(iter.copied())
    }
}
