//! Money value object.
//!
//! Amounts are an exact count of cents (smallest currency unit), so prices and
//! inventory valuations never accumulate floating-point drift.

use core::iter::Sum;
use core::ops::Add;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::value_object::ValueObject;

/// An exact monetary amount in cents.
///
/// Negative amounts are representable (arithmetic needs them); whether a
/// negative amount is *acceptable* is decided by the owning entity.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    pub const ZERO: Money = Money(0);

    pub fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    pub fn cents(self) -> i64 {
        self.0
    }

    pub fn is_negative(self) -> bool {
        self.0 < 0
    }

    /// The value of `quantity` units at this price.
    pub fn times(self, quantity: i64) -> Money {
        Money(self.0 * quantity)
    }
}

impl ValueObject for Money {}

impl core::fmt::Display for Money {
    /// Renders as `$12.34` (`-$12.34` for negative amounts).
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let cents = self.0.abs();
        write!(f, "{sign}${}.{:02}", cents / 100, cents % 100)
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money(self.0 + rhs.0)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        Money(iter.map(|m| m.0).sum())
    }
}

impl FromStr for Money {
    type Err = DomainError;

    /// Parses a non-negative decimal amount with up to two fraction digits.
    ///
    /// Accepts `"12"`, `"12.3"`, `"12.34"`, and an optional leading `$`.
    /// Rejects negative amounts, more than two fraction digits, and anything
    /// that is not a number.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.trim();
        let raw = raw.strip_prefix('$').unwrap_or(raw);
        let invalid = || {
            DomainError::validation(format!(
                "'{}' is not a valid price, expected a non-negative amount like 12.34",
                s.trim()
            ))
        };

        if raw.is_empty() || raw.starts_with('-') || raw.starts_with('+') {
            return Err(invalid());
        }

        let (whole, frac) = match raw.split_once('.') {
            Some((w, f)) => (w, f),
            None => (raw, ""),
        };
        if frac.len() > 2 || (whole.is_empty() && frac.is_empty()) {
            return Err(invalid());
        }

        let whole: i64 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| invalid())?
        };
        let mut cents = whole.checked_mul(100).ok_or_else(invalid)?;

        if !frac.is_empty() {
            if !frac.bytes().all(|b| b.is_ascii_digit()) {
                return Err(invalid());
            }
            let frac_value: i64 = frac.parse().map_err(|_| invalid())?;
            cents += if frac.len() == 1 { frac_value * 10 } else { frac_value };
        }

        Ok(Money(cents))
    }
}
