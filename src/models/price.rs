//! Fixed-point currency amounts.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Mul};
use std::str::FromStr;
use thiserror::Error;

/// Error returned when a decimal amount cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid price '{0}' (expected a non-negative decimal such as 12.50)")]
pub struct PriceParseError(pub String);

/// Non-negative money amount stored as whole cents.
///
/// Parsing rounds half-up at the cent (`"0.125"` → `0.13`); display always
/// shows exactly two decimal digits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Price {
    cents: u64,
}

impl Price {
    /// Zero amount.
    pub const ZERO: Self = Self { cents: 0 };

    /// Creates a price from whole cents.
    #[must_use]
    pub const fn from_cents(cents: u64) -> Self {
        Self { cents }
    }

    /// Amount in whole cents.
    #[must_use]
    pub const fn cents(self) -> u64 {
        self.cents
    }

    /// Multiplies by a seat count, saturating on overflow.
    #[must_use]
    pub const fn times(self, count: usize) -> Self {
        Self {
            cents: self.cents.saturating_mul(count as u64),
        }
    }

    /// Formats with a leading currency symbol, e.g. `$25.00`.
    #[must_use]
    pub fn with_symbol(self, symbol: &str) -> String {
        format!("{symbol}{self}")
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.cents / 100, self.cents % 100)
    }
}

impl FromStr for Price {
    type Err = PriceParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || PriceParseError(s.to_string());
        let trimmed = s.trim();
        let (whole, frac) = trimmed.split_once('.').unwrap_or((trimmed, ""));

        if whole.is_empty() && frac.is_empty() {
            return Err(err());
        }
        if !whole.bytes().all(|b| b.is_ascii_digit()) || !frac.bytes().all(|b| b.is_ascii_digit()) {
            return Err(err());
        }

        let whole: u64 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| err())?
        };

        let digits: Vec<u64> = frac.bytes().map(|b| u64::from(b - b'0')).collect();
        let tenths = digits.first().copied().unwrap_or(0);
        let hundredths = digits.get(1).copied().unwrap_or(0);
        let round_up = digits.get(2).is_some_and(|d| *d >= 5);

        let cents = whole
            .checked_mul(100)
            .and_then(|c| c.checked_add(tenths * 10 + hundredths + u64::from(round_up)))
            .ok_or_else(err)?;

        Ok(Self { cents })
    }
}

impl TryFrom<String> for Price {
    type Error = PriceParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Price> for String {
    fn from(value: Price) -> Self {
        value.to_string()
    }
}

impl Add for Price {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            cents: self.cents.saturating_add(rhs.cents),
        }
    }
}

impl Mul<usize> for Price {
    type Output = Self;

    fn mul(self, rhs: usize) -> Self::Output {
        self.times(rhs)
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}
