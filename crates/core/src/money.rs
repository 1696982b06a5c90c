//! Currency amounts in minor units.
//!
//! Stock valuation multiplies quantities by unit prices across the whole
//! inventory, so amounts are held as integer cents rather than floats.

use core::iter::Sum;
use core::ops::Add;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::value_object::ValueObject;

const MINOR_PER_MAJOR: u64 = 100;

/// Non-negative monetary amount, stored in the smallest currency unit (cents).
///
/// Arithmetic saturates at `u64::MAX` instead of wrapping.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(u64);

impl Money {
    pub const ZERO: Money = Money(0);

    pub const fn from_minor(minor_units: u64) -> Self {
        Self(minor_units)
    }

    /// Build an amount from whole units and cents (`12, 50` is `12.50`).
    ///
    /// Fails rather than saturating when the amount does not fit.
    pub fn from_major_minor(major: u64, minor: u64) -> Result<Self, DomainError> {
        if minor >= MINOR_PER_MAJOR {
            return Err(DomainError::validation(format!(
                "minor units must be below {MINOR_PER_MAJOR}, got {minor}"
            )));
        }
        major
            .checked_mul(MINOR_PER_MAJOR)
            .and_then(|units| units.checked_add(minor))
            .map(Self)
            .ok_or_else(|| DomainError::validation(format!("amount {major}.{minor:02} is too large")))
    }

    pub const fn minor_units(&self) -> u64 {
        self.0
    }

    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Value of `quantity` units at this unit price.
    pub fn times(self, quantity: u64) -> Self {
        Self(self.0.saturating_mul(quantity))
    }

    pub fn saturating_add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl ValueObject for Money {}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Self) -> Self::Output {
        self.saturating_add(rhs)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::ZERO, Money::saturating_add)
    }
}

impl core::fmt::Display for Money {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}.{:02}", self.0 / MINOR_PER_MAJOR, self.0 % MINOR_PER_MAJOR)
    }
}

impl FromStr for Money {
    type Err = DomainError;

    /// Parse a plain decimal amount: `"12"`, `"12.5"` or `"12.50"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || DomainError::validation(format!("invalid amount: '{s}'"));
        let trimmed = s.trim();
        let (major, minor) = match trimmed.split_once('.') {
            Some((major, minor)) => (major, minor),
            None => (trimmed, ""),
        };

        if major.is_empty() || !major.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        if minor.len() > 2 || !minor.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }

        let major: u64 = major.parse().map_err(|_| invalid())?;
        let minor: u64 = match minor.len() {
            0 => 0,
            1 => minor.parse::<u64>().map_err(|_| invalid())? * 10,
            _ => minor.parse().map_err(|_| invalid())?,
        };
        Money::from_major_minor(major, minor)
    }
}
