//! Money type for representing currency amounts
//!
//! Club ledgers carry whole currency units (no decimal subdivision), so
//! amounts are stored as a plain i64. Provides safe arithmetic operations,
//! lenient parsing of formatted amounts, and grouped display.

use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};
use std::sync::OnceLock;

use numfmt::{Formatter, Precision};
use serde::{Deserialize, Serialize};

/// A monetary amount in whole currency units
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from whole units
    pub const fn from_units(units: i64) -> Self {
        Self(units)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in whole units
    pub const fn units(&self) -> i64 {
        self.0
    }

    /// Check if the amount is zero
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Check if the amount is positive
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Check if the amount is negative
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Get the absolute value
    pub const fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    /// Parse a money amount from a string
    ///
    /// Accepts plain integers ("1234"), grouped amounts ("1,234"), and
    /// decimal strings ("1234.50", rounded to whole units).
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let cleaned: String = s.trim().replace(',', "");

        if cleaned.is_empty() {
            return Err(MoneyParseError::InvalidFormat(s.to_string()));
        }

        if let Ok(units) = cleaned.parse::<i64>() {
            return Ok(Self(units));
        }

        let value: f64 = cleaned
            .parse()
            .map_err(|_| MoneyParseError::InvalidFormat(s.to_string()))?;
        if !value.is_finite() {
            return Err(MoneyParseError::InvalidFormat(s.to_string()));
        }

        Ok(Self(value.round() as i64))
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

/// Format an amount with thousands separators ("1234567" -> "1,234,567")
fn grouped(units: i64) -> String {
    static FMT: OnceLock<Formatter> = OnceLock::new();

    let fmt = FMT.get_or_init(|| {
        Formatter::new()
            .separator(',')
            .unwrap()
            .precision(Precision::Decimals(0))
    });

    if units < 0 {
        format!("-{}", fmt.fmt_string(units.unsigned_abs() as f64))
    } else {
        fmt.fmt_string(units as f64)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", grouped(self.0))
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    InvalidFormat(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::InvalidFormat(s) => write!(f, "Invalid money format: {}", s),
        }
    }
}

impl std::error::Error for MoneyParseError {}
