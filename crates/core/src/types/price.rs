//! Menu prices.
//!
//! The catalog stores prices as `DECIMAL(10,2)`. Everything past the store
//! boundary (views, the cart, the session) works with a floating-point
//! amount, so the conversion lives here and nowhere else.

use std::fmt;
use std::iter::Sum;
use std::ops::Add;
use std::str::FromStr;

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors converting a stored price into an amount.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PriceError {
    /// The stored text is not a decimal number.
    #[error("invalid price {0:?}")]
    Invalid(String),

    /// The decimal does not fit in an `f64`.
    #[error("price {0} is out of range")]
    OutOfRange(Decimal),
}

/// A price in reais.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(f64);

impl Price {
    /// Create a price from an amount.
    #[must_use]
    pub const fn new(amount: f64) -> Self {
        Self(amount)
    }

    /// Get the amount.
    #[must_use]
    pub const fn amount(self) -> f64 {
        self.0
    }

    /// Convert a stored decimal into a price.
    ///
    /// # Errors
    ///
    /// Returns `PriceError::OutOfRange` if the value has no `f64` equivalent.
    pub fn from_decimal(value: Decimal) -> Result<Self, PriceError> {
        value
            .to_f64()
            .map(Self)
            .ok_or(PriceError::OutOfRange(value))
    }

    /// Parse a price from its stored text form (e.g. `"25.50"`).
    ///
    /// # Errors
    ///
    /// Returns `PriceError::Invalid` if the text is not a decimal number.
    pub fn parse(raw: &str) -> Result<Self, PriceError> {
        let value =
            Decimal::from_str(raw.trim()).map_err(|_| PriceError::Invalid(raw.to_owned()))?;
        Self::from_decimal(value)
    }

    /// Price of `quantity` units.
    #[must_use]
    pub fn times(self, quantity: u32) -> Self {
        Self(self.0 * f64::from(quantity))
    }

    /// Format for display (e.g. `R$ 25,50`).
    #[must_use]
    pub fn display(self) -> String {
        format!("R$ {:.2}", self.0).replace('.', ",")
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

impl Add for Price {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), Add::add)
    }
}
