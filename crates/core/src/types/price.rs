//! Type-safe price representation.
//!
//! Plant costs are whole rupees with no minor unit, so a price is a plain
//! unsigned amount. Arithmetic saturates instead of wrapping.

use core::fmt;
use core::iter::Sum;

use serde::{Deserialize, Serialize};

use crate::types::Quantity;

/// A price in whole Indian rupees.
///
/// Serializes as a bare integer (`250`), matching the stored cart format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct Price(u64);

impl Price {
    /// Currency symbol used when formatting.
    pub const SYMBOL: &'static str = "₹";

    /// A zero price.
    pub const ZERO: Self = Self(0);

    /// Create a new price from a whole-rupee amount.
    #[must_use]
    pub const fn new(amount: u64) -> Self {
        Self(amount)
    }

    /// The amount in whole rupees.
    #[must_use]
    pub const fn amount(&self) -> u64 {
        self.0
    }

    /// Whether the amount is greater than zero.
    #[must_use]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// The price of `quantity` units at this unit price.
    #[must_use]
    pub fn times(self, quantity: Quantity) -> Self {
        Self(self.0.saturating_mul(u64::from(quantity.get())))
    }

    /// Format for display (e.g., "₹250").
    #[must_use]
    pub fn display(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", Self::SYMBOL, self.0)
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |acc, price| Self(acc.0.saturating_add(price.0)))
    }
}
