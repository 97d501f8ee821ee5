//! Monetary amounts in the smallest currency unit (cents).
//!
//! Prices never go negative in this domain, so amounts are unsigned by
//! construction; the serde boundary rejects negative values outright.

use serde::{Deserialize, Serialize};

use crate::value_object::ValueObject;

/// A monetary amount, stored as whole cents.
#[derive(
    Debug, Default, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money(u64);

impl Money {
    pub const ZERO: Money = Money(0);

    pub const fn from_cents(cents: u64) -> Self {
        Self(cents)
    }

    /// Convenience constructor for literal prices, e.g. `Money::from_dollars(29, 99)`.
    ///
    /// `cents` must be a sub-dollar remainder (< 100).
    pub const fn from_dollars(dollars: u64, cents: u64) -> Self {
        assert!(cents < 100);
        Self(dollars * 100 + cents)
    }

    pub const fn cents(self) -> u64 {
        self.0
    }

    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    pub fn checked_add(self, other: Money) -> Option<Money> {
        self.0.checked_add(other.0).map(Money)
    }

    /// Extend a unit price over a quantity.
    pub fn checked_mul(self, quantity: u32) -> Option<Money> {
        self.0.checked_mul(u64::from(quantity)).map(Money)
    }

    pub fn saturating_sub(self, other: Money) -> Money {
        Money(self.0.saturating_sub(other.0))
    }

    /// Take a percentage of this amount, rounded half-up to the nearest cent.
    ///
    /// Currency semantics: `$119.96 × 10% = $11.996` rounds to `$12.00`.
    /// The intermediate product is computed in 128 bits, so this cannot
    /// overflow for any representable amount and `percentage <= 100`.
    pub fn percent_of(self, percentage: u8) -> Money {
        let scaled = u128::from(self.0) * u128::from(percentage) + 50;
        Money((scaled / 100) as u64)
    }
}

impl ValueObject for Money {}

impl core::fmt::Display for Money {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "${}.{:02}", self.0 / 100, self.0 % 100)
    }
}
