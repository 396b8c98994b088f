//! Balance type for the persisted point total
//!
//! Stored as a plain i64. All arithmetic is checked so a misconfigured
//! action can never wrap the balance around.

use std::fmt;

/// The user's current point total
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Balance(i64);

impl Balance {
    /// Create a balance from a point count
    pub const fn new(points: i64) -> Self {
        Self(points)
    }

    /// Create a zero balance
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the point count
    pub const fn points(&self) -> i64 {
        self.0
    }

    /// Check if the balance is negative
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Check whether a spend of `cost` points is covered
    pub const fn can_afford(&self, cost: i64) -> bool {
        self.0 >= cost
    }

    /// Add earned points, returning `None` on overflow
    pub fn checked_earn(self, amount: i64) -> Option<Self> {
        self.0.checked_add(amount).map(Self)
    }

    /// Subtract a cost, returning `None` on overflow
    ///
    /// Affordability is the caller's concern; see [`Balance::can_afford`].
    pub fn checked_spend(self, cost: i64) -> Option<Self> {
        self.0.checked_sub(cost).map(Self)
    }
}

impl fmt::Display for Balance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
