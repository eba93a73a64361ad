//! Satoshi amount type.
//!
//! Balances and transaction totals are fixed-point integers (u64) in the
//! smallest currency unit to avoid floating-point errors. Conversion to a
//! display denomination is a UI concern, not ours.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Add;

/// An amount in satoshis (the smallest currency unit).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Satoshis(u64);

impl Satoshis {
    pub const ZERO: Self = Self(0);

    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn raw(&self) -> u64 {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub fn checked_add(self, other: Self) -> Option<Self> {
        self.0.checked_add(other.0).map(Self)
    }

    pub fn saturating_sub(self, other: Self) -> Self {
        Self(self.0.saturating_sub(other.0))
    }
}

impl Add for Satoshis {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl fmt::Display for Satoshis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} sat", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_zero() {
        assert!(Satoshis::ZERO.is_zero());
        assert!(!Satoshis::new(1).is_zero());
    }

    #[test]
    fn checked_add_detects_overflow() {
        let max = Satoshis::new(u64::MAX);
        assert_eq!(max.checked_add(Satoshis::new(1)), None);
        assert_eq!(
            Satoshis::new(2).checked_add(Satoshis::new(3)),
            Some(Satoshis::new(5))
        );
    }

    #[test]
    fn saturating_sub_floors_at_zero() {
        assert_eq!(
            Satoshis::new(5).saturating_sub(Satoshis::new(10)),
            Satoshis::ZERO
        );
    }
}
