//! Money type for rupee amounts.
//!
//! Amounts are held in paise so that sums of line totals never drift.
//! Display text always shows whole rupees, rounded half up.

use serde::{Serialize, Serializer};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Mul};

/// Currency symbol used in every display string.
pub const CURRENCY_SYMBOL: &str = "\u{20b9}";

/// A monetary value in Indian rupees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Money {
    /// Amount in paise (1/100 rupee).
    pub paise: i64,
}

impl Money {
    /// Create a Money value from paise.
    pub const fn from_paise(paise: i64) -> Self {
        Self { paise }
    }

    /// Create a Money value from whole rupees.
    pub const fn rupees(rupees: i64) -> Self {
        Self {
            paise: rupees * 100,
        }
    }

    /// Create a Money value from a decimal rupee amount.
    ///
    /// Non-finite input becomes zero; amounts beyond the `i64` paise range
    /// saturate.
    ///
    /// ```
    /// use vardan_commerce::money::Money;
    /// let price = Money::from_decimal(49.5);
    /// assert_eq!(price.paise, 4950);
    /// ```
    pub fn from_decimal(amount: f64) -> Self {
        if !amount.is_finite() {
            return Self::zero();
        }
        Self::from_paise((amount * 100.0).round() as i64)
    }

    /// Zero rupees.
    pub const fn zero() -> Self {
        Self { paise: 0 }
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.paise == 0
    }

    /// Convert to a decimal rupee value.
    pub fn to_decimal(&self) -> f64 {
        self.paise as f64 / 100.0
    }

    /// Whole rupees, rounded half up.
    pub fn rounded_rupees(&self) -> i64 {
        self.paise.saturating_add(50).div_euclid(100)
    }

    /// Format as a display string (e.g., "₹249").
    pub fn display(&self) -> String {
        format!("{}{}", CURRENCY_SYMBOL, self.rounded_rupees())
    }

    /// Multiply by a quantity.
    pub fn multiply(&self, factor: i64) -> Money {
        Money::from_paise(self.paise.saturating_mul(factor))
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, other: Money) -> Money {
        Money::from_paise(self.paise.saturating_add(other.paise))
    }
}

impl Mul<i64> for Money {
    type Output = Money;

    fn mul(self, factor: i64) -> Money {
        self.multiply(factor)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

/// Serialized as a JSON number of rupees: integral when there are no paise.
impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.paise % 100 == 0 {
            serializer.serialize_i64(self.paise / 100)
        } else {
            serializer.serialize_f64(self.to_decimal())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_from_rupees() {
        let m = Money::rupees(249);
        assert_eq!(m.paise, 24900);
        assert_eq!(m.display(), "\u{20b9}249");
    }

    #[test]
    fn test_money_from_decimal() {
        assert_eq!(Money::from_decimal(49.99).paise, 4999);
        assert_eq!(Money::from_decimal(f64::NAN), Money::zero());
    }

    #[test]
    fn test_display_rounds_half_up() {
        assert_eq!(Money::from_paise(4950).display(), "\u{20b9}50");
        assert_eq!(Money::from_paise(4949).display(), "\u{20b9}49");
    }

    #[test]
    fn test_huge_amounts_saturate() {
        let huge = Money::from_decimal(1e300);
        assert_eq!(huge.paise, i64::MAX);
        assert_eq!(huge.rounded_rupees(), i64::MAX / 100);
        assert_eq!(huge.display(), format!("\u{20b9}{}", i64::MAX / 100));
        assert_eq!((huge + huge).paise, i64::MAX);
        assert_eq!(Money::from_decimal(-1e300).rounded_rupees(), i64::MIN.div_euclid(100) + 1);
    }

    #[test]
    fn test_multiply_and_sum() {
        let total: Money = [Money::rupees(249) * 2, Money::rupees(150)]
            .into_iter()
            .sum();
        assert_eq!(total, Money::rupees(648));
    }

    #[test]
    fn test_serialize_as_rupees() {
        assert_eq!(serde_json::to_string(&Money::rupees(249)).unwrap(), "249");
        assert_eq!(serde_json::to_string(&Money::from_paise(4950)).unwrap(), "49.5");
    }
}
