//! Fixed-point weight representation.
//!
//! Plate inventories are keyed by weight and the quantizer loops over
//! repeated additions, so weights are stored as integer hundredths of a
//! unit internally. Floating point appears only at the serde and display
//! boundaries.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};

/// A weight in the configured unit, stored as hundredths.
///
/// `Weight::from_f64(2.5)` and `Weight::from_f64(1.25)` are exact; anything
/// finer than a hundredth is rounded at construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "f64", into = "f64")]
pub struct Weight(i64);

impl Weight {
    pub const ZERO: Weight = Weight(0);

    pub fn from_f64(value: f64) -> Self {
        Weight((value * 100.0).round() as i64)
    }

    pub fn to_f64(self) -> f64 {
        self.0 as f64 / 100.0
    }

    pub fn hundredths(self) -> i64 {
        self.0
    }

    pub fn is_positive(self) -> bool {
        self.0 > 0
    }

    /// Half of this weight, truncated toward zero to the nearest hundredth.
    pub fn half(self) -> Weight {
        Weight(self.0 / 2)
    }

    /// This weight doubled.
    pub fn doubled(self) -> Weight {
        Weight(self.0 * 2)
    }

    /// How many whole multiples of `other` fit into this weight.
    pub fn whole_multiples_of(self, other: Weight) -> i64 {
        if other.0 <= 0 {
            return 0;
        }
        self.0 / other.0
    }

    /// This weight scaled by a non-negative count.
    pub fn times(self, count: i64) -> Weight {
        Weight(self.0 * count)
    }

    /// Round to the nearest multiple of `step`, ties rounding up.
    pub fn round_to_multiple_of(self, step: Weight) -> Weight {
        if step.0 <= 0 {
            return self;
        }
        let quotient = (self.0 + step.0 / 2).div_euclid(step.0);
        Weight(quotient * step.0)
    }
}

impl Add for Weight {
    type Output = Weight;

    fn add(self, rhs: Weight) -> Weight {
        Weight(self.0 + rhs.0)
    }
}

impl Sub for Weight {
    type Output = Weight;

    fn sub(self, rhs: Weight) -> Weight {
        Weight(self.0 - rhs.0)
    }
}

impl From<f64> for Weight {
    fn from(value: f64) -> Self {
        Weight::from_f64(value)
    }
}

impl From<Weight> for f64 {
    fn from(value: Weight) -> Self {
        value.to_f64()
    }
}

impl fmt::Display for Weight {
    /// Renders without trailing zeros: `5`, `2.5`, `1.25`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let whole = self.0 / 100;
        let frac = (self.0 % 100).abs();

        if frac == 0 {
            write!(f, "{}", whole)
        } else if frac % 10 == 0 {
            write!(f, "{}.{}", whole, frac / 10)
        } else {
            write!(f, "{}.{:02}", whole, frac)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_f64_exact_hundredths() {
        assert_eq!(Weight::from_f64(2.5).hundredths(), 250);
        assert_eq!(Weight::from_f64(1.25).hundredths(), 125);
        assert_eq!(Weight::from_f64(45.0).hundredths(), 4500);
    }

    #[test]
    fn test_display_trims_trailing_zeros() {
        assert_eq!(Weight::from_f64(5.0).to_string(), "5");
        assert_eq!(Weight::from_f64(2.5).to_string(), "2.5");
        assert_eq!(Weight::from_f64(1.25).to_string(), "1.25");
        assert_eq!(Weight::from_f64(137.0).to_string(), "137");
    }

    #[test]
    fn test_round_to_multiple_nearest() {
        let step = Weight::from_f64(5.0);
        assert_eq!(
            Weight::from_f64(137.0).round_to_multiple_of(step),
            Weight::from_f64(135.0)
        );
        assert_eq!(
            Weight::from_f64(138.0).round_to_multiple_of(step),
            Weight::from_f64(140.0)
        );
    }

    #[test]
    fn test_round_to_multiple_ties_round_up() {
        let step = Weight::from_f64(5.0);
        assert_eq!(
            Weight::from_f64(137.5).round_to_multiple_of(step),
            Weight::from_f64(140.0)
        );
        assert_eq!(
            Weight::from_f64(2.5).round_to_multiple_of(step),
            Weight::from_f64(5.0)
        );
    }

    #[test]
    fn test_whole_multiples() {
        let plate = Weight::from_f64(45.0);
        assert_eq!(Weight::from_f64(46.0).whole_multiples_of(plate), 1);
        assert_eq!(Weight::from_f64(44.0).whole_multiples_of(plate), 0);
        assert_eq!(Weight::from_f64(90.0).whole_multiples_of(plate), 2);
    }

    #[test]
    fn test_serde_roundtrip_through_f64() {
        let w = Weight::from_f64(2.5);
        let json = serde_json::to_string(&w).unwrap();
        assert_eq!(json, "2.5");
        let back: Weight = serde_json::from_str(&json).unwrap();
        assert_eq!(back, w);
    }
}
