//! Damage multipliers and their classification.

use crate::numeric::{consts, EffectNumeric, MultiplierValue};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use std::ops::Mul;

/// A non-negative damage scaling factor.
///
/// Single matchups produce 0, 0.5, 1 or 2; combining two defending types
/// multiplies them, which yields 0.25 and 4 as well. Nothing in the engine
/// assumes a fixed set of values.
///
/// Serializes as a plain number.
///
/// # Examples
///
/// ```rust
/// use typechart::{Effect, Multiplier};
///
/// let m = Multiplier::DOUBLE * Multiplier::DOUBLE;
/// assert_eq!(m, Multiplier::QUADRUPLE);
/// assert_eq!(m.effect(), Effect::SuperEffective);
/// assert_eq!(m.to_string(), "4×");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Multiplier(MultiplierValue);

impl Multiplier {
    /// No effect (0×).
    pub const IMMUNE: Multiplier = Multiplier(consts::ZERO);
    /// Doubly resisted (0.25×).
    pub const QUARTER: Multiplier = Multiplier(consts::QUARTER);
    /// Not very effective (0.5×).
    pub const HALF: Multiplier = Multiplier(consts::HALF);
    /// Neutral (1×).
    pub const NEUTRAL: Multiplier = Multiplier(consts::ONE);
    /// Super effective (2×).
    pub const DOUBLE: Multiplier = Multiplier(consts::TWO);
    /// Doubly super effective (4×).
    pub const QUADRUPLE: Multiplier = Multiplier(consts::FOUR);

    /// Wrap a raw backend value.
    pub fn new(value: MultiplierValue) -> Self {
        Self(value)
    }

    /// Create a multiplier from an f64.
    ///
    /// No range check is done here; chart construction rejects negative
    /// and non-finite values.
    pub fn from_f64(f: f64) -> Self {
        Self(MultiplierValue::from_f64(f))
    }

    /// The raw backend value.
    pub fn value(self) -> MultiplierValue {
        self.0
    }

    /// Convert to f64.
    pub fn to_f64(self) -> f64 {
        self.0.to_f64()
    }

    /// Classify this multiplier.
    pub fn effect(self) -> Effect {
        let zero = MultiplierValue::zero();
        let one = MultiplierValue::one();
        if self.0 == zero {
            Effect::Immune
        } else if self.0 > one {
            Effect::SuperEffective
        } else if self.0 < one {
            Effect::Resisted
        } else {
            Effect::Neutral
        }
    }

    /// Whether this is exactly 1×.
    pub fn is_neutral(self) -> bool {
        self.0 == MultiplierValue::one()
    }

    /// Whether this is greater than 1×.
    pub fn is_super_effective(self) -> bool {
        self.effect() == Effect::SuperEffective
    }

    /// Whether `value` is a legal multiplier: non-negative, finite and
    /// representable by the numeric backend without collapsing to zero.
    pub(crate) fn is_valid(value: f64) -> bool {
        value >= 0.0 && MultiplierValue::can_represent(value)
    }

    /// Total order for sorting. Multipliers are never NaN once validated,
    /// so incomparable values are treated as equal.
    pub(crate) fn total_cmp(&self, other: &Self) -> Ordering {
        self.partial_cmp(other).unwrap_or(Ordering::Equal)
    }
}

impl Default for Multiplier {
    fn default() -> Self {
        Multiplier::NEUTRAL
    }
}

impl Mul for Multiplier {
    type Output = Multiplier;

    fn mul(self, rhs: Multiplier) -> Multiplier {
        Multiplier(self.0 * rhs.0)
    }
}

impl From<f64> for Multiplier {
    fn from(f: f64) -> Self {
        Multiplier::from_f64(f)
    }
}

impl fmt::Display for Multiplier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}×", self.to_f64())
    }
}

impl Serialize for Multiplier {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_f64(self.to_f64())
    }
}

impl<'de> Deserialize<'de> for Multiplier {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let f = f64::deserialize(deserializer)?;
        if !Multiplier::is_valid(f) {
            return Err(serde::de::Error::custom(format!("invalid multiplier {}", f)));
        }
        Ok(Multiplier::from_f64(f))
    }
}

/// How an attack fares against a defender.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Effect {
    /// Exactly 0×.
    Immune,
    /// Strictly between 0× and 1×.
    Resisted,
    /// Exactly 1×.
    Neutral,
    /// Greater than 1×.
    SuperEffective,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_effect_classification() {
        assert_eq!(Multiplier::IMMUNE.effect(), Effect::Immune);
        assert_eq!(Multiplier::QUARTER.effect(), Effect::Resisted);
        assert_eq!(Multiplier::HALF.effect(), Effect::Resisted);
        assert_eq!(Multiplier::NEUTRAL.effect(), Effect::Neutral);
        assert_eq!(Multiplier::DOUBLE.effect(), Effect::SuperEffective);
        assert_eq!(Multiplier::QUADRUPLE.effect(), Effect::SuperEffective);
        assert_eq!(Multiplier::from_f64(1.5).effect(), Effect::SuperEffective);
    }

    #[test]
    fn test_products() {
        assert_eq!(Multiplier::HALF * Multiplier::HALF, Multiplier::QUARTER);
        assert_eq!(Multiplier::DOUBLE * Multiplier::HALF, Multiplier::NEUTRAL);
        assert_eq!(Multiplier::IMMUNE * Multiplier::QUADRUPLE, Multiplier::IMMUNE);
    }

    #[test]
    fn test_display() {
        assert_eq!(Multiplier::DOUBLE.to_string(), "2×");
        assert_eq!(Multiplier::HALF.to_string(), "0.5×");
        assert_eq!(Multiplier::IMMUNE.to_string(), "0×");
    }

    #[test]
    fn test_serializes_as_number() {
        let json = serde_json::to_string(&Multiplier::QUARTER).unwrap();
        assert_eq!(json, "0.25");

        let m: Multiplier = serde_json::from_str("4").unwrap();
        assert_eq!(m, Multiplier::QUADRUPLE);
    }

    #[test]
    fn test_deserialize_rejects_negative() {
        assert!(serde_json::from_str::<Multiplier>("-0.5").is_err());
        assert!(serde_json::from_str::<Multiplier>("0").is_ok());
    }

    #[test]
    fn test_ordering() {
        let mut values = vec![
            Multiplier::HALF,
            Multiplier::QUADRUPLE,
            Multiplier::IMMUNE,
            Multiplier::NEUTRAL,
        ];
        values.sort_by(|a, b| b.total_cmp(a));
        assert_eq!(
            values,
            vec![
                Multiplier::QUADRUPLE,
                Multiplier::NEUTRAL,
                Multiplier::HALF,
                Multiplier::IMMUNE,
            ]
        );
    }
}
