//! Numeric backend for damage multipliers.
//!
//! Multipliers use `f64` by default. With the `fixed-point` feature they
//! use a decimal fixed-point type instead, so that products such as
//! `0.5 * 0.5` are bit-for-bit identical on every platform.

use std::fmt;
use std::ops::Mul;

/// Operations the engine needs from a multiplier backend.
///
/// Implemented for `f64` and, with the `fixed-point` feature, for
/// [`FixedPoint`].
pub trait EffectNumeric:
    Clone + Copy + PartialEq + PartialOrd + fmt::Debug + fmt::Display + Mul<Output = Self>
{
    /// The zero value (immunity).
    fn zero() -> Self;

    /// The multiplicative identity (neutral).
    fn one() -> Self;

    /// Create a value from f64.
    fn from_f64(f: f64) -> Self;

    /// Convert to f64.
    fn to_f64(self) -> f64;

    /// Whether `f` survives conversion with its zero/non-zero status and
    /// magnitude intact.
    fn can_represent(f: f64) -> bool;
}

#[cfg(not(feature = "fixed-point"))]
impl EffectNumeric for f64 {
    fn zero() -> Self {
        0.0
    }

    fn one() -> Self {
        1.0
    }

    fn from_f64(f: f64) -> Self {
        f
    }

    fn to_f64(self) -> f64 {
        self
    }

    fn can_represent(f: f64) -> bool {
        f.is_finite()
    }
}

/// Fixed-point number for deterministic multiplier arithmetic.
///
/// Uses `i64` for the value and `u8` for the scale (number of decimal
/// places). With scale 4, the value 2500 represents 0.25.
///
/// # Examples
///
/// ```rust
/// # #[cfg(feature = "fixed-point")]
/// # {
/// use typechart::numeric::FixedPoint;
///
/// let quarter = FixedPoint::new(2500, 4);
/// assert_eq!(quarter.to_f64(), 0.25);
/// # }
/// ```
#[cfg(feature = "fixed-point")]
#[derive(Debug, Clone, Copy)]
pub struct FixedPoint {
    value: i64,
    scale: u8,
}

#[cfg(feature = "fixed-point")]
impl FixedPoint {
    /// Default scale (4 decimal places). Enough for 1/16 exactly.
    pub const DEFAULT_SCALE: u8 = 4;

    /// Create a new fixed-point number from its scaled integer value.
    pub const fn new(value: i64, scale: u8) -> Self {
        Self { value, scale }
    }

    /// Create a fixed-point number from an f64 at the default scale.
    pub fn from_f64(f: f64) -> Self {
        Self::from_f64_with_scale(f, Self::DEFAULT_SCALE)
    }

    /// Create a fixed-point number from an f64 with a specific scale.
    pub fn from_f64_with_scale(f: f64, scale: u8) -> Self {
        let multiplier = 10_i64.pow(scale as u32);
        let value = (f * multiplier as f64).round() as i64;
        Self { value, scale }
    }

    /// Whether `f` converts at `scale` without saturating or collapsing a
    /// non-zero value to zero.
    pub fn can_represent_with_scale(f: f64, scale: u8) -> bool {
        if !f.is_finite() {
            return false;
        }
        let scaled = (f * 10_f64.powi(scale as i32)).round().abs();
        // i64::MAX rounds up to 2^63 as f64, so the bound is exclusive.
        scaled < i64::MAX as f64 && (f == 0.0 || scaled >= 1.0)
    }

    /// Convert to f64.
    pub fn to_f64(self) -> f64 {
        let divisor = 10_f64.powi(self.scale as i32);
        self.value as f64 / divisor
    }

    /// Get the raw integer value.
    pub fn value(self) -> i64 {
        self.value
    }

    /// Get the scale.
    pub fn scale(self) -> u8 {
        self.scale
    }

    /// Bring both operands to their common (larger) scale.
    fn normalize(self, other: Self) -> (i128, i128, u8) {
        let common_scale = self.scale.max(other.scale);
        let value1 = self.value as i128 * 10_i128.pow((common_scale - self.scale) as u32);
        let value2 = other.value as i128 * 10_i128.pow((common_scale - other.scale) as u32);
        (value1, value2, common_scale)
    }
}

#[cfg(feature = "fixed-point")]
impl PartialEq for FixedPoint {
    fn eq(&self, other: &Self) -> bool {
        let (v1, v2, _) = self.normalize(*other);
        v1 == v2
    }
}

#[cfg(feature = "fixed-point")]
impl Eq for FixedPoint {}

#[cfg(feature = "fixed-point")]
impl PartialOrd for FixedPoint {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(feature = "fixed-point")]
impl Ord for FixedPoint {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        let (v1, v2, _) = self.normalize(*other);
        v1.cmp(&v2)
    }
}

#[cfg(feature = "fixed-point")]
impl Mul for FixedPoint {
    type Output = Self;

    fn mul(self, other: Self) -> Self {
        let (v1, v2, scale) = self.normalize(other);
        // Product carries scale * 2 decimal places; drop one scale's worth.
        let product = v1.saturating_mul(v2) / 10_i128.pow(scale as u32);
        // A product of non-zero factors must not read as an immunity.
        let product = if product == 0 && v1 != 0 && v2 != 0 {
            v1.signum() * v2.signum()
        } else {
            product
        };
        let value = product.clamp(i64::MIN as i128, i64::MAX as i128) as i64;
        Self { value, scale }
    }
}

#[cfg(feature = "fixed-point")]
impl EffectNumeric for FixedPoint {
    fn zero() -> Self {
        Self::new(0, Self::DEFAULT_SCALE)
    }

    fn one() -> Self {
        Self::new(10_i64.pow(Self::DEFAULT_SCALE as u32), Self::DEFAULT_SCALE)
    }

    fn from_f64(f: f64) -> Self {
        Self::from_f64(f)
    }

    fn to_f64(self) -> f64 {
        self.to_f64()
    }

    fn can_represent(f: f64) -> bool {
        Self::can_represent_with_scale(f, Self::DEFAULT_SCALE)
    }
}

#[cfg(feature = "fixed-point")]
impl fmt::Display for FixedPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_f64())
    }
}

/// Backing type of [`Multiplier`](crate::Multiplier).
///
/// `FixedPoint` when the `fixed-point` feature is enabled, otherwise `f64`.
#[cfg(feature = "fixed-point")]
pub type MultiplierValue = FixedPoint;

#[cfg(not(feature = "fixed-point"))]
pub type MultiplierValue = f64;

/// Compile-time values for the well-known multipliers.
#[cfg(not(feature = "fixed-point"))]
pub(crate) mod consts {
    use super::MultiplierValue;

    pub const ZERO: MultiplierValue = 0.0;
    pub const QUARTER: MultiplierValue = 0.25;
    pub const HALF: MultiplierValue = 0.5;
    pub const ONE: MultiplierValue = 1.0;
    pub const TWO: MultiplierValue = 2.0;
    pub const FOUR: MultiplierValue = 4.0;
}

#[cfg(feature = "fixed-point")]
pub(crate) mod consts {
    use super::{FixedPoint, MultiplierValue};

    const S: u8 = FixedPoint::DEFAULT_SCALE;

    pub const ZERO: MultiplierValue = FixedPoint::new(0, S);
    pub const QUARTER: MultiplierValue = FixedPoint::new(2_500, S);
    pub const HALF: MultiplierValue = FixedPoint::new(5_000, S);
    pub const ONE: MultiplierValue = FixedPoint::new(10_000, S);
    pub const TWO: MultiplierValue = FixedPoint::new(20_000, S);
    pub const FOUR: MultiplierValue = FixedPoint::new(40_000, S);
}
