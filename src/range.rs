use crate::error::{Error, Result};
use crate::helper::Fraction;
use crate::types::Scalar;

/// A half-open interval `[lower, upper)` that values are placed in.
///
/// Both bounds are finite and distinct. `upper` may be smaller than `lower`, in which case
/// fractions grow as values decrease.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Range {
    lower: Scalar,
    upper: Scalar,
}

impl Range {
    pub const DEFAULT_LOWER: Scalar = 0.0;
    pub const DEFAULT_UPPER: Scalar = 1.0;

    pub fn new(lower: Scalar, upper: Scalar) -> Result<Self> {
        #![allow(clippy::float_cmp)]
        if !lower.is_finite() || !upper.is_finite() || lower == upper {
            return Err(Error::InvalidRange { lower, upper });
        }
        Ok(Range { lower, upper })
    }

    /// Build a range from optional bounds. A missing `lower` defaults to `0.0`, a missing
    /// `upper` to `1.0`.
    pub fn from_bounds(lower: Option<Scalar>, upper: Option<Scalar>) -> Result<Self> {
        Range::new(
            lower.unwrap_or(Self::DEFAULT_LOWER),
            upper.unwrap_or(Self::DEFAULT_UPPER),
        )
    }

    pub fn lower(&self) -> Scalar {
        self.lower
    }

    pub fn upper(&self) -> Scalar {
        self.upper
    }

    /// The position of `value` within the range: `(value - lower) / (upper - lower)`.
    ///
    /// The result is not clamped to [0.0, 1.0].
    pub fn normalize(&self, value: Scalar) -> Result<Fraction> {
        Fraction::new((value - self.lower) / (self.upper - self.lower))
            .map_err(|_| Error::InvalidValue(value))
    }

    /// The value at the given position, the inverse of `normalize`.
    pub fn value_at(&self, fraction: Fraction) -> Scalar {
        (self.upper - self.lower).mul_add(fraction.value(), self.lower)
    }
}

impl Default for Range {
    fn default() -> Self {
        Range {
            lower: Self::DEFAULT_LOWER,
            upper: Self::DEFAULT_UPPER,
        }
    }
}

/// Place `value` within `[lower, upper)`, see `Range::from_bounds` for the defaults.
///
/// Fails with `Error::InvalidRange` if the bounds coincide or are not finite, and with
/// `Error::InvalidValue` if `value` is not finite.
pub fn normalize(value: Scalar, lower: Option<Scalar>, upper: Option<Scalar>) -> Result<Fraction> {
    Range::from_bounds(lower, upper)?.normalize(value)
}
