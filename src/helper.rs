use std::fmt::{self, Display};

use crate::error::{Error, Result};
use crate::types::Scalar;

/// Trim a number such that it fits into the range [lower, upper].
pub fn clamp(lower: Scalar, upper: Scalar, x: Scalar) -> Scalar {
    Scalar::max(Scalar::min(upper, x), lower)
}

/// The position of a value within a range. Unlike a percentage this is *not* restricted to
/// [0.0, 1.0]: values below the lower bound map to negative fractions, values above the upper
/// bound to fractions greater than one. A fraction is always finite.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Fraction {
    f: Scalar,
}

impl Fraction {
    pub const ZERO: Fraction = Fraction { f: 0.0 };
    pub const ONE: Fraction = Fraction { f: 1.0 };

    pub fn new(s: Scalar) -> Result<Self> {
        if s.is_finite() {
            Ok(Fraction { f: s })
        } else {
            Err(Error::InvalidValue(s))
        }
    }

    pub fn value(self) -> Scalar {
        self.f
    }

    /// Whether the fraction lies within [0.0, 1.0], i.e. the value was inside its range.
    pub fn is_within_unit(self) -> bool {
        (0.0..=1.0).contains(&self.f)
    }
}

impl Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", MaxPrecision::wrap(6, self.f))
    }
}

// `format!`-style format strings only allow specifying a fixed floating
// point precision, e.g. `{:.3}` to print 3 decimal places. This always
// displays trailing zeroes, which we'd rather omit. For example, we'd
// prefer to print `0.5` as `0.5` instead of `0.500`.
//
// Note that this will round using omitted decimal places:
//
//     MaxPrecision::wrap(3, 0.5004) //=> 0.500
//     MaxPrecision::wrap(3, 0.5005) //=> 0.501
//
pub struct MaxPrecision {
    precision: u32,
    inner: f64,
}

impl MaxPrecision {
    pub fn wrap(precision: u32, inner: f64) -> Self {
        Self { precision, inner }
    }
}

impl Display for MaxPrecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pow_10 = 10u32.pow(self.precision) as f64;
        let rounded = (self.inner * pow_10).round() / pow_10;
        write!(f, "{}", rounded)
    }
}
