use crate::error::{Error, Result};
use crate::helper::Fraction;
use crate::mix::mix_color;
use crate::range::Range;
use crate::types::Scalar;
use crate::Color;

/// The response curve applied to a fraction before it is mixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Scale {
    #[default]
    Linear,
    /// Sign-preserving square root: spreads out small fractions, compresses large ones.
    Sqrt,
}

impl Scale {
    pub fn from_name(name: &str) -> Option<Scale> {
        match name.to_lowercase().as_str() {
            "linear" => Some(Scale::Linear),
            "sqrt" => Some(Scale::Sqrt),
            _ => None,
        }
    }

    pub fn apply(self, fraction: Fraction) -> Fraction {
        match self {
            Scale::Linear => fraction,
            Scale::Sqrt => {
                let f = fraction.value();
                // sqrt of a finite number is finite
                Fraction::new(f.signum() * f.abs().sqrt()).unwrap_or(fraction)
            }
        }
    }
}

/// The part of the color ramp a gradient is confined to: a curved fraction `f` is mapped onto
/// `start + (end - start) * f`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Band {
    start: Fraction,
    end: Fraction,
}

impl Band {
    pub const FULL: Band = Band {
        start: Fraction::ZERO,
        end: Fraction::ONE,
    };

    pub fn new(start: Scalar, end: Scalar) -> Result<Band> {
        Ok(Band {
            start: Fraction::new(start)?,
            end: Fraction::new(end)?,
        })
    }

    pub fn start(&self) -> Fraction {
        self.start
    }

    pub fn end(&self) -> Fraction {
        self.end
    }

    pub fn apply(&self, fraction: Fraction) -> Result<Fraction> {
        let (start, end) = (self.start.value(), self.end.value());
        Fraction::new((end - start) * fraction.value() + start)
    }
}

impl Default for Band {
    fn default() -> Self {
        Band::FULL
    }
}

/// A reusable mapping from values to colors: two endpoint colors, the range of values they
/// correspond to, a response curve and the band of the ramp that is used.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gradient {
    low: Color,
    high: Color,
    range: Range,
    scale: Scale,
    band: Band,
}

impl Gradient {
    /// A linear gradient from `low` to `high` over the default range [0, 1).
    pub fn new(low: Color, high: Color) -> Self {
        Gradient {
            low,
            high,
            range: Range::default(),
            scale: Scale::Linear,
            band: Band::FULL,
        }
    }

    /// Green to red over [48000, 524000), used for the total flow through a location.
    pub fn flow_points() -> Result<Self> {
        Ok(Gradient::new(Color::lime(), Color::red()).with_range(Range::new(48000.0, 524000.0)?))
    }

    /// Green to red over [4000, 253000) on a square root curve, confined to the middle 60% of
    /// the ramp. Used for single flows between two locations.
    pub fn flow_lines() -> Result<Self> {
        Ok(Gradient::new(Color::lime(), Color::red())
            .with_range(Range::new(4000.0, 253000.0)?)
            .with_scale(Scale::Sqrt)
            .with_band(Band::new(0.2, 0.8)?))
    }

    pub fn with_range(mut self, range: Range) -> Self {
        self.range = range;
        self
    }

    pub fn with_scale(mut self, scale: Scale) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_band(mut self, band: Band) -> Self {
        self.band = band;
        self
    }

    pub fn range(&self) -> Range {
        self.range
    }

    /// The interpolation weight for `value`, after the response curve and band are applied.
    pub fn fraction(&self, value: Scalar) -> Result<Fraction> {
        let fraction = self.range.normalize(value)?;
        self.band
            .apply(self.scale.apply(fraction))
            .map_err(|_| Error::InvalidValue(value))
    }

    pub fn color_at(&self, value: Scalar) -> Result<Color> {
        Ok(mix_color(self.fraction(value)?, self.low, self.high))
    }

    /// `color_at` formatted as `#rrggbb`.
    pub fn hex_at(&self, value: Scalar) -> Result<String> {
        Ok(self.color_at(value)?.to_hex_string(true))
    }

    /// Sample `count` colors at evenly spaced values from the lower to the upper bound of the
    /// range (both included).
    pub fn steps(&self, count: usize) -> Result<Vec<Color>> {
        match count {
            0 => Ok(Vec::new()),
            1 => Ok(vec![self.color_at(self.range.lower())?]),
            _ => (0..count)
                .map(|i| {
                    let position = Fraction::new(i as Scalar / (count - 1) as Scalar)?;
                    self.color_at(self.range.value_at(position))
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helper::{assert_channels_not_decreasing, fraction};
    use approx::assert_relative_eq;

    #[test]
    fn sqrt_scale_keeps_sign() {
        assert_relative_eq!(0.5, Scale::Sqrt.apply(fraction(0.25)).value());
        assert_relative_eq!(-0.5, Scale::Sqrt.apply(fraction(-0.25)).value());
        assert_relative_eq!(0.0, Scale::Sqrt.apply(Fraction::ZERO).value());
        assert_relative_eq!(2.0, Scale::Sqrt.apply(fraction(4.0)).value());
        assert_relative_eq!(0.3, Scale::Linear.apply(fraction(0.3)).value());
    }

    #[test]
    fn scale_from_name() {
        assert_eq!(Some(Scale::Linear), Scale::from_name("linear"));
        assert_eq!(Some(Scale::Sqrt), Scale::from_name("SQRT"));
        assert_eq!(None, Scale::from_name("log"));
    }

    #[test]
    fn band_maps_unit_interval() {
        let band = Band::new(0.2, 0.8).unwrap();
        assert_relative_eq!(0.2, band.apply(Fraction::ZERO).unwrap().value());
        assert_relative_eq!(0.8, band.apply(Fraction::ONE).unwrap().value());
        assert_relative_eq!(0.5, band.apply(fraction(0.5)).unwrap().value());
        assert!(Band::new(Scalar::NAN, 1.0).is_err());
    }

    #[test]
    fn default_gradient_matches_plain_mix() {
        let gradient = Gradient::new(Color::lime(), Color::red());
        assert_eq!(Color::olive(), gradient.color_at(0.5).unwrap());
        assert_eq!("#00ff00", gradient.hex_at(0.0).unwrap());
        assert_eq!("#ff0000", gradient.hex_at(1.0).unwrap());
    }

    #[test]
    fn flow_points_preset() {
        let gradient = Gradient::flow_points().unwrap();
        assert_eq!(Color::lime(), gradient.color_at(48000.0).unwrap());
        assert_eq!(Color::red(), gradient.color_at(524000.0).unwrap());
        assert_eq!(Color::olive(), gradient.color_at(286000.0).unwrap());
    }

    #[test]
    fn flow_lines_preset() {
        let gradient = Gradient::flow_lines().unwrap();
        // lowest flow: 0.2 of the way from green to red
        assert_eq!("#33cc00", gradient.hex_at(4000.0).unwrap());
        // highest flow: 0.8 of the way
        assert_eq!("#cc3300", gradient.hex_at(253000.0).unwrap());
        // a quarter of the range is half-way along the curve
        assert_relative_eq!(
            0.5,
            gradient.fraction(4000.0 + 249000.0 / 4.0).unwrap().value(),
            max_relative = 1e-12
        );
    }

    #[test]
    fn gradient_below_range_stays_monotonic() {
        let gradient = Gradient::new(Color::black(), Color::white())
            .with_range(Range::new(100.0, 200.0).unwrap())
            .with_scale(Scale::Sqrt);
        let mut previous = Color::black();
        for value in (0..=300).map(|v| v as Scalar) {
            let current = gradient.color_at(value).unwrap();
            assert_channels_not_decreasing(&previous, &current);
            previous = current;
        }
    }

    #[test]
    fn steps() {
        let gradient = Gradient::new(Color::black(), Color::white())
            .with_range(Range::new(10.0, 20.0).unwrap());
        assert!(gradient.steps(0).unwrap().is_empty());
        assert_eq!(vec![Color::black()], gradient.steps(1).unwrap());
        assert_eq!(
            vec![Color::black(), Color::white()],
            gradient.steps(2).unwrap()
        );

        let colors = gradient.steps(3).unwrap();
        assert_eq!(
            vec![
                Color::black(),
                Color::from_rgb(128, 128, 128),
                Color::white()
            ],
            colors
        );
    }
}
