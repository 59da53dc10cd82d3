use crate::helper::{clamp, Fraction};
use crate::types::Scalar;
use crate::Color;

/// Interpolate a single channel: `ceil((high - low) * fraction + low)`.
///
/// The result is rounded *up*, not to the nearest integer. Fractions outside [0.0, 1.0]
/// extrapolate past the endpoints and the result is clamped to [0, 255].
pub fn mix_channel(fraction: Fraction, low: u8, high: u8) -> u8 {
    let low = Scalar::from(low);
    let high = Scalar::from(high);
    let mixed = ((high - low) * fraction.value() + low).ceil();
    clamp(0.0, 255.0, mixed) as u8
}

/// Mix two colors channel-wise. A fraction of `0.0` gives `low`, a fraction of `1.0` gives
/// `high`; see `mix_channel` for the rounding and clamping rules.
pub fn mix_color(fraction: Fraction, low: Color, high: Color) -> Color {
    Color {
        r: mix_channel(fraction, low.r, high.r),
        g: mix_channel(fraction, low.g, high.g),
        b: mix_channel(fraction, low.b, high.b),
    }
}
