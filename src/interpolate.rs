use crate::error::Result;
use crate::mix::mix_color;
use crate::parser::parse_color;
use crate::range::normalize;
use crate::types::Scalar;

/// Map `value` within `[lower, upper)` onto the color between `hex_low` and `hex_high`, and
/// return it as `#rrggbb`.
///
/// `lower` defaults to `0.0` and `upper` to `1.0`. Both colors must have the form `#RRGGBB`.
pub fn interpolate(
    value: Scalar,
    hex_low: &str,
    hex_high: &str,
    lower: Option<Scalar>,
    upper: Option<Scalar>,
) -> Result<String> {
    let fraction = normalize(value, lower, upper)?;
    let low = parse_color(hex_low)?;
    let high = parse_color(hex_high)?;
    Ok(mix_color(fraction, low, high).to_hex_string(true))
}
