use nom::bytes::complete::take_while_m_n;
use nom::character::complete::char;
use nom::combinator::{all_consuming, map, map_res};
use nom::IResult;

use crate::error::{Error, Result};
use crate::Color;

fn hex_digits(input: &str) -> IResult<&str, u32> {
    map_res(
        take_while_m_n(6, 6, |c: char| c.is_ascii_hexdigit()),
        |digits: &str| u32::from_str_radix(digits, 16),
    )(input)
}

fn parse_hex(input: &str) -> IResult<&str, Color> {
    let (input, _) = char('#')(input)?;
    map(hex_digits, Color::from_u32)(input)
}

/// Parse a color of the form `#RRGGBB`. The hex digits are case-insensitive; the leading `#` is
/// required and nothing may precede or follow the six digits.
pub fn parse_color(input: &str) -> Result<Color> {
    all_consuming(parse_hex)(input)
        .map(|(_, color)| color)
        .map_err(|_| Error::InvalidColorFormat(input.to_owned()))
}
