pub mod error;
mod helper;
pub mod interpolate;
pub mod mix;
pub mod parser;
pub mod range;
pub mod scale;
pub mod trace;
mod types;

#[cfg(test)]
mod test_helper;

use std::{fmt, str::FromStr};

pub use error::{Error, Result};
pub use helper::{Fraction, MaxPrecision};
pub use interpolate::interpolate;
pub use mix::{mix_channel, mix_color};
pub use parser::parse_color;
pub use range::{normalize, Range};
pub use scale::{Band, Gradient, Scale};
pub use trace::{trace, trace_fallible};
pub use types::Scalar;

/// One of the three components of a `Color`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Red,
    Green,
    Blue,
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Channel::Red => "red",
            Channel::Green => "green",
            Channel::Blue => "blue",
        };
        write!(f, "{}", name)
    }
}

/// A 24-bit RGB color.
///
/// Note:
/// - Every channel is an integer between 0 and 255, so every `Color` can be written as
///   `#rrggbb`. Use `Color::try_from_channels` to build a color from unchecked integers.
/// - The hex representation produced by `Display` and `to_hex_string` always uses lowercase
///   digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    /// Create a `Color` from integer RGB values between 0 and 255.
    #[inline]
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Color {
        Color { r, g, b }
    }

    /// Create a `Color` from integer channel values, failing with `Error::ChannelOutOfRange` for
    /// the first channel that does not fit into [0, 255].
    pub fn try_from_channels(r: i64, g: i64, b: i64) -> Result<Color> {
        fn checked(channel: Channel, value: i64) -> Result<u8> {
            u8::try_from(value).map_err(|_| Error::ChannelOutOfRange { channel, value })
        }

        Ok(Color {
            r: checked(Channel::Red, r)?,
            g: checked(Channel::Green, g)?,
            b: checked(Channel::Blue, b)?,
        })
    }

    /// Create a `Color` from the lower 24 bits of an integer in RGB representation
    /// (`0xRRGGBB`). Higher bits are ignored.
    #[inline]
    pub fn from_u32(value: u32) -> Color {
        Color {
            r: ((value >> 16) & 0xff) as u8,
            g: ((value >> 8) & 0xff) as u8,
            b: (value & 0xff) as u8,
        }
    }

    /// Return the color as an integer in RGB representation (`0xRRGGBB`)
    #[inline]
    pub fn to_u32(&self) -> u32 {
        u32::from(self.r).wrapping_shl(16) + u32::from(self.g).wrapping_shl(8) + u32::from(self.b)
    }

    /// Get the value of a single channel.
    pub fn channel(&self, channel: Channel) -> u8 {
        match channel {
            Channel::Red => self.r,
            Channel::Green => self.g,
            Channel::Blue => self.b,
        }
    }

    /// Format the color as a RGB-representation string (`#fc0070`), always with 6 lowercase
    /// hex digits.
    pub fn to_hex_string(&self, leading_hash: bool) -> String {
        format!(
            "{}{:06x}",
            if leading_hash { "#" } else { "" },
            self.to_u32()
        )
    }

    /// Mix two colors channel-wise, see `mix_color`.
    #[inline]
    pub fn mix(&self, other: &Color, fraction: Fraction) -> Color {
        mix_color(fraction, *self, *other)
    }

    /// The perceived brightness of the color, a number between 0.0 and 1.0.
    ///
    /// See: <https://www.w3.org/TR/AERT/#color-contrast>
    pub fn brightness(&self) -> Scalar {
        (299.0 * self.r as Scalar + 587.0 * self.g as Scalar + 114.0 * self.b as Scalar)
            / (1000.0 * 255.0)
    }

    /// Black or white, whichever is more readable on top of this color.
    pub fn text_color(&self) -> Color {
        if self.brightness() > 0.5 {
            Color::black()
        } else {
            Color::white()
        }
    }

    /// Pure black.
    pub const fn black() -> Color {
        Color::from_rgb(0, 0, 0)
    }

    /// Pure white.
    pub const fn white() -> Color {
        Color::from_rgb(255, 255, 255)
    }

    /// Red (`#ff0000`)
    pub const fn red() -> Color {
        Color::from_rgb(255, 0, 0)
    }

    /// Lime (`#00ff00`)
    pub const fn lime() -> Color {
        Color::from_rgb(0, 255, 0)
    }

    /// Blue (`#0000ff`)
    pub const fn blue() -> Color {
        Color::from_rgb(0, 0, 255)
    }

    /// Olive (`#808000`)
    pub const fn olive() -> Color {
        Color::from_rgb(128, 128, 0)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex_string(true))
    }
}

impl FromStr for Color {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse_color(s)
    }
}

/// Encode a color as `#rrggbb`.
pub fn format_color(color: Color) -> String {
    color.to_hex_string(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;
    use rand::SeedableRng;
    use rand_xoshiro::Xoshiro256PlusPlus;

    fn rgb(r: u8, g: u8, b: u8) -> Color {
        Color::from_rgb(r, g, b)
    }

    #[test]
    fn rgb_to_u32_conversion() {
        assert_eq!(0, rgb(0, 0, 0).to_u32());
        assert_eq!(0xff0000, Color::red().to_u32());
        assert_eq!(0x00ff00, Color::lime().to_u32());
        assert_eq!(0x0000ff, Color::blue().to_u32());
        assert_eq!(0xffffff, Color::white().to_u32());
        assert_eq!(0xf4230f, rgb(0xf4, 0x23, 0x0f).to_u32());
    }

    #[test]
    fn u32_to_rgb_conversion() {
        assert_eq!(Color::black(), Color::from_u32(0));
        assert_eq!(rgb(0xf4, 0x23, 0x0f), Color::from_u32(0xf4230f));
        assert_eq!(Color::white(), Color::from_u32(0xffffff));
        assert_eq!(rgb(0x12, 0x34, 0x56), Color::from_u32(0xff123456));
    }

    #[test]
    fn to_rgb_hex_string() {
        let c = rgb(255, 127, 4);
        assert_eq!("ff7f04", c.to_hex_string(false));
        assert_eq!("#ff7f04", c.to_hex_string(true));
        assert_eq!("#ff7f04", c.to_string());
        assert_eq!("#000000", format_color(Color::black()));
        assert_eq!("#00000f", format_color(rgb(0, 0, 15)));
        assert_eq!("#0a0000", format_color(rgb(10, 0, 0)));
    }

    #[test]
    fn checked_channels() {
        assert_eq!(
            Ok(rgb(1, 2, 3)),
            Color::try_from_channels(1, 2, 3)
        );
        assert_eq!(
            Ok(Color::white()),
            Color::try_from_channels(255, 255, 255)
        );
        assert_eq!(
            Err(Error::ChannelOutOfRange {
                channel: Channel::Green,
                value: 256
            }),
            Color::try_from_channels(0, 256, 0)
        );
        assert_eq!(
            Err(Error::ChannelOutOfRange {
                channel: Channel::Red,
                value: -1
            }),
            Color::try_from_channels(-1, 300, 0)
        );
    }

    #[test]
    fn hex_roundtrip_for_random_colors() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(0x5eed);
        for _ in 0..1000 {
            let c = rgb(rng.gen(), rng.gen(), rng.gen());
            assert_eq!(Ok(c), parse_color(&format_color(c)));
        }

        for c in [Color::black(), Color::white(), rgb(0, 0, 1), rgb(1, 0, 0)] {
            assert_eq!(Ok(c), format_color(c).parse::<Color>());
        }
    }

    #[test]
    fn hex_string_is_always_seven_lowercase_characters() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(7);
        for _ in 0..1000 {
            let hex = format_color(rgb(rng.gen(), rng.gen(), rng.gen()));
            assert_eq!(7, hex.len());
            assert!(hex.starts_with('#'));
            assert!(hex[1..]
                .chars()
                .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
        }
    }

    #[test]
    fn text_color() {
        assert_eq!(Color::white(), Color::black().text_color());
        assert_eq!(Color::black(), Color::white().text_color());
        assert_eq!(Color::black(), Color::lime().text_color());
        assert_eq!(Color::white(), Color::blue().text_color());
    }

    #[test]
    fn channel_accessor() {
        let c = rgb(1, 2, 3);
        assert_eq!(1, c.channel(Channel::Red));
        assert_eq!(2, c.channel(Channel::Green));
        assert_eq!(3, c.channel(Channel::Blue));
        assert_eq!("green", Channel::Green.to_string());
    }
}
