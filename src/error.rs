use crate::types::Scalar;
use crate::Channel;

/// Everything that can go wrong while turning a value into a color.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("invalid color '{0}': expected '#' followed by exactly 6 hex digits")]
    InvalidColorFormat(String),

    #[error("invalid range [{lower}, {upper}): bounds must be finite and distinct")]
    InvalidRange { lower: Scalar, upper: Scalar },

    #[error("{channel} channel value {value} is out of range (0-255)")]
    ChannelOutOfRange { channel: Channel, value: i64 },

    #[error("value {0} can not be placed within a range")]
    InvalidValue(Scalar),
}

pub type Result<T> = std::result::Result<T, Error>;
