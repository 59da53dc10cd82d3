pub use crate::config::Config;
pub use crate::error::Result;
pub use crate::output::Output;

pub use clap::ArgMatches;

pub use super::{GenericCommand, ValueCommand};

pub use hexmix::{Color, Scalar};
