use crate::config::Config;
use crate::error::Result;
use crate::output::Output;
use crate::values::ValueArgIterator;

use clap::ArgMatches;

use hexmix::{Band, Gradient, Range, Scalar, Scale};

mod channels;
mod format;
mod gradient;
mod mix;
mod normalize;
mod preset;

mod prelude;

use crate::error::HexmixError;

pub trait GenericCommand {
    fn run(&self, out: &mut Output, matches: &ArgMatches, config: &Config) -> Result<()>;
}

/// A command that is run once for every value given on the command line or standard input.
pub trait ValueCommand {
    /// Called once before the first value, e.g. to parse options shared by all values.
    fn prepare(&mut self, matches: &ArgMatches) -> Result<()>;

    fn run(&self, out: &mut Output, config: &Config, value: Scalar) -> Result<()>;
}

pub enum Command {
    WithValues(Box<dyn ValueCommand>),
    Generic(Box<dyn GenericCommand>),
}

impl Command {
    pub fn from_string(command: &str) -> Command {
        match command {
            "mix" => Command::WithValues(Box::new(mix::MixCommand::default())),
            "normalize" => Command::WithValues(Box::new(normalize::NormalizeCommand::default())),
            "preset" => Command::WithValues(Box::new(preset::PresetCommand::default())),
            "gradient" => Command::Generic(Box::new(gradient::GradientCommand)),
            "format" => Command::Generic(Box::new(format::FormatCommand)),
            "channels" => Command::Generic(Box::new(channels::ChannelsCommand)),
            _ => unreachable!("Unknown subcommand"),
        }
    }

    pub fn execute(self, matches: &ArgMatches, out: &mut Output, config: &Config) -> Result<()> {
        match self {
            Command::Generic(cmd) => cmd.run(out, matches, config),
            Command::WithValues(mut cmd) => {
                cmd.prepare(matches)?;
                for value in ValueArgIterator::from_args(matches) {
                    cmd.run(out, config, value?)?;
                }

                Ok(())
            }
        }
    }
}

/// The range given by `--lower` and `--upper`.
fn range_from_args(matches: &ArgMatches) -> Result<Range> {
    let lower = matches.get_one::<f64>("lower").copied();
    let upper = matches.get_one::<f64>("upper").copied();
    Ok(Range::from_bounds(lower, upper)?)
}

/// The gradient given by `--from`, `--to`, `--scale` and `--band`, over `range`.
fn gradient_from_args(matches: &ArgMatches, range: Range) -> Result<Gradient> {
    let from = matches
        .get_one::<String>("from")
        .map(String::as_str)
        .unwrap_or("#00ff00");
    let to = matches
        .get_one::<String>("to")
        .map(String::as_str)
        .unwrap_or("#ff0000");

    let scale_name = matches
        .get_one::<String>("scale")
        .map(String::as_str)
        .unwrap_or("linear");
    let scale = Scale::from_name(scale_name)
        .ok_or_else(|| HexmixError::UnknownScale(scale_name.to_owned()))?;

    let band = match matches.get_many::<f64>("band") {
        Some(bounds) => {
            let bounds: Vec<f64> = bounds.copied().collect();
            match bounds.as_slice() {
                [start, end] => Band::new(*start, *end)?,
                _ => Band::FULL,
            }
        }
        None => Band::FULL,
    };

    Ok(Gradient::new(from.parse()?, to.parse()?)
        .with_range(range)
        .with_scale(scale)
        .with_band(band))
}
