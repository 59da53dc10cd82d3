use std::io::{self, BufRead};

use clap::ArgMatches;

use crate::error::{HexmixError, Result};

use hexmix::Scalar;

pub fn parse_value(text: &str) -> Result<Scalar> {
    text.trim()
        .parse::<Scalar>()
        .map_err(|_| HexmixError::NumberParse(text.trim().to_owned()))
}

/// Numeric values given on the command line, or read from standard input (one per line, blank
/// lines are skipped) if there are none.
pub enum ValueArgIterator<'a> {
    FromPositionalArguments(clap::parser::ValuesRef<'a, String>),
    FromStdin(io::Lines<io::StdinLock<'static>>),
}

impl<'a> ValueArgIterator<'a> {
    pub fn from_args(matches: &'a ArgMatches) -> Self {
        match matches.get_many::<String>("value") {
            Some(values) => ValueArgIterator::FromPositionalArguments(values),
            None => ValueArgIterator::FromStdin(io::stdin().lock().lines()),
        }
    }
}

impl Iterator for ValueArgIterator<'_> {
    type Item = Result<Scalar>;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            ValueArgIterator::FromPositionalArguments(values) => values.next().map(|v| parse_value(v)),
            ValueArgIterator::FromStdin(lines) => loop {
                match lines.next()? {
                    Ok(line) if line.trim().is_empty() => continue,
                    Ok(line) => return Some(parse_value(&line)),
                    Err(_) => return Some(Err(HexmixError::CouldNotReadFromStdin)),
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_values() {
        assert_eq!(42.0, parse_value("42").unwrap());
        assert_eq!(-48000.0, parse_value(" -48000 ").unwrap());
        assert_eq!(0.25, parse_value("2.5e-1").unwrap());
        assert!(matches!(
            parse_value("forty"),
            Err(HexmixError::NumberParse(s)) if s == "forty"
        ));
    }
}
