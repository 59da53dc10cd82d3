use std::env;

use atty::Stream;
use clap::ArgMatches;

const COLOR_MODE_VAR: &str = "HEXMIX_COLOR_MODE";
pub const LOG_VAR: &str = "HEXMIX_LOG";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    Always,
    Never,
    Auto,
}

impl ColorMode {
    fn from_name(name: &str) -> Option<ColorMode> {
        match name.to_lowercase().as_str() {
            "always" => Some(ColorMode::Always),
            "never" => Some(ColorMode::Never),
            "auto" => Some(ColorMode::Auto),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub interactive_mode: bool,
    pub colored_output: bool,
    pub log_directive: String,
}

impl Config {
    pub fn from_matches(matches: &ArgMatches) -> Config {
        let interactive_mode = atty::is(Stream::Stdout);

        // an explicit command line flag wins over the environment
        let from_flag = match matches.value_source("color-mode") {
            Some(clap::parser::ValueSource::CommandLine) => matches
                .get_one::<String>("color-mode")
                .and_then(|name| ColorMode::from_name(name)),
            _ => None,
        };
        let color_mode = from_flag
            .or_else(|| {
                env::var(COLOR_MODE_VAR)
                    .ok()
                    .and_then(|name| ColorMode::from_name(&name))
            })
            .or_else(|| {
                matches
                    .get_one::<String>("color-mode")
                    .and_then(|name| ColorMode::from_name(name))
            })
            .unwrap_or(ColorMode::Never);

        let colored_output = match color_mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => interactive_mode,
        };

        let log_directive = env::var(LOG_VAR).unwrap_or_else(|_| {
            match matches.get_count("verbose") {
                0 => "warn",
                1 => "hexmix=debug",
                _ => "debug",
            }
            .to_string()
        });

        Config {
            interactive_mode,
            colored_output,
            log_directive,
        }
    }
}
