use std::io::Write;

use anstyle::{RgbColor, Style};

use crate::config::Config;
use crate::error::Result;

use hexmix::Color;

fn to_ansi(color: &Color) -> anstyle::Color {
    RgbColor(color.r, color.g, color.b).into()
}

pub struct Output<'a> {
    pub handle: &'a mut dyn Write,
    lines_shown: usize,
}

impl Output<'_> {
    pub fn new(handle: &mut dyn Write) -> Output {
        Output {
            handle,
            lines_shown: 0,
        }
    }

    /// Print the color as `#rrggbb`, painted on itself if colored output is enabled.
    pub fn show_color(&mut self, config: &Config, color: &Color) -> Result<()> {
        let hex = color.to_hex_string(true);
        if config.colored_output {
            let style = Style::new()
                .fg_color(Some(to_ansi(&color.text_color())))
                .bg_color(Some(to_ansi(color)));
            writeln!(
                self.handle,
                "{}{}{}",
                style.render(),
                hex,
                style.render_reset()
            )?;
        } else {
            writeln!(self.handle, "{}", hex)?;
        }
        self.lines_shown += 1;

        Ok(())
    }

    pub fn show_line(&mut self, line: &str) -> Result<()> {
        writeln!(self.handle, "{}", line)?;
        self.lines_shown += 1;

        Ok(())
    }

    pub fn lines_shown(&self) -> usize {
        self.lines_shown
    }
}
