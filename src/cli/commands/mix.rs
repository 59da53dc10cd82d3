use crate::commands::prelude::*;

use hexmix::{trace_fallible, Gradient};

#[derive(Default)]
pub struct MixCommand {
    gradient: Option<Gradient>,
}

impl ValueCommand for MixCommand {
    fn prepare(&mut self, matches: &ArgMatches) -> Result<()> {
        let range = super::range_from_args(matches)?;
        self.gradient = Some(super::gradient_from_args(matches, range)?);
        Ok(())
    }

    fn run(&self, out: &mut Output, config: &Config, value: Scalar) -> Result<()> {
        let gradient = self.gradient.expect("prepared before run");
        let color_at = trace_fallible("mix", |value: Scalar| gradient.color_at(value));
        out.show_color(config, &color_at(value)?)
    }
}
