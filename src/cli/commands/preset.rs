use crate::commands::prelude::*;

use hexmix::{trace_fallible, Gradient};

#[derive(Default)]
pub struct PresetCommand {
    gradient: Option<Gradient>,
}

impl ValueCommand for PresetCommand {
    fn prepare(&mut self, matches: &ArgMatches) -> Result<()> {
        let name = matches.get_one::<String>("name").expect("required argument");
        self.gradient = Some(match name.as_str() {
            "points" => Gradient::flow_points()?,
            "lines" => Gradient::flow_lines()?,
            _ => unreachable!("Unknown preset"),
        });
        Ok(())
    }

    fn run(&self, out: &mut Output, config: &Config, value: Scalar) -> Result<()> {
        let gradient = self.gradient.expect("prepared before run");
        let color_at = trace_fallible("preset", |value: Scalar| gradient.color_at(value));
        out.show_color(config, &color_at(value)?)
    }
}
