use crate::commands::prelude::*;

use hexmix::Range;

pub struct GradientCommand;

impl GenericCommand for GradientCommand {
    fn run(&self, out: &mut Output, matches: &ArgMatches, config: &Config) -> Result<()> {
        let count = *matches.get_one::<usize>("number").expect("required argument");
        let gradient = super::gradient_from_args(matches, Range::default())?;

        for color in gradient.steps(count)? {
            out.show_color(config, &color)?;
        }

        Ok(())
    }
}
