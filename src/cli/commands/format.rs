use crate::commands::prelude::*;

pub struct FormatCommand;

impl GenericCommand for FormatCommand {
    fn run(&self, out: &mut Output, matches: &ArgMatches, config: &Config) -> Result<()> {
        let channels: Vec<i64> = matches
            .get_many::<i64>("channels")
            .expect("required argument")
            .copied()
            .collect();

        let color = match channels.as_slice() {
            [r, g, b] => Color::try_from_channels(*r, *g, *b)?,
            _ => unreachable!("exactly three channels"),
        };

        out.show_color(config, &color)
    }
}
