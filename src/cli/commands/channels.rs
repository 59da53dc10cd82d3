use crate::commands::prelude::*;

pub struct ChannelsCommand;

impl GenericCommand for ChannelsCommand {
    fn run(&self, out: &mut Output, matches: &ArgMatches, _config: &Config) -> Result<()> {
        for text in matches.get_many::<String>("color").expect("required argument") {
            let color: Color = text.parse()?;
            out.show_line(&format!("{} {} {}", color.r, color.g, color.b))?;
        }

        Ok(())
    }
}
