use crate::commands::prelude::*;

use hexmix::{trace_fallible, Range};

#[derive(Default)]
pub struct NormalizeCommand {
    range: Range,
}

impl ValueCommand for NormalizeCommand {
    fn prepare(&mut self, matches: &ArgMatches) -> Result<()> {
        self.range = super::range_from_args(matches)?;
        Ok(())
    }

    fn run(&self, out: &mut Output, _config: &Config, value: Scalar) -> Result<()> {
        let normalize = trace_fallible("normalize", |value: Scalar| self.range.normalize(value));
        out.show_line(&normalize(value)?.to_string())
    }
}
