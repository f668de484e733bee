use crate::{
    argument_aggregator::ArgumentAggregator,
    cli::CommonArgs,
    commands::{settings, Command},
    minicover::runner::MiniCoverRunner,
};
use anyhow::Result;

pub struct ResetCommand<'a> {
    args: &'a CommonArgs,
    arg_aggregator: &'a ArgumentAggregator,
}

impl<'a> ResetCommand<'a> {
    pub fn new(args: &'a CommonArgs, arg_aggregator: &'a ArgumentAggregator) -> Self {
        Self {
            args,
            arg_aggregator,
        }
    }
}

impl Command for ResetCommand<'_> {
    fn execute(&self) -> Result<()> {
        let merged = self.arg_aggregator.merge_common_args(self.args)?;
        MiniCoverRunner::new(settings::base_settings(&merged))?.reset()
    }
}
