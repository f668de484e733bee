use crate::{
    argument_aggregator::ArgumentAggregator,
    cli::CommonArgs,
    commands::{settings, Command},
    minicover::runner::MiniCoverRunner,
};
use anyhow::Result;

pub struct UninstrumentCommand<'a> {
    args: &'a CommonArgs,
    arg_aggregator: &'a ArgumentAggregator,
}

impl<'a> UninstrumentCommand<'a> {
    pub fn new(args: &'a CommonArgs, arg_aggregator: &'a ArgumentAggregator) -> Self {
        Self {
            args,
            arg_aggregator,
        }
    }
}

impl Command for UninstrumentCommand<'_> {
    fn execute(&self) -> Result<()> {
        let merged = self.arg_aggregator.merge_common_args(self.args)?;
        MiniCoverRunner::new(settings::base_settings(&merged))?.uninstrument()
    }
}
